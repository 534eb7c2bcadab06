//! Unified logging for w96box.
//!
//! Routes all `log::info!()` etc. to `w96box_debug.log` in the system temp
//! directory, keeping log output away from any terminal the launcher was
//! started from. When `RUST_LOG` is set the same lines are mirrored to
//! stderr for interactive debugging.
//!
//! Level precedence: `--log-level` CLI flag, then `RUST_LOG`, then `info`.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Path of the debug log file.
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("w96box_debug.log")
}

struct LogBridge {
    file: Option<Mutex<File>>,
    mirror_stderr: bool,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:5}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = &self.file {
            let mut file = file.lock();
            let _ = writeln!(file, "{line}");
        }
        if self.mirror_stderr {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Install the log bridge. Safe to call once at startup, before any windows
/// exist; later calls are ignored by the `log` crate.
pub fn init_log_bridge(cli_level: Option<log::LevelFilter>) {
    let env_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| raw.parse::<log::LevelFilter>().ok());
    let level = cli_level
        .or(env_level)
        .unwrap_or(log::LevelFilter::Info);

    // A log file that cannot be opened silently disables file output; the
    // launcher must still run on read-only temp dirs.
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path())
        .ok()
        .map(Mutex::new);

    let bridge = LogBridge {
        file,
        mirror_stderr: std::env::var_os("RUST_LOG").is_some(),
    };

    if log::set_boxed_logger(Box::new(bridge)).is_ok() {
        log::set_max_level(level);
    }
}
