// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use w96box::{cli, debug, registry, settings};

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = cli::process_cli();

    debug::init_log_bridge(options.log_level);
    log::info!("Starting w96box {}", w96box::VERSION);

    let data_root = options
        .data_dir
        .clone()
        .unwrap_or_else(registry::default_data_root);
    log::info!("Data root: {:?}", data_root);

    let profile_registry = registry::ProfileRegistry::open(&data_root)?;
    log::info!("Loaded {} profile(s)", profile_registry.len());
    let launcher_settings = settings::load_settings(&data_root)?;

    run_shell(profile_registry, launcher_settings)
}

#[cfg(feature = "webview")]
fn run_shell(
    registry: registry::ProfileRegistry,
    settings: settings::LauncherSettings,
) -> Result<()> {
    w96box::shell::run(registry, settings)
}

#[cfg(not(feature = "webview"))]
fn run_shell(
    _registry: registry::ProfileRegistry,
    _settings: settings::LauncherSettings,
) -> Result<()> {
    anyhow::bail!(
        "this build of w96box has no embedded webview; \
         rebuild with `--features webview` to run the windowed launcher"
    )
}
