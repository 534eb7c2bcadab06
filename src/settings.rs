//! Launcher settings persistence (`settings.json`).
//!
//! Two toggles carried alongside the profile registry. Stored under the
//! same application-data root so a `--data-dir` override moves everything
//! together.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the settings document.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// User-facing launcher settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// Start sessions with the CORS-unblock fetch patch enabled.
    #[serde(default)]
    pub enable_cors: bool,

    /// Allow drag-and-drop of programs into session windows. Persisted and
    /// editable from the launcher, but not yet consulted anywhere; kept so
    /// existing `settings.json` files round-trip unchanged.
    #[serde(default)]
    pub allow_drag_programs: bool,
}

/// Path of the settings document under a data root.
pub fn settings_path(data_root: &Path) -> PathBuf {
    data_root.join(SETTINGS_FILE_NAME)
}

/// Load settings, falling back to defaults when the file is missing.
pub fn load_settings(data_root: &Path) -> Result<LauncherSettings> {
    let path = settings_path(data_root);
    if !path.exists() {
        log::info!("No settings file at {:?}, using defaults", path);
        return Ok(LauncherSettings::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings from {:?}", path))?;
    let settings = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse settings from {:?}", path))?;
    Ok(settings)
}

/// Save settings, creating the data root on demand.
pub fn save_settings(data_root: &Path, settings: &LauncherSettings) -> Result<()> {
    std::fs::create_dir_all(data_root)
        .with_context(|| format!("Failed to create data directory {:?}", data_root))?;

    let path = settings_path(data_root);
    let contents = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write settings to {:?}", path))?;

    log::debug!("Saved settings to {:?}", path);
    Ok(())
}
