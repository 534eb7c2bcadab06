//! Persistent record store: `storages.json` load/save.
//!
//! The whole registry is one JSON document mapping profile name → record.
//! `load_records` tolerates entries it cannot understand (they are skipped
//! with a warning); `save_records` fully overwrites the file with the
//! current in-memory mapping. There is no merge and no atomic-rename safety
//! net — the registry is flushed synchronously after every mutation, and a
//! crash between mutation and flush loses that mutation.

use crate::error::StoreError;
use crate::record::ProfileRecord;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the record store document.
pub const STORAGE_FILE_NAME: &str = "storages.json";

/// Default application-data root (`<platform data dir>/w96box`).
pub fn default_data_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("w96box")
}

/// Path of the record store document under a data root.
pub fn storages_path(data_root: &Path) -> PathBuf {
    data_root.join(STORAGE_FILE_NAME)
}

/// Load the profile mapping from `path`.
///
/// A missing file yields an empty mapping. Entries that are not objects or
/// that fail to deserialize are skipped so one malformed record cannot take
/// the whole registry down.
pub fn load_records(path: &Path) -> Result<BTreeMap<String, ProfileRecord>, StoreError> {
    log::debug!("Loading record store from {:?}", path);
    if !path.exists() {
        log::info!("No record store at {:?}, starting empty", path);
        return Ok(BTreeMap::new());
    }

    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&contents)?;

    let mut records = BTreeMap::new();
    for (name, value) in raw {
        match serde_json::from_value::<ProfileRecord>(value) {
            Ok(record) => {
                records.insert(name, record);
            }
            Err(e) => {
                log::warn!("Skipping malformed record '{name}' in {:?}: {e}", path);
            }
        }
    }

    log::info!("Loaded {} profile record(s) from {:?}", records.len(), path);
    Ok(records)
}

/// Overwrite `path` with the given mapping.
///
/// The parent directory is created on demand. Keys are written in sorted
/// order, so saving the same mapping twice produces byte-identical files.
pub fn save_records(
    path: &Path,
    records: &BTreeMap<String, ProfileRecord>,
) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(records)?;
    std::fs::write(path, contents)?;

    log::debug!("Saved {} profile record(s) to {:?}", records.len(), path);
    Ok(())
}
