//! Profile registry: validated CRUD over the record mapping.
//!
//! The registry is the single source of truth. It is loaded entirely into
//! memory at startup and flushed to the record store after every mutation,
//! before the mutating call returns. All operations run on the one thread
//! that owns the UI; there is no interior locking because there is no
//! second writer.

use crate::error::RegistryError;
use crate::record::ProfileRecord;
use crate::store;
use crate::versions;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Outcome of the best-effort storage-directory cleanup during a delete.
///
/// The registry mutation is committed either way; directory failure is
/// reported, not rolled back, because the registry is authoritative over
/// the directory's existence and not vice versa.
#[derive(Debug)]
pub enum DirCleanup {
    /// The storage directory was removed.
    Removed(PathBuf),
    /// No storage directory existed on disk.
    NoDirectory,
    /// The directory exists but could not be removed.
    Failed {
        /// Directory that was left behind.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// In-memory profile registry bound to an on-disk record store.
#[derive(Debug)]
pub struct ProfileRegistry {
    /// All records keyed by profile name.
    records: BTreeMap<String, ProfileRecord>,
    /// Application-data root holding the store file and storage directories.
    data_root: PathBuf,
    /// Path of the record store document.
    storage_file: PathBuf,
}

impl ProfileRegistry {
    /// Load the registry from `<data_root>/storages.json`.
    pub fn open(data_root: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let data_root = data_root.into();
        let storage_file = store::storages_path(&data_root);
        let records = store::load_records(&storage_file)?;
        Ok(Self {
            records,
            data_root,
            storage_file,
        })
    }

    /// Create a profile.
    ///
    /// `max_size_raw` is the raw user input for the quota; it is only
    /// consulted when `limit_enabled` is true and must then parse as a
    /// non-negative whole number of megabytes. No storage directory is
    /// created here — that happens lazily on first launch.
    pub fn create(
        &mut self,
        name: &str,
        version: &str,
        limit_enabled: bool,
        max_size_raw: Option<&str>,
    ) -> Result<&ProfileRecord, RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.records.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        if versions::url_for(version).is_none() {
            return Err(RegistryError::UnknownVersion(version.to_string()));
        }

        let max_size_mb = if limit_enabled {
            let raw = max_size_raw.unwrap_or("");
            let parsed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| RegistryError::InvalidSize(raw.to_string()))?;
            Some(parsed)
        } else {
            None
        };

        let mut record = ProfileRecord::new(name, version);
        record.limit_enabled = limit_enabled;
        record.max_size_mb = max_size_mb;

        self.records.insert(name.to_string(), record);
        self.flush()?;
        log::info!("Created profile '{name}' ({version})");

        // Just inserted above.
        Ok(&self.records[name])
    }

    /// Rename a profile, preserving all record fields.
    ///
    /// The storage directory name is fixed at creation and carried in the
    /// record, so the on-disk data stays attached across renames.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), RegistryError> {
        if new_name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if new_name == old_name {
            return Err(RegistryError::UnchangedName);
        }
        if self.records.contains_key(new_name) {
            return Err(RegistryError::DuplicateName(new_name.to_string()));
        }

        let record = self
            .records
            .remove(old_name)
            .ok_or_else(|| RegistryError::NotFound(old_name.to_string()))?;
        self.records.insert(new_name.to_string(), record);
        self.flush()?;
        log::info!("Renamed profile '{old_name}' -> '{new_name}'");
        Ok(())
    }

    /// Delete a profile and best-effort remove its storage directory.
    ///
    /// The record removal is flushed first; a directory that cannot be
    /// removed is reported via [`DirCleanup::Failed`] while the record
    /// stays deleted.
    pub fn delete(&mut self, name: &str) -> Result<DirCleanup, RegistryError> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        self.flush()?;
        log::info!("Deleted profile '{name}'");

        let dir = self
            .data_root
            .join(record.storage_dir_or_default(name).as_ref());
        if !dir.exists() {
            return Ok(DirCleanup::NoDirectory);
        }
        match std::fs::remove_dir_all(&dir) {
            Ok(()) => Ok(DirCleanup::Removed(dir)),
            Err(e) => {
                log::warn!("Failed to remove storage directory {:?}: {e}", dir);
                Ok(DirCleanup::Failed { path: dir, source: e })
            }
        }
    }

    /// Stamp `last_launched` with the current time.
    pub fn record_launch(&mut self, name: &str) -> Result<(), RegistryError> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        record.last_launched = Some(crate::record::now_timestamp());
        self.flush()?;
        Ok(())
    }

    /// Flush the current mapping to the record store.
    fn flush(&self) -> Result<(), RegistryError> {
        store::save_records(&self.storage_file, &self.records)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read API
    // -----------------------------------------------------------------------

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&ProfileRecord> {
        self.records.get(name)
    }

    /// Whether a profile with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// All (name, record) pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProfileRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry has no profiles.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Absolute storage directory for a profile, if the profile exists.
    pub fn storage_dir(&self, name: &str) -> Option<PathBuf> {
        self.records
            .get(name)
            .map(|record| self.data_root.join(record.storage_dir_or_default(name).as_ref()))
    }

    /// Application-data root this registry is bound to.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_registry(temp: &tempfile::TempDir) -> ProfileRegistry {
        ProfileRegistry::open(temp.path()).unwrap()
    }

    #[test]
    fn create_persists_record() {
        let temp = tempdir().unwrap();
        {
            let mut registry = open_registry(&temp);
            let record = registry
                .create("Test", "Version 1.0", false, None)
                .unwrap();
            assert!(record.last_launched.is_none());
        }

        let reloaded = open_registry(&temp);
        let record = reloaded.get("Test").unwrap();
        assert_eq!(record.version, "Version 1.0");
        assert!(!record.created.is_empty());
        assert!(record.last_launched.is_none());
    }

    #[test]
    fn create_rejects_empty_name() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        assert!(matches!(
            registry.create("   ", "Version 1.0", false, None),
            Err(RegistryError::EmptyName)
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn create_rejects_duplicate_name() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        registry.create("Test", "Version 1.0", false, None).unwrap();
        assert!(matches!(
            registry.create("Test", "Version 2.0", false, None),
            Err(RegistryError::DuplicateName(_))
        ));
        // Registry unchanged by the failed create.
        assert_eq!(registry.get("Test").unwrap().version, "Version 1.0");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        registry.create("Test", "Version 1.0", false, None).unwrap();
        registry.create("test", "Version 1.0", false, None).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn create_rejects_unknown_version() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        assert!(matches!(
            registry.create("Test", "Version 99", false, None),
            Err(RegistryError::UnknownVersion(_))
        ));
    }

    #[test]
    fn create_rejects_non_numeric_size() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        assert!(matches!(
            registry.create("Test", "Version 1.0", true, Some("lots")),
            Err(RegistryError::InvalidSize(_))
        ));
        assert!(matches!(
            registry.create("Test", "Version 1.0", true, Some("-5")),
            Err(RegistryError::InvalidSize(_))
        ));
        assert!(matches!(
            registry.create("Test", "Version 1.0", true, None),
            Err(RegistryError::InvalidSize(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn create_parses_limit() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        registry
            .create("Test", "Version 1.0", true, Some(" 500 "))
            .unwrap();
        let record = registry.get("Test").unwrap();
        assert!(record.limit_enabled);
        assert_eq!(record.max_size_mb, Some(500));
    }

    #[test]
    fn rename_moves_all_fields() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        registry
            .create("Old", "Version 2.0", true, Some("100"))
            .unwrap();
        let before = registry.get("Old").unwrap().clone();

        registry.rename("Old", "New").unwrap();
        assert!(registry.get("Old").is_none());
        assert_eq!(registry.get("New"), Some(&before));
    }

    #[test]
    fn rename_rejects_same_name_and_duplicates() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        registry.create("A", "Version 1.0", false, None).unwrap();
        registry.create("B", "Version 1.0", false, None).unwrap();

        assert!(matches!(
            registry.rename("A", "A"),
            Err(RegistryError::UnchangedName)
        ));
        assert!(matches!(
            registry.rename("A", "B"),
            Err(RegistryError::DuplicateName(_))
        ));
        assert!(matches!(
            registry.rename("A", "  "),
            Err(RegistryError::EmptyName)
        ));
        assert!(matches!(
            registry.rename("Missing", "C"),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn rename_keeps_storage_directory_attached() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        registry.create("Old", "Version 1.0", false, None).unwrap();

        let dir_before = registry.storage_dir("Old").unwrap();
        registry.rename("Old", "New").unwrap();
        assert_eq!(registry.storage_dir("New").unwrap(), dir_before);
    }

    #[test]
    fn delete_removes_record_and_directory() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        registry.create("Gone", "Version 1.0", false, None).unwrap();

        let dir = registry.storage_dir("Gone").unwrap();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("cookies.db"), b"crumbs").unwrap();

        let cleanup = registry.delete("Gone").unwrap();
        assert!(matches!(cleanup, DirCleanup::Removed(_)));
        assert!(!dir.exists());
        assert!(registry.get("Gone").is_none());

        let reloaded = open_registry(&temp);
        assert!(!reloaded.contains("Gone"));
    }

    #[test]
    fn delete_without_directory_reports_no_directory() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        registry.create("Fresh", "Version 1.0", false, None).unwrap();
        assert!(matches!(
            registry.delete("Fresh").unwrap(),
            DirCleanup::NoDirectory
        ));
    }

    #[test]
    fn delete_missing_profile_is_not_found() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        assert!(matches!(
            registry.delete("Missing"),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn record_launch_stamps_and_persists() {
        let temp = tempdir().unwrap();
        let mut registry = open_registry(&temp);
        registry.create("Test", "Version 1.0", false, None).unwrap();
        registry.record_launch("Test").unwrap();
        assert!(registry.get("Test").unwrap().last_launched.is_some());

        let reloaded = open_registry(&temp);
        assert!(reloaded.get("Test").unwrap().last_launched.is_some());

        assert!(matches!(
            registry.record_launch("Missing"),
            Err(RegistryError::NotFound(_))
        ));
    }
}
