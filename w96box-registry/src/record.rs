//! Profile record types and timestamp formatting.

use serde::{Deserialize, Serialize};

/// Timestamp format used for `created` / `last_launched` fields.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format the current local time in the record timestamp format.
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// One named local-storage instance.
///
/// The profile name itself is the key in the registry mapping, not a field
/// here; renaming a profile moves the record to a new key without touching
/// any of these fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRecord {
    /// Version label, one of the fixed target table entries.
    /// Immutable after creation.
    pub version: String,

    /// Creation timestamp (`YYYY-MM-DD HH:MM:SS`). Set once, never mutated.
    pub created: String,

    /// Last launch timestamp, absent until the first launch is admitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_launched: Option<String>,

    /// Whether a storage quota applies to this profile.
    #[serde(default)]
    pub limit_enabled: bool,

    /// Quota in whole megabytes. Present only when `limit_enabled` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size_mb: Option<u64>,

    /// On-disk storage directory name, fixed at creation time.
    ///
    /// Stored explicitly so a rename does not orphan the profile's data:
    /// lookups go through this field rather than re-deriving the directory
    /// from the current name. Absent in documents written by older builds,
    /// which derived `Profile_<name>` from the live name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<String>,
}

impl ProfileRecord {
    /// Create a record for a freshly created profile.
    ///
    /// `created` is stamped with the current local time and the storage
    /// directory name is fixed from the profile's name at creation.
    pub fn new(name: &str, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            created: now_timestamp(),
            last_launched: None,
            limit_enabled: false,
            max_size_mb: None,
            storage_dir: Some(storage_dir_name(name)),
        }
    }

    /// The storage directory name for this record, falling back to the
    /// name-derived convention for records persisted before `storage_dir`
    /// existed.
    pub fn storage_dir_or_default<'a>(&'a self, name: &str) -> std::borrow::Cow<'a, str> {
        match &self.storage_dir {
            Some(dir) => std::borrow::Cow::Borrowed(dir),
            None => std::borrow::Cow::Owned(storage_dir_name(name)),
        }
    }
}

/// Directory naming convention for profile storage.
pub fn storage_dir_name(name: &str) -> String {
    format!("Profile_{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_created_and_no_launch() {
        let record = ProfileRecord::new("Test", "Version 1.0");
        assert_eq!(record.version, "Version 1.0");
        assert!(!record.created.is_empty());
        assert!(record.last_launched.is_none());
        assert!(!record.limit_enabled);
        assert_eq!(record.storage_dir.as_deref(), Some("Profile_Test"));
    }

    #[test]
    fn storage_dir_falls_back_to_name_convention() {
        let mut record = ProfileRecord::new("Old", "Version 1.0");
        record.storage_dir = None;
        assert_eq!(record.storage_dir_or_default("Renamed"), "Profile_Renamed");
    }

    #[test]
    fn timestamp_format_shape() {
        let ts = now_timestamp();
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(ts.len(), 19);
        assert_eq!(ts.as_bytes()[4], b'-');
        assert_eq!(ts.as_bytes()[10], b' ');
        assert_eq!(ts.as_bytes()[13], b':');
    }

    #[test]
    fn unknown_json_fields_are_tolerated() {
        let json = r#"{
            "version": "Version 2.0",
            "created": "2024-01-01 00:00:00",
            "limit_enabled": true,
            "max_size_mb": 500,
            "theme": "lime-on-black"
        }"#;
        let record: ProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.version, "Version 2.0");
        assert_eq!(record.max_size_mb, Some(500));
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let record = ProfileRecord {
            version: "Version 1.0".to_string(),
            created: "2024-01-01 00:00:00".to_string(),
            last_launched: None,
            limit_enabled: false,
            max_size_mb: None,
            storage_dir: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("last_launched"));
        assert!(!json.contains("max_size_mb"));
        assert!(!json.contains("storage_dir"));
    }
}
