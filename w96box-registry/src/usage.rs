//! Storage-directory accounting and the quota predicate.
//!
//! A profile's storage directory is an opaque blob owned by the embedded
//! browser engine; its total size is all that matters here. The quota
//! comparison is done on raw bytes — the two-decimal MB figure is cosmetic
//! and only used for the info display, so a directory a few bytes over the
//! limit is over the limit.

use crate::record::ProfileRecord;
use std::path::Path;

/// Recursively sum file sizes under `path`.
///
/// A non-existent path has size 0. Entries that cannot be read (permission
/// errors, files deleted mid-scan by the engine) are skipped with a warning
/// rather than failing the whole scan.
pub fn directory_size_bytes(path: &Path) -> u64 {
    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return 0,
        Err(e) => {
            log::warn!("Skipping unreadable directory {:?}: {e}", path);
            return 0;
        }
    };

    let mut total = 0u64;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry under {:?}: {e}", path);
                continue;
            }
        };
        match entry.metadata() {
            Ok(meta) if meta.is_dir() => {
                total += directory_size_bytes(&entry.path());
            }
            Ok(meta) if meta.is_file() => {
                total += meta.len();
            }
            // Symlinks and other special entries don't count toward usage.
            Ok(_) => {}
            Err(e) => {
                log::warn!("Skipping entry {:?}: {e}", entry.path());
            }
        }
    }
    total
}

/// Byte count as megabytes rounded to two decimal places. Display only.
pub fn size_mb(bytes: u64) -> f64 {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    (mb * 100.0).round() / 100.0
}

/// Whether `size_bytes` exceeds the record's quota.
///
/// Always false when no limit is enabled. Exactly at the limit is not over.
pub fn is_over_quota(record: &ProfileRecord, size_bytes: u64) -> bool {
    if !record.limit_enabled {
        return false;
    }
    let max_bytes = record.max_size_mb.unwrap_or(0).saturating_mul(1024 * 1024);
    size_bytes > max_bytes
}
