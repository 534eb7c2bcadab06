//! Profile registry for the w96box launcher.
//!
//! This crate owns every piece of persistent launcher state:
//!
//! - Profile record types and their JSON schema
//! - The single-document record store (`storages.json`)
//! - CRUD operations over named profiles with validation
//! - On-disk storage-directory accounting and quota checks
//! - The fixed version → URL target table

pub mod error;
pub mod record;
pub mod registry;
pub mod store;
pub mod usage;
pub mod versions;

// Re-export main types for convenience
pub use error::{RegistryError, StoreError};
pub use record::ProfileRecord;
pub use registry::{DirCleanup, ProfileRegistry};
pub use store::{default_data_root, load_records, save_records, storages_path};
pub use usage::{directory_size_bytes, is_over_quota, size_mb};
pub use versions::{VersionTarget, labels, url_for};
