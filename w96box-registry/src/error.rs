//! Typed error variants for the w96box-registry crate.
//!
//! Provides structured error types for record-store I/O and registry
//! validation so callers can match on specific failure modes instead of
//! opaque strings. Validation and not-found errors are always detected
//! before any mutation, so an `Err` from a registry operation means no
//! state changed (see [`crate::registry::ProfileRegistry`] for the one
//! documented exception around directory cleanup).

use thiserror::Error;

/// Errors from reading or writing the `storages.json` record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred reading or writing the store file.
    #[error("I/O error accessing record store: {0}")]
    Io(#[from] std::io::Error),

    /// The store file contained JSON that could not be parsed as a document.
    ///
    /// Individual malformed *entries* are skipped on load, not errors; this
    /// variant means the file as a whole is not a JSON object.
    #[error("record store is not a valid JSON document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors from registry operations (create, rename, delete, launch).
#[derive(Debug, Error)]
pub enum RegistryError {
    // -----------------------------------------------------------------------
    // Validation — rejected before any state change
    // -----------------------------------------------------------------------
    /// The profile name was empty (after trimming surrounding whitespace).
    #[error("profile name cannot be empty")]
    EmptyName,

    /// A profile with this exact name already exists.
    #[error("a profile named '{0}' already exists")]
    DuplicateName(String),

    /// The new name in a rename matched the current name.
    #[error("new name matches the current name")]
    UnchangedName,

    /// The max-size input did not parse as a non-negative whole number of MB.
    #[error("invalid max size '{0}': expected a whole number of megabytes")]
    InvalidSize(String),

    /// The version label is not in the fixed target table.
    #[error("unknown version '{0}'")]
    UnknownVersion(String),

    // -----------------------------------------------------------------------
    // Lookup / persistence
    // -----------------------------------------------------------------------
    /// The operation referenced a profile that does not exist.
    #[error("no profile named '{0}'")]
    NotFound(String),

    /// Flushing the mutation to the record store failed.
    ///
    /// The in-memory mutation has already been applied when this is
    /// returned; the on-disk document is stale until the next flush.
    #[error("failed to persist registry: {0}")]
    Store(#[from] StoreError),
}
