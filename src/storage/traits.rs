//! Abstract storage trait for the roster.
//!
//! The trait defines the contract every roster backend must implement.
//! Handlers and the resolver only ever see `Arc<dyn PersonStore>`, so an
//! in-memory backend serves tests and benches while the file backend
//! serves the real tool.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::person::{EnableFilter, FullName, Person, PersonField, PersonUpdate};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No person under that full name.
    #[error("Person not found: {0}")]
    NotFound(FullName),

    /// The derived full name is already taken.
    #[error("Duplicate name: {0}")]
    DuplicateName(FullName),

    /// The meeting entry is not in the person's history.
    #[error("No meeting '{entry}' recorded for {name}")]
    MeetingNotFound {
        /// Whose history was searched.
        name: FullName,
        /// The entry that was not there.
        entry: String,
    },

    /// Filesystem failure underneath the backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The roster document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Backend error.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Storage contract for person records.
///
/// All lookups are exact and case-sensitive; substring matching is the
/// caller's business. Mutations are atomic per call: a failed call leaves
/// the roster unchanged.
pub trait PersonStore: Send + Sync {
    /// Find every person whose `field` equals `value` exactly.
    fn find(&self, field: PersonField, value: &str) -> Result<BTreeSet<FullName>, StoreError>;

    /// Every full name on the roster, unordered.
    fn fullnames(&self) -> Result<Vec<FullName>, StoreError>;

    /// Get a person by full name.
    fn get(&self, name: &FullName) -> Result<Option<Person>, StoreError>;

    /// Returns true if a person with that full name exists.
    fn exists(&self, name: &FullName) -> Result<bool, StoreError>;

    /// Insert a new person. Errors if the derived full name exists.
    fn insert(&self, person: Person) -> Result<(), StoreError>;

    /// Apply one field update. Renames re-key the record; the returned
    /// full name is the person's key after the update.
    fn update(&self, name: &FullName, update: PersonUpdate) -> Result<FullName, StoreError>;

    /// Remove a person. Errors if not found.
    fn remove(&self, name: &FullName) -> Result<(), StoreError>;

    /// Append one meeting entry to a person's history.
    fn add_meeting(&self, name: &FullName, entry: &str) -> Result<(), StoreError>;

    /// Remove one meeting entry from a person's history.
    fn remove_meeting(&self, name: &FullName, entry: &str) -> Result<(), StoreError>;

    /// Every person passing the filter, unordered.
    fn persons(&self, filter: EnableFilter) -> Result<Vec<Person>, StoreError>;
}
