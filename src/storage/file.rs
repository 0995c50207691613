//! File-backed storage backend.
//!
//! The whole roster lives in one JSON document, loaded at open and
//! rewritten after every mutation with the write-to-temp-then-rename
//! pattern, so a crash mid-save never leaves a torn file behind. The
//! document stays pretty-printed and hand-editable.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::person::{EnableFilter, FullName, Person, PersonField, PersonUpdate};
use crate::storage::state::{lock_err, RosterState};
use crate::storage::traits::{PersonStore, StoreError};

/// Roster document version this build reads and writes.
const DOCUMENT_VERSION: u32 = 1;

/// On-disk shape of the roster file.
///
/// Records are keyed by full name for readability; on load the key is
/// re-derived from the name fields, so a hand-edited key can never
/// disagree with its record.
#[derive(Debug, Serialize, Deserialize)]
struct RosterDocument {
    version: u32,
    persons: BTreeMap<FullName, Person>,
}

/// Person store persisted to a single JSON file.
#[derive(Debug)]
pub struct FilePersonStore {
    path: PathBuf,
    state: RwLock<RosterState>,
}

impl FilePersonStore {
    /// Open the roster at `path`.
    ///
    /// A missing file is an empty roster; it is created on the first
    /// mutation. A present file must parse and carry a supported version.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = match fs::read_to_string(&path) {
            Ok(raw) => {
                let document: RosterDocument = serde_json::from_str(&raw).map_err(|e| {
                    StoreError::Serialization(format!("{}: {e}", path.display()))
                })?;
                if document.version != DOCUMENT_VERSION {
                    return Err(StoreError::Serialization(format!(
                        "{}: unsupported roster version {} (expected {DOCUMENT_VERSION})",
                        path.display(),
                        document.version
                    )));
                }
                RosterState::from_persons(document.persons.into_values())?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => RosterState::default(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        debug!(
            "opened roster {} ({} persons)",
            path.display(),
            state.fullnames().len()
        );
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, state: &RosterState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let document = RosterDocument {
            version: DOCUMENT_VERSION,
            persons: state
                .iter()
                .map(|person| (person.full_name(), person.clone()))
                .collect(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        debug!("saved roster {}", self.path.display());
        Ok(())
    }

    /// Apply `op` to a staged copy of the state, persist it, then commit.
    /// A failure at any step leaves both memory and file untouched.
    fn mutate<T>(
        &self,
        context: &'static str,
        op: impl FnOnce(&mut RosterState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut state = self.state.write().map_err(|_| lock_err(context))?;
        let mut staged = state.clone();
        let out = op(&mut staged)?;
        self.save(&staged)?;
        *state = staged;
        Ok(out)
    }
}

impl PersonStore for FilePersonStore {
    fn find(&self, field: PersonField, value: &str) -> Result<BTreeSet<FullName>, StoreError> {
        let state = self.state.read().map_err(|_| lock_err("file.find"))?;
        Ok(state.find(field, value))
    }

    fn fullnames(&self) -> Result<Vec<FullName>, StoreError> {
        let state = self.state.read().map_err(|_| lock_err("file.fullnames"))?;
        Ok(state.fullnames())
    }

    fn get(&self, name: &FullName) -> Result<Option<Person>, StoreError> {
        let state = self.state.read().map_err(|_| lock_err("file.get"))?;
        Ok(state.get(name).cloned())
    }

    fn exists(&self, name: &FullName) -> Result<bool, StoreError> {
        let state = self.state.read().map_err(|_| lock_err("file.exists"))?;
        Ok(state.exists(name))
    }

    fn insert(&self, person: Person) -> Result<(), StoreError> {
        self.mutate("file.insert", |state| state.insert(person))
    }

    fn update(&self, name: &FullName, update: PersonUpdate) -> Result<FullName, StoreError> {
        self.mutate("file.update", |state| state.update(name, update))
    }

    fn remove(&self, name: &FullName) -> Result<(), StoreError> {
        self.mutate("file.remove", |state| state.remove(name))
    }

    fn add_meeting(&self, name: &FullName, entry: &str) -> Result<(), StoreError> {
        self.mutate("file.add_meeting", |state| state.add_meeting(name, entry))
    }

    fn remove_meeting(&self, name: &FullName, entry: &str) -> Result<(), StoreError> {
        self.mutate("file.remove_meeting", |state| {
            state.remove_meeting(name, entry)
        })
    }

    fn persons(&self, filter: EnableFilter) -> Result<Vec<Person>, StoreError> {
        let state = self.state.read().map_err(|_| lock_err("file.persons"))?;
        Ok(state.persons(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{parse_date, Tenure};

    fn person(first: &str, last: &str, role: &str) -> Person {
        Person::new(
            first,
            last,
            role,
            Tenure::starting(parse_date("2024-01-15").unwrap()),
        )
    }

    #[test]
    fn test_open_missing_file_is_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        let store = FilePersonStore::open(&path).unwrap();
        assert!(store.fullnames().unwrap().is_empty());
        // Nothing written until the first mutation.
        assert!(!path.exists());
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        {
            let store = FilePersonStore::open(&path).unwrap();
            store.insert(person("Alice", "Smith", "Engineer")).unwrap();
            store.insert(person("Bob", "Lee", "Designer")).unwrap();
            store
                .add_meeting(&FullName::new("Alice", "Smith"), "2024-02-01")
                .unwrap();
        }

        let store = FilePersonStore::open(&path).unwrap();
        assert_eq!(store.fullnames().unwrap().len(), 2);
        let alice = store.get(&FullName::new("Alice", "Smith")).unwrap().unwrap();
        assert_eq!(alice.role, "Engineer");
        assert_eq!(alice.meetings, vec!["2024-02-01"]);
    }

    #[test]
    fn test_rename_and_remove_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        {
            let store = FilePersonStore::open(&path).unwrap();
            store.insert(person("Alice", "Smith", "Engineer")).unwrap();
            store.insert(person("Bob", "Lee", "Designer")).unwrap();
            store
                .update(
                    &FullName::new("Alice", "Smith"),
                    PersonUpdate::LastName("Smith-Jones".to_string()),
                )
                .unwrap();
            store.remove(&FullName::new("Bob", "Lee")).unwrap();
        }

        let store = FilePersonStore::open(&path).unwrap();
        let mut names = store.fullnames().unwrap();
        names.sort();
        assert_eq!(names, vec![FullName::new("Alice", "Smith-Jones")]);
        assert_eq!(
            store
                .find(PersonField::LastName, "Smith-Jones")
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_document_is_versioned_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        let store = FilePersonStore::open(&path).unwrap();
        store.insert(person("Alice", "Smith", "Engineer")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"version\": 1"));
        assert!(raw.contains("\"Alice Smith\""));
        assert!(raw.ends_with('\n'));
        // No stray temp file after a successful save.
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_malformed_document_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, "{ this is not json").unwrap();

        let err = FilePersonStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, r#"{ "version": 99, "persons": {} }"#).unwrap();

        let err = FilePersonStore::open(&path).unwrap_err();
        let StoreError::Serialization(msg) = err else {
            panic!("expected Serialization, got {err:?}");
        };
        assert!(msg.contains("99"));
    }

    #[test]
    fn test_failed_mutation_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        let store = FilePersonStore::open(&path).unwrap();
        store.insert(person("Sam", "Fox", "Designer")).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let err = store.insert(person("Sam", "Fox", "Director")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateName(_)));

        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_parent_directory_created_on_first_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("roster.json");

        let store = FilePersonStore::open(&path).unwrap();
        store.insert(person("Alice", "Smith", "Engineer")).unwrap();
        assert!(path.exists());
    }
}
