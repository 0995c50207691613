//! In-memory storage backend.
//!
//! Thread-safe roster store with no durability. Used by tests and
//! benches, and as the reference implementation of the trait contract.

use std::collections::BTreeSet;
use std::sync::RwLock;

use crate::person::{EnableFilter, FullName, Person, PersonField, PersonUpdate};
use crate::storage::state::{lock_err, RosterState};
use crate::storage::traits::{PersonStore, StoreError};

/// Thread-safe in-memory person store.
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    state: RwLock<RosterState>,
}

impl InMemoryPersonStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `persons`.
    ///
    /// Errors if two persons derive the same full name.
    pub fn with_persons(persons: impl IntoIterator<Item = Person>) -> Result<Self, StoreError> {
        Ok(Self {
            state: RwLock::new(RosterState::from_persons(persons)?),
        })
    }
}

impl PersonStore for InMemoryPersonStore {
    fn find(&self, field: PersonField, value: &str) -> Result<BTreeSet<FullName>, StoreError> {
        let state = self.state.read().map_err(|_| lock_err("memory.find"))?;
        Ok(state.find(field, value))
    }

    fn fullnames(&self) -> Result<Vec<FullName>, StoreError> {
        let state = self.state.read().map_err(|_| lock_err("memory.fullnames"))?;
        Ok(state.fullnames())
    }

    fn get(&self, name: &FullName) -> Result<Option<Person>, StoreError> {
        let state = self.state.read().map_err(|_| lock_err("memory.get"))?;
        Ok(state.get(name).cloned())
    }

    fn exists(&self, name: &FullName) -> Result<bool, StoreError> {
        let state = self.state.read().map_err(|_| lock_err("memory.exists"))?;
        Ok(state.exists(name))
    }

    fn insert(&self, person: Person) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| lock_err("memory.insert"))?;
        state.insert(person)
    }

    fn update(&self, name: &FullName, update: PersonUpdate) -> Result<FullName, StoreError> {
        let mut state = self.state.write().map_err(|_| lock_err("memory.update"))?;
        state.update(name, update)
    }

    fn remove(&self, name: &FullName) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| lock_err("memory.remove"))?;
        state.remove(name)
    }

    fn add_meeting(&self, name: &FullName, entry: &str) -> Result<(), StoreError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| lock_err("memory.add_meeting"))?;
        state.add_meeting(name, entry)
    }

    fn remove_meeting(&self, name: &FullName, entry: &str) -> Result<(), StoreError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| lock_err("memory.remove_meeting"))?;
        state.remove_meeting(name, entry)
    }

    fn persons(&self, filter: EnableFilter) -> Result<Vec<Person>, StoreError> {
        let state = self.state.read().map_err(|_| lock_err("memory.persons"))?;
        Ok(state.persons(filter))
    }
}
