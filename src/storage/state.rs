//! Indexed roster state shared by the storage backends.
//!
//! Backends wrap this in an `RwLock` and add their own durability; the
//! state itself is single-threaded and never touches the filesystem.

use std::collections::{BTreeSet, HashMap};

use crate::person::{EnableFilter, FullName, Person, PersonField, PersonUpdate};
use crate::storage::traits::StoreError;

pub(crate) fn lock_err(context: &'static str) -> StoreError {
    StoreError::Backend(format!("poisoned lock: {context}"))
}

/// The roster map plus exact-match field indexes.
///
/// Index keys are the raw field values; lookups are case-sensitive by
/// contract. The indexes are maintained on every mutation so `find` never
/// scans.
#[derive(Debug, Default, Clone)]
pub(crate) struct RosterState {
    by_name: HashMap<FullName, Person>,
    by_first: HashMap<String, BTreeSet<FullName>>,
    by_last: HashMap<String, BTreeSet<FullName>>,
}

impl RosterState {
    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> Result<Self, StoreError> {
        let mut state = Self::default();
        for person in persons {
            state.insert(person)?;
        }
        Ok(state)
    }

    fn index_insert(&mut self, person: &Person) {
        let name = person.full_name();
        self.by_first
            .entry(person.first_name.clone())
            .or_default()
            .insert(name.clone());
        self.by_last
            .entry(person.last_name.clone())
            .or_default()
            .insert(name);
    }

    fn index_remove(&mut self, person: &Person) {
        let name = person.full_name();
        if let Some(set) = self.by_first.get_mut(&person.first_name) {
            set.remove(&name);
            if set.is_empty() {
                self.by_first.remove(&person.first_name);
            }
        }
        if let Some(set) = self.by_last.get_mut(&person.last_name) {
            set.remove(&name);
            if set.is_empty() {
                self.by_last.remove(&person.last_name);
            }
        }
    }

    pub fn find(&self, field: PersonField, value: &str) -> BTreeSet<FullName> {
        let index = match field {
            PersonField::FirstName => &self.by_first,
            PersonField::LastName => &self.by_last,
        };
        index.get(value).cloned().unwrap_or_default()
    }

    pub fn fullnames(&self) -> Vec<FullName> {
        self.by_name.keys().cloned().collect()
    }

    pub fn get(&self, name: &FullName) -> Option<&Person> {
        self.by_name.get(name)
    }

    pub fn exists(&self, name: &FullName) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn insert(&mut self, person: Person) -> Result<(), StoreError> {
        let name = person.full_name();
        if self.by_name.contains_key(&name) {
            return Err(StoreError::DuplicateName(name));
        }
        self.index_insert(&person);
        self.by_name.insert(name, person);
        Ok(())
    }

    pub fn update(&mut self, name: &FullName, update: PersonUpdate) -> Result<FullName, StoreError> {
        let mut person = self
            .by_name
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.clone()))?;

        match update {
            PersonUpdate::FirstName(first) => person.first_name = first,
            PersonUpdate::LastName(last) => person.last_name = last,
            PersonUpdate::Role(role) => person.role = role,
            PersonUpdate::StartDate(start) => person.tenure.start = start,
            PersonUpdate::EndDate(end) => person.tenure.end = end,
            PersonUpdate::Enabled(flag) => person.enabled = flag,
        }

        let new_name = person.full_name();
        if new_name != *name && self.by_name.contains_key(&new_name) {
            return Err(StoreError::DuplicateName(new_name));
        }

        if let Some(old) = self.by_name.remove(name) {
            self.index_remove(&old);
        }
        self.index_insert(&person);
        self.by_name.insert(new_name.clone(), person);
        Ok(new_name)
    }

    pub fn remove(&mut self, name: &FullName) -> Result<(), StoreError> {
        let person = self
            .by_name
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.clone()))?;
        self.index_remove(&person);
        Ok(())
    }

    pub fn add_meeting(&mut self, name: &FullName, entry: &str) -> Result<(), StoreError> {
        let person = self
            .by_name
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.clone()))?;
        person.meetings.push(entry.to_string());
        Ok(())
    }

    pub fn remove_meeting(&mut self, name: &FullName, entry: &str) -> Result<(), StoreError> {
        let person = self
            .by_name
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.clone()))?;
        let Some(position) = person.meetings.iter().position(|m| m == entry) else {
            return Err(StoreError::MeetingNotFound {
                name: name.clone(),
                entry: entry.to_string(),
            });
        };
        person.meetings.remove(position);
        Ok(())
    }

    pub fn persons(&self, filter: EnableFilter) -> Vec<Person> {
        self.by_name
            .values()
            .filter(|person| filter.admits(person))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.by_name.values()
    }
}
