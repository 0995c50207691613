//! Entity resolution over the roster.
//!
//! Turning an ambiguous, user-typed search token into person records is
//! the heart of this tool. Three layers of strictness:
//!
//! - [`Resolver::candidates`] gathers every plausible hit for a token
//! - [`Resolver::resolve_unique`] demands exactly one hit before a
//!   mutation may proceed
//! - [`Resolver::is_exact_pair`] checks a discretely supplied first/last
//!   name pair with no substring fallback at all

use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;

use crate::error::ResolveError;
use crate::person::{FullName, PersonField};
use crate::storage::{PersonStore, StoreError};

/// Search and disambiguation over an injected person store.
#[derive(Clone)]
pub struct Resolver {
    store: Arc<dyn PersonStore>,
}

impl Resolver {
    /// Creates a resolver over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Every person matching `token`, de-duplicated.
    ///
    /// Union of three lookups: exact first-name equality, exact last-name
    /// equality, and case-sensitive substring containment against every
    /// full name. The substring pass is the only partial match in the
    /// system; it lets a name fragment (part of a hyphenated surname,
    /// say) find a hit when neither discrete field equals the token.
    ///
    /// The empty token matches nothing by field equality but every full
    /// name by containment, so it returns the whole roster. Broad match,
    /// not an error.
    pub fn candidates(&self, token: &str) -> Result<BTreeSet<FullName>, StoreError> {
        let mut results = self.store.find(PersonField::FirstName, token)?;
        results.extend(self.store.find(PersonField::LastName, token)?);

        for fullname in self.store.fullnames()? {
            if fullname.contains(token) {
                results.insert(fullname);
            }
        }

        debug!("search '{token}' matched {} person(s)", results.len());
        Ok(results)
    }

    /// Narrows `token` to exactly one person.
    ///
    /// Exactly one candidate succeeds with that full name; zero fails
    /// with [`ResolveError::NoMatch`]; two or more fail with
    /// [`ResolveError::Ambiguous`] carrying the full candidate set so the
    /// caller can show it. Callers must not mutate state on failure.
    pub fn resolve_unique(&self, token: &str) -> Result<FullName, ResolveError> {
        let mut candidates = self.candidates(token)?.into_iter();
        match (candidates.next(), candidates.next()) {
            (None, _) => Err(ResolveError::NoMatch),
            (Some(name), None) => {
                debug!("'{token}' resolved to {name}");
                Ok(name)
            }
            (Some(first), Some(second)) => {
                let mut all = vec![first, second];
                all.extend(candidates);
                Err(ResolveError::Ambiguous { candidates: all })
            }
        }
    }

    /// Strict check for a discretely supplied first/last name pair.
    ///
    /// Both lookups are field-equality only. An empty first-name result
    /// short-circuits to false before the last name is even queried.
    /// True iff the two result sets intersect in exactly one full name.
    pub fn is_exact_pair(&self, first: &str, last: &str) -> Result<bool, StoreError> {
        let first_hits = self.store.find(PersonField::FirstName, first)?;
        if first_hits.is_empty() {
            return Ok(false);
        }

        let last_hits = self.store.find(PersonField::LastName, last)?;
        if last_hits.is_empty() {
            return Ok(false);
        }

        Ok(first_hits.intersection(&last_hits).count() == 1)
    }
}
