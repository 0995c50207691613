//! `person edit`: update one field of a resolved person.

use crate::error::CommandError;
use crate::person::PersonUpdate;
use crate::storage::StoreError;

use super::{resolve_failure, PersonCommands, USAGE_EDIT};

impl PersonCommands {
    /// `person edit <search-string> <field> <value>`
    ///
    /// The search string must resolve to exactly one person before the
    /// field and value are even looked at. Renaming a person re-keys
    /// their record; a rename that collides with an existing full name
    /// leaves the roster unchanged.
    ///
    /// # Errors
    ///
    /// Usage error on wrong arity, no-match or ambiguity from
    /// resolution, validation errors from the field/value pair, and
    /// [`CommandError::AlreadyExists`] on a rename collision.
    pub fn edit(&self, args: &[String]) -> Result<String, CommandError> {
        let [token, field, value] = args else {
            return Err(CommandError::Usage(USAGE_EDIT));
        };

        let fullname = self
            .resolver
            .resolve_unique(token)
            .map_err(|err| resolve_failure(token, err))?;
        let update = PersonUpdate::parse(field, value)?;

        match self.store.update(&fullname, update) {
            Ok(_) => Ok(String::new()),
            Err(StoreError::DuplicateName(name)) => Err(CommandError::AlreadyExists(name)),
            Err(err) => Err(err.into()),
        }
    }
}
