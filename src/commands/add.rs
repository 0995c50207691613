//! `person add`: create a roster record.

use crate::error::CommandError;
use crate::person::{parse_date, require_nonempty, FullName, Person, Tenure};
use crate::storage::StoreError;

use super::{PersonCommands, USAGE_ADD};

impl PersonCommands {
    /// `person add <first-name> <last-name> <role> <start-date> [end-date]`
    ///
    /// Succeeds silently. Refuses to touch the roster when the derived
    /// full name is already taken.
    ///
    /// # Errors
    ///
    /// Usage error on wrong arity, [`CommandError::AlreadyExists`] on a
    /// duplicate full name, validation errors on empty names or
    /// unparseable dates.
    pub fn add(&self, args: &[String]) -> Result<String, CommandError> {
        let (first, last, role, start, end) = match args {
            [first, last, role, start] => (first, last, role, start, None),
            [first, last, role, start, end] => (first, last, role, start, Some(end)),
            _ => return Err(CommandError::Usage(USAGE_ADD)),
        };

        require_nonempty("First name", first)?;
        require_nonempty("Last name", last)?;

        let fullname = FullName::new(first, last);
        if self.store.exists(&fullname)? {
            return Err(CommandError::AlreadyExists(fullname));
        }

        let start = parse_date(start)?;
        let tenure = match end {
            Some(end) => Tenure::between(start, parse_date(end)?),
            None => Tenure::starting(start),
        };

        match self.store.insert(Person::new(first, last, role, tenure)) {
            Ok(()) => Ok(String::new()),
            Err(StoreError::DuplicateName(name)) => Err(CommandError::AlreadyExists(name)),
            Err(err) => Err(err.into()),
        }
    }
}
