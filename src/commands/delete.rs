//! `person delete`: remove a record after confirmation.

use crate::error::CommandError;
use crate::person::FullName;

use super::{resolve_failure, PersonCommands, USAGE_DELETE};

impl PersonCommands {
    /// `person delete (<first-name> <last-name> | <search-string>)`
    ///
    /// One argument is treated as a search string and must resolve to
    /// exactly one person. Two arguments are treated as a literal
    /// first/last name pair and must match exactly one record on both
    /// fields; near-misses are refused rather than guessed at.
    ///
    /// Either way the user is asked to confirm before anything is
    /// removed. Declining is not an error.
    ///
    /// # Errors
    ///
    /// Usage error on wrong arity, no-match or ambiguity from the
    /// one-argument form, [`CommandError::NoExactMatch`] from the
    /// two-argument form.
    pub fn delete(&self, args: &[String]) -> Result<String, CommandError> {
        let fullname = match args {
            [token] => self
                .resolver
                .resolve_unique(token)
                .map_err(|err| resolve_failure(token, err))?,
            [first, last] => {
                if !self.resolver.is_exact_pair(first, last)? {
                    return Err(CommandError::NoExactMatch {
                        first: first.clone(),
                        last: last.clone(),
                    });
                }
                FullName::new(first, last)
            }
            _ => return Err(CommandError::Usage(USAGE_DELETE)),
        };

        let question = format!("Are you sure you want to delete '{fullname}'?");
        if !self.prompt.ask(&question)? {
            return Ok(format!("Not deleting '{fullname}'"));
        }

        self.store.remove(&fullname)?;
        Ok(String::new())
    }
}
