//! `person find`: show every full name a search string matches.

use crate::error::CommandError;
use crate::person::FullName;

use super::{PersonCommands, USAGE_FIND};

impl PersonCommands {
    /// `person find <search-string>`
    ///
    /// Prints the matching full names in sorted order, one per line.
    /// An empty candidate set is reported as output, not an error:
    /// finding nothing is an answer.
    ///
    /// # Errors
    ///
    /// Usage error on wrong arity.
    pub fn find(&self, args: &[String]) -> Result<String, CommandError> {
        let [token] = args else {
            return Err(CommandError::Usage(USAGE_FIND));
        };

        let candidates = self.resolver.candidates(token)?;
        if candidates.is_empty() {
            return Ok("No match found".to_string());
        }
        let lines: Vec<&str> = candidates.iter().map(FullName::as_str).collect();
        Ok(lines.join("\n"))
    }
}
