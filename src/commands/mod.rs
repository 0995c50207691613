//! Command handlers for the `person` and `meeting` groups.
//!
//! Each handler validates argument arity first, then resolves names and
//! delegates to the injected [`PersonStore`]. Handlers never print: they
//! return rendered output as a `String` (empty for silent success) and
//! leave the caller to decide where output and errors go.

mod add;
mod delete;
mod edit;
mod find;
mod info;
mod list;
mod meeting;

pub use meeting::MeetingCommands;

use std::sync::Arc;

use crate::error::{CommandError, ResolveError};
use crate::prompt::ConfirmationPrompt;
use crate::resolve::Resolver;
use crate::storage::PersonStore;

/// Usage line shown when the `person` operation itself is unknown.
pub const USAGE_PERSON: &str = "person <list | add | edit | delete | find | info>";
/// Usage line for `person list`.
pub const USAGE_LIST: &str = "person list [all | enabled | disabled]";
/// Usage line for `person add`.
pub const USAGE_ADD: &str = "person add <first-name> <last-name> <role> <start-date> [end-date]";
/// Usage line for `person edit`.
pub const USAGE_EDIT: &str = "person edit <search-string> <field> <value>";
/// Usage line for `person delete`.
pub const USAGE_DELETE: &str = "person delete (<first-name> <last-name> | <search-string>)";
/// Usage line for `person find`.
pub const USAGE_FIND: &str = "person find <search-string>";
/// Usage line for `person info`.
pub const USAGE_INFO: &str = "person info <search-string>";

/// Handlers for the `person` command group.
///
/// Built over an injected store handle so the same handlers run against
/// the file-backed roster in the binary and the in-memory store in tests.
pub struct PersonCommands {
    store: Arc<dyn PersonStore>,
    resolver: Resolver,
    prompt: Box<dyn ConfirmationPrompt>,
}

impl PersonCommands {
    /// Builds the handler set over `store`, confirming destructive
    /// operations through `prompt`.
    pub fn new(store: Arc<dyn PersonStore>, prompt: Box<dyn ConfirmationPrompt>) -> Self {
        let resolver = Resolver::new(Arc::clone(&store));
        Self {
            store,
            resolver,
            prompt,
        }
    }

    /// Routes one `person` operation to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Usage`] for an unknown operation, otherwise
    /// whatever the handler returns.
    pub fn dispatch(&self, operation: &str, args: &[String]) -> Result<String, CommandError> {
        match operation {
            "list" => self.list(args),
            "add" => self.add(args),
            "edit" => self.edit(args),
            "delete" => self.delete(args),
            "find" => self.find(args),
            "info" => self.info(args),
            _ => Err(CommandError::Usage(USAGE_PERSON)),
        }
    }
}

/// Maps a resolution failure onto the command error that names the
/// search string the user actually typed.
pub(crate) fn resolve_failure(token: &str, err: ResolveError) -> CommandError {
    match err {
        ResolveError::NoMatch => CommandError::NoMatch {
            token: token.to_string(),
        },
        ResolveError::Ambiguous { candidates } => CommandError::Ambiguous {
            token: token.to_string(),
            candidates,
        },
        ResolveError::Store(err) => CommandError::Store(err),
    }
}
