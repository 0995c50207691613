//! `meeting add` / `meeting delete`: one-on-one meeting history.

use std::sync::Arc;

use crate::error::CommandError;
use crate::person::parse_date;
use crate::resolve::Resolver;
use crate::storage::PersonStore;

use super::resolve_failure;

/// Usage line shown when the `meeting` operation itself is unknown.
pub const USAGE_MEETING: &str = "meeting <add | delete>";
/// Usage line for `meeting add`.
pub const USAGE_MEETING_ADD: &str = "meeting add <search-string> <date>";
/// Usage line for `meeting delete`.
pub const USAGE_MEETING_DELETE: &str = "meeting delete <search-string> <date>";

/// Handlers for the `meeting` command group.
///
/// Meetings hang off a person record, so both operations resolve a
/// search string to a unique person first.
pub struct MeetingCommands {
    store: Arc<dyn PersonStore>,
    resolver: Resolver,
}

impl MeetingCommands {
    /// Builds the handler set over `store`.
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        let resolver = Resolver::new(Arc::clone(&store));
        Self { store, resolver }
    }

    /// Routes one `meeting` operation to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Usage`] for an unknown operation, otherwise
    /// whatever the handler returns.
    pub fn dispatch(&self, operation: &str, args: &[String]) -> Result<String, CommandError> {
        match operation {
            "add" => self.add(args),
            "delete" => self.delete(args),
            _ => Err(CommandError::Usage(USAGE_MEETING)),
        }
    }

    /// `meeting add <search-string> <date>`
    ///
    /// Records a meeting date against the resolved person. Repeated
    /// dates are kept; two one-on-ones on the same day are two entries.
    ///
    /// # Errors
    ///
    /// Usage error on wrong arity, no-match or ambiguity from
    /// resolution, validation error on an unparseable date.
    pub fn add(&self, args: &[String]) -> Result<String, CommandError> {
        let [token, date] = args else {
            return Err(CommandError::Usage(USAGE_MEETING_ADD));
        };

        let fullname = self
            .resolver
            .resolve_unique(token)
            .map_err(|err| resolve_failure(token, err))?;
        let date = parse_date(date)?;
        self.store.add_meeting(&fullname, &date.to_string())?;
        Ok(String::new())
    }

    /// `meeting delete <search-string> <date>`
    ///
    /// Removes one recorded meeting. When the same date appears more
    /// than once only the first entry goes.
    ///
    /// # Errors
    ///
    /// As for [`MeetingCommands::add`], plus a store error when the
    /// person has no meeting on that date.
    pub fn delete(&self, args: &[String]) -> Result<String, CommandError> {
        let [token, date] = args else {
            return Err(CommandError::Usage(USAGE_MEETING_DELETE));
        };

        let fullname = self
            .resolver
            .resolve_unique(token)
            .map_err(|err| resolve_failure(token, err))?;
        let date = parse_date(date)?;
        self.store.remove_meeting(&fullname, &date.to_string())?;
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::error::CommandError;
    use crate::person::{FullName, Person, Tenure};
    use crate::storage::{InMemoryPersonStore, StoreError};

    use super::*;

    fn date(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    fn commands() -> MeetingCommands {
        let store = InMemoryPersonStore::with_persons(vec![
            Person::new("Alice", "Smith", "Engineer", Tenure::starting(date("2021-03-01"))),
            Person::new("Alice", "Jones", "Designer", Tenure::starting(date("2022-05-09"))),
        ])
        .unwrap();
        MeetingCommands::new(Arc::new(store))
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn meetings_of(commands: &MeetingCommands, first: &str, last: &str) -> Vec<String> {
        commands
            .store
            .get(&FullName::new(first, last))
            .unwrap()
            .unwrap()
            .meetings
    }

    #[test]
    fn test_add_records_meetings_in_order() {
        let commands = commands();
        commands.add(&args(&["Smith", "2024-02-02"])).unwrap();
        commands.add(&args(&["Smith", "2024-01-05"])).unwrap();

        assert_eq!(
            meetings_of(&commands, "Alice", "Smith"),
            ["2024-02-02", "2024-01-05"]
        );
    }

    #[test]
    fn test_add_normalizes_compact_dates() {
        let commands = commands();
        commands.add(&args(&["Smith", "20240202"])).unwrap();
        assert_eq!(meetings_of(&commands, "Alice", "Smith"), ["2024-02-02"]);
    }

    #[test]
    fn test_add_rejects_bad_dates() {
        let commands = commands();
        let err = commands.add(&args(&["Smith", "soon"])).unwrap_err();
        assert!(matches!(err, CommandError::Invalid(_)));
        assert!(meetings_of(&commands, "Alice", "Smith").is_empty());
    }

    #[test]
    fn test_add_requires_unique_person() {
        let commands = commands();
        let err = commands.add(&args(&["Alice", "2024-02-02"])).unwrap_err();
        assert!(matches!(err, CommandError::Ambiguous { .. }));
    }

    #[test]
    fn test_delete_removes_first_matching_entry_only() {
        let commands = commands();
        commands.add(&args(&["Smith", "2024-02-02"])).unwrap();
        commands.add(&args(&["Smith", "2024-02-02"])).unwrap();

        commands.delete(&args(&["Smith", "2024-02-02"])).unwrap();
        assert_eq!(meetings_of(&commands, "Alice", "Smith"), ["2024-02-02"]);
    }

    #[test]
    fn test_delete_unknown_meeting_is_an_error() {
        let commands = commands();
        let err = commands.delete(&args(&["Smith", "2024-02-02"])).unwrap_err();
        let CommandError::Store(StoreError::MeetingNotFound { name, entry }) = err else {
            panic!("expected a meeting-not-found error, got {err:?}");
        };
        assert_eq!(name.as_str(), "Alice Smith");
        assert_eq!(entry, "2024-02-02");
    }

    #[test]
    fn test_dispatch_unknown_operation_reports_group_usage() {
        let commands = commands();
        let err = commands.dispatch("list", &[]).unwrap_err();
        let CommandError::Usage(usage) = err else {
            panic!("expected a usage error, got {err:?}");
        };
        assert_eq!(usage, USAGE_MEETING);
    }

    #[test]
    fn test_wrong_arity_reports_usage() {
        let commands = commands();
        assert!(commands.add(&args(&["Smith"])).unwrap_err().is_usage());
        assert!(commands
            .delete(&args(&["Smith", "2024-02-02", "extra"]))
            .unwrap_err()
            .is_usage());
    }
}
