//! `person info`: full record details for every match.

use std::fmt::Write as _;

use crate::error::CommandError;
use crate::person::Person;
use crate::storage::StoreError;

use super::{PersonCommands, USAGE_INFO};

impl PersonCommands {
    /// `person info <search-string>`
    ///
    /// Echoes the search string, then prints one detail block per
    /// matching person in sorted full-name order. No matches is
    /// reported as output, not an error.
    ///
    /// # Errors
    ///
    /// Usage error on wrong arity.
    pub fn info(&self, args: &[String]) -> Result<String, CommandError> {
        let [token] = args else {
            return Err(CommandError::Usage(USAGE_INFO));
        };

        let mut blocks = vec![format!("Searching for {token}")];
        let candidates = self.resolver.candidates(token)?;
        if candidates.is_empty() {
            blocks.push("No record found".to_string());
            return Ok(blocks.join("\n"));
        }

        for name in &candidates {
            let person = self
                .store
                .get(name)?
                .ok_or_else(|| StoreError::NotFound(name.clone()))?;
            blocks.push(describe(&person));
        }
        Ok(blocks.join("\n\n"))
    }
}

/// One detail block, field per line, meeting history indented under its
/// own heading.
fn describe(person: &Person) -> String {
    let mut block = String::new();
    let _ = writeln!(block, "First name: {}", person.first_name);
    let _ = writeln!(block, "Last name: {}", person.last_name);
    let _ = writeln!(block, "Role: {}", person.role);
    let _ = writeln!(block, "Start date: {}", person.tenure.start);
    let end = person
        .tenure
        .end
        .map(|d| d.to_string())
        .unwrap_or_default();
    let _ = writeln!(block, "End date: {end}");
    let _ = writeln!(block, "Enabled?: {}", person.enabled);
    block.push_str("One-on-one meetings:");

    let mut meetings = person.meetings.clone();
    meetings.sort();
    for entry in &meetings {
        let _ = write!(block, "\n  {entry}");
    }
    block
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::person::{Person, Tenure};
    use crate::prompt::StaticPrompt;
    use crate::storage::InMemoryPersonStore;

    use super::super::PersonCommands;
    use super::describe;

    fn date(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    fn sample() -> Person {
        let mut person = Person::new(
            "Alice",
            "Smith",
            "Engineer",
            Tenure::between(date("2021-03-01"), date("2024-06-30")),
        );
        person.meetings = vec!["2024-02-02".to_string(), "2024-01-05".to_string()];
        person
    }

    fn commands() -> PersonCommands {
        let store = InMemoryPersonStore::with_persons(vec![
            sample(),
            Person::new("Alice", "Jones", "Designer", Tenure::starting(date("2022-05-09"))),
        ])
        .unwrap();
        PersonCommands::new(Arc::new(store), Box::new(StaticPrompt::new(true)))
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_describe_lists_every_field() {
        let block = describe(&sample());
        assert_eq!(
            block,
            "First name: Alice\n\
             Last name: Smith\n\
             Role: Engineer\n\
             Start date: 2021-03-01\n\
             End date: 2024-06-30\n\
             Enabled?: true\n\
             One-on-one meetings:\n\
             \x20 2024-01-05\n\
             \x20 2024-02-02"
        );
    }

    #[test]
    fn test_describe_open_tenure_has_blank_end_date() {
        let person = Person::new("Bob", "Jones", "Manager", Tenure::starting(date("2019-07-15")));
        let block = describe(&person);
        assert!(block.contains("End date: \n"));
        assert!(block.ends_with("One-on-one meetings:"));
    }

    #[test]
    fn test_info_echoes_token_and_prints_blocks_in_order() {
        let commands = commands();
        let out = commands.info(&args(&["Alice"])).unwrap();
        assert!(out.starts_with("Searching for Alice\n\n"));
        // Sorted order: Alice Jones before Alice Smith.
        let jones_at = out.find("Last name: Jones").unwrap();
        let smith_at = out.find("Last name: Smith").unwrap();
        assert!(jones_at < smith_at);
    }

    #[test]
    fn test_info_without_matches_reports_no_record() {
        let commands = commands();
        let out = commands.info(&args(&["Zed"])).unwrap();
        assert_eq!(out, "Searching for Zed\nNo record found");
    }

    #[test]
    fn test_wrong_arity_reports_usage() {
        let commands = commands();
        assert!(commands.info(&[]).unwrap_err().is_usage());
        assert!(commands
            .info(&args(&["Alice", "Smith"]))
            .unwrap_err()
            .is_usage());
    }
}
