//! `person list`: the whole roster, bare or as a table.

use crate::error::CommandError;
use crate::person::{EnableFilter, FullName, Person};
use crate::table::TextTable;

use super::{PersonCommands, USAGE_LIST};

impl PersonCommands {
    /// `person list [all | enabled | disabled]`
    ///
    /// Without an argument, prints one full name per line. With a filter,
    /// prints a bordered table of every admitted record.
    ///
    /// # Errors
    ///
    /// Usage error on extra arguments, validation error on an unknown
    /// filter word.
    pub fn list(&self, args: &[String]) -> Result<String, CommandError> {
        match args {
            [] => {
                let mut names = self.store.fullnames()?;
                names.sort();
                let lines: Vec<&str> = names.iter().map(FullName::as_str).collect();
                Ok(lines.join("\n"))
            }
            [filter] => {
                let filter: EnableFilter = filter.parse()?;
                self.list_table(filter)
            }
            _ => Err(CommandError::Usage(USAGE_LIST)),
        }
    }

    fn list_table(&self, filter: EnableFilter) -> Result<String, CommandError> {
        let mut persons = self.store.persons(filter)?;
        persons.sort_by_key(Person::full_name);

        // Everyone admitted by the enabled filter is still on the team,
        // so the end-date column would be all blanks. Leave it out.
        let show_end = filter != EnableFilter::Enabled;

        let mut headings = vec!["First Name", "Last Name", "Role", "Start Date"];
        if show_end {
            headings.push("End Date");
        }
        headings.push("Meetings");
        let mut table = TextTable::new(headings);

        for person in &persons {
            let mut row = vec![
                person.first_name.clone(),
                person.last_name.clone(),
                person.role.clone(),
                person.tenure.start.to_string(),
            ];
            if show_end {
                row.push(person.tenure.end.map(|d| d.to_string()).unwrap_or_default());
            }
            row.push(summarize_meetings(&person.meetings));
            table.add_row(row);
        }
        Ok(table.to_string())
    }
}

/// Meetings cell for the roster table. Short histories are joined
/// outright; longer ones are elided down to their first and last entry.
fn summarize_meetings(meetings: &[String]) -> String {
    match meetings {
        [] => String::new(),
        [only] => only.clone(),
        [first, .., last] => format!("{first} ... {last}"),
    }
}
