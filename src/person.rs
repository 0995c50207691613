//! Person records and roster vocabulary types.
//!
//! Everything in the roster hangs off the derived [`FullName`] key.
//! Without a stable, unique full name there is nothing to search for,
//! resolve against, or delete.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The unique roster identifier for a person.
///
/// Derived from the first and last name, joined by a single space.
/// Once a person is stored their record is keyed by this value;
/// renaming a person re-keys the record.
///
/// # Examples
///
/// ```
/// use tandem::FullName;
///
/// let name = FullName::new("Alice", "Smith");
/// assert_eq!(name.as_str(), "Alice Smith");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    /// Derives the full name for a first/last name pair.
    #[must_use]
    pub fn new(first: &str, last: &str) -> Self {
        Self(format!("{first} {last}"))
    }

    /// Returns the full name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the full name contains `token` as a
    /// case-sensitive substring.
    ///
    /// The empty token is a substring of every name; searching with it
    /// matches the whole roster.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FullName {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for FullName {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Employment span for a person.
///
/// An absent end date means the person is still active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenure {
    /// First day on the roster.
    pub start: NaiveDate,

    /// Last day, if the person has left.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl Tenure {
    /// Creates an open tenure beginning at `start`.
    #[must_use]
    pub const fn starting(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Creates a closed tenure.
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Returns true if the tenure has no end date.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// One person on the roster.
///
/// The record never stores its own key; [`Person::full_name`] derives it
/// from the name fields so the two can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Given name, matched by exact field equality in searches.
    pub first_name: String,

    /// Family name, matched by exact field equality in searches.
    pub last_name: String,

    /// Free-text role description.
    pub role: String,

    /// Employment span.
    pub tenure: Tenure,

    /// Whether the person shows up under the `enabled` list filter.
    ///
    /// Independent of the tenure end date: a person with no end date is
    /// still active regardless of this flag.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Meeting history, free-text entries in insertion order.
    #[serde(default)]
    pub meetings: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

impl Person {
    /// Creates a new enabled person with an empty meeting history.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
        tenure: Tenure,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
            tenure,
            enabled: true,
            meetings: Vec::new(),
        }
    }

    /// Derives the roster key for this person.
    #[must_use]
    pub fn full_name(&self) -> FullName {
        FullName::new(&self.first_name, &self.last_name)
    }

    /// Returns the value of a queryable field.
    #[must_use]
    pub fn field(&self, field: PersonField) -> &str {
        match field {
            PersonField::FirstName => &self.first_name,
            PersonField::LastName => &self.last_name,
        }
    }

    /// Returns true if the person has no tenure end date.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.tenure.end.is_none()
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.full_name() == other.full_name()
    }
}

impl Eq for Person {}

impl std::hash::Hash for Person {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.full_name().hash(state);
    }
}

/// Fields the store can look up by exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    /// The `first_name` field.
    FirstName,
    /// The `last_name` field.
    LastName,
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstName => write!(f, "first_name"),
            Self::LastName => write!(f, "last_name"),
        }
    }
}

/// A single typed field update, parsed from user-typed `<field> <value>`
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonUpdate {
    /// Replace the first name, re-keying the record.
    FirstName(String),
    /// Replace the last name, re-keying the record.
    LastName(String),
    /// Replace the role.
    Role(String),
    /// Replace the tenure start date.
    StartDate(NaiveDate),
    /// Set or clear the tenure end date.
    EndDate(Option<NaiveDate>),
    /// Flip the enabled flag.
    Enabled(bool),
}

impl PersonUpdate {
    /// Parses a field/value pair.
    ///
    /// Field names are the stored field names (`first_name`, `last_name`,
    /// `role`, `start_date`, `end_date`, `enabled`). The end date accepts
    /// the literal `none` to clear it.
    pub fn parse(field: &str, value: &str) -> Result<Self, ValidationError> {
        match field {
            "first_name" => {
                require_nonempty("First name", value)?;
                Ok(Self::FirstName(value.to_string()))
            }
            "last_name" => {
                require_nonempty("Last name", value)?;
                Ok(Self::LastName(value.to_string()))
            }
            "role" => Ok(Self::Role(value.to_string())),
            "start_date" => Ok(Self::StartDate(parse_date(value)?)),
            "end_date" => {
                if value == "none" {
                    Ok(Self::EndDate(None))
                } else {
                    Ok(Self::EndDate(Some(parse_date(value)?)))
                }
            }
            "enabled" => match value.parse::<bool>() {
                Ok(flag) => Ok(Self::Enabled(flag)),
                Err(_) => Err(ValidationError::InvalidFlag {
                    value: value.to_string(),
                }),
            },
            other => Err(ValidationError::UnknownField {
                field: other.to_string(),
            }),
        }
    }
}

/// Filter over the enabled flag for bulk reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnableFilter {
    /// Every person.
    #[default]
    All,
    /// Only persons with the enabled flag set.
    Enabled,
    /// Only persons with the enabled flag cleared.
    Disabled,
}

impl EnableFilter {
    /// Returns true if `person` passes the filter.
    #[must_use]
    pub const fn admits(self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::Enabled => person.enabled,
            Self::Disabled => !person.enabled,
        }
    }
}

impl FromStr for EnableFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            other => Err(ValidationError::InvalidFilter {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for EnableFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// Parses a user-typed date.
///
/// ISO `YYYY-MM-DD` is the primary syntax; compact `YYYYMMDD` is accepted
/// as a fallback.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y%m%d"))
        .map_err(|_| ValidationError::InvalidDate {
            value: value.to_string(),
        })
}

/// Rejects empty or whitespace-only name parts.
pub fn require_nonempty(what: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field: what })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_full_name_derivation() {
        let name = FullName::new("Alice", "Smith");
        assert_eq!(name.as_str(), "Alice Smith");
        assert_eq!(format!("{name}"), "Alice Smith");
    }

    #[test]
    fn test_full_name_contains_is_case_sensitive() {
        let name = FullName::new("Alice", "Smith-Jones");
        assert!(name.contains("Smith"));
        assert!(name.contains("ce Smi"));
        assert!(name.contains("-Jones"));
        assert!(!name.contains("smith"));
    }

    #[test]
    fn test_full_name_contains_empty_token() {
        let name = FullName::new("Bob", "Lee");
        assert!(name.contains(""));
    }

    #[test]
    fn test_full_name_ordering() {
        let a = FullName::new("Alice", "Jones");
        let b = FullName::new("Alice", "Smith");
        assert!(a < b);
    }

    #[test]
    fn test_tenure_open_and_closed() {
        let open = Tenure::starting(date("2024-01-15"));
        assert!(open.is_open());

        let closed = Tenure::between(date("2024-01-15"), date("2025-06-30"));
        assert!(!closed.is_open());
        assert_eq!(closed.end, Some(date("2025-06-30")));
    }

    #[test]
    fn test_person_full_name_tracks_fields() {
        let mut person = Person::new("Alice", "Smith", "Engineer", Tenure::starting(date("2024-01-15")));
        assert_eq!(person.full_name(), FullName::new("Alice", "Smith"));

        person.last_name = "Smith-Jones".to_string();
        assert_eq!(person.full_name().as_str(), "Alice Smith-Jones");
    }

    #[test]
    fn test_person_defaults() {
        let person = Person::new("Bob", "Lee", "Manager", Tenure::starting(date("2023-03-01")));
        assert!(person.enabled);
        assert!(person.meetings.is_empty());
        assert!(person.is_active());
    }

    #[test]
    fn test_person_equality_is_by_full_name() {
        let a = Person::new("Sam", "Fox", "Designer", Tenure::starting(date("2024-01-01")));
        let mut b = Person::new("Sam", "Fox", "Director", Tenure::starting(date("2020-05-05")));
        b.enabled = false;
        assert_eq!(a, b);
    }

    #[test]
    fn test_person_field_access() {
        let person = Person::new("Alice", "Smith", "Engineer", Tenure::starting(date("2024-01-15")));
        assert_eq!(person.field(PersonField::FirstName), "Alice");
        assert_eq!(person.field(PersonField::LastName), "Smith");
    }

    #[test]
    fn test_person_serde_round_trip() {
        let mut person = Person::new("Alice", "Smith", "Engineer", Tenure::starting(date("2024-01-15")));
        person.meetings.push("2024-02-01".to_string());

        let json = serde_json::to_string(&person).unwrap();
        let decoded: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.first_name, "Alice");
        assert_eq!(decoded.tenure.start, date("2024-01-15"));
        assert_eq!(decoded.meetings, vec!["2024-02-01".to_string()]);
    }

    #[test]
    fn test_person_deserialize_fills_defaults() {
        // Hand-edited files may omit the enabled flag and meetings.
        let json = r#"{
            "first_name": "Bob",
            "last_name": "Lee",
            "role": "Manager",
            "tenure": { "start": "2023-03-01" }
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.enabled);
        assert!(person.meetings.is_empty());
        assert!(person.tenure.is_open());
    }

    #[test]
    fn test_update_parse_role() {
        let update = PersonUpdate::parse("role", "Staff Engineer").unwrap();
        assert_eq!(update, PersonUpdate::Role("Staff Engineer".to_string()));
    }

    #[test]
    fn test_update_parse_dates() {
        let update = PersonUpdate::parse("start_date", "2024-01-15").unwrap();
        assert_eq!(update, PersonUpdate::StartDate(date("2024-01-15")));

        let update = PersonUpdate::parse("end_date", "2025-06-30").unwrap();
        assert_eq!(update, PersonUpdate::EndDate(Some(date("2025-06-30"))));

        let update = PersonUpdate::parse("end_date", "none").unwrap();
        assert_eq!(update, PersonUpdate::EndDate(None));
    }

    #[test]
    fn test_update_parse_enabled() {
        assert_eq!(
            PersonUpdate::parse("enabled", "false").unwrap(),
            PersonUpdate::Enabled(false)
        );
        let err = PersonUpdate::parse("enabled", "nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_update_parse_rejects_unknown_field() {
        let err = PersonUpdate::parse("nickname", "Al").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("nickname"));
        assert!(msg.contains("first_name"));
    }

    #[test]
    fn test_update_parse_rejects_empty_name() {
        let err = PersonUpdate::parse("first_name", "  ").unwrap_err();
        assert_eq!(err.to_string(), "First name cannot be empty");
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(date("2024-01-15"), date("20240115"));
        assert!(parse_date("15/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_enable_filter_parse_and_admit() {
        let mut person = Person::new("Alice", "Smith", "Engineer", Tenure::starting(date("2024-01-15")));

        let all: EnableFilter = "all".parse().unwrap();
        let enabled: EnableFilter = "enabled".parse().unwrap();
        let disabled: EnableFilter = "disabled".parse().unwrap();

        assert!(all.admits(&person));
        assert!(enabled.admits(&person));
        assert!(!disabled.admits(&person));

        person.enabled = false;
        assert!(all.admits(&person));
        assert!(!enabled.admits(&person));
        assert!(disabled.admits(&person));
    }

    #[test]
    fn test_enable_filter_rejects_unknown_token() {
        let err = "active".parse::<EnableFilter>().unwrap_err();
        assert!(err.to_string().contains("active"));
    }
}
