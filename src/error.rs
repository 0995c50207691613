//! Error types for tandem.
//!
//! All errors are strongly typed using thiserror, so the dispatcher can
//! pattern-match on the failure kind instead of parsing message strings:
//! usage errors print the operation's usage line, resolution failures
//! print the candidate set, and everything else is reported as-is.

use thiserror::Error;

use crate::person::FullName;
use crate::storage::StoreError;

/// Validation errors for user-typed values.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A date that parses under neither accepted syntax.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The value as typed.
        value: String,
    },

    /// An `edit` field name that is not a stored field.
    #[error("Unknown field '{field}': expected first_name, last_name, role, start_date, end_date or enabled")]
    UnknownField {
        /// The field name as typed.
        field: String,
    },

    /// An enabled value that is neither `true` nor `false`.
    #[error("Invalid enabled flag '{value}': expected true or false")]
    InvalidFlag {
        /// The value as typed.
        value: String,
    },

    /// A list filter word outside the accepted set.
    #[error("Invalid list filter '{value}': expected all, enabled or disabled")]
    InvalidFilter {
        /// The value as typed.
        value: String,
    },

    /// A name part that is empty or whitespace.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Which part was empty.
        field: &'static str,
    },
}

/// Why a search token failed to resolve to exactly one person.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The candidate set was empty.
    #[error("No match found")]
    NoMatch,

    /// The candidate set held two or more people.
    #[error("No unique match found")]
    Ambiguous {
        /// Every full name the token matched.
        candidates: Vec<FullName>,
    },

    /// The store failed underneath the search.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures surfaced by a command handler.
///
/// Every variant is terminal for the current invocation; none of them
/// leaves partial state behind.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Wrong argument count; the payload is the operation's usage line.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// A search produced zero candidates where one was required.
    #[error("No match found for '{token}'")]
    NoMatch {
        /// The search string as typed.
        token: String,
    },

    /// A search produced several candidates where one was required.
    #[error("No unique match found for '{token}'")]
    Ambiguous {
        /// The search string as typed.
        token: String,
        /// Every full name it matched.
        candidates: Vec<FullName>,
    },

    /// `add` targeted a full name that is already present.
    #[error("Person '{0}' already exists, no changes made")]
    AlreadyExists(FullName),

    /// The two-field delete form found no single exact match.
    #[error("No exact match for '{first} {last}', nothing deleted")]
    NoExactMatch {
        /// First name as typed.
        first: String,
        /// Last name as typed.
        last: String,
    },

    /// A user-typed value failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The confirmation prompt failed to read an answer.
    #[error("Prompt error: {0}")]
    Prompt(#[from] std::io::Error),

    /// The store failed underneath the command.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CommandError {
    /// Returns true for wrong-arity failures.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Top-level error type for tandem.
#[derive(Debug, Error)]
pub enum TandemError {
    /// A command handler failed.
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// The store failed outside any command.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A condition that should be impossible.
    #[error("Internal error: {message}")]
    Internal {
        /// What went wrong.
        message: String,
    },
}

impl TandemError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a command error.
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(self, Self::Command(_))
    }

    /// Returns true if this is a store error.
    #[must_use]
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for tandem operations.
pub type TandemResult<T> = Result<T, TandemError>;
