//! # Tandem - A roster for your one-on-one meetings
//!
//! Tandem keeps a small roster of the people you meet with regularly:
//! who they are, what they do, when they joined, and every one-on-one
//! you have logged with them. Commands address people by loose search
//! strings; tandem resolves those to a unique person before acting, and
//! refuses to guess when more than one person matches.
//!
//! ## Core Concepts
//!
//! - **Person**: one roster record, keyed by the full name derived from
//!   its first and last name
//! - **Resolver**: turns a search string into candidate people by exact
//!   first-name, exact last-name, and full-name substring matching
//! - **PersonStore**: the storage contract; an in-memory store backs
//!   tests, a JSON file store backs the CLI
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tandem::commands::PersonCommands;
//! use tandem::prompt::StaticPrompt;
//! use tandem::storage::InMemoryPersonStore;
//!
//! let store = Arc::new(InMemoryPersonStore::new());
//! let commands = PersonCommands::new(store, Box::new(StaticPrompt::new(true)));
//!
//! let args: Vec<String> = ["Ada", "Lovelace", "Engineer", "2021-03-01"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! commands.dispatch("add", &args).unwrap();
//! assert_eq!(commands.dispatch("find", &args[..1]).unwrap(), "Ada Lovelace");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod error;
pub mod person;
pub mod prompt;
pub mod resolve;
pub mod storage;
pub mod table;

// Re-export primary types at crate root for convenience
pub use error::{CommandError, ResolveError, TandemError, TandemResult, ValidationError};
pub use person::{EnableFilter, FullName, Person, PersonField, PersonUpdate, Tenure};
pub use prompt::{ConfirmationPrompt, StaticPrompt, StdinPrompt};
pub use resolve::Resolver;
pub use storage::{FilePersonStore, InMemoryPersonStore, PersonStore, StoreError};
