//! Storage backends for the roster.
//!
//! The trait defines the abstract contract; the in-memory backend serves
//! tests and benches, the file backend serves the CLI.

mod file;
mod memory;
mod state;
mod traits;

pub use file::FilePersonStore;
pub use memory::InMemoryPersonStore;
pub use traits::{PersonStore, StoreError};
