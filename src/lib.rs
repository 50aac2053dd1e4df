//! todotags - Implied tags and date semantics for todo.txt tasks
//!
//! Expands `+project`/`@context` tags through a configurable implication
//! table and derives start/due dates, active/overdue status and task length
//! from a task's date tags.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TodoTagsError;
