//! Domain layer - Tag implication and date rules

pub mod date;
pub mod dates;
pub mod implied;
pub mod todo;

pub use dates::{DateTagNames, DueFlags, TaskDates, TaskView};
pub use implied::{ImplicationExpander, ImplicationTable};
pub use todo::Todo;
