//! Application layer - Use cases and orchestration

pub mod report;

pub use report::{ReportFilter, ReportService, TaskReport};
