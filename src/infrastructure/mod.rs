//! Infrastructure layer - External I/O

pub mod config;

pub use config::Config;
