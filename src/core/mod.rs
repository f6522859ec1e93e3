//! Core module: GPA engine, records, persistence and reporting

pub mod config;
pub mod curriculum;
pub mod draft;
pub mod gpa;
pub mod importer;
pub mod models;
pub mod report;
pub mod sample;
pub mod store;

/// Returns the current version of the `cgpa-calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
