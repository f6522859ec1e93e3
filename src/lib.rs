//! Shared library for `cgpa-calc`
//! GPA engine, student stores and report generation used by the `cgpacalc` CLI

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
