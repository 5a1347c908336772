//! Core domain for campusbot: knowledge tables, response resolution, and
//! configuration.
//!
//! This crate is pure logic - no I/O, no async. The response-selection
//! contract lives here so the action layer and the tests share one source
//! of truth for what the bot says about each campus topic.

pub mod config;
pub mod knowledge;
pub mod resolver;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat, PortalConfig};
pub use knowledge::{ResponseTable, TableEntry, CAMPUS_SPOTS, SAC_VERTICALS, STUDENT_BODIES};
pub use resolver::resolve;
