//! Domain models for documentation linting.
//!
//! This module contains the values the validator chain works on: documents,
//! the links inside them, the violations found, and the configuration.

mod config;
pub use config::{Config, ConfigError};

/// Documentation files and their front matter.
pub mod document;
pub use document::{Document, LoadError};

pub mod link;
pub use link::{LinkKind, LinkReference};

mod violation;
pub use violation::{FileReport, Rule, Violation};
