//! Documentation linting
//!
//! Validates a tree of markdown documents against authoring rules before it
//! is published: lower-case paths, markdown extensions, links by document ID
//! that resolve, no in-body top level headings, and a front matter `title`.

pub mod domain;
pub use domain::{Config, Document, FileReport, Rule, Violation};

/// The validator chain.
pub mod lint;
pub use lint::{Catalog, Linter};

pub mod report;
pub use report::Report;

/// File discovery and linting a tree on disk.
pub mod storage;
pub use storage::{DiscoveryError, LintError, discover, lint_tree};
