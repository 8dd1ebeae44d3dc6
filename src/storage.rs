mod discover;
/// Front matter splitting and parsing.
pub mod front_matter;
mod workspace;

pub use discover::{DiscoveryError, discover};
pub use workspace::{LintError, lint_tree};
