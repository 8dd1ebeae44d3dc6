use crate::domain::{Document, Violation};

const MARKDOWN_EXTENSIONS: [&str; 2] = [".md", ".mdx"];

/// Documents must be markdown.
pub(super) fn check(document: &Document) -> Vec<Violation> {
    match document.extension() {
        Some(extension) if MARKDOWN_EXTENSIONS.contains(&extension) => Vec::new(),
        _ => vec![Violation::InvalidExtension],
    }
}
