use crate::domain::{Document, Violation};

/// Paths must be lower-case, with words separated by dashes.
pub(super) fn check(document: &Document) -> Vec<Violation> {
    let path = document.relative_path();
    if path == path.to_lowercase() {
        Vec::new()
    } else {
        vec![Violation::UpperCasePath]
    }
}
