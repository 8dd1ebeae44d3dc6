use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Document, Violation, link::strip_code_fences};

static TOP_LEVEL_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[^#\n]+").expect("valid heading pattern"));

/// The title comes from front matter, so bodies must not open with an H1.
///
/// Fenced code blocks are stripped first.
pub(super) fn check(document: &Document) -> Vec<Violation> {
    let body = strip_code_fences(document.body());

    TOP_LEVEL_HEADING
        .find_iter(&body)
        .map(|m| Violation::TopLevelHeading {
            heading: m.as_str().trim_end_matches('\r').to_string(),
        })
        .collect()
}
