use crate::domain::{Document, Violation};

/// Front matter must define a `title`, whatever else it defines.
pub(super) fn check(document: &Document) -> Vec<Violation> {
    let has_title = document
        .front_matter()
        .is_some_and(|attributes| attributes.contains_key("title"));

    if has_title {
        Vec::new()
    } else {
        vec![Violation::MissingTitle]
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use super::*;

    #[test_case("---\ntitle: Intro\n---\nBody", 0; "title present")]
    #[test_case("---\ntitle: Intro\nsidebar_label: Start\n---\n", 0; "title among others")]
    #[test_case("---\ntitle:\n---\n", 0; "empty title")]
    #[test_case("---\nsidebar_label: Start\n---\nBody", 1; "title missing")]
    #[test_case("Body without front matter", 1; "no block")]
    #[test_case("---\ntitle: [broken\n---\n", 1; "malformed block")]
    #[test_case("Body\n---\ntitle: Late\n---\n", 1; "block not at top")]
    fn title_is_required(content: &str, expected: usize) {
        let root = Path::new("/docs");
        let doc = Document::new(root, root.join("intro.md"), content.to_string());

        let violations = check(&doc);
        assert_eq!(violations.len(), expected);
        assert!(violations.iter().all(|v| *v == Violation::MissingTitle));
    }
}
