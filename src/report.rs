//! Aggregating and rendering lint results
//!
//! A [`Report`] keeps only the files with violations, in discovery order.
//! It renders as a human-readable text report, as JSON, or as a one-line
//! summary.

use std::fmt::Write as _;

use serde_json::json;

use crate::domain::FileReport;

/// Styles applied to parts of the text report.
///
/// The default methods leave text unstyled.
pub trait Palette {
    /// Styles a file path.
    fn path(&self, text: &str) -> String {
        text.to_string()
    }

    /// Styles offending text, such as a broken link.
    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    /// Styles a suggested fix.
    fn hint(&self, text: &str) -> String {
        text.to_string()
    }

    /// Styles the all-clear message.
    fn success(&self, text: &str) -> String {
        text.to_string()
    }
}

/// A palette that leaves text unstyled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Palette for Plain {}

/// The outcome of linting a documentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    files_scanned: usize,
    files: Vec<FileReport>,
}

impl Report {
    /// Builds a report from every file's result, in discovery order.
    ///
    /// Files without violations are dropped.
    #[must_use]
    pub fn new(reports: Vec<FileReport>) -> Self {
        let files_scanned = reports.len();
        let files = reports.into_iter().filter(|r| !r.is_clean()).collect();
        Self {
            files_scanned,
            files,
        }
    }

    /// The number of files that were checked, including clean ones.
    #[must_use]
    pub const fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    /// The files with at least one violation, in discovery order.
    #[must_use]
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    /// The total number of violations across all files.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|f| f.violations().len()).sum()
    }

    /// Whether no file has a violation.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.files.is_empty()
    }

    /// Renders one block per offending file, or a single confirmation line
    /// if the tree is clean.
    #[must_use]
    pub fn render_text(&self, palette: &impl Palette) -> String {
        if self.is_clean() {
            return format!("{}\n", palette.success("✅ There are no issues! 🎉🎉"));
        }

        let mut out = String::new();
        for file in &self.files {
            let _ = writeln!(out, "📄 {}", palette.path(&format!("/{}", file.path())));
            for violation in file.violations() {
                let message = violation.render(|s| palette.error(s), |s| palette.hint(s));
                let _ = writeln!(out, "    💥 {message}");
            }
            out.push('\n');
        }
        out
    }

    /// Renders the report as a JSON value.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let files: Vec<_> = self
            .files
            .iter()
            .map(|file| {
                let violations: Vec<_> = file
                    .violations()
                    .iter()
                    .map(|violation| {
                        json!({
                            "rule": violation.rule(),
                            "message": violation.to_string(),
                        })
                    })
                    .collect();
                json!({
                    "path": file.path(),
                    "violations": violations,
                })
            })
            .collect();

        json!({
            "status": if self.is_clean() { "clean" } else { "violations_found" },
            "files_scanned": self.files_scanned,
            "violations": self.violation_count(),
            "files": files,
        })
    }

    /// Renders a single
    /// `files_scanned=<n> files_with_violations=<n> violations=<n>` line.
    #[must_use]
    pub fn render_summary(&self) -> String {
        format!(
            "files_scanned={} files_with_violations={} violations={}",
            self.files_scanned,
            self.files.len(),
            self.violation_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Violation;

    fn sample() -> Report {
        Report::new(vec![
            FileReport::clean("a.md".to_string()),
            FileReport::new(
                "guides/B.md".to_string(),
                vec![
                    Violation::UpperCasePath,
                    Violation::LinkNotFound {
                        link: "setup".to_string(),
                        root_marker: "/docs/".to_string(),
                    },
                ],
            ),
            FileReport::new("c.txt".to_string(), vec![Violation::InvalidExtension]),
        ])
    }

    struct Brackets;

    impl Palette for Brackets {
        fn error(&self, text: &str) -> String {
            format!("[{text}]")
        }
    }

    #[test]
    fn drops_clean_files_and_keeps_order() {
        let report = sample();

        assert_eq!(report.files_scanned(), 3);
        let paths: Vec<_> = report.files().iter().map(FileReport::path).collect();
        assert_eq!(paths, vec!["guides/B.md", "c.txt"]);
        assert_eq!(report.violation_count(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn renders_one_block_per_file() {
        let expected = "📄 /guides/B.md\n\
            \x20   💥 Files and folders must be lower-case and words must be separated with a dash (-).\n\
            \x20   💥 Linked doc ID \"setup\" doesn't exist. Fix relative path or alternatively prepend with /docs/ to make the link absolute.\n\
            \n\
            📄 /c.txt\n\
            \x20   💥 File extension must be .md or .mdx.\n\
            \n";

        assert_eq!(sample().render_text(&Plain), expected);
    }

    #[test]
    fn palette_styles_offending_text() {
        let rendered = sample().render_text(&Brackets);

        assert!(rendered.contains("Linked doc ID \"[setup]\""));
    }

    #[test]
    fn clean_report_renders_confirmation() {
        let report = Report::new(vec![FileReport::clean("a.md".to_string())]);

        assert!(report.is_clean());
        assert_eq!(report.render_text(&Plain), "✅ There are no issues! 🎉🎉\n");
        assert_eq!(
            report.render_summary(),
            "files_scanned=1 files_with_violations=0 violations=0"
        );
    }

    #[test]
    fn json_lists_rules_and_messages() {
        let json = sample().to_json();

        assert_eq!(json["status"], "violations_found");
        assert_eq!(json["files_scanned"], 3);
        assert_eq!(json["violations"], 3);
        assert_eq!(json["files"][0]["path"], "guides/B.md");
        assert_eq!(json["files"][0]["violations"][0]["rule"], "case");
        assert_eq!(json["files"][0]["violations"][1]["rule"], "links");
        assert_eq!(json["files"][1]["violations"][0]["rule"], "extension");
        assert_eq!(
            json["files"][1]["violations"][0]["message"],
            "File extension must be .md or .mdx."
        );
    }

    #[test]
    fn summary_counts_files_and_violations() {
        assert_eq!(
            sample().render_summary(),
            "files_scanned=3 files_with_violations=2 violations=3"
        );
    }
}
