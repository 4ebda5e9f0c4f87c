use crate::types::{ReleaseNotes, Result};
use crate::utils::{WRAP_WIDTH, title_case};
use crate::wrap::wrap_line_at;
use std::fs;
use std::path::Path;

// --- Traits ---

pub trait NotesFormatter: Send + Sync {
    fn format(&self, notes: &ReleaseNotes, title: &str, additional_text: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Text,
    Html,
    Markdown,
}

impl ExportFormat {
    /// File extension used when exporting in this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }

    #[must_use]
    pub fn formatter(self, wrap_width: usize) -> Box<dyn NotesFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter { wrap_width }),
            Self::Html => Box::new(HtmlFormatter { wrap_width }),
            Self::Markdown => Box::new(MarkdownFormatter { wrap_width }),
        }
    }
}

/// Plain text: title-cased category names followed by `  - ` bullets
#[derive(Debug, Clone)]
pub struct TextFormatter {
    pub wrap_width: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { wrap_width: WRAP_WIDTH }
    }
}

impl NotesFormatter for TextFormatter {
    fn format(&self, notes: &ReleaseNotes, title: &str, additional_text: &str) -> String {
        let mut output = String::with_capacity(1024);
        output.push_str(title);
        output.push_str("\n\n");
        output.push_str(additional_text);
        output.push_str("\n\n");

        for category in notes.rendered_categories() {
            output.push_str(&title_case(&category.name));
            output.push('\n');
            push_bullets(&mut output, &category.entries, self.wrap_width);
            output.push('\n');
        }
        output
    }
}

/// Standalone HTML document with one `<h2>`/`<ul>` pair per category
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    pub wrap_width: usize,
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self { wrap_width: WRAP_WIDTH }
    }
}

impl NotesFormatter for HtmlFormatter {
    fn format(&self, notes: &ReleaseNotes, title: &str, additional_text: &str) -> String {
        let mut output = String::with_capacity(1024);
        output.push_str("<html>\n<head>\n</head>\n<body>\n");
        output.push_str(&format!("<h1>{title}</h1>\n"));

        output.push_str("<div>\n");
        for line in additional_text.split('\n') {
            output.push_str(&format!("<p>{line}</p>\n"));
        }
        output.push_str("</div>\n");

        for category in notes.rendered_categories() {
            output.push_str(&format!("<h2>{}</h2>\n<ul>\n", title_case(&category.name)));
            for entry in &category.entries {
                output.push_str("<li>");
                output.push_str(&wrap_line_at(entry, self.wrap_width));
                output.push_str("</li>\n");
            }
            output.push_str("</ul>\n");
        }
        output.push_str("</body></html>\n");
        output
    }
}

/// Markdown with a `#` title and a `##` heading per category
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    pub wrap_width: usize,
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self { wrap_width: WRAP_WIDTH }
    }
}

impl NotesFormatter for MarkdownFormatter {
    fn format(&self, notes: &ReleaseNotes, title: &str, additional_text: &str) -> String {
        let mut output = String::with_capacity(1024);
        output.push_str(&format!("# {title}\n\n"));
        // Single newlines would collapse into one paragraph
        output.push_str(&additional_text.replace('\n', "\n\n"));
        output.push_str("\n\n");

        for category in notes.rendered_categories() {
            output.push_str(&format!("## {}\n", title_case(&category.name)));
            push_bullets(&mut output, &category.entries, self.wrap_width);
            output.push('\n');
        }
        output
    }
}

fn push_bullets(output: &mut String, entries: &[String], wrap_width: usize) {
    for entry in entries {
        output.push_str("  - ");
        output.push_str(&wrap_line_at(entry, wrap_width));
        output.push('\n');
    }
}

/// Options for [`ReleaseNotes::export`]
#[derive(Debug, Clone)]
pub struct ExportOptions<'a> {
    pub format: ExportFormat,
    pub title: &'a str,
    pub additional_text: &'a str,
    pub wrap_width: usize,
}

impl Default for ExportOptions<'_> {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            title: "Release Notes",
            additional_text: "",
            wrap_width: WRAP_WIDTH,
        }
    }
}

impl ReleaseNotes {
    /// Renders the notes in the requested format.
    ///
    /// When `file` is given the rendered notes are also written there,
    /// replacing any existing content.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn export(&self, options: &ExportOptions<'_>, file: Option<&Path>) -> Result<String> {
        let output = options.format.formatter(options.wrap_width).format(
            self,
            options.title,
            options.additional_text,
        );

        if let Some(path) = file {
            fs::write(path, &output)?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Reference;
    use crate::utils::GENERAL_UPDATES;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_notes() -> ReleaseNotes {
        ReleaseNotes::from_bodies([(
            Reference::PullRequest(42),
            Some("### features\n- Added X\n### bugs\n- Fixed Y\n"),
        )])
    }

    fn options(format: ExportFormat) -> ExportOptions<'static> {
        ExportOptions {
            format,
            title: "Release Notes",
            additional_text: "For: acme/widgets\nGenerated: 2024-01-01\n",
            ..ExportOptions::default()
        }
    }

    #[test]
    fn markdown_export() {
        let output = sample_notes().export(&options(ExportFormat::Markdown), None).unwrap();
        assert_eq!(
            output,
            "# Release Notes\n\n\
             For: acme/widgets\n\nGenerated: 2024-01-01\n\n\n\n\
             ## Features\n  - Added X (#42)\n\n\
             ## Bugs\n  - Fixed Y (#42)\n\n"
        );
    }

    #[test]
    fn text_export() {
        let output = sample_notes().export(&options(ExportFormat::Text), None).unwrap();
        assert_eq!(
            output,
            "Release Notes\n\n\
             For: acme/widgets\nGenerated: 2024-01-01\n\n\n\
             Features\n  - Added X (#42)\n\n\
             Bugs\n  - Fixed Y (#42)\n\n"
        );
    }

    #[test]
    fn html_export() {
        let output = sample_notes().export(&options(ExportFormat::Html), None).unwrap();
        assert_eq!(
            output,
            "<html>\n<head>\n</head>\n<body>\n\
             <h1>Release Notes</h1>\n\
             <div>\n<p>For: acme/widgets</p>\n<p>Generated: 2024-01-01</p>\n<p></p>\n</div>\n\
             <h2>Features</h2>\n<ul>\n<li>Added X (#42)</li>\n</ul>\n\
             <h2>Bugs</h2>\n<ul>\n<li>Fixed Y (#42)</li>\n</ul>\n\
             </body></html>\n"
        );
    }

    #[test]
    fn general_updates_never_rendered() {
        let notes = ReleaseNotes::from_bodies([(
            Reference::PullRequest(1),
            Some("Intro paragraph\n- loose bullet\n"),
        )]);
        assert_eq!(notes.get(GENERAL_UPDATES).unwrap().len(), 2);

        for format in [ExportFormat::Text, ExportFormat::Html, ExportFormat::Markdown] {
            let output = notes.export(&options(format), None).unwrap();
            assert!(!output.contains("Intro paragraph"), "{format:?} leaked general updates");
            assert!(!output.contains("General Updates"), "{format:?} leaked general updates");
        }
    }

    #[test]
    fn long_entries_are_wrapped_under_the_bullet() {
        let body = "### changes\n- Reworked the configuration loader so that missing keys fall back to defaults instead of failing\n";
        let notes = ReleaseNotes::from_bodies([(Reference::PullRequest(5), Some(body))]);
        let output = notes.export(&options(ExportFormat::Markdown), None).unwrap();

        assert!(output.contains(
            "## Changes\n  - Reworked the configuration loader so that missing keys fall back to\n    defaults instead of failing (#5)\n\n"
        ));
    }

    #[test]
    fn export_writes_and_overwrites_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("release_notes.md");
        std::fs::write(&path, "stale content that is much longer than the new export").unwrap();

        let output = sample_notes()
            .export(&options(ExportFormat::Markdown), Some(&path))
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), output);
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("notes.txt");
        let err = sample_notes().export(&options(ExportFormat::Text), Some(&path)).unwrap_err();
        assert!(matches!(err, crate::NotesError::Io(_)));
    }

    #[test]
    fn extensions() {
        assert_eq!(ExportFormat::default(), ExportFormat::Text);
        assert_eq!(ExportFormat::Text.extension(), "txt");
        assert_eq!(ExportFormat::Html.extension(), "html");
        assert_eq!(ExportFormat::Markdown.extension(), "md");
    }
}
