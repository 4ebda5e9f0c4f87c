//! Release notes extracted from pull request descriptions.
//!
//! Bodies are parsed into a [`ReleaseNotes`] collection keyed by the `###`
//! headings of the pull request template, then exported as text, HTML or
//! Markdown.

pub mod config;
pub mod error;
pub mod formatter;
pub mod front_matter;
pub mod parser;
pub mod sanitizer;
pub mod types;
pub mod utils;
pub mod wrap;

pub use config::NotesConfig;
pub use error::NotesError;
pub use formatter::{ExportFormat, ExportOptions, NotesFormatter};
pub use front_matter::FrontMatter;
pub use parser::parse_body;
pub use sanitizer::sanitize_line;
pub use types::{Category, Reference, ReleaseNotes, Result};
pub use utils::{DEPENDENCY_UPDATES, GENERAL_UPDATES, WRAP_WIDTH};
pub use wrap::{wrap_line, wrap_line_at};
