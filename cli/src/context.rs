use crate::collect::CollectedNotes;
use crate::error::{CliError, Result};
use crate::ui;
use notes::{ExportFormat, ExportOptions, NotesConfig};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

/// Options shared by every subcommand
#[derive(Debug, Clone)]
pub struct Settings {
    pub repo: Option<String>,
    pub from_tag: Option<String>,
    pub github_token: Option<String>,
    pub config: NotesConfig,
    pub verbose: bool,
}

/// Runtime for the GitHub calls; everything else runs synchronously
pub fn runtime() -> Result<Runtime> {
    Runtime::new().map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))
}

/// File the notes are written to for `format`, e.g. `release_notes.md`
pub fn export_path(file_name: &str, format: ExportFormat) -> PathBuf {
    PathBuf::from(format!("{}.{}", file_name, format.extension()))
}

/// Renders the collected notes, writing them to `file` when given
pub fn export(
    collected: &CollectedNotes,
    config: &NotesConfig,
    format: ExportFormat,
    file: Option<&Path>,
) -> Result<String> {
    let additional_text = collected.front_matter.to_string();
    let options = ExportOptions {
        format,
        title: &config.title,
        additional_text: &additional_text,
        wrap_width: config.wrap_width,
    };

    if let Some(path) = file {
        let full_path = std::path::absolute(path)?;
        ui::info_message(&format!(
            "Exporting release notes into file: {}",
            full_path.display()
        ));
    }

    collected
        .notes
        .export(&options, file)
        .map_err(|e| CliError::Notes(e).with_context(format!("Failed to export {:?} notes", format)))
}
