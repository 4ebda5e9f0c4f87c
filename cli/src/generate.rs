use crate::collect::{Collector, RangeRequest};
use crate::context::{self, Settings};
use crate::error::{CliError, Result};
use crate::progress::ProgressTracker;
use crate::ui;
use git::repository::{RealGitRepository, Repository};
use github::GitHubClient;
use notes::ExportFormat;

#[derive(Debug, Clone, Default)]
pub struct GenArgs {
    pub to_tag: Option<String>,
    pub file_name: Option<String>,
    pub text: bool,
    pub markdown: bool,
    pub html: bool,
}

impl GenArgs {
    /// Requested formats; text is the fallback when nothing else is asked for
    pub fn formats(&self) -> Vec<ExportFormat> {
        let mut formats = Vec::new();
        if self.markdown {
            formats.push(ExportFormat::Markdown);
        }
        if self.html {
            formats.push(ExportFormat::Html);
        }
        if self.text || formats.is_empty() {
            formats.push(ExportFormat::Text);
        }
        formats
    }
}

pub fn execute(settings: &Settings, args: GenArgs) -> Result<()> {
    let mut progress = ProgressTracker::new(
        "Release Notes",
        &[
            "Opening git repository",
            "Collecting pull request descriptions",
            "Exporting release notes",
        ],
    );

    let repo = progress.step(|| {
        RealGitRepository::open()
            .map_err(|e| CliError::Git(e).with_context("Failed to open git repository"))
    })?;
    let github = GitHubClient::new(settings.github_token.clone())?;
    let runtime = context::runtime()?;
    let collector = Collector::new(&repo, &github, settings.verbose);

    let request = RangeRequest {
        from_tag: settings.from_tag.as_deref(),
        to_tag: args.to_tag.as_deref(),
        new_tag: None,
    };
    let collected = progress.step(|| {
        runtime.block_on(collector.collect(settings.repo.as_deref(), &request))
    })?;
    ui::verbose_message(
        settings.verbose,
        &format!(
            "Notes cover {}..{}",
            collected.range.start.name,
            collected.range.stop_ref()
        ),
    );

    let file_name = args
        .file_name
        .clone()
        .unwrap_or_else(|| settings.config.file_name.clone());
    progress.step(|| {
        for format in args.formats() {
            let path = context::export_path(&file_name, format);
            context::export(&collected, &settings.config, format, Some(&path))?;
        }
        Ok(())
    })?;

    progress.complete();
    Ok(())
}
