use crate::collect::{Collector, RangeRequest};
use crate::context::{self, Settings};
use crate::error::{CliError, Result};
use crate::progress::ProgressTracker;
use crate::ui;
use git::repository::{RealGitRepository, Repository};
use github::GitHubClient;
use notes::ExportFormat;

/// Creates `new_tag` at HEAD, annotated with the text release notes
pub fn execute(settings: &Settings, new_tag: &str) -> Result<()> {
    let mut progress = ProgressTracker::new(
        "Release Tag",
        &[
            "Opening git repository",
            "Collecting pull request descriptions",
            "Creating annotated tag",
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
        to_tag: None,
        new_tag: Some(new_tag),
    };
    let collected = progress.step(|| {
        runtime.block_on(collector.collect(settings.repo.as_deref(), &request))
    })?;

    let tag = progress.step(|| {
        let annotation = context::export(&collected, &settings.config, ExportFormat::Text, None)?;
        repo.create_tag(new_tag, &annotation)
            .map_err(|e| CliError::Git(e).with_context(format!("Failed to create tag {new_tag}")))
    })?;

    progress.complete();
    ui::success_message(&format!("Created tag {} at {}", tag.name, tag.commit));
    Ok(())
}
