use crate::collect::{Collector, RangeRequest};
use crate::context::{self, Settings};
use crate::error::{CliError, Result};
use crate::progress::ProgressTracker;
use crate::ui;
use git::repository::{RealGitRepository, Repository};
use github::{GitHubApi, GitHubClient};
use notes::ExportFormat;

/// Replaces the body of the GitHub release for `release_tag` with the
/// Markdown release notes
pub fn execute(settings: &Settings, release_tag: &str) -> Result<()> {
    let mut progress = ProgressTracker::new(
        "GitHub Release",
        &[
            "Opening git repository",
            "Collecting pull request descriptions",
            "Updating GitHub release",
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
        to_tag: Some(release_tag),
        new_tag: None,
    };
    let collected = progress.step(|| {
        runtime.block_on(collector.collect(settings.repo.as_deref(), &request))
    })?;

    let updated = progress.step(|| {
        let markdown =
            context::export(&collected, &settings.config, ExportFormat::Markdown, None)?;
        runtime.block_on(publish(&github, &collected.repository, release_tag, &markdown))
    })?;

    progress.complete();
    if updated {
        ui::success_message(&format!("Updated release notes of {}", release_tag));
    } else {
        ui::warning_message(&format!(
            "No GitHub release found for tag {}; release notes were not published",
            release_tag
        ));
    }
    Ok(())
}

/// Returns `false` when the tag has no release to update
async fn publish<G: GitHubApi>(github: &G, repository: &str, tag: &str, body: &str) -> Result<bool> {
    match github.release_by_tag(repository, tag).await? {
        Some(release) => {
            github.update_release_body(repository, release.id, body).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}
