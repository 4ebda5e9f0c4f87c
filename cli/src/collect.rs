use crate::error::{Result, ResultExt};
use crate::ui;
use git::remote::github_slug;
use git::tag::{find_tag, latest_tag_before, tag_at};
use git::{GitError, Repository, TagRef};
use github::GitHubApi;
use notes::{FrontMatter, Reference, ReleaseNotes};
use std::collections::HashSet;

/// Commits between two points of history, named by tag where possible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRange {
    pub start: TagRef,
    pub stop_tag: Option<String>,
    pub stop_commit: String,
}

impl ReleaseRange {
    /// Stop tag, or the stop commit when no tag names it
    pub fn stop_ref(&self) -> &str {
        self.stop_tag.as_deref().unwrap_or(&self.stop_commit)
    }
}

/// Where the range ends and how its tags are looked up
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeRequest<'a> {
    pub from_tag: Option<&'a str>,
    pub to_tag: Option<&'a str>,
    /// Tag about to be created at HEAD, used as the stop tag name
    pub new_tag: Option<&'a str>,
}

/// Everything a command needs to export release notes
#[derive(Debug)]
pub struct CollectedNotes {
    pub repository: String,
    pub range: ReleaseRange,
    pub notes: ReleaseNotes,
    pub front_matter: FrontMatter,
}

/// Gathers pull request descriptions from git history and GitHub
pub struct Collector<'a, R, G> {
    repo: &'a R,
    github: &'a G,
    verbose: bool,
}

impl<'a, R: Repository, G: GitHubApi> Collector<'a, R, G> {
    pub fn new(repo: &'a R, github: &'a G, verbose: bool) -> Self {
        Self {
            repo,
            github,
            verbose,
        }
    }

    /// Uses `explicit` when given, otherwise the GitHub remote tracked by the
    /// current branch
    pub fn resolve_repository(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(repo) = explicit {
            return Ok(repo.to_string());
        }

        let url = self.repo.tracking_remote_url()?;
        github_slug(&url).ok_or_else(|| GitError::InvalidRemoteUrl(url).into())
    }

    pub fn resolve_range(&self, request: &RangeRequest<'_>) -> Result<ReleaseRange> {
        let tags = self.repo.tags()?;

        let (stop_tag, stop_commit) = match request.to_tag {
            Some(to_tag) => {
                let tag = find_tag(&tags, to_tag)
                    .ok_or_else(|| GitError::TagNotFound(to_tag.to_string()))?;
                (Some(tag.name.clone()), tag.commit.clone())
            }
            None => {
                let head = self.repo.head_commit()?;
                let stop_tag = match request.new_tag {
                    Some(new_tag) => Some(new_tag.to_string()),
                    None => tag_at(&tags, &head).map(|tag| tag.name.clone()),
                };
                (stop_tag, head)
            }
        };

        let start = match request.from_tag {
            Some(from_tag) => find_tag(&tags, from_tag)
                .ok_or_else(|| GitError::TagNotFound(from_tag.to_string()))?,
            None => latest_tag_before(&tags, stop_tag.as_deref()).ok_or(GitError::NoTags)?,
        }
        .clone();

        Ok(ReleaseRange {
            start,
            stop_tag,
            stop_commit,
        })
    }

    /// Bodies of the pull requests merged in `range`, each once, in commit
    /// order. Commits without a pull request contribute their own message.
    pub async fn gather_bodies(
        &self,
        repository: &str,
        range: &ReleaseRange,
    ) -> Result<Vec<(Reference, Option<String>)>> {
        let commits = self
            .repo
            .commits_between(&range.start.commit, &range.stop_commit)
            .with_context(|| {
                format!("Failed to list commits between {} and {}", range.start.name, range.stop_ref())
            })?;

        let mut seen = HashSet::new();
        let mut bodies = Vec::new();
        for commit in commits {
            let pulls = self
                .github
                .pull_requests_for_commit(repository, &commit.sha)
                .await?;

            if pulls.is_empty() {
                ui::verbose_message(self.verbose, &format!("Commit {}: no PR", commit.sha));
                bodies.push((Reference::commit(&commit.sha), Some(commit.message)));
                continue;
            }

            let numbers: Vec<String> = pulls.iter().map(|pr| pr.number.to_string()).collect();
            ui::verbose_message(
                self.verbose,
                &format!("Commit {}: #{}", commit.sha, numbers.join(", #")),
            );
            for pr in pulls {
                if seen.insert(pr.number) {
                    bodies.push((Reference::PullRequest(pr.number), pr.body));
                }
            }
        }

        Ok(bodies)
    }

    /// Runs the whole collection: repository, range, bodies, then notes
    pub async fn collect(
        &self,
        explicit_repo: Option<&str>,
        request: &RangeRequest<'_>,
    ) -> Result<CollectedNotes> {
        let repository = self.resolve_repository(explicit_repo)?;
        ui::info_message(&format!("GitHub Repository: {repository}"));

        let range = self
            .resolve_range(request)
            .map_err(|e| e.with_context("Failed to resolve release range"))?;
        ui::info_message(&format!(
            "Generate changelog up to commit: {}",
            range.stop_commit
        ));
        ui::info_message(&format!(
            "Generate changelog starting from: {} ({})",
            range.start.name, range.start.commit
        ));

        let bodies = self.gather_bodies(&repository, &range).await?;
        if bodies.is_empty() {
            ui::warning_message("No commits found in the release range");
        }

        let notes = ReleaseNotes::from_bodies(bodies);
        if !notes.has_rendered_entries() {
            ui::warning_message("No categorized release notes found in the collected descriptions");
        }
        let front_matter = FrontMatter::new(&repository, &range.start.name, range.stop_ref());

        Ok(CollectedNotes {
            repository,
            range,
            notes,
            front_matter,
        })
    }
}
