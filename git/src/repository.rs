use std::path::Path;

use crate::error::{GitError, Result, ResultExt};
use crate::tag::TagRef;
use git2::{ObjectType, Oid, Repository as GitRepository, Sort};

/// A commit in the range release notes are collected for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
}

pub trait Repository {
    fn open() -> Result<Self>
    where
        Self: Sized;
    fn open_at(path: &Path) -> Result<Self>
    where
        Self: Sized;
    fn tags(&self) -> Result<Vec<TagRef>>;
    fn head_commit(&self) -> Result<String>;
    fn commits_between(&self, start: &str, stop: &str) -> Result<Vec<CommitInfo>>;
    fn tracking_remote_url(&self) -> Result<String>;
    fn create_tag(&self, name: &str, message: &str) -> Result<TagRef>;
}

pub struct RealGitRepository {
    repo: GitRepository,
}

impl RealGitRepository {
    fn parse_oid(sha: &str) -> Result<Oid> {
        Oid::from_str(sha).with_context(|| format!("Invalid commit id '{}'", sha))
    }
}

impl Repository for RealGitRepository {
    fn open() -> Result<Self> {
        Self::open_at(Path::new("."))
    }

    fn open_at(path: &Path) -> Result<Self> {
        let repo = GitRepository::discover(path).map_err(|e| {
            GitError::RepositoryError(format!("Failed to discover git repository: {}", e))
        })?;
        Ok(Self { repo })
    }

    fn tags(&self) -> Result<Vec<TagRef>> {
        let repo = &self.repo;
        let names = repo.tag_names(None)?;

        let mut tags = Vec::with_capacity(names.len());
        for name in names.iter().flatten() {
            let commit = repo
                .revparse_single(&format!("refs/tags/{}", name))
                .and_then(|obj| obj.peel_to_commit())
                .with_context(|| format!("Failed to resolve tag '{}'", name))?;
            tags.push(TagRef::new(name, commit.id().to_string()));
        }
        tags.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(tags)
    }

    fn head_commit(&self) -> Result<String> {
        let commit = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .context("Failed to resolve HEAD")?;
        Ok(commit.id().to_string())
    }

    fn commits_between(&self, start: &str, stop: &str) -> Result<Vec<CommitInfo>> {
        let repo = &self.repo;
        let start = Self::parse_oid(start)?;
        let stop = Self::parse_oid(stop)?;

        // Symmetric difference: commits reachable from either end but not both
        let mut walk = repo.revwalk()?;
        walk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        walk.push(stop)?;
        walk.push(start)?;
        if let Ok(base) = repo.merge_base(start, stop) {
            walk.hide(base)?;
        }

        let mut commits = Vec::new();
        for oid in walk {
            let commit = repo.find_commit(oid?)?;
            commits.push(CommitInfo {
                sha: commit.id().to_string(),
                message: String::from_utf8_lossy(commit.message_bytes()).to_string(),
            });
        }

        Ok(commits)
    }

    fn tracking_remote_url(&self) -> Result<String> {
        let repo = &self.repo;

        let head = repo.head()?;
        if !head.is_branch() {
            return Err(GitError::RemoteNotFound("HEAD is not a branch".to_string()));
        }
        let refname = head
            .name()
            .ok_or_else(|| GitError::RepositoryError("Invalid branch name".to_string()))?;

        let remote_name = repo.branch_upstream_remote(refname).map_err(|_| {
            GitError::RemoteNotFound(format!("branch '{}' has no upstream", refname))
        })?;
        let remote_name = remote_name
            .as_str()
            .ok_or_else(|| GitError::RemoteNotFound("remote name is not UTF-8".to_string()))?;

        let remote = repo.find_remote(remote_name)?;
        remote
            .url()
            .map(str::to_string)
            .ok_or_else(|| GitError::RemoteNotFound(format!("remote '{}' has no URL", remote_name)))
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<TagRef> {
        let repo = &self.repo;

        let signature = repo
            .signature()
            .context("Failed to read user.name/user.email from git config")?;
        let target = repo.head()?.peel(ObjectType::Commit)?;

        repo.tag(name, &target, &signature, message, false)
            .with_context(|| format!("Failed to create tag '{}'", name))?;

        Ok(TagRef::new(name, target.id().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    fn commit(repo: &GitRepository, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<_> = repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<_> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    fn fixture() -> (TempDir, GitRepository) {
        let dir = TempDir::new().unwrap();
        let repo = GitRepository::init(dir.path()).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        (dir, repo)
    }

    #[test]
    fn lists_tags_and_commit_range() {
        let (dir, repo) = fixture();
        let first = commit(&repo, "Initial commit");
        repo.tag_lightweight("1.0.0", &repo.find_object(first, None).unwrap(), false)
            .unwrap();
        commit(&repo, "Add feature");
        let third = commit(&repo, "Fix bug\n\nLonger description");

        let git = RealGitRepository::open_at(dir.path()).unwrap();
        let tags = git.tags().unwrap();
        assert_eq!(tags, vec![TagRef::new("1.0.0", first.to_string())]);
        assert_eq!(git.head_commit().unwrap(), third.to_string());

        let commits = git.commits_between(&first.to_string(), &third.to_string()).unwrap();
        let messages: Vec<_> = commits.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["Fix bug\n\nLonger description", "Add feature"]);
        assert!(git.commits_between(&third.to_string(), &third.to_string()).unwrap().is_empty());
    }

    #[test]
    fn creates_annotated_tag_at_head() {
        let (dir, repo) = fixture();
        let head = commit(&repo, "Initial commit");

        let git = RealGitRepository::open_at(dir.path()).unwrap();
        let tag = git.create_tag("2.0.0", "Release Notes\n").unwrap();
        assert_eq!(tag, TagRef::new("2.0.0", head.to_string()));

        let obj = repo.revparse_single("refs/tags/2.0.0").unwrap();
        let annotated = obj.as_tag().expect("annotated tag");
        assert_eq!(annotated.message(), Some("Release Notes\n"));
        assert_eq!(git.tags().unwrap(), vec![tag]);
    }

    #[test]
    fn missing_upstream_is_reported() {
        let (dir, repo) = fixture();
        commit(&repo, "Initial commit");

        let git = RealGitRepository::open_at(dir.path()).unwrap();
        let err = git.tracking_remote_url().unwrap_err();
        assert!(matches!(err, GitError::RemoteNotFound(_)));
    }

    #[test]
    fn invalid_commit_id_is_an_error() {
        let (dir, repo) = fixture();
        commit(&repo, "Initial commit");

        let git = RealGitRepository::open_at(dir.path()).unwrap();
        assert!(git.commits_between("not-a-sha", "also-not").is_err());
    }
}
