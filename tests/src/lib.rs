//! Fixtures shared by the integration tests.

use git2::{Oid, Repository, Signature};
use std::path::Path;
use tempfile::TempDir;

/// A throwaway repository with a configured committer
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repository");
        {
            let mut config = repo.config().expect("open config");
            config.set_str("user.name", "Test User").expect("set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("set user.email");
        }
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commits the current index with `message` on top of HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").expect("signature");
        let tree_id = self
            .repo
            .index()
            .and_then(|mut index| index.write_tree())
            .expect("write tree");
        let tree = self.repo.find_tree(tree_id).expect("find tree");
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("commit")
    }

    pub fn tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).expect("find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("create tag");
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
