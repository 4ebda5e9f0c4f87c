pub mod error;
pub mod remote;
pub mod repository;
pub mod tag;

pub use error::{GitError, Result};
pub use repository::{CommitInfo, RealGitRepository, Repository};
pub use tag::TagRef;
