//! GitHub REST API access used while collecting release notes.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_API_URL, GitHubApi, GitHubClient};
pub use error::{GitHubError, Result};
pub use types::{PullRequest, Release};
