use thiserror::Error;

/// Result type alias for GitHub operations
pub type Result<T> = std::result::Result<T, GitHubError>;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("GitHub returned {status} for {url}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Invalid repository identifier '{0}', expected \"owner/repo\"")]
    InvalidRepository(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<GitHubError>),
}

impl GitHubError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Http(err) => format!("GitHub request failed: {err}"),
            Self::Decode(err) => format!("Unexpected GitHub response: {err}"),
            Self::Status {
                status, message, ..
            } if *status == 401 || *status == 403 => {
                format!("GitHub denied access ({status}): {message}. Check --github-access-token")
            }
            Self::Status {
                status, url, message,
            } => format!("GitHub returned {status} for {url}: {message}"),
            Self::InvalidRepository(repo) => {
                format!("Invalid repository '{repo}', expected \"owner/repo\"")
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
