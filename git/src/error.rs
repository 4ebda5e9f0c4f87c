use thiserror::Error;

/// Git operation error type that provides detailed context about the error
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git2 error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("No tags found in repository")]
    NoTags,

    #[error("Remote not found: {0}")]
    RemoteNotFound(String),

    #[error("Not a GitHub remote URL: {0}")]
    InvalidRemoteUrl(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Other error: {0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<GitError>),
}

impl GitError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        GitError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            GitError::Git2Error(e) => {
                let msg = format!("{}", e);
                // Extract just the message without the class and code details
                msg.split(';').next().map_or_else(
                    || format!("Git error: {}", msg),
                    |main_msg| format!("Git error: {}", main_msg.trim()),
                )
            }
            GitError::TagNotFound(tag) => format!("Cannot find tag: {}", tag),
            GitError::NoTags => {
                "There is no tag found in this repository, please specify --from-tag manually"
                    .to_string()
            }
            GitError::RemoteNotFound(msg) => {
                format!("No remote URL found ({}), please specify --repo manually", msg)
            }
            GitError::InvalidRemoteUrl(url) => {
                format!("Remote '{}' is not a GitHub repository, please specify --repo", url)
            }
            GitError::RepositoryError(msg) => format!("Repository error: {}", msg),
            GitError::Other(msg) => msg.clone(),
            GitError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GitError>;

/// Helper trait for adding context to results
pub trait ResultExt<T, E> {
    /// Add context to an error result with a string or string-producing closure
    fn with_context<C, F>(self, context: F) -> std::result::Result<T, GitError>
    where
        C: Into<String>,
        F: FnOnce() -> C;

    /// Add context directly from a string
    fn context<C: Into<String>>(self, context: C) -> std::result::Result<T, GitError>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<GitError>,
{
    fn with_context<C, F>(self, context: F) -> std::result::Result<T, GitError>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let git_err: GitError = err.into();
            git_err.with_context(context())
        })
    }

    fn context<C: Into<String>>(self, context: C) -> std::result::Result<T, GitError> {
        self.map_err(|err| {
            let git_err: GitError = err.into();
            git_err.with_context(context)
        })
    }
}
