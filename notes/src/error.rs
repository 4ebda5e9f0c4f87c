use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

/// Error context to enrich error messages
#[derive(Debug)]
pub struct ErrorContext {
    pub operation: String,
    pub source: Option<String>,
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation: {}", self.operation)?;
        if let Some(source) = &self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

/// Errors that can occur while building or exporting release notes
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Failed to read or write release notes file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse notes configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<NotesError>),

    #[error("{context}: {source}")]
    ContextualError {
        context: ErrorContext,
        source: Box<NotesError>,
    },
}

impl NotesError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn with_operation_context(
        self,
        operation: impl Into<String>,
        source: Option<impl Into<String>>,
    ) -> Self {
        Self::ContextualError {
            context: ErrorContext {
                operation: operation.into(),
                source: source.map(Into::into),
            },
            source: Box::new(self),
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File operation failed: {e}"),
            Self::ConfigParse(e) => format!("Invalid notes configuration: {e}"),
            Self::ConfigNotFound(path) => {
                format!("Configuration file not found: {}", path.display())
            }
            Self::InvalidConfig(msg) => format!("Invalid configuration: {msg}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            Self::ContextualError { context, source } => {
                format!("{}: {}", context, source.user_message())
            }
        }
    }
}
