//! Application-level errors

use thiserror::Error;

/// Application errors cover outline parsing, lookups and configuration.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: path starts at '{found}' but the tree is rooted at '{root}'")]
    RootMismatch {
        line: usize,
        root: String,
        found: String,
    },

    #[error("tree is {depth} levels deep, rendering stops at {limit} (max_render_depth)")]
    TooDeep { depth: usize, limit: usize },

    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
