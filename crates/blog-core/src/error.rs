//! Repository-level error types.

use std::fmt;

use thiserror::Error;

/// The storage operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoOperation {
    Create,
    Get,
    List,
    Update,
    Delete,
}

impl RepoOperation {
    /// Fixed message shown to clients when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            RepoOperation::Create => "failed to create blog post",
            RepoOperation::Get => "failed to get blog post",
            RepoOperation::List => "failed to get blog posts",
            RepoOperation::Update => "failed to update blog post",
            RepoOperation::Delete => "failed to delete blog post",
        }
    }
}

impl fmt::Display for RepoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Repository errors.
///
/// `Display` yields the public message only; the driver detail of
/// `OperationFailed` is kept for logging.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("blog post not found")]
    NotFound,

    #[error("{op}")]
    OperationFailed { op: RepoOperation, detail: String },
}

impl RepoError {
    pub fn failed(op: RepoOperation, detail: impl ToString) -> Self {
        RepoError::OperationFailed {
            op,
            detail: detail.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_hides_driver_detail() {
        let err = RepoError::failed(RepoOperation::List, "connection reset by peer");
        assert_eq!(err.to_string(), "failed to get blog posts");
        assert_eq!(RepoError::NotFound.to_string(), "blog post not found");
    }
}
