use thiserror::Error;

/// Unified error type for git-svn-tagger operations
#[derive(Error, Debug)]
pub enum GitSvnTaggerError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid working tree: {0}")]
    WorkTree(String),

    #[error("Commit lookup failed: {0}")]
    Commit(String),

    #[error("Malformed mirror commit: {0}")]
    Mirror(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-svn-tagger
pub type Result<T> = std::result::Result<T, GitSvnTaggerError>;

impl GitSvnTaggerError {
    /// Create a working-tree validation error with context
    pub fn work_tree(msg: impl Into<String>) -> Self {
        GitSvnTaggerError::WorkTree(msg.into())
    }

    /// Create a commit lookup error with context
    pub fn commit(msg: impl Into<String>) -> Self {
        GitSvnTaggerError::Commit(msg.into())
    }

    /// Create a malformed-mirror error with context
    pub fn mirror(msg: impl Into<String>) -> Self {
        GitSvnTaggerError::Mirror(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        GitSvnTaggerError::Tag(msg.into())
    }
}
