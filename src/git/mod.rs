//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of git
//! operations the tag synchronizer needs, allowing for a real implementation
//! backed by the `git2` crate and a mock implementation for testing.
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// A remote-tracking branch reference and the commit it points at
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteBranch {
    /// Full reference name, e.g. `refs/remotes/svn/tags/release-1.0`
    pub refname: String,
    /// Object ID of the commit the reference points at
    pub target: Oid,
}

/// Commit metadata needed for tag mirroring
#[derive(Debug, Clone, PartialEq)]
pub struct CommitDetails {
    /// The commit's object ID
    pub id: Oid,
    /// First line of the commit message
    pub summary: String,
    /// Parent commit IDs, in commit order
    pub parents: Vec<Oid>,
}

/// Common git operation trait for abstraction
///
/// Abstracts the read and write operations the synchronizer performs so the
/// scan logic can be exercised without a real repository.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): In-memory implementation for tests
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// Used as the "already mirrored" membership snapshot at the start of a
    /// scan. Handles both lightweight and annotated tags.
    fn tag_names(&self) -> Result<Vec<String>>;

    /// Get all remote-tracking branch references
    ///
    /// Returns branches in the order the underlying storage enumerates them.
    /// References without a direct target (symbolic refs) or with non-UTF-8
    /// names are skipped.
    fn remote_branches(&self) -> Result<Vec<RemoteBranch>>;

    /// Look up a commit's summary line and parent list
    ///
    /// # Arguments
    /// * `oid` - Object ID of the commit
    ///
    /// # Returns
    /// * `Ok(CommitDetails)` - The commit's id, summary, and parent IDs
    /// * `Err` - If the object doesn't exist or is not a commit
    fn find_commit(&self, oid: Oid) -> Result<CommitDetails>;

    /// Create a lightweight tag pointing at `target`
    ///
    /// Never overwrites an existing tag.
    ///
    /// # Arguments
    /// * `name` - Name for the new tag (without the `refs/tags/` prefix)
    /// * `target` - Object ID of the commit to tag
    ///
    /// # Returns
    /// * `Ok(String)` - Full name of the created reference (`refs/tags/<name>`)
    /// * `Err` - If the tag already exists, the target doesn't exist, or a
    ///   git error occurs
    fn create_lightweight_tag(&self, name: &str, target: Oid) -> Result<String>;
}
