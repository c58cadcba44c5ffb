use crate::error::{GitSvnTaggerError, Result};
use crate::git::{CommitDetails, RemoteBranch, Repository};
use git2::Oid;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    branches: Vec<RemoteBranch>,
    commits: HashMap<Oid, CommitDetails>,
    tags: RefCell<Vec<String>>,
    rejected_tags: HashSet<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            branches: Vec::new(),
            commits: HashMap::new(),
            tags: RefCell::new(Vec::new()),
            rejected_tags: HashSet::new(),
        }
    }

    /// Add a remote-tracking branch reference
    pub fn add_branch(&mut self, refname: impl Into<String>, target: Oid) {
        self.branches.push(RemoteBranch {
            refname: refname.into(),
            target,
        });
    }

    /// Add a commit with a summary and parent list
    pub fn add_commit(&mut self, oid: Oid, summary: impl Into<String>, parents: Vec<Oid>) {
        self.commits.insert(
            oid,
            CommitDetails {
                id: oid,
                summary: summary.into(),
                parents,
            },
        );
    }

    /// Add a pre-existing tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.borrow_mut().push(name.into());
    }

    /// Make creation of the named tag fail, simulating a ref-write error
    pub fn reject_tag(&mut self, name: impl Into<String>) {
        self.rejected_tags.insert(name.into());
    }

    /// All tag names currently known to the mock, creation order
    pub fn all_tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn tag_names(&self) -> Result<Vec<String>> {
        Ok(self.tags.borrow().clone())
    }

    fn remote_branches(&self) -> Result<Vec<RemoteBranch>> {
        Ok(self.branches.clone())
    }

    fn find_commit(&self, oid: Oid) -> Result<CommitDetails> {
        self.commits
            .get(&oid)
            .cloned()
            .ok_or_else(|| GitSvnTaggerError::commit(format!("no such commit: {}", oid)))
    }

    fn create_lightweight_tag(&self, name: &str, _target: Oid) -> Result<String> {
        if self.rejected_tags.contains(name) {
            return Err(GitSvnTaggerError::tag(format!(
                "cannot lock ref 'refs/tags/{}'",
                name
            )));
        }
        if self.tags.borrow().iter().any(|t| t == name) {
            return Err(GitSvnTaggerError::tag(format!(
                "tag '{}' already exists",
                name
            )));
        }
        self.tags.borrow_mut().push(name.to_string());
        Ok(format!("refs/tags/{}", name))
    }
}
