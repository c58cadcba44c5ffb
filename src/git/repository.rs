use crate::error::Result;
use crate::git::{CommitDetails, RemoteBranch, Repository};
use git2::{BranchType, Oid, Repository as Git2Repo, RepositoryOpenFlags};
use std::ffi::OsStr;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository containing the given working tree.
    ///
    /// Standard git environment overrides (`GIT_DIR`, `GIT_CEILING_DIRECTORIES`,
    /// and friends) are honored by the underlying library and passed through
    /// unchanged; this tool never interprets them itself.
    ///
    /// # Returns
    /// * `Ok(Git2Repository)` - Successfully opened repository wrapper
    /// * `Err` - If the path is not inside a git repository
    pub fn open<P: AsRef<Path>>(work_tree: P) -> Result<Self> {
        let repo = Git2Repo::open_ext(
            work_tree,
            RepositoryOpenFlags::FROM_ENV,
            std::iter::empty::<&OsStr>(),
        )?;
        Ok(Git2Repository { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl Repository for Git2Repository {
    fn tag_names(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;
        Ok(names.iter().flatten().map(str::to_string).collect())
    }

    fn remote_branches(&self) -> Result<Vec<RemoteBranch>> {
        let mut branches = Vec::new();

        for entry in self.repo.branches(Some(BranchType::Remote))? {
            let (branch, _) = entry?;
            let reference = branch.get();

            // Symbolic refs (e.g. origin/HEAD) and non-UTF-8 names carry no
            // usable target for tagging.
            let (refname, target) = match (reference.name(), reference.target()) {
                (Some(name), Some(oid)) => (name.to_string(), oid),
                _ => continue,
            };

            branches.push(RemoteBranch { refname, target });
        }

        Ok(branches)
    }

    fn find_commit(&self, oid: Oid) -> Result<CommitDetails> {
        let commit = self.repo.find_commit(oid)?;

        Ok(CommitDetails {
            id: commit.id(),
            summary: commit.summary().unwrap_or("(empty message)").to_string(),
            parents: commit.parent_ids().collect(),
        })
    }

    fn create_lightweight_tag(&self, name: &str, target: Oid) -> Result<String> {
        let object = self.repo.find_object(target, None)?;
        self.repo.tag_lightweight(name, &object, false)?;
        Ok(format!("refs/tags/{}", name))
    }
}
