//! Tag synchronization: one linear scan over remote-tracking branches.
//!
//! git-svn mirrors Subversion tags as branch-shaped refs under
//! `refs/remotes/svn/tags/`. For every such ref whose suffix does not yet
//! name a local tag, this module creates a lightweight tag pointing at the
//! mirror commit's last parent, which is the real underlying commit in the
//! synthetic merge commits git-svn produces.

use std::collections::HashSet;

use git2::Oid;

use crate::error::{GitSvnTaggerError, Result};
use crate::git::{CommitDetails, Repository};

/// Ref prefix under which git-svn mirrors Subversion tags
pub const SVN_TAG_PREFIX: &str = "refs/remotes/svn/tags/";

/// Parent commit selected as the tag target
#[derive(Debug, Clone, PartialEq)]
pub struct ParentInfo {
    pub id: Oid,
    pub summary: String,
}

/// What happened to one candidate tag
#[derive(Debug, Clone, PartialEq)]
pub enum TagOutcome {
    /// A tag of this name already existed; no creation was attempted
    AlreadyTagged,
    /// The tag was created at the resolved parent commit
    Created { parent: ParentInfo, tag_ref: String },
    /// Creation was attempted (or refused) and failed; the scan continued
    Failed {
        /// Resolved parent, when the failure happened after target selection
        parent: Option<ParentInfo>,
        reason: String,
    },
}

/// Report for a single matching remote branch
#[derive(Debug, Clone, PartialEq)]
pub struct BranchReport {
    pub refname: String,
    pub commit_id: Oid,
    pub summary: String,
    pub tag_name: String,
    pub outcome: TagOutcome,
}

/// Result of a full scan: per-branch reports plus the created-tags log
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    /// One entry per matching branch, in enumeration order
    pub branches: Vec<BranchReport>,
    /// Names of tags created this run, in creation order
    pub created: Vec<String>,
}

/// Scan remote-tracking branches and materialize missing svn tag mirrors.
///
/// Takes a snapshot of existing tag names up front, then walks every
/// remote-tracking branch under [SVN_TAG_PREFIX] once. Branches whose suffix
/// already names a tag are reported and skipped. For the rest, a lightweight
/// tag is created at the mirror commit's last parent.
///
/// Tag-creation failures and zero-parent mirror commits are absorbed into the
/// branch's [TagOutcome]; errors from tag or branch enumeration and from
/// resolving a branch's own commit propagate and abort the scan.
pub fn sync_tags<R: Repository>(repo: &R) -> Result<SyncReport> {
    let existing: HashSet<String> = repo.tag_names()?.into_iter().collect();

    let mut branches = Vec::new();
    let mut created = Vec::new();

    for branch in repo.remote_branches()? {
        let tag_name = match branch.refname.strip_prefix(SVN_TAG_PREFIX) {
            Some(suffix) => suffix.to_string(),
            None => continue,
        };

        let commit = repo.find_commit(branch.target)?;

        let outcome = if existing.contains(&tag_name) {
            TagOutcome::AlreadyTagged
        } else {
            let outcome = create_mirror_tag(repo, &tag_name, &commit);
            if let TagOutcome::Created { .. } = outcome {
                created.push(tag_name.clone());
            }
            outcome
        };

        branches.push(BranchReport {
            refname: branch.refname,
            commit_id: commit.id,
            summary: commit.summary,
            tag_name,
            outcome,
        });
    }

    Ok(SyncReport { branches, created })
}

/// Resolve the tag target for one mirror commit and attempt creation.
///
/// The last parent is the real commit underneath the synthetic mirror commit;
/// a single parent is the normal non-merge case. A mirror commit with no
/// parents is malformed and must not produce a tag.
fn create_mirror_tag<R: Repository>(
    repo: &R,
    tag_name: &str,
    commit: &CommitDetails,
) -> TagOutcome {
    let parent_id = match commit.parents.last() {
        Some(&oid) => oid,
        None => {
            return TagOutcome::Failed {
                parent: None,
                reason: GitSvnTaggerError::mirror(format!(
                    "commit {} has no parents, refusing to tag",
                    commit.id
                ))
                .to_string(),
            }
        }
    };

    let parent = match repo.find_commit(parent_id) {
        Ok(details) => ParentInfo {
            id: details.id,
            summary: details.summary,
        },
        Err(e) => {
            return TagOutcome::Failed {
                parent: None,
                reason: e.to_string(),
            }
        }
    };

    match repo.create_lightweight_tag(tag_name, parent_id) {
        Ok(tag_ref) => TagOutcome::Created { parent, tag_ref },
        Err(e) => TagOutcome::Failed {
            parent: Some(parent),
            reason: e.to_string(),
        },
    }
}
