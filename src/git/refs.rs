//! Tag and ref handling for cloned repositories

use git2::Repository;

use crate::error::{RdmupError, Result};

/// Name of the newest tag in the repository, by committer time
///
/// Resolves the latest-tag sentinel after cloning. A repository with no tags
/// is an acquisition failure, since a tag was required.
pub fn latest_tag(repo: &Repository, url: &str) -> Result<String> {
    let names = repo
        .tag_names(None)
        .map_err(|e| RdmupError::acquisition(url, e.message()))?;

    let mut newest: Option<(i64, String)> = None;
    for name in names.iter().flatten() {
        let Ok(reference) = repo.find_reference(&format!("refs/tags/{name}")) else {
            continue;
        };
        let Ok(commit) = reference.peel_to_commit() else {
            continue;
        };
        let time = commit.time().seconds();
        if newest.as_ref().is_none_or(|(t, _)| time > *t) {
            newest = Some((time, name.to_string()));
        }
    }

    newest
        .map(|(_, name)| name)
        .ok_or_else(|| RdmupError::acquisition(url, "repository has no tags"))
}

/// Check out a ref (branch, tag, or SHA) as a detached HEAD
pub fn checkout(repo: &Repository, refname: &str, url: &str) -> Result<()> {
    let commit = resolve_reference(repo, refname, url)?;

    repo.set_head_detached(commit.id())
        .map_err(|e| RdmupError::acquisition(url, e.message()))?;

    let mut checkout_builder = git2::build::CheckoutBuilder::new();
    checkout_builder.force();
    repo.checkout_head(Some(&mut checkout_builder))
        .map_err(|e| RdmupError::acquisition(url, e.message()))?;

    Ok(())
}

/// Resolve a ref name to a commit, trying tag, branch, and remote forms
fn resolve_reference<'a>(
    repo: &'a Repository,
    refname: &str,
    url: &str,
) -> Result<git2::Commit<'a>> {
    let ref_candidates = [
        refname.to_string(),
        format!("refs/tags/{refname}"),
        format!("refs/heads/{refname}"),
        format!("refs/remotes/origin/{refname}"),
    ];

    for candidate in &ref_candidates {
        if let Ok(reference) = repo.find_reference(candidate) {
            if let Ok(commit) = reference.peel_to_commit() {
                return Ok(commit);
            }
        }
    }

    if let Ok(oid) = git2::Oid::from_str(refname) {
        if let Ok(commit) = repo.find_commit(oid) {
            return Ok(commit);
        }
    }

    if let Ok(obj) = repo.revparse_single(refname) {
        if let Ok(commit) = obj.peel_to_commit() {
            return Ok(commit);
        }
    }

    Err(RdmupError::acquisition(
        url,
        format!("ref '{refname}' does not exist"),
    ))
}
