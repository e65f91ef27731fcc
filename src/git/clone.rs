//! Repository cloning

use std::path::Path;

use git2::{FetchOptions, Repository, build::RepoBuilder};

use super::url::normalize_ssh_url_for_clone;
use crate::error::{RdmupError, Result};

/// Clone a git repository into a target directory
///
/// Supports HTTPS and SSH URLs. Clone failures surface as
/// [`RdmupError::AcquisitionFailed`] carrying the offending URL.
pub fn clone(url: &str, target: &Path) -> Result<Repository> {
    let fetch_options = FetchOptions::new();

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    let url_to_clone = normalize_ssh_url_for_clone(url);
    builder
        .clone(url_to_clone.as_ref(), target)
        .map_err(|e| RdmupError::AcquisitionFailed {
            source_ref: url.to_string(),
            reason: e.message().to_string(),
        })
}
