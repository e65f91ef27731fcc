//! Git operations for acquiring rdma-core sources
//!
//! This module handles:
//! - Cloning repositories (HTTPS and SSH)
//! - Finding the newest tag when no ref was requested
//! - Checking out a requested ref
//!
//! Clones are full, not shallow: latest-tag resolution and arbitrary ref
//! checkout both need the whole tag/ref set.

mod clone;
mod refs;
mod url;

pub use clone::clone;
pub use refs::{checkout, latest_tag};
pub use url::normalize_ssh_url_for_clone;
