//! Target platform handling
//!
//! This module provides:
//! - Host OS family and architecture detection
//! - Package manager invocations per OS family
//!
//! OS-family branching is a capability lookup on the closed [`OsFamily`]
//! enum; supporting a new family means extending these tables.

pub mod detection;
pub mod pm;

pub use detection::{detect_arch, detect_os};
