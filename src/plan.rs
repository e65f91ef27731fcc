//! Install request and resolved plan types
//!
//! An [`InstallRequest`] captures the possibly-partial user input (source
//! reference, git ref, target architecture and OS family). The resolver turns
//! it into a [`ResolvedPlan`] where every field is concrete.

use std::fmt;

use serde::Deserialize;

/// Tarball sources must carry this suffix.
pub const TARBALL_SUFFIX: &str = ".tar.gz";

/// Git sources must carry this suffix.
pub const GIT_SUFFIX: &str = ".git";

/// Target CPU architecture for the build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InstallArch {
    #[value(name = "x86_64")]
    X86_64,
    #[value(name = "i386")]
    I386,
}

impl fmt::Display for InstallArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallArch::X86_64 => write!(f, "x86_64"),
            InstallArch::I386 => write!(f, "i386"),
        }
    }
}

/// Target OS family
///
/// Closed enum: adding a family means adding matrix entries and a package
/// manager invocation, not new conditionals scattered across the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Debian,
    Fedora,
    Suse,
    Other,
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Debian => write!(f, "debian"),
            OsFamily::Fedora => write!(f, "fedora"),
            OsFamily::Suse => write!(f, "suse"),
            OsFamily::Other => write!(f, "other"),
        }
    }
}

/// How the sources (or binaries) are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionMode {
    /// Prebuilt distro packages via the OS package manager
    PackageManager,
    /// Clone a git repository and check out a ref
    GitClone,
    /// Download and extract a released tarball
    TarballDownload,
}

impl fmt::Display for AcquisitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquisitionMode::PackageManager => write!(f, "package-manager"),
            AcquisitionMode::GitClone => write!(f, "git-clone"),
            AcquisitionMode::TarballDownload => write!(f, "tarball-download"),
        }
    }
}

/// Git ref of a resolved plan
///
/// `LatestTag` defers tag lookup to acquisition time: the actual tag value is
/// not knowable until the repository is cloned, so resolution stays pure and
/// the sentinel is replaced with a real tag during `acquire`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// No ref applies (tarballs are not ref-addressable)
    None,
    /// Check out exactly this branch, tag, or SHA
    Exact(String),
    /// Check out the newest tag, resolved after cloning
    LatestTag,
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::None => write!(f, ""),
            SourceRef::Exact(r) => write!(f, "{r}"),
            SourceRef::LatestTag => write!(f, "<latest tag>"),
        }
    }
}

/// User input for one install attempt, immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// Tarball URL, git URL, or absent
    pub source: Option<String>,
    /// Git ref (branch, tag, or SHA), or absent
    pub git_ref: Option<String>,
    pub arch: InstallArch,
    pub os: OsFamily,
}

impl InstallRequest {
    /// Create a request, treating empty or whitespace-only strings as absent
    pub fn new(
        source: Option<String>,
        git_ref: Option<String>,
        arch: InstallArch,
        os: OsFamily,
    ) -> Self {
        Self {
            source: source.filter(|s| !s.trim().is_empty()),
            git_ref: git_ref.filter(|s| !s.trim().is_empty()),
            arch,
            os,
        }
    }
}

/// Complete, unambiguous acquisition and build plan
///
/// Total over valid requests: every field is concrete once `resolve` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlan {
    pub mode: AcquisitionMode,
    /// Concrete source URL, never empty
    pub source: String,
    /// Concrete ref, or the deferred latest-tag sentinel; `None` for tarballs
    pub git_ref: SourceRef,
    /// Build dependencies for the target architecture and OS family
    pub packages: &'static [&'static str],
    /// Configure invocation for the target architecture, run as one shell line
    pub configure: &'static str,
}
