//! Error types and handling for rdmup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Resolution-time errors (`InvalidSourceReference`, `UnsupportedPlatform`,
//! `UnsupportedTarget`) are raised before any command runs on the target and
//! are therefore side-effect-free. Acquisition and build errors may leave
//! partial state behind; nothing is rolled back.

use miette::Diagnostic;
use thiserror::Error;

use crate::plan::{InstallArch, OsFamily};

/// Main error type for rdmup operations
#[derive(Error, Diagnostic, Debug)]
pub enum RdmupError {
    // Resolution errors
    #[error("Invalid source reference: {reference}")]
    #[diagnostic(
        code(rdmup::resolve::invalid_source),
        help(
            "The source must be an rdma-core tarball ending in .tar.gz or a git repository URL ending in .git"
        )
    )]
    InvalidSourceReference { reference: String },

    #[error("OS family '{os}' is not supported for rdma-core installation")]
    #[diagnostic(
        code(rdmup::platform::unsupported),
        help("Supported OS families: debian, fedora, suse")
    )]
    UnsupportedPlatform { os: OsFamily },

    #[error("No build recipe for architecture '{arch}' on OS family '{os}'")]
    #[diagnostic(
        code(rdmup::resolve::unsupported_target),
        help("Supported targets: x86_64 on debian or fedora, i386 on debian")
    )]
    UnsupportedTarget { arch: InstallArch, os: OsFamily },

    // Acquisition errors
    #[error("Failed to acquire sources from '{source_ref}': {reason}")]
    #[diagnostic(code(rdmup::acquire::failed))]
    AcquisitionFailed { source_ref: String, reason: String },

    // Build errors
    #[error("Build step '{command}' failed:\n{output}")]
    #[diagnostic(
        code(rdmup::build::failed),
        help("The captured output above carries the compiler or tool error")
    )]
    BuildFailed { command: String, output: String },

    // Command execution errors
    #[error("Failed to run command '{command}': {reason}")]
    #[diagnostic(code(rdmup::exec::spawn_failed))]
    CommandFailed { command: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(rdmup::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(rdmup::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(rdmup::fs::io_error))]
    IoError { message: String },
}

impl RdmupError {
    /// Acquisition failure with source context
    pub fn acquisition(source: impl Into<String>, reason: impl Into<String>) -> Self {
        RdmupError::AcquisitionFailed {
            source_ref: source.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for RdmupError {
    fn from(err: std::io::Error) -> Self {
        RdmupError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RdmupError>;
