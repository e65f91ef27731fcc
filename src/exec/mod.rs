//! Command execution on the target machine
//!
//! [`CommandRunner`] is the seam between the installer and the machine it
//! provisions: package installs, tar extraction, and the build all go through
//! it, so tests can substitute a recording fake. The production
//! [`LocalRunner`] shells out on the local host.

mod local;

pub use local::LocalRunner;

use std::path::Path;

use crate::error::Result;

/// Captured result of one command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit status; non-zero is reported here, not as an `Err`
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Stdout and stderr merged for error reporting
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.trim_end().to_string();
        if !self.stderr.trim().is_empty() {
            if !combined.is_empty() {
                combined.push('\n');
            }
            combined.push_str(self.stderr.trim_end());
        }
        combined
    }
}

/// Runs shell commands on the target, optionally with elevated privileges
///
/// `Err` means the command could not be started at all; a started command
/// that exits non-zero is an `Ok` with a non-zero `status`.
pub trait CommandRunner {
    fn run(&self, command: &str, cwd: Option<&Path>, elevated: bool) -> Result<CommandOutput>;
}
