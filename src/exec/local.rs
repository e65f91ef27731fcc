//! Local shell execution
//!
//! Commands run through `sh -c` so configure lines with environment-variable
//! prefixes and `$(...)` expansions work unchanged. Elevated commands are
//! prefixed with `sudo`.

use std::path::Path;
use std::process::Command;

use super::{CommandOutput, CommandRunner};
use crate::error::{RdmupError, Result};

/// Runs commands on the local machine
#[derive(Debug, Default)]
pub struct LocalRunner;

impl LocalRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for LocalRunner {
    fn run(&self, command: &str, cwd: Option<&Path>, elevated: bool) -> Result<CommandOutput> {
        let mut process = if elevated {
            let mut process = Command::new("sudo");
            process.args(["sh", "-c", command]);
            process
        } else {
            let mut process = Command::new("sh");
            process.args(["-c", command]);
            process
        };

        if let Some(dir) = cwd {
            process.current_dir(dir);
        }

        let output = process.output().map_err(|e| RdmupError::CommandFailed {
            command: command.to_string(),
            reason: e.to_string(),
        })?;

        Ok(CommandOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
