//! Build-environment descriptor file
//!
//! Acquired test scripts read their parameters from a `constants.sh` file of
//! key=value lines: target/peer addresses, NIC name, test duration, and a
//! test-type tag. This is the only artifact rdmup writes for other tools.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{RdmupError, Result};

/// File name the acquired scripts expect
pub const CONSTANTS_FILE: &str = "constants.sh";

/// Parameters handed to acquired build/test scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnvironment {
    /// Server-side network address
    pub server: String,
    /// Client-side network address
    pub client: String,
    /// Address of the node the file is written for
    pub ip: String,
    /// Network interface the scripts drive
    pub nic_name: String,
    /// Test duration in seconds
    pub test_duration: u64,
    /// Tag selecting the workload the scripts run
    pub test_type: String,
}

impl BuildEnvironment {
    /// Render the key=value lines the scripts consume
    pub fn render(&self) -> String {
        format!(
            "server={}\nclient={}\nip={}\nnicName={}\ntestDuration={}\ntestType={}\n",
            self.server, self.client, self.ip, self.nic_name, self.test_duration, self.test_type
        )
    }

    /// Write `constants.sh` into the given directory
    ///
    /// Written via a temp file and persisted, so readers never see a partial
    /// file.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CONSTANTS_FILE);
        let mut file =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| RdmupError::FileWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        file.write_all(self.render().as_bytes())
            .map_err(|e| RdmupError::FileWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        file.persist(&path).map_err(|e| RdmupError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(path)
    }
}
