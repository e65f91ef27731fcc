//! Optional file configuration
//!
//! `rdmup.yaml` in the working directory supplies defaults for the install
//! request; CLI flags always override it. An absent file is not an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RdmupError, Result};
use crate::plan::{InstallArch, OsFamily};

/// Configuration file name
pub const CONFIG_FILE: &str = "rdmup.yaml";

/// Defaults loaded from `rdmup.yaml`
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Tarball URL or git URL
    pub source: Option<String>,
    /// Git ref (branch, tag, or SHA)
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    pub arch: Option<InstallArch>,
    pub os: Option<OsFamily>,
    /// Directory sources are acquired and built in
    pub work_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Load `rdmup.yaml` from a directory; missing file yields defaults
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| RdmupError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| RdmupError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
