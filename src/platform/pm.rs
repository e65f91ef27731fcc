//! Package manager invocations per OS family
//!
//! Debian- and Fedora-family installs have different semantics: apt wants a
//! non-interactive frontend, dnf additionally needs the "Development Tools"
//! group installed before rdma-core build dependencies.

use crate::error::{RdmupError, Result};
use crate::exec::CommandRunner;
use crate::plan::OsFamily;

/// Package group Fedora-family targets must install before building
pub const FEDORA_DEVEL_GROUP: &str = "Development Tools";

/// Shell line that installs the given packages on this OS family
pub fn install_command(os: OsFamily, packages: &[&str]) -> Result<String> {
    let joined = packages.join(" ");
    match os {
        OsFamily::Debian => Ok(format!(
            "DEBIAN_FRONTEND=noninteractive apt-get install -y {joined}"
        )),
        OsFamily::Fedora => Ok(format!("dnf install -y {joined}")),
        OsFamily::Suse => Ok(format!("zypper --non-interactive install {joined}")),
        OsFamily::Other => Err(RdmupError::UnsupportedPlatform { os }),
    }
}

/// Package group install precondition, when the OS family has one
pub fn group_install_command(os: OsFamily) -> Option<String> {
    match os {
        OsFamily::Fedora => Some(format!("dnf -y group install \"{FEDORA_DEVEL_GROUP}\"")),
        _ => None,
    }
}

/// Whether pkg-config knows the given package on the target
///
/// Absence is a normal `Ok(false)`, never an error.
pub fn pkgconfig_exists(runner: &dyn CommandRunner, package: &str) -> Result<bool> {
    let output = runner.run(&format!("pkg-config --exists {package}"), None, false)?;
    Ok(output.success())
}
