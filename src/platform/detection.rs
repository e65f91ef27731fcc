//! Host OS family and architecture detection
//!
//! Used only as defaults for `--os` and `--arch`; explicit flags always win.

use std::fs;

use crate::plan::{InstallArch, OsFamily};

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Detect the OS family of the local host from /etc/os-release
///
/// Unreadable or unrecognized release data maps to [`OsFamily::Other`].
pub fn detect_os() -> OsFamily {
    fs::read_to_string(OS_RELEASE_PATH)
        .map(|content| os_family_from_release(&content))
        .unwrap_or(OsFamily::Other)
}

/// Detect the architecture of the local host
///
/// Anything that is not 32-bit x86 is treated as x86_64; i386 builds are
/// cross builds requested explicitly with `--arch i386`.
pub fn detect_arch() -> InstallArch {
    match std::env::consts::ARCH {
        "x86" => InstallArch::I386,
        _ => InstallArch::X86_64,
    }
}

/// Map os-release ID/ID_LIKE tokens to an OS family
fn os_family_from_release(content: &str) -> OsFamily {
    let mut tokens = Vec::new();
    for line in content.lines() {
        if let Some(value) = line
            .strip_prefix("ID=")
            .or_else(|| line.strip_prefix("ID_LIKE="))
        {
            let value = value.trim_matches('"');
            tokens.extend(value.split_whitespace().map(str::to_ascii_lowercase));
        }
    }

    for token in &tokens {
        match token.as_str() {
            "debian" | "ubuntu" => return OsFamily::Debian,
            "fedora" | "rhel" | "centos" | "almalinux" | "rocky" | "mariner" | "azurelinux" => {
                return OsFamily::Fedora;
            }
            "suse" | "sles" | "opensuse" | "opensuse-leap" | "opensuse-tumbleweed" => {
                return OsFamily::Suse;
            }
            _ => {}
        }
    }

    OsFamily::Other
}
