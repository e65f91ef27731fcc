//! Command implementations
//!
//! Each submodule implements one CLI subcommand. The shared
//! [`request_from`] helper merges CLI flags, rdmup.yaml defaults, and host
//! detection into an [`InstallRequest`], in that precedence order.

pub mod check;
pub mod completions;
pub mod constants;
pub mod install;
pub mod packages;
pub mod plan;
pub mod version;

use crate::cli::PlanArgs;
use crate::config::FileConfig;
use crate::plan::InstallRequest;
use crate::platform;

/// Merge CLI arguments with file config and host detection
pub fn request_from(args: &PlanArgs, config: &FileConfig) -> InstallRequest {
    let source = args.source.clone().or_else(|| config.source.clone());
    let git_ref = args.git_ref.clone().or_else(|| config.git_ref.clone());
    let arch = args
        .arch
        .or(config.arch)
        .unwrap_or_else(platform::detect_arch);
    let os = args.os.or(config.os).unwrap_or_else(platform::detect_os);
    InstallRequest::new(source, git_ref, arch, os)
}
