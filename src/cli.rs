//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::plan::{InstallArch, OsFamily};

/// rdmup - RDMA userspace stack installer
#[derive(Parser, Debug)]
#[command(
    name = "rdmup",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Lean source installer for the RDMA userspace stack (rdma-core)",
    long_about = "rdmup resolves a possibly-partial source reference (tarball URL, git URL, \
                  or nothing) into a concrete install plan and drives the rdma-core build \
                  across OS families and CPU architectures.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  rdmup plan\n    \
                  rdmup plan https://github.com/linux-rdma/rdma-core.git\n    \
                  rdmup install --ref v50.0\n    \
                  rdmup install https://example.com/rdma-core-50.0.tar.gz\n    \
                  rdmup packages --os fedora\n    \
                  rdmup check"
)]
pub struct Cli {
    /// Directory to read rdmup.yaml from (defaults to current directory)
    #[arg(long, short = 'C', global = true)]
    pub config_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and print the install plan without touching the target
    Plan(PlanArgs),

    /// Install rdma-core, building from source when needed
    Install(InstallArgs),

    /// Print the distro packages that would provide a prebuilt rdma-core
    Packages(PackagesArgs),

    /// Check whether libibverbs is already registered with pkg-config
    Check,

    /// Write the constants.sh descriptor consumed by acquired test scripts
    Constants(ConstantsArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by plan and install
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Source: a .tar.gz URL or a .git repository URL. If not provided,
    /// falls back to rdmup.yaml, a default repository, or a pinned release
    pub source: Option<String>,

    /// Git ref (branch, tag, or SHA) to check out
    #[arg(long = "ref", value_name = "REF")]
    pub git_ref: Option<String>,

    /// Target CPU architecture (defaults to the host architecture)
    #[arg(long, value_enum)]
    pub arch: Option<InstallArch>,

    /// Target OS family (defaults to host detection via /etc/os-release)
    #[arg(long, value_enum)]
    pub os: Option<OsFamily>,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install the pinned default release:\n    rdmup install\n\n\
                  Install the newest tagged release from git:\n    \
                  rdmup install https://github.com/linux-rdma/rdma-core.git\n\n\
                  Install a specific ref from the default repository:\n    rdmup install --ref v50.0\n\n\
                  Cross-build for i386:\n    rdmup install --arch i386 --os debian")]
pub struct InstallArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Directory sources are acquired and built in
    #[arg(long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Build from source even when a package-manager rdma-core is present
    #[arg(long)]
    pub force_source: bool,
}

/// Arguments for the packages command
#[derive(Parser, Debug)]
pub struct PackagesArgs {
    /// OS family to report packages for (defaults to host detection)
    #[arg(long, value_enum)]
    pub os: Option<OsFamily>,

    /// Install the packages instead of only printing them
    #[arg(long)]
    pub install: bool,
}

/// Arguments for the constants command
#[derive(Parser, Debug)]
pub struct ConstantsArgs {
    /// Server-side network address
    #[arg(long)]
    pub server: String,

    /// Client-side network address
    #[arg(long)]
    pub client: String,

    /// Address of this node (defaults to the server address)
    #[arg(long)]
    pub ip: Option<String>,

    /// Network interface name
    #[arg(long, default_value = "eth0")]
    pub nic_name: String,

    /// Test duration in seconds
    #[arg(long, default_value_t = 300)]
    pub test_duration: u64,

    /// Workload tag written as testType
    #[arg(long, default_value = "xdp")]
    pub test_type: String,

    /// Directory to write constants.sh into
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long)]
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_plan_with_source() {
        let cli = Cli::try_parse_from([
            "rdmup",
            "plan",
            "https://github.com/linux-rdma/rdma-core.git",
            "--ref",
            "v50.0",
        ])
        .unwrap();
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(
                    args.source.as_deref(),
                    Some("https://github.com/linux-rdma/rdma-core.git")
                );
                assert_eq!(args.git_ref.as_deref(), Some("v50.0"));
            }
            other => panic!("expected plan, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_arch_and_os_values() {
        let cli =
            Cli::try_parse_from(["rdmup", "plan", "--arch", "i386", "--os", "debian"]).unwrap();
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.arch, Some(InstallArch::I386));
                assert_eq!(args.os, Some(OsFamily::Debian));
            }
            other => panic!("expected plan, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_arch() {
        assert!(Cli::try_parse_from(["rdmup", "plan", "--arch", "sparc"]).is_err());
    }

    #[test]
    fn test_install_defaults() {
        let cli = Cli::try_parse_from(["rdmup", "install"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert!(args.plan.source.is_none());
                assert!(!args.force_source);
                assert!(args.work_dir.is_none());
            }
            other => panic!("expected install, got {other:?}"),
        }
    }

    #[test]
    fn test_constants_defaults() {
        let cli = Cli::try_parse_from([
            "rdmup",
            "constants",
            "--server",
            "10.0.0.4",
            "--client",
            "10.0.0.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Constants(args) => {
                assert_eq!(args.nic_name, "eth0");
                assert_eq!(args.test_duration, 300);
                assert_eq!(args.test_type, "xdp");
                assert!(args.ip.is_none());
            }
            other => panic!("expected constants, got {other:?}"),
        }
    }
}
