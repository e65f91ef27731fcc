//! Packages command implementation
//!
//! Reports the distro package set that would provide a prebuilt rdma-core;
//! with `--install` it also installs them through the OS package manager.

use crate::cli::PackagesArgs;
use crate::error::{RdmupError, Result};
use crate::exec::{CommandRunner, LocalRunner};
use crate::platform::{self, pm};
use crate::resolver;

/// Run packages command
pub fn run(args: PackagesArgs) -> Result<()> {
    let os = args.os.unwrap_or_else(platform::detect_os);
    let packages = resolver::missing_distro_packages(os)?;

    if args.install {
        let runner = LocalRunner::new();
        let command = pm::install_command(os, packages)?;
        let output = runner.run(&command, None, true)?;
        if !output.success() {
            return Err(RdmupError::BuildFailed {
                command,
                output: output.combined(),
            });
        }
    } else {
        println!("{}", packages.join(" "));
    }
    Ok(())
}
