//! Install command implementation
//!
//! Merges CLI flags with rdmup.yaml defaults, then drives the pipeline:
//! 1. Check whether a package-manager rdma-core already satisfies the need
//! 2. Resolve the request into a concrete plan
//! 3. Acquire sources (clone or download+extract)
//! 4. Install build dependencies, configure, build, install

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::commands::request_from;
use crate::config::FileConfig;
use crate::error::Result;
use crate::exec::LocalRunner;
use crate::installer::{InstallOutcome, Installer};
use crate::progress::InstallProgress;
use crate::temp;

/// Run install command
pub fn run(config_dir: Option<PathBuf>, args: InstallArgs, quiet: bool) -> Result<()> {
    let dir = config_dir.unwrap_or_else(|| PathBuf::from("."));
    let config = FileConfig::load(&dir)?;
    let request = request_from(&args.plan, &config);

    let work_dir = args
        .work_dir
        .or_else(|| config.work_dir.clone())
        .unwrap_or_else(temp::default_work_dir);

    let runner = LocalRunner::new();
    let progress = InstallProgress::new(quiet);
    let installer = Installer::new(&runner, progress);

    match installer.run(&request, &work_dir, args.force_source)? {
        InstallOutcome::AlreadySatisfied => {}
        InstallOutcome::Installed { source_path } => {
            if quiet {
                println!("installed from {}", source_path.display());
            }
        }
    }
    Ok(())
}
