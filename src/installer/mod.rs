//! Install pipeline orchestration
//!
//! Drives one install attempt through its phases:
//! `Requested -> Checked -> Resolved -> Acquired -> DependenciesInstalled ->
//! Built -> Installed`. Failures at or before `Resolved` are pure decision
//! errors with no side effects on the target; later failures may leave
//! partial state behind (files, partially installed packages) and are
//! surfaced without rollback.
//!
//! Synchronous and single-target: each phase runs to completion before the
//! next. Callers provisioning several targets run one `Installer` per target;
//! the only shared state is the read-only dependency matrix.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RdmupError, Result};
use crate::exec::CommandRunner;
use crate::fetch;
use crate::git;
use crate::plan::{AcquisitionMode, InstallRequest, OsFamily, ResolvedPlan, SourceRef};
use crate::platform::pm;
use crate::progress::InstallProgress;
use crate::resolver;

/// Result of one install attempt
#[derive(Debug)]
pub enum InstallOutcome {
    /// A package-manager rdma-core already satisfies the need
    AlreadySatisfied,
    /// Built and installed from the given source directory
    Installed { source_path: PathBuf },
}

/// Orchestrates check, resolve, acquire, and build for one target
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
    progress: InstallProgress,
}

impl<'a> Installer<'a> {
    pub fn new(runner: &'a dyn CommandRunner, progress: InstallProgress) -> Self {
        Self { runner, progress }
    }

    /// Run the full pipeline
    ///
    /// `force_source` skips the package-manager short-circuit.
    pub fn run(
        &self,
        request: &InstallRequest,
        work_dir: &Path,
        force_source: bool,
    ) -> Result<InstallOutcome> {
        let result = self.run_phases(request, work_dir, force_source);
        if result.is_err() {
            self.progress.clear();
        }
        result
    }

    fn run_phases(
        &self,
        request: &InstallRequest,
        work_dir: &Path,
        force_source: bool,
    ) -> Result<InstallOutcome> {
        if !force_source {
            self.progress.phase("checking for an existing libibverbs");
            if resolver::already_satisfied(self.runner)? {
                self.progress.finish("libibverbs already present, nothing to do");
                return Ok(InstallOutcome::AlreadySatisfied);
            }
        }

        // Pure decision point: everything before this line is side-effect-free
        // on failure.
        let plan = resolver::resolve(request)?;

        fs::create_dir_all(work_dir)?;
        let source_path = self.acquire(&plan, work_dir)?;
        self.build(&source_path, &plan, request.os)?;

        self.progress.finish(&format!(
            "rdma-core installed from {}",
            source_path.display()
        ));
        Ok(InstallOutcome::Installed { source_path })
    }

    /// Acquire sources according to the plan
    pub fn acquire(&self, plan: &ResolvedPlan, work_dir: &Path) -> Result<PathBuf> {
        match plan.mode {
            AcquisitionMode::GitClone => self.acquire_git(plan, work_dir),
            AcquisitionMode::TarballDownload => self.acquire_tarball(plan, work_dir),
            AcquisitionMode::PackageManager => Err(RdmupError::acquisition(
                plan.source.clone(),
                "package-manager plans have no sources to acquire",
            )),
        }
    }

    fn acquire_git(&self, plan: &ResolvedPlan, work_dir: &Path) -> Result<PathBuf> {
        self.progress.phase(&format!("cloning {}", plan.source));
        let dest = work_dir.join(repo_dir_name(&plan.source));
        let repo = git::clone(&plan.source, &dest)?;

        let refname = match &plan.git_ref {
            SourceRef::Exact(refname) => refname.clone(),
            // Deferred resolution of the latest-tag sentinel happens here,
            // now that the tag list is known.
            SourceRef::LatestTag => git::latest_tag(&repo, &plan.source)?,
            SourceRef::None => {
                return Err(RdmupError::acquisition(
                    plan.source.clone(),
                    "git plan without a ref",
                ));
            }
        };

        self.progress.phase(&format!("checking out {refname}"));
        git::checkout(&repo, &refname, &plan.source)?;
        Ok(dest)
    }

    fn acquire_tarball(&self, plan: &ResolvedPlan, work_dir: &Path) -> Result<PathBuf> {
        fetch::validate_remote_url(&plan.source)?;

        self.progress.phase(&format!("downloading {}", plan.source));
        let tarball = fetch::download(&plan.source, work_dir)?;

        self.progress.phase("extracting sources");
        fetch::extract_and_locate(self.runner, &tarball, work_dir)
    }

    /// Install build dependencies, configure, build, and install
    pub fn build(&self, source_path: &Path, plan: &ResolvedPlan, os: OsFamily) -> Result<()> {
        self.progress.phase("installing build dependencies");
        if let Some(group_install) = pm::group_install_command(os) {
            self.run_build_step(&group_install, None, true)?;
        }
        let install = pm::install_command(os, plan.packages)?;
        self.run_build_step(&install, None, true)?;

        self.progress.phase("configuring");
        self.run_build_step(plan.configure, Some(source_path), true)?;

        self.progress.phase("building rdma-core");
        self.run_build_step("make -j$(nproc)", Some(source_path), false)?;

        self.progress.phase("installing rdma-core");
        self.run_build_step("make install", Some(source_path), true)?;

        Ok(())
    }

    fn run_build_step(&self, command: &str, cwd: Option<&Path>, elevated: bool) -> Result<()> {
        let output = self.runner.run(command, cwd, elevated)?;
        if !output.success() {
            return Err(RdmupError::BuildFailed {
                command: command.to_string(),
                output: output.combined(),
            });
        }
        Ok(())
    }
}

/// Directory name a repository clones into: last URL segment minus `.git`
fn repo_dir_name(url: &str) -> String {
    let segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("rdma-core");
    segment.trim_end_matches(".git").to_string()
}
