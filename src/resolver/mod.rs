//! Source-installation resolution
//!
//! Turns a possibly-partial [`InstallRequest`] into a total [`ResolvedPlan`]:
//! a concrete acquisition mode, source, ref, dependency list, and configure
//! line. Resolution is pure and side-effect-free; nothing here touches the
//! network or the target machine, so every rule is testable in isolation.
//!
//! Precedence, first match wins:
//! 1. tarball-suffixed source -> tarball download, any ref discarded
//! 2. git-suffixed source -> clone, given ref or deferred latest tag
//! 3. ref without source -> clone the default repository at that ref
//! 4. nothing -> pinned default release tarball
//! 5. any other source -> rejected, never silently defaulted

use crate::error::{RdmupError, Result};
use crate::exec::CommandRunner;
use crate::matrix::DependencyMatrix;
use crate::plan::{
    AcquisitionMode, GIT_SUFFIX, InstallRequest, OsFamily, ResolvedPlan, SourceRef, TARBALL_SUFFIX,
};
use crate::platform::pm;

/// Default repository when a ref is given without a source
pub const DEFAULT_GIT_SOURCE: &str = "https://github.com/linux-rdma/rdma-core.git";

/// Pinned default release when neither source nor ref is given
pub const DEFAULT_TARBALL_SOURCE: &str =
    "https://github.com/linux-rdma/rdma-core/releases/download/v51.1/rdma-core-51.1.tar.gz";

/// pkg-config name probed to detect an existing installation
pub const PKGCONFIG_PROBE: &str = "libibverbs";

/// Whether a package-manager-provided rdma-core already satisfies the need
///
/// Short-circuit for the caller: when true, source installation is skipped
/// entirely. Absence is a normal `false`, not an error.
pub fn already_satisfied(runner: &dyn CommandRunner) -> Result<bool> {
    pm::pkgconfig_exists(runner, PKGCONFIG_PROBE)
}

/// Distro package set that would provide a prebuilt rdma-core
///
/// Reporting only; installation is the caller's decision.
pub fn missing_distro_packages(os: OsFamily) -> Result<&'static [&'static str]> {
    match os {
        OsFamily::Debian => Ok(&["rdma-core", "ibverbs-providers", "libibverbs-dev"]),
        OsFamily::Suse => Ok(&["rdma-core-devel", "librdmacm1"]),
        OsFamily::Fedora => Ok(&["librdmacm-devel"]),
        OsFamily::Other => Err(RdmupError::UnsupportedPlatform { os }),
    }
}

/// Resolve a request into a complete plan
///
/// Deterministic and idempotent. Fails with `UnsupportedTarget` before any
/// acquisition or build action when the dependency matrix has no entry for
/// the requested architecture and OS family.
pub fn resolve(request: &InstallRequest) -> Result<ResolvedPlan> {
    let (mode, source, git_ref) = normalize(request)?;

    let matrix = DependencyMatrix::get();
    let packages =
        matrix
            .packages(request.arch, request.os)
            .ok_or(RdmupError::UnsupportedTarget {
                arch: request.arch,
                os: request.os,
            })?;
    let configure = matrix
        .configure(request.arch)
        .ok_or(RdmupError::UnsupportedTarget {
            arch: request.arch,
            os: request.os,
        })?;

    Ok(ResolvedPlan {
        mode,
        source,
        git_ref,
        packages,
        configure,
    })
}

fn normalize(request: &InstallRequest) -> Result<(AcquisitionMode, String, SourceRef)> {
    match (&request.source, &request.git_ref) {
        (Some(source), _) if source.ends_with(TARBALL_SUFFIX) => {
            // Tarballs are not ref-addressable; a supplied ref is discarded.
            Ok((
                AcquisitionMode::TarballDownload,
                source.clone(),
                SourceRef::None,
            ))
        }
        (Some(source), git_ref) if source.ends_with(GIT_SUFFIX) => {
            let git_ref = match git_ref {
                Some(r) => SourceRef::Exact(r.clone()),
                None => SourceRef::LatestTag,
            };
            Ok((AcquisitionMode::GitClone, source.clone(), git_ref))
        }
        (Some(source), _) => Err(RdmupError::InvalidSourceReference {
            reference: source.clone(),
        }),
        (None, Some(git_ref)) => Ok((
            AcquisitionMode::GitClone,
            DEFAULT_GIT_SOURCE.to_string(),
            SourceRef::Exact(git_ref.clone()),
        )),
        (None, None) => Ok((
            AcquisitionMode::TarballDownload,
            DEFAULT_TARBALL_SOURCE.to_string(),
            SourceRef::None,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::InstallArch;

    fn request(
        source: Option<&str>,
        git_ref: Option<&str>,
        arch: InstallArch,
        os: OsFamily,
    ) -> InstallRequest {
        InstallRequest::new(
            source.map(str::to_string),
            git_ref.map(str::to_string),
            arch,
            os,
        )
    }

    #[test]
    fn test_empty_request_yields_default_tarball() {
        // Scenario A: no source, no ref on x86_64 Debian
        let plan = resolve(&request(None, None, InstallArch::X86_64, OsFamily::Debian)).unwrap();
        assert_eq!(plan.mode, AcquisitionMode::TarballDownload);
        assert_eq!(plan.source, DEFAULT_TARBALL_SOURCE);
        assert!(plan.source.ends_with("rdma-core-51.1.tar.gz"));
        assert_eq!(plan.git_ref, SourceRef::None);
    }

    #[test]
    fn test_git_source_without_ref_defers_latest_tag() {
        // Scenario B: git URL with no ref resolves to the deferred sentinel,
        // never a concrete tag
        let plan = resolve(&request(
            Some("https://github.com/linux-rdma/rdma-core.git"),
            None,
            InstallArch::X86_64,
            OsFamily::Fedora,
        ))
        .unwrap();
        assert_eq!(plan.mode, AcquisitionMode::GitClone);
        assert_eq!(plan.source, "https://github.com/linux-rdma/rdma-core.git");
        assert_eq!(plan.git_ref, SourceRef::LatestTag);
    }

    #[test]
    fn test_tarball_wins_precedence_and_discards_ref() {
        // Scenario C: tarball + ref on i386 Debian
        let plan = resolve(&request(
            Some("pkg.tar.gz"),
            Some("v1"),
            InstallArch::I386,
            OsFamily::Debian,
        ))
        .unwrap();
        assert_eq!(plan.mode, AcquisitionMode::TarballDownload);
        assert_eq!(plan.git_ref, SourceRef::None);
        assert!(plan.packages.contains(&"gcc:i386"));
        assert!(plan.configure.contains("-m32"));
    }

    #[test]
    fn test_unrecognized_source_is_rejected() {
        // Scenario D: malformed input never falls back to a default
        let err = resolve(&request(
            Some("not-a-valid-source"),
            None,
            InstallArch::X86_64,
            OsFamily::Debian,
        ))
        .unwrap_err();
        match err {
            RdmupError::InvalidSourceReference { reference } => {
                assert_eq!(reference, "not-a-valid-source");
            }
            other => panic!("expected InvalidSourceReference, got {other:?}"),
        }
    }

    #[test]
    fn test_ref_without_source_uses_default_repository() {
        let plan = resolve(&request(
            None,
            Some("v50.0"),
            InstallArch::X86_64,
            OsFamily::Debian,
        ))
        .unwrap();
        assert_eq!(plan.mode, AcquisitionMode::GitClone);
        assert_eq!(plan.source, DEFAULT_GIT_SOURCE);
        assert_eq!(plan.git_ref, SourceRef::Exact("v50.0".to_string()));
    }

    #[test]
    fn test_git_source_with_ref_keeps_ref() {
        let plan = resolve(&request(
            Some("https://gitlab.com/mirror/rdma-core.git"),
            Some("stable-v49"),
            InstallArch::X86_64,
            OsFamily::Fedora,
        ))
        .unwrap();
        assert_eq!(plan.git_ref, SourceRef::Exact("stable-v49".to_string()));
    }

    #[test]
    fn test_tarball_ref_discarded_regardless_of_value() {
        for git_ref in [None, Some("v1"), Some("main")] {
            let plan = resolve(&request(
                Some("https://example.com/rdma-core-50.0.tar.gz"),
                git_ref,
                InstallArch::X86_64,
                OsFamily::Debian,
            ))
            .unwrap();
            assert_eq!(plan.git_ref, SourceRef::None);
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let req = request(
            Some("https://github.com/linux-rdma/rdma-core.git"),
            None,
            InstallArch::X86_64,
            OsFamily::Debian,
        );
        assert_eq!(resolve(&req).unwrap(), resolve(&req).unwrap());
    }

    #[test]
    fn test_empty_strings_behave_like_absent() {
        let plan = resolve(&InstallRequest::new(
            Some(String::new()),
            Some(String::new()),
            InstallArch::X86_64,
            OsFamily::Debian,
        ))
        .unwrap();
        assert_eq!(plan.mode, AcquisitionMode::TarballDownload);
        assert_eq!(plan.source, DEFAULT_TARBALL_SOURCE);
    }

    #[test]
    fn test_missing_matrix_entry_fails_resolution() {
        let err = resolve(&request(None, None, InstallArch::I386, OsFamily::Fedora)).unwrap_err();
        assert!(matches!(err, RdmupError::UnsupportedTarget { .. }));

        let err = resolve(&request(None, None, InstallArch::X86_64, OsFamily::Suse)).unwrap_err();
        assert!(matches!(err, RdmupError::UnsupportedTarget { .. }));
    }

    #[test]
    fn test_missing_distro_packages_per_family() {
        assert_eq!(
            missing_distro_packages(OsFamily::Debian).unwrap(),
            ["rdma-core", "ibverbs-providers", "libibverbs-dev"]
        );
        assert_eq!(
            missing_distro_packages(OsFamily::Suse).unwrap(),
            ["rdma-core-devel", "librdmacm1"]
        );
        assert_eq!(
            missing_distro_packages(OsFamily::Fedora).unwrap(),
            ["librdmacm-devel"]
        );
        assert!(matches!(
            missing_distro_packages(OsFamily::Other).unwrap_err(),
            RdmupError::UnsupportedPlatform { .. }
        ));
    }
}
