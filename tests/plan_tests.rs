//! End-to-end resolution scenarios via the plan command
//!
//! `plan` is pure, so these run without network access or a package manager.

use assert_cmd::Command;
use predicates::prelude::*;

fn rdmup() -> Command {
    Command::cargo_bin("rdmup").unwrap()
}

#[test]
fn test_empty_request_resolves_to_default_tarball() {
    // Scenario A: no source, no ref, x86_64 Debian
    let temp = tempfile::TempDir::new().unwrap();
    rdmup()
        .args(["-C"])
        .arg(temp.path())
        .args(["plan", "--arch", "x86_64", "--os", "debian"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tarball-download"))
        .stdout(predicate::str::contains(
            "https://github.com/linux-rdma/rdma-core/releases/download/v51.1/rdma-core-51.1.tar.gz",
        ));
}

#[test]
fn test_git_source_without_ref_defers_to_latest_tag() {
    // Scenario B: git URL, no ref, x86_64 Fedora
    let temp = tempfile::TempDir::new().unwrap();
    rdmup()
        .args(["-C"])
        .arg(temp.path())
        .args([
            "plan",
            "https://github.com/linux-rdma/rdma-core.git",
            "--arch",
            "x86_64",
            "--os",
            "fedora",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("git-clone"))
        .stdout(predicate::str::contains("<latest tag>"));
}

#[test]
fn test_tarball_wins_precedence_over_ref() {
    // Scenario C: tarball + ref, i386 Debian; ref is discarded
    let temp = tempfile::TempDir::new().unwrap();
    rdmup()
        .args(["-C"])
        .arg(temp.path())
        .args([
            "plan",
            "https://example.com/pkg.tar.gz",
            "--ref",
            "v1",
            "--arch",
            "i386",
            "--os",
            "debian",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("tarball-download"))
        .stdout(predicate::str::contains("gcc:i386"))
        .stdout(predicate::str::contains("-m32"))
        .stdout(predicate::str::contains("v1").not());
}

#[test]
fn test_invalid_source_is_rejected() {
    // Scenario D: malformed source never falls back to a default
    let temp = tempfile::TempDir::new().unwrap();
    rdmup()
        .args(["-C"])
        .arg(temp.path())
        .args([
            "plan",
            "not-a-valid-source",
            "--arch",
            "x86_64",
            "--os",
            "debian",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid source reference: not-a-valid-source",
        ));
}

#[test]
fn test_ref_without_source_uses_default_repository() {
    let temp = tempfile::TempDir::new().unwrap();
    rdmup()
        .args(["-C"])
        .arg(temp.path())
        .args([
            "plan",
            "--ref",
            "v50.0",
            "--arch",
            "x86_64",
            "--os",
            "debian",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://github.com/linux-rdma/rdma-core.git",
        ))
        .stdout(predicate::str::contains("v50.0"));
}

#[test]
fn test_unsupported_target_fails_cheaply() {
    let temp = tempfile::TempDir::new().unwrap();
    rdmup()
        .args(["-C"])
        .arg(temp.path())
        .args(["plan", "--arch", "i386", "--os", "fedora"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No build recipe"));
}

#[test]
fn test_plan_reads_config_file_defaults() {
    let temp = tempfile::TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("rdmup.yaml"),
        "source: https://mirror.example/rdma-core.git\nref: v49.0\n",
    )
    .unwrap();

    rdmup()
        .args(["-C"])
        .arg(temp.path())
        .args(["plan", "--arch", "x86_64", "--os", "debian"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://mirror.example/rdma-core.git",
        ))
        .stdout(predicate::str::contains("v49.0"));
}

#[test]
fn test_cli_flags_override_config_file() {
    let temp = tempfile::TempDir::new().unwrap();
    std::fs::write(temp.path().join("rdmup.yaml"), "source: file-config.tar.gz\n").unwrap();

    rdmup()
        .args(["-C"])
        .arg(temp.path())
        .args([
            "plan",
            "https://cli.example/rdma-core.git",
            "--arch",
            "x86_64",
            "--os",
            "debian",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://cli.example/rdma-core.git"))
        .stdout(predicate::str::contains("file-config.tar.gz").not());
}
