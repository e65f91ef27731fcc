//! Tarball acquisition
//!
//! Downloads a released rdma-core tarball into the work directory and
//! extracts it on the target. Extraction goes through the [`CommandRunner`]
//! so it can run with elevated privileges; the download itself is a plain
//! HTTP fetch.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{RdmupError, Result};
use crate::exec::CommandRunner;
use crate::plan::TARBALL_SUFFIX;

/// Validate that a tarball source is a well-formed remote URL
///
/// Local files are explicitly unsupported and rejected up front, before any
/// download is attempted.
pub fn validate_remote_url(source: &str) -> Result<()> {
    let parsed = Url::parse(source)
        .map_err(|e| RdmupError::acquisition(source, format!("not a valid URL: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(RdmupError::acquisition(
                source,
                format!("expected a remote http(s) url for a tarball install, got '{other}'"),
            ));
        }
    }

    if parsed.host_str().is_none() {
        return Err(RdmupError::acquisition(source, "URL has no host"));
    }

    Ok(())
}

/// Download a tarball into the destination directory
///
/// The file keeps the last path segment of the URL as its name.
pub fn download(source: &str, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = tarball_file_name(source)?;
    let path = dest_dir.join(file_name);

    let response = reqwest::blocking::get(source)
        .map_err(|e| RdmupError::acquisition(source, e.to_string()))?;
    if !response.status().is_success() {
        return Err(RdmupError::acquisition(
            source,
            format!("HTTP {}", response.status()),
        ));
    }
    let bytes = response
        .bytes()
        .map_err(|e| RdmupError::acquisition(source, e.to_string()))?;

    let mut file = fs::File::create(&path).map_err(|e| RdmupError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    file.write_all(&bytes).map_err(|e| RdmupError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(path)
}

/// Extract a downloaded tarball and locate its source directory
///
/// Extraction runs with elevated privileges. The source directory is the
/// tarball file name minus the suffix; its absence after a successful
/// extraction is an acquisition failure.
pub fn extract_and_locate(
    runner: &dyn CommandRunner,
    tarball: &Path,
    dest_dir: &Path,
) -> Result<PathBuf> {
    extract(runner, tarball, dest_dir)?;

    let source_path = extracted_dir(tarball)?;
    if !source_path.is_dir() {
        return Err(RdmupError::acquisition(
            tarball.display().to_string(),
            format!(
                "expected extracted directory '{}' does not exist",
                source_path.display()
            ),
        ));
    }
    Ok(source_path)
}

/// Extract a gzipped tarball next to itself, with elevated privileges
fn extract(runner: &dyn CommandRunner, tarball: &Path, dest_dir: &Path) -> Result<()> {
    let command = format!(
        "tar -xzf {} -C {}",
        shell_quote(&tarball.display().to_string()),
        shell_quote(&dest_dir.display().to_string())
    );
    let output = runner.run(&command, None, true)?;
    if !output.success() {
        return Err(RdmupError::acquisition(
            tarball.display().to_string(),
            format!("tar extraction failed: {}", output.combined()),
        ));
    }
    Ok(())
}

/// Directory a tarball extracts into: its file name minus the suffix
fn extracted_dir(tarball: &Path) -> Result<PathBuf> {
    let path = tarball.display().to_string();
    let stripped = path.strip_suffix(TARBALL_SUFFIX).ok_or_else(|| {
        RdmupError::acquisition(path.as_str(), "tarball name lacks the .tar.gz suffix")
    })?;
    Ok(PathBuf::from(stripped))
}

/// Single-quote a string for `sh -c`, escaping embedded quotes
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

fn tarball_file_name(source: &str) -> Result<String> {
    let name = source.rsplit('/').next().unwrap_or_default();
    let stem = name.strip_suffix(TARBALL_SUFFIX);
    if stem.is_none_or(str::is_empty) {
        return Err(RdmupError::acquisition(
            source,
            "URL does not end in a tarball file name",
        ));
    }
    Ok(name.to_string())
}
