//! Default work directory base so builds never land under the current working
//! directory (e.g. when TMPDIR=tmp or TMPDIR=./tmp).

use std::env;
use std::path::PathBuf;

/// Returns the default directory for acquiring and building sources.
/// Never returns a relative path, so builds are never placed under the
/// current working directory.
pub fn default_work_dir() -> PathBuf {
    let base = env::temp_dir();
    let base = if base.is_absolute() {
        base
    } else {
        PathBuf::from("/tmp")
    };
    base.join("rdmup-build")
}
