//! Check command implementation

use crate::error::Result;
use crate::exec::LocalRunner;
use crate::resolver;

/// Run check command
///
/// Prints the result and exits non-zero when libibverbs is absent, so the
/// command composes in shell pipelines.
pub fn run() -> Result<()> {
    let runner = LocalRunner::new();
    if resolver::already_satisfied(&runner)? {
        println!("libibverbs is registered with pkg-config");
        Ok(())
    } else {
        println!("libibverbs is not registered with pkg-config");
        std::process::exit(1);
    }
}
