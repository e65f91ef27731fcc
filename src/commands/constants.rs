//! Constants command implementation

use crate::cli::ConstantsArgs;
use crate::envfile::BuildEnvironment;
use crate::error::Result;

/// Run constants command
pub fn run(args: ConstantsArgs) -> Result<()> {
    let ip = args.ip.unwrap_or_else(|| args.server.clone());
    let environment = BuildEnvironment {
        server: args.server,
        client: args.client,
        ip,
        nic_name: args.nic_name,
        test_duration: args.test_duration,
        test_type: args.test_type,
    };
    let path = environment.write(&args.out_dir)?;
    println!("wrote {}", path.display());
    Ok(())
}
