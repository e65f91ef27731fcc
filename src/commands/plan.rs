//! Plan command implementation
//!
//! Resolves the request and prints the plan. Pure: never touches the network
//! or the package manager, so it is safe to run anywhere.

use std::path::PathBuf;

use console::style;

use crate::cli::PlanArgs;
use crate::commands::request_from;
use crate::config::FileConfig;
use crate::error::Result;
use crate::plan::ResolvedPlan;
use crate::resolver;

/// Run plan command
pub fn run(config_dir: Option<PathBuf>, args: PlanArgs) -> Result<()> {
    let dir = config_dir.unwrap_or_else(|| PathBuf::from("."));
    let config = FileConfig::load(&dir)?;
    let request = request_from(&args, &config);

    let plan = resolver::resolve(&request)?;
    print_plan(&request.arch.to_string(), &request.os.to_string(), &plan);
    Ok(())
}

fn print_plan(arch: &str, os: &str, plan: &ResolvedPlan) {
    println!("{}", style("Resolved install plan").green().bold());
    println!("  target:    {arch} / {os}");
    println!("  mode:      {}", plan.mode);
    println!("  source:    {}", plan.source);
    println!("  ref:       {}", plan.git_ref);
    println!("  configure: {}", plan.configure);
    println!("  packages:  {}", plan.packages.join(" "));
}
