//! rdmup - RDMA userspace stack installer
//!
//! A lean command line tool that resolves a possibly-partial source
//! reference into a concrete rdma-core install plan and drives the build
//! across OS families and CPU architectures.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod envfile;
mod error;
mod exec;
mod fetch;
mod git;
mod installer;
mod matrix;
mod plan;
mod platform;
mod progress;
mod resolver;
mod temp;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(cli.config_dir, args),
        Commands::Install(args) => commands::install::run(cli.config_dir, args, cli.quiet),
        Commands::Packages(args) => commands::packages::run(args),
        Commands::Check => commands::check::run(),
        Commands::Constants(args) => commands::constants::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
