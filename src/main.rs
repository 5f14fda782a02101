//! srcfix CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, dispatch to single-file
//! or batch repair, and exit with appropriate status. For programmatic use,
//! prefer the library API (`srcfix::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
