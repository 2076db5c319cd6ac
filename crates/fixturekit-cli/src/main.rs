//! fixturekit CLI
//!
//! Checks the fixtures section of an application configuration file and
//! shows the services it registers.
//!
//! ## Usage
//!
//! ```bash
//! fixturekit check config/app.toml
//! fixturekit services config/app.toml --format json
//! fixturekit graph config/app.toml --section seeding | dot -Tsvg > fixtures.svg
//! ```

mod commands;
mod logging;
mod output;

use std::process;

use clap::{Parser, Subcommand};

use commands::ConfigOptions;
use commands::check::CheckArgs;
use commands::graph::GraphArgs;
use commands::services::ServicesArgs;

#[derive(Parser)]
#[command(name = "fixturekit")]
#[command(about = "Inspect fixture-loading service registrations", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	config: ConfigOptions,

	/// Verbosity level (can be repeated)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Validate the fixtures section and summarize the registrations
	Check(CheckArgs),
	/// List every registered service with its arguments and setup calls
	Services(ServicesArgs),
	/// Print the service dependency graph in Graphviz DOT format
	Graph(GraphArgs),
}

fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbosity);

	let result = match cli.command {
		Commands::Check(args) => commands::check::execute(args, &cli.config),
		Commands::Services(args) => commands::services::execute(args, &cli.config),
		Commands::Graph(args) => commands::graph::execute(args, &cli.config),
	};

	if let Err(e) = result {
		output::error(&format!("{:#}", e));
		process::exit(1);
	}
}
