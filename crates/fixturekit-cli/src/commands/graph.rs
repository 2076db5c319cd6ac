//! Graph command

use std::path::PathBuf;

use clap::Args;
use fixturekit_di::visualization::DependencyGraph;

use super::{ConfigOptions, build_registry, load_registrations};

#[derive(Args)]
pub(crate) struct GraphArgs {
	/// Configuration file to read
	#[arg(value_name = "FILE")]
	pub file: PathBuf,
}

/// Print the service dependency graph in Graphviz DOT format
pub(crate) fn execute(args: GraphArgs, options: &ConfigOptions) -> anyhow::Result<()> {
	let registry = build_registry(load_registrations(&args.file, options)?)?;
	let graph = DependencyGraph::from_registry(&registry);
	tracing::debug!(
		nodes = graph.node_count(),
		edges = graph.edge_count(),
		"built dependency graph"
	);
	print!("{}", graph.to_dot());
	Ok(())
}
