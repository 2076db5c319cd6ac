//! Check command

use std::path::PathBuf;

use clap::Args;
use fixturekit_seeding::classes::COMMAND_TAG;

use super::{ConfigOptions, build_registry, load_registrations};
use crate::output;

#[derive(Args)]
pub(crate) struct CheckArgs {
	/// Configuration file to check
	#[arg(value_name = "FILE")]
	pub file: PathBuf,
}

/// Validate the fixtures section of a configuration file
pub(crate) fn execute(args: CheckArgs, options: &ConfigOptions) -> anyhow::Result<()> {
	output::info(&format!(
		"Checking [{}] in {}",
		options.section,
		args.file.display()
	));

	let registrations = load_registrations(&args.file, options)?;
	if registrations.is_empty() {
		output::warning("Fixtures are disabled, no services registered");
		return Ok(());
	}

	let provider_count = registrations.provider_refs().len();
	let registry = build_registry(registrations)?;

	output::success(&format!("{} service(s) registered", registry.len()));
	output::info(&format!("{} faker provider(s)", provider_count));
	for id in registry.find_by_tag(COMMAND_TAG) {
		output::info(&format!("Console command: {}", id));
	}
	Ok(())
}
