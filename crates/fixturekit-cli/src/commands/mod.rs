//! Subcommands and the configuration loading they share.

pub(crate) mod check;
pub(crate) mod graph;
pub(crate) mod services;

use std::path::Path;

use anyhow::Context;
use clap::Args;
use fixturekit_conf::{ExecutionContext, load_section, source_for_path};
use fixturekit_di::ServiceRegistry;
use fixturekit_seeding::{FixtureRegistrations, FixturesExtension};

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub(crate) struct ConfigOptions {
	/// Section of the file holding the fixtures configuration
	#[arg(long, global = true, default_value = FixturesExtension::DEFAULT_NAME)]
	pub section: String,

	/// Resolve defaults as an embedded application instead of a command-line tool
	#[arg(long, global = true)]
	pub embedded: bool,
}

impl ConfigOptions {
	fn context(&self) -> ExecutionContext {
		if self.embedded {
			ExecutionContext::Embedded
		} else {
			ExecutionContext::CommandLine
		}
	}
}

/// Loads the configured section and runs the fixtures extension over it.
pub(crate) fn load_registrations(
	file: &Path,
	options: &ConfigOptions,
) -> anyhow::Result<FixtureRegistrations> {
	ensure_readable(file)?;

	let source = source_for_path(file)?;
	let raw = load_section(source.as_ref(), &options.section)
		.with_context(|| format!("Failed to load {}", source.description()))?;
	tracing::debug!(section = %options.section, context = ?options.context(), "running fixtures extension");

	let registrations = FixturesExtension::new()
		.load_configuration(&raw, options.context())
		.with_context(|| format!("Invalid [{}] section in {}", options.section, file.display()))?;
	Ok(registrations)
}

/// Installs registrations into a fresh registry and checks their references.
pub(crate) fn build_registry(registrations: FixtureRegistrations) -> anyhow::Result<ServiceRegistry> {
	let mut registry = ServiceRegistry::new();
	registrations.install(&mut registry)?;
	registry.check_references()?;
	Ok(registry)
}

fn ensure_readable(path: &Path) -> anyhow::Result<()> {
	std::fs::metadata(path)
		.map(|_| ())
		.with_context(|| format!("Cannot access file {}", path.display()))
}
