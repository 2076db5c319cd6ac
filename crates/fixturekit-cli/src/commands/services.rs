//! Services command

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use colored::Colorize;
use fixturekit_di::{ServiceDefinition, ServiceId};
use serde::Serialize;

use super::{ConfigOptions, load_registrations};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub(crate) struct ServicesArgs {
	/// Configuration file to read
	#[arg(value_name = "FILE")]
	pub file: PathBuf,

	/// Output format
	#[arg(short, long, value_enum, default_value = "text")]
	pub format: OutputFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormatArg {
	Text,
	Json,
}

impl From<OutputFormatArg> for OutputFormat {
	fn from(arg: OutputFormatArg) -> Self {
		match arg {
			OutputFormatArg::Text => OutputFormat::Text,
			OutputFormatArg::Json => OutputFormat::Json,
		}
	}
}

/// One registration as printed by the command.
#[derive(Serialize)]
struct ServiceView<'a> {
	name: ServiceId,
	#[serde(flatten)]
	definition: &'a ServiceDefinition,
}

/// List every service the fixtures section registers
pub(crate) fn execute(args: ServicesArgs, options: &ConfigOptions) -> anyhow::Result<()> {
	let registrations = load_registrations(&args.file, options)?;
	let views: Vec<ServiceView<'_>> = registrations
		.iter()
		.map(|(service, definition)| ServiceView {
			name: registrations.service_id(service),
			definition,
		})
		.collect();

	match OutputFormat::from(args.format) {
		OutputFormat::Json => output::print_value(&views, OutputFormat::Json)?,
		OutputFormat::Text => {
			if views.is_empty() {
				output::warning("Fixtures are disabled, no services registered");
			}
			for view in &views {
				println!("{}", view.name.as_str().bold());
				output::print_value(view.definition, OutputFormat::Text)?;
				println!();
			}
		}
	}
	Ok(())
}
