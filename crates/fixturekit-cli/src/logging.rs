//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Level used when `RUST_LOG` is not set.
pub(crate) fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	}
}

/// Installs a stderr fmt subscriber; `RUST_LOG` directives take precedence.
pub(crate) fn init(verbosity: u8) {
	let filter = EnvFilter::builder()
		.with_default_directive(level_for(verbosity).into())
		.from_env_lossy();

	// A subscriber may already be installed when embedded in tests.
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, LevelFilter::WARN)]
	#[case(1, LevelFilter::INFO)]
	#[case(2, LevelFilter::DEBUG)]
	#[case(5, LevelFilter::TRACE)]
	fn level_for_maps_verbosity(#[case] verbosity: u8, #[case] expected: LevelFilter) {
		assert_eq!(level_for(verbosity), expected);
	}
}
