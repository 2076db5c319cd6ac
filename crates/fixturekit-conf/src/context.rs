//! Execution context of the hosting process.

use serde::{Deserialize, Serialize};

/// How the hosting process runs.
///
/// The context only decides the default of the `enabled` flag: fixture
/// services are registered by default when the process is a command-line
/// tool, and left out when it is embedded in a long-running application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionContext {
	/// Non-interactive command-line process.
	CommandLine,
	/// Embedded in a server or other long-running host.
	Embedded,
}

impl ExecutionContext {
	/// Default value of the `enabled` flag in this context.
	pub fn enabled_by_default(self) -> bool {
		matches!(self, ExecutionContext::CommandLine)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ExecutionContext::CommandLine, true)]
	#[case(ExecutionContext::Embedded, false)]
	fn test_enabled_by_default(#[case] context: ExecutionContext, #[case] expected: bool) {
		assert_eq!(context.enabled_by_default(), expected);
	}
}
