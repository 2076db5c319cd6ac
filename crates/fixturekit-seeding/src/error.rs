//! Error types for the seeding module.

use fixturekit_conf::ConfigValidationError;
use fixturekit_di::DiError;
use thiserror::Error;

/// Errors that can occur while registering fixture services.
#[derive(Debug, Error)]
pub enum SeedingError {
	/// The configuration block has a mistyped field.
	#[error(transparent)]
	InvalidConfiguration(#[from] ConfigValidationError),

	/// Registrations could not be installed or resolved.
	#[error("Registry error: {0}")]
	Registry(#[from] DiError),
}

/// Result type alias for seeding operations.
pub type SeedingResult<T> = Result<T, SeedingError>;

#[cfg(test)]
mod tests {
	use super::*;
	use fixturekit_conf::ValueKind;
	use fixturekit_di::ServiceId;
	use rstest::rstest;

	#[rstest]
	fn test_configuration_error_is_transparent() {
		let error: SeedingError =
			ConfigValidationError::new("alice.seed", ValueKind::Int, ValueKind::String).into();

		assert_eq!(
			error.to_string(),
			"Invalid configuration value for 'alice.seed': expected int, found string"
		);
	}

	#[rstest]
	fn test_registry_error_message() {
		let error: SeedingError = DiError::DuplicateService(ServiceId::new("fixtures.alice.orm")).into();

		assert_eq!(
			error.to_string(),
			"Registry error: Service already registered: fixtures.alice.orm"
		);
	}
}
