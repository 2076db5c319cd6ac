//! Typed fixtures settings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::ExecutionContext;
use crate::defaults::default_config;
use crate::merge::merge_over_defaults;
use crate::validation::{ValidationResult, validate};

/// Fake-data generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FakerSettings {
	/// Provider class identifiers, in registration order.
	pub providers: Vec<String>,
}

/// Declarative loader settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliceSettings {
	/// Seed for the fake-data generator.
	pub seed: i64,
	/// Locale for the fake-data generator.
	pub locale: String,
	/// Loader name to class identifier, in insertion order.
	pub loaders: IndexMap<String, String>,
}

/// Validated fixtures configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixturesSettings {
	/// Whether fixture services are registered.
	pub enabled: bool,
	/// Fake-data generator settings.
	pub faker: FakerSettings,
	/// Declarative loader settings.
	pub alice: AliceSettings,
}

impl FixturesSettings {
	/// Applies defaults to a raw configuration and validates it.
	///
	/// Returns `Ok(None)` when the merged `enabled` flag is `false`; in that
	/// case nothing else is validated. Only a literal `false` disables the
	/// extension.
	///
	/// # Examples
	///
	/// ```
	/// use fixturekit_conf::{ExecutionContext, FixturesSettings};
	/// use serde_json::json;
	///
	/// let settings = FixturesSettings::resolve(&json!({}), ExecutionContext::CommandLine)
	///     .unwrap()
	///     .unwrap();
	/// assert_eq!(settings.alice.seed, 1);
	///
	/// let disabled = FixturesSettings::resolve(
	///     &json!({"enabled": false, "faker": "malformed"}),
	///     ExecutionContext::CommandLine,
	/// )
	/// .unwrap();
	/// assert!(disabled.is_none());
	/// ```
	pub fn resolve(raw: &Value, context: ExecutionContext) -> ValidationResult<Option<Self>> {
		let merged = merge_over_defaults(raw, default_config(context))?;

		match merged.get("enabled") {
			Some(Value::Bool(false)) => {
				tracing::debug!("fixtures configuration disabled");
				return Ok(None);
			}
			Some(Value::Bool(true)) => {}
			other => {
				tracing::warn!(value = ?other, "non-boolean 'enabled' value, keeping fixtures enabled");
			}
		}

		validate(&merged, true).map(Some)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::defaults::{DEFAULT_LOCALE, NEON_LOADER_CLASS};
	use crate::validation::ValueKind;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_empty_config_on_command_line_uses_defaults() {
		let settings = FixturesSettings::resolve(&json!({}), ExecutionContext::CommandLine)
			.unwrap()
			.unwrap();

		assert!(settings.enabled);
		assert!(settings.faker.providers.is_empty());
		assert_eq!(settings.alice.seed, 1);
		assert_eq!(settings.alice.locale, DEFAULT_LOCALE);
		assert_eq!(settings.alice.loaders.len(), 1);
		assert_eq!(
			settings.alice.loaders.get("neon").map(String::as_str),
			Some(NEON_LOADER_CLASS)
		);
	}

	#[rstest]
	fn test_embedded_context_is_disabled_by_default() {
		let settings = FixturesSettings::resolve(&Value::Null, ExecutionContext::Embedded).unwrap();
		assert!(settings.is_none());
	}

	#[rstest]
	fn test_explicit_enable_in_embedded_context() {
		let settings =
			FixturesSettings::resolve(&json!({"enabled": true}), ExecutionContext::Embedded).unwrap();
		assert!(settings.is_some());
	}

	#[rstest]
	fn test_disabled_skips_validation() {
		let raw = json!({
			"enabled": false,
			"faker": {"providers": {"not": "a list"}},
			"alice": {"seed": "x"},
		});

		let settings = FixturesSettings::resolve(&raw, ExecutionContext::CommandLine).unwrap();

		assert!(settings.is_none());
	}

	#[rstest]
	#[case(json!("no"))]
	#[case(json!(0))]
	#[case(json!(null))]
	fn test_non_boolean_enabled_keeps_enabled(#[case] enabled: Value) {
		let raw = json!({"enabled": enabled});

		let settings = FixturesSettings::resolve(&raw, ExecutionContext::Embedded).unwrap();

		assert!(settings.is_some());
	}

	#[rstest]
	fn test_validation_error_surfaces() {
		let raw = json!({"faker": {"providers": {"a": "b"}}});

		let error = FixturesSettings::resolve(&raw, ExecutionContext::CommandLine).unwrap_err();

		assert_eq!(error.field, "faker.providers");
		assert_eq!(error.expected, ValueKind::List);
	}
}
