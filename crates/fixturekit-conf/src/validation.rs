//! Configuration type validation
//!
//! Validation is fail-fast: the first field whose value does not have the
//! expected shape is reported, and nothing is mutated.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::settings::{AliceSettings, FakerSettings, FixturesSettings};

/// Shape of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	/// Field is absent.
	Missing,
	/// JSON `null`.
	Null,
	/// Boolean.
	Bool,
	/// Integer fitting in `i64`.
	Int,
	/// Any other number.
	Number,
	/// String.
	String,
	/// Ordered list.
	List,
	/// Key/value mapping.
	Mapping,
}

impl ValueKind {
	/// Classifies a value.
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Null => ValueKind::Null,
			Value::Bool(_) => ValueKind::Bool,
			Value::Number(number) if number.is_i64() => ValueKind::Int,
			Value::Number(_) => ValueKind::Number,
			Value::String(_) => ValueKind::String,
			Value::Array(_) => ValueKind::List,
			Value::Object(_) => ValueKind::Mapping,
		}
	}

	fn of_field(value: Option<&Value>) -> Self {
		value.map_or(ValueKind::Missing, ValueKind::of)
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ValueKind::Missing => "nothing",
			ValueKind::Null => "null",
			ValueKind::Bool => "bool",
			ValueKind::Int => "int",
			ValueKind::Number => "number",
			ValueKind::String => "string",
			ValueKind::List => "list",
			ValueKind::Mapping => "mapping",
		};
		f.write_str(name)
	}
}

/// A configuration field does not have the expected type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid configuration value for '{field}': expected {expected}, found {found}")]
pub struct ConfigValidationError {
	/// Dotted path of the offending field.
	pub field: String,
	/// Expected shape.
	pub expected: ValueKind,
	/// Shape actually found.
	pub found: ValueKind,
}

impl ConfigValidationError {
	/// Creates a validation error.
	pub fn new(field: impl Into<String>, expected: ValueKind, found: ValueKind) -> Self {
		Self {
			field: field.into(),
			expected,
			found,
		}
	}
}

/// Result type alias for validation.
pub type ValidationResult<T> = Result<T, ConfigValidationError>;

fn assert_mapping<'a>(value: Option<&'a Value>, field: &str) -> ValidationResult<&'a Map<String, Value>> {
	value
		.and_then(Value::as_object)
		.ok_or_else(|| ConfigValidationError::new(field, ValueKind::Mapping, ValueKind::of_field(value)))
}

fn assert_list<'a>(value: Option<&'a Value>, field: &str) -> ValidationResult<&'a Vec<Value>> {
	value
		.and_then(Value::as_array)
		.ok_or_else(|| ConfigValidationError::new(field, ValueKind::List, ValueKind::of_field(value)))
}

fn assert_int(value: Option<&Value>, field: &str) -> ValidationResult<i64> {
	value
		.and_then(Value::as_i64)
		.ok_or_else(|| ConfigValidationError::new(field, ValueKind::Int, ValueKind::of_field(value)))
}

fn assert_string<'a>(value: Option<&'a Value>, field: &str) -> ValidationResult<&'a str> {
	value
		.and_then(Value::as_str)
		.ok_or_else(|| ConfigValidationError::new(field, ValueKind::String, ValueKind::of_field(value)))
}

/// Validates a merged configuration and extracts the typed settings.
///
/// Checks run in this order and stop at the first failure: `faker` is a
/// mapping, `faker.providers` a list, `alice` a mapping, `alice.seed` an
/// integer, `alice.locale` a string and `alice.loaders` a mapping. Provider
/// entries and loader classes are then checked to be strings.
///
/// # Examples
///
/// ```
/// use fixturekit_conf::validation::{ValueKind, validate};
/// use serde_json::json;
///
/// let config = json!({
///     "faker": {"providers": {"a": "b"}},
///     "alice": {"seed": 1, "locale": "en_US", "loaders": {}},
/// });
/// let error = validate(config.as_object().unwrap(), true).unwrap_err();
/// assert_eq!(error.field, "faker.providers");
/// assert_eq!(error.expected, ValueKind::List);
/// ```
pub fn validate(config: &Map<String, Value>, enabled: bool) -> ValidationResult<FixturesSettings> {
	let faker = assert_mapping(config.get("faker"), "faker")?;
	let providers = assert_list(faker.get("providers"), "faker.providers")?;
	let alice = assert_mapping(config.get("alice"), "alice")?;
	let seed = assert_int(alice.get("seed"), "alice.seed")?;
	let locale = assert_string(alice.get("locale"), "alice.locale")?;
	let loaders = assert_mapping(alice.get("loaders"), "alice.loaders")?;

	let providers = providers
		.iter()
		.enumerate()
		.map(|(index, provider)| {
			assert_string(Some(provider), &format!("faker.providers.{}", index)).map(str::to_string)
		})
		.collect::<ValidationResult<Vec<_>>>()?;

	let loaders = loaders
		.iter()
		.map(|(name, class)| {
			assert_string(Some(class), &format!("alice.loaders.{}", name))
				.map(|class| (name.clone(), class.to_string()))
		})
		.collect::<ValidationResult<IndexMap<_, _>>>()?;

	Ok(FixturesSettings {
		enabled,
		faker: FakerSettings { providers },
		alice: AliceSettings {
			seed,
			locale: locale.to_string(),
			loaders,
		},
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn valid() -> Value {
		json!({
			"faker": {"providers": ["app::faker::Books"]},
			"alice": {"seed": 7, "locale": "en_US", "loaders": {"neon": "LoaderClassX"}},
		})
	}

	#[rstest]
	fn test_valid_config_extracts_settings() {
		let settings = validate(valid().as_object().unwrap(), true).unwrap();

		assert!(settings.enabled);
		assert_eq!(settings.faker.providers, vec!["app::faker::Books".to_string()]);
		assert_eq!(settings.alice.seed, 7);
		assert_eq!(settings.alice.locale, "en_US");
		assert_eq!(
			settings.alice.loaders.get("neon").map(String::as_str),
			Some("LoaderClassX")
		);
	}

	#[rstest]
	#[case("/faker", json!("x"), "faker", ValueKind::Mapping, ValueKind::String)]
	#[case("/faker/providers", json!({"a": "b"}), "faker.providers", ValueKind::List, ValueKind::Mapping)]
	#[case("/alice", json!([]), "alice", ValueKind::Mapping, ValueKind::List)]
	#[case("/alice/seed", json!("1"), "alice.seed", ValueKind::Int, ValueKind::String)]
	#[case("/alice/seed", json!(1.5), "alice.seed", ValueKind::Int, ValueKind::Number)]
	#[case("/alice/locale", json!(5), "alice.locale", ValueKind::String, ValueKind::Int)]
	#[case("/alice/loaders", json!(["a"]), "alice.loaders", ValueKind::Mapping, ValueKind::List)]
	#[case("/faker/providers/0", json!(3), "faker.providers.0", ValueKind::String, ValueKind::Int)]
	#[case("/alice/loaders/neon", json!(null), "alice.loaders.neon", ValueKind::String, ValueKind::Null)]
	fn test_invalid_field(
		#[case] pointer: &str,
		#[case] replacement: Value,
		#[case] field: &str,
		#[case] expected: ValueKind,
		#[case] found: ValueKind,
	) {
		let mut config = valid();
		*config.pointer_mut(pointer).unwrap() = replacement;

		let error = validate(config.as_object().unwrap(), true).unwrap_err();

		assert_eq!(error, ConfigValidationError::new(field, expected, found));
	}

	#[rstest]
	fn test_missing_field_is_reported() {
		let mut config = valid();
		config["alice"].as_object_mut().unwrap().remove("locale");

		let error = validate(config.as_object().unwrap(), true).unwrap_err();

		assert_eq!(error.field, "alice.locale");
		assert_eq!(error.found, ValueKind::Missing);
	}

	#[rstest]
	fn test_first_failure_wins() {
		let config = json!({
			"faker": {"providers": "nope"},
			"alice": "nope",
		});

		let error = validate(config.as_object().unwrap(), true).unwrap_err();

		assert_eq!(error.field, "faker.providers");
	}

	#[rstest]
	fn test_error_message() {
		let error = ConfigValidationError::new("faker.providers", ValueKind::List, ValueKind::Mapping);
		assert_eq!(
			error.to_string(),
			"Invalid configuration value for 'faker.providers': expected list, found mapping"
		);
	}
}
