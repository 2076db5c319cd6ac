//! Merging user configuration over defaults.

use serde_json::{Map, Value};

use crate::defaults::KNOWN_KEYS;
use crate::validation::{ConfigValidationError, ValueKind, ValidationResult};

/// Field path reported when the configuration root is not a mapping.
pub const ROOT_FIELD: &str = "(root)";

/// Merges a raw configuration over the defaults.
///
/// Top-level keys replace the defaults, except mapping blocks which are merged
/// one level deep: `{"alice": {"seed": 7}}` keeps the default locale and
/// loaders. A non-mapping user value replaces the default block wholesale so
/// validation can report it. `null` is treated as an empty configuration.
///
/// # Errors
///
/// Fails when `raw` is neither `null` nor a mapping.
pub fn merge_over_defaults(raw: &Value, defaults: Value) -> ValidationResult<Map<String, Value>> {
	let mut merged = match defaults {
		Value::Object(map) => map,
		_ => Map::new(),
	};

	let user = match raw {
		Value::Null => return Ok(merged),
		Value::Object(map) => map,
		other => {
			return Err(ConfigValidationError::new(
				ROOT_FIELD,
				ValueKind::Mapping,
				ValueKind::of(other),
			));
		}
	};

	for (key, value) in user {
		if !KNOWN_KEYS.contains(&key.as_str()) {
			tracing::warn!(key = %key, "ignoring unknown fixtures configuration key");
		}

		match (merged.get_mut(key), value) {
			(Some(Value::Object(block)), Value::Object(overrides)) => {
				for (inner_key, inner_value) in overrides {
					block.insert(inner_key.clone(), inner_value.clone());
				}
			}
			_ => {
				merged.insert(key.clone(), value.clone());
			}
		}
	}

	Ok(merged)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::ExecutionContext;
	use crate::defaults::default_config;
	use rstest::rstest;
	use serde_json::json;

	fn defaults() -> Value {
		default_config(ExecutionContext::CommandLine)
	}

	#[rstest]
	fn test_null_yields_defaults() {
		let merged = merge_over_defaults(&Value::Null, defaults()).unwrap();
		assert_eq!(Value::Object(merged), defaults());
	}

	#[rstest]
	fn test_nested_block_merged_one_level() {
		let raw = json!({"alice": {"seed": 7}});

		let merged = merge_over_defaults(&raw, defaults()).unwrap();

		assert_eq!(merged["alice"]["seed"], json!(7));
		assert_eq!(merged["alice"]["locale"], json!("cs_CZ"));
		assert!(merged["alice"]["loaders"].get("neon").is_some());
	}

	#[rstest]
	fn test_nested_mapping_replaced_not_merged() {
		let raw = json!({"alice": {"loaders": {"yaml": "app::YamlLoader"}}});

		let merged = merge_over_defaults(&raw, defaults()).unwrap();

		assert_eq!(merged["alice"]["loaders"], json!({"yaml": "app::YamlLoader"}));
	}

	#[rstest]
	fn test_non_mapping_block_replaces_default() {
		let raw = json!({"faker": ["x"]});

		let merged = merge_over_defaults(&raw, defaults()).unwrap();

		assert_eq!(merged["faker"], json!(["x"]));
	}

	#[rstest]
	fn test_unknown_keys_are_kept() {
		let raw = json!({"extra": 1, "enabled": false});

		let merged = merge_over_defaults(&raw, defaults()).unwrap();

		assert_eq!(merged["extra"], json!(1));
		assert_eq!(merged["enabled"], json!(false));
	}

	#[rstest]
	fn test_non_mapping_root_is_rejected() {
		let error = merge_over_defaults(&json!("yes"), defaults()).unwrap_err();
		assert_eq!(error.field, ROOT_FIELD);
		assert_eq!(error.found, ValueKind::String);
	}

	#[rstest]
	fn test_key_order_follows_user_insertion() {
		let raw = json!({"alice": {"loaders": {"b": "B", "a": "A", "c": "C"}}});

		let merged = merge_over_defaults(&raw, defaults()).unwrap();

		let names: Vec<&String> = merged["alice"]["loaders"].as_object().unwrap().keys().collect();
		assert_eq!(names, vec!["b", "a", "c"]);
	}
}
