//! Default configuration values.

use serde_json::{Map, Value, json};

use crate::context::ExecutionContext;

/// Default seed for the fake-data generator.
pub const DEFAULT_SEED: i64 = 1;

/// Default locale for the fake-data generator.
pub const DEFAULT_LOCALE: &str = "cs_CZ";

/// Name of the loader registered when none is configured.
pub const DEFAULT_LOADER_NAME: &str = "neon";

/// Class of the default NEON-format fixture loader.
pub const NEON_LOADER_CLASS: &str = "fixturekit::alice::loader::Neon";

/// Top-level keys the configuration understands.
pub const KNOWN_KEYS: &[&str] = &["enabled", "faker", "alice"];

/// Builds the default configuration for an execution context.
///
/// # Examples
///
/// ```
/// use fixturekit_conf::{ExecutionContext, defaults::default_config};
///
/// let defaults = default_config(ExecutionContext::CommandLine);
/// assert_eq!(defaults["enabled"], true);
/// assert_eq!(defaults["alice"]["seed"], 1);
/// ```
pub fn default_config(context: ExecutionContext) -> Value {
	let mut loaders = Map::new();
	loaders.insert(
		DEFAULT_LOADER_NAME.to_string(),
		Value::from(NEON_LOADER_CLASS),
	);

	json!({
		"faker": {
			"providers": [],
		},
		"alice": {
			"seed": DEFAULT_SEED,
			"locale": DEFAULT_LOCALE,
			"loaders": loaders,
		},
		"enabled": context.enabled_by_default(),
	})
}
