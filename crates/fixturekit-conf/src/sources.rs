//! Configuration file sources
//!
//! A source loads a whole configuration file into an ordered map; the
//! fixtures block is then picked out with [`load_section`].

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Unsupported file extension: {0}")]
	UnsupportedExtension(String),
}

fn into_root_map(value: Value) -> Result<IndexMap<String, Value>, SourceError> {
	match value {
		Value::Object(map) => Ok(map.into_iter().collect()),
		_ => Err(SourceError::Parse("Expected object at root".to_string())),
	}
}

/// TOML file configuration source
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use fixturekit_conf::sources::TomlFileSource;
	///
	/// let source = TomlFileSource::new("app.toml");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			tracing::debug!(path = %self.path.display(), "configuration file not found, using empty configuration");
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;
		let json_value = serde_json::to_value(toml_value)?;

		into_root_map(json_value)
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// JSON file configuration source
pub struct JsonFileSource {
	path: PathBuf,
}

impl JsonFileSource {
	/// Create a new JSON file configuration source
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for JsonFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			tracing::debug!(path = %self.path.display(), "configuration file not found, using empty configuration");
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let json_value: Value = serde_json::from_str(&content)?;

		into_root_map(json_value)
	}

	fn description(&self) -> String {
		format!("JSON file: {}", self.path.display())
	}
}

/// Picks a source for a file based on its extension.
///
/// # Errors
///
/// Returns [`SourceError::UnsupportedExtension`] for anything but `.toml`
/// and `.json`.
pub fn source_for_path(path: impl AsRef<Path>) -> Result<Box<dyn ConfigSource>, SourceError> {
	let path = path.as_ref();
	let ext = path
		.extension()
		.and_then(|ext| ext.to_str())
		.unwrap_or_default()
		.to_ascii_lowercase();

	match ext.as_str() {
		"toml" => Ok(Box::new(TomlFileSource::new(path))),
		"json" => Ok(Box::new(JsonFileSource::new(path))),
		_ => Err(SourceError::UnsupportedExtension(ext)),
	}
}

/// Loads one section of a source.
///
/// Returns `Value::Null` when the section is absent, which the extension
/// treats as an empty configuration.
///
/// # Examples
///
/// ```no_run
/// use fixturekit_conf::sources::{TomlFileSource, load_section};
///
/// let raw = load_section(&TomlFileSource::new("app.toml"), "fixtures").unwrap();
/// ```
pub fn load_section(source: &dyn ConfigSource, section: &str) -> Result<Value, SourceError> {
	let mut config = source.load()?;
	let value = config.shift_remove(section).unwrap_or(Value::Null);
	tracing::debug!(source = %source.description(), section, found = !value.is_null(), "loaded configuration section");
	Ok(value)
}
