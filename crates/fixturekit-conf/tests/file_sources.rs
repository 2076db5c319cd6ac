//! Integration tests for loading the fixtures block from configuration files.
//!
//! These tests write real files into a temporary directory and run them
//! through source selection, section extraction and settings resolution.

use fixturekit_conf::{
	ExecutionContext, FixturesSettings, JsonFileSource, SourceError, TomlFileSource, ValueKind,
	load_section, source_for_path,
};
use rstest::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// Fixture providing temporary directory for test configuration files
#[fixture]
fn temp_dir() -> TempDir {
	TempDir::new().expect("Failed to create temporary directory")
}

/// Test: Missing TOML file
///
/// Why: A missing file is an empty configuration, so the section is absent
/// and the command-line defaults apply.
#[rstest]
fn test_missing_toml_file_yields_defaults(temp_dir: TempDir) {
	let path = temp_dir.path().join("absent.toml");

	let raw = load_section(&TomlFileSource::new(path), "fixtures").unwrap();
	let settings = FixturesSettings::resolve(&raw, ExecutionContext::CommandLine)
		.unwrap()
		.expect("defaults are enabled on the command line");

	assert!(raw.is_null());
	assert_eq!(settings.alice.locale, "cs_CZ");
}

/// Test: TOML section with loaders
///
/// Why: Loader tables must keep the order they are written in the file.
#[rstest]
fn test_toml_section_keeps_loader_order(temp_dir: TempDir) {
	let path = temp_dir.path().join("app.toml");
	fs::write(
		&path,
		r#"
[database]
url = "sqlite::memory:"

[fixtures]
enabled = true

[fixtures.faker]
providers = ["app::faker::Cars", "app::faker::Books"]

[fixtures.alice]
seed = 42
locale = "en_US"

[fixtures.alice.loaders]
yaml = "app::loader::Yaml"
neon = "app::loader::Neon"
json = "app::loader::Json"
"#,
	)
	.expect("Failed to write TOML");

	let source = source_for_path(&path).unwrap();
	let raw = load_section(source.as_ref(), "fixtures").unwrap();
	let settings = FixturesSettings::resolve(&raw, ExecutionContext::Embedded)
		.unwrap()
		.unwrap();

	assert_eq!(settings.alice.seed, 42);
	assert_eq!(settings.faker.providers, vec!["app::faker::Cars", "app::faker::Books"]);
	let names: Vec<&str> = settings.alice.loaders.keys().map(String::as_str).collect();
	assert_eq!(names, vec!["yaml", "neon", "json"]);
}

/// Test: JSON section with a mistyped field
///
/// Why: Validation failures from file input carry the dotted field path.
#[rstest]
fn test_json_section_validation_error(temp_dir: TempDir) {
	let path = temp_dir.path().join("app.json");
	fs::write(
		&path,
		json!({"fixtures": {"alice": {"seed": "one"}}}).to_string(),
	)
	.expect("Failed to write JSON");

	let raw = load_section(&JsonFileSource::new(&path), "fixtures").unwrap();
	let error = FixturesSettings::resolve(&raw, ExecutionContext::CommandLine).unwrap_err();

	assert_eq!(error.field, "alice.seed");
	assert_eq!(error.expected, ValueKind::Int);
	assert_eq!(error.found, ValueKind::String);
}

/// Test: Malformed files
///
/// Why: Parse failures are reported with the format they came from.
#[rstest]
fn test_malformed_files(temp_dir: TempDir) {
	let toml_path = temp_dir.path().join("broken.toml");
	let json_path = temp_dir.path().join("broken.json");
	fs::write(&toml_path, "[fixtures\nenabled = ").expect("Failed to write TOML");
	fs::write(&json_path, "{\"fixtures\": ").expect("Failed to write JSON");

	let toml_error = load_section(&TomlFileSource::new(&toml_path), "fixtures").unwrap_err();
	let json_error = load_section(&JsonFileSource::new(&json_path), "fixtures").unwrap_err();

	assert!(matches!(toml_error, SourceError::Toml(_)));
	assert!(matches!(json_error, SourceError::Json(_)));
}

/// Test: Disabled section in a file
///
/// Why: A disabled block is not validated even when the rest is malformed.
#[rstest]
fn test_disabled_toml_section(temp_dir: TempDir) {
	let path = temp_dir.path().join("app.toml");
	fs::write(&path, "[fixtures]\nenabled = false\nfaker = \"broken\"\n").expect("Failed to write TOML");

	let raw = load_section(&TomlFileSource::new(&path), "fixtures").unwrap();

	assert!(FixturesSettings::resolve(&raw, ExecutionContext::CommandLine).unwrap().is_none());
}
