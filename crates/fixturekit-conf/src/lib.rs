//! # fixturekit configuration
//!
//! Defaults, merging and validation of the fixtures configuration block.
//!
//! ## Features
//!
//! - **Context-aware defaults**: the `enabled` flag defaults to `true` only
//!   for command-line processes ([`ExecutionContext`])
//! - **Fail-fast validation**: the first mistyped field is reported as a
//!   [`ConfigValidationError`]
//! - **File sources**: TOML and JSON files, one section per extension
//!
//! ## Module Organization
//!
//! - [`defaults`]: default values
//! - [`merge`]: merging user configuration over defaults
//! - [`validation`]: shape checks and typed extraction
//! - [`settings`]: typed settings and the enabled guard
//! - [`sources`]: configuration files

pub mod context;
pub mod defaults;
pub mod merge;
pub mod settings;
pub mod sources;
pub mod validation;

pub use context::ExecutionContext;
pub use settings::{AliceSettings, FakerSettings, FixturesSettings};
pub use sources::{ConfigSource, JsonFileSource, SourceError, TomlFileSource, load_section, source_for_path};
pub use validation::{ConfigValidationError, ValidationResult, ValueKind};
