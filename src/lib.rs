//! # fixturekit
//!
//! Registers the services needed to load fixtures into a data store from a
//! declarative configuration block.
//!
//! fixturekit reads a `fixtures` block (from a TOML or JSON file, or any
//! `serde_json::Value`), applies defaults, validates it, and produces an
//! ordered set of service registrations: purger, executor, fixture loader,
//! the load-fixtures console command, the fake-data generator with its
//! providers, the ORM adapter and one declarative loader per configured
//! format. The registrations are installed into a [`di::ServiceRegistry`] and
//! resolved by a [`di::Container`] with caller-supplied factories.
//!
//! ## Feature Flags
//!
//! - `di` - Service registrations, registry and container
//! - `conf` - Configuration defaults, validation and file sources
//! - `seeding` - The fixtures extension (enables `di` and `conf`)
//! - `full` (default) - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use fixturekit::prelude::*;
//! use serde_json::json;
//!
//! let config = json!({
//!     "faker": {"providers": ["app::faker::Books"]},
//!     "alice": {"seed": 7, "locale": "en_US"},
//! });
//!
//! let registrations = FixturesExtension::new()
//!     .load_configuration(&config, ExecutionContext::CommandLine)?;
//!
//! let mut registry = ServiceRegistry::new();
//! registrations.install(&mut registry)?;
//! assert_eq!(registry.len(), 8);
//! # Ok::<(), SeedingError>(())
//! ```

#[cfg(feature = "di")]
pub use fixturekit_di as di;

#[cfg(feature = "conf")]
pub use fixturekit_conf as conf;

#[cfg(feature = "seeding")]
pub use fixturekit_seeding as seeding;

#[cfg(feature = "seeding")]
pub use fixturekit_seeding::{
	FixtureRegistrations, FixtureService, FixturesExtension, SeedingError, SeedingResult,
};

/// Commonly used types, re-exported for a single import.
pub mod prelude {
	#[cfg(feature = "di")]
	pub use fixturekit_di::{
		Argument, ClassId, Container, DiError, DiResult, FactoryRegistry, ResolvedArgument, Service,
		ServiceDefinition, ServiceId, ServiceRef, ServiceRegistry,
	};

	#[cfg(feature = "conf")]
	pub use fixturekit_conf::{
		ConfigSource, ConfigValidationError, ExecutionContext, FixturesSettings, JsonFileSource,
		TomlFileSource, load_section, source_for_path,
	};

	#[cfg(feature = "seeding")]
	pub use fixturekit_seeding::prelude::*;
}
