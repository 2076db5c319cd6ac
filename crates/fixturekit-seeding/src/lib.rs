//! Fixture-loading service registration.
//!
//! This crate wires the services needed to load fixtures into a data store:
//!
//! - **Data fixtures**: purger, executor and fixture loader
//! - **Console**: the load-fixtures command, tagged for discovery
//! - **Fake data**: the generator plus one service per configured provider
//! - **Declarative loaders**: one loader per configured format, each given
//!   the locale, the provider list, the seed and the shared ORM adapter
//!
//! # Quick Start
//!
//! ```
//! use fixturekit_di::ServiceRegistry;
//! use fixturekit_seeding::prelude::*;
//! use serde_json::json;
//!
//! let config = json!({
//!     "faker": {"providers": ["app::faker::Books"]},
//!     "alice": {"seed": 42, "locale": "en_US"},
//! });
//!
//! let registrations = FixturesExtension::new()
//!     .load_configuration(&config, ExecutionContext::CommandLine)?;
//! assert_eq!(registrations.len(), 8);
//!
//! let mut registry = ServiceRegistry::new();
//! registrations.install(&mut registry)?;
//! assert_eq!(registry.find_by_tag(COMMAND_TAG).len(), 1);
//! # Ok::<(), SeedingError>(())
//! ```

pub mod classes;
pub mod error;
pub mod extension;
pub mod names;
pub mod prelude;

pub use error::{SeedingError, SeedingResult};
pub use extension::{FixtureRegistrations, FixturesExtension};
pub use names::FixtureService;
