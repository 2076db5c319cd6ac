//! Class identifiers of the services the extension registers.
//!
//! The services themselves live outside this crate; callers provide a
//! factory for each identifier when building a container.

pub use fixturekit_conf::defaults::NEON_LOADER_CLASS;

/// Purges existing data before fixtures are loaded.
pub const PURGER_CLASS: &str = "data_fixtures::purger::OrmPurger";

/// Executes fixtures against the data store.
pub const EXECUTOR_CLASS: &str = "data_fixtures::executor::OrmExecutor";

/// Collects fixture definitions to execute.
pub const FIXTURE_LOADER_CLASS: &str = "fixturekit::data_fixtures::Loader";

/// Console command loading fixtures.
pub const LOAD_FIXTURES_COMMAND_CLASS: &str = "fixturekit::commands::LoadFixturesCommand";

/// Fake-data generator.
pub const FAKER_GENERATOR_CLASS: &str = "faker::Generator";

/// Adapter between declarative loaders and the object-relational mapper.
pub const ORM_ADAPTER_CLASS: &str = "alice::orm::Doctrine";

/// Tag marking services the console application discovers as commands.
pub const COMMAND_TAG: &str = "console.command";

/// Setup method handing the ORM adapter to a declarative loader.
pub const SET_ORM: &str = "set_orm";
