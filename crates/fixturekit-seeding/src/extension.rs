//! The fixtures extension.
//!
//! [`FixturesExtension`] turns the fixtures configuration block into an
//! ordered set of service registrations:
//!
//! | Service                         | Class                          |
//! |---------------------------------|--------------------------------|
//! | `data_fixtures.purger`          | [`PURGER_CLASS`]               |
//! | `data_fixtures.executor`        | [`EXECUTOR_CLASS`]             |
//! | `data_fixtures.loader`          | [`FIXTURE_LOADER_CLASS`]       |
//! | `command.load_fixtures`         | [`LOAD_FIXTURES_COMMAND_CLASS`]|
//! | `faker.generator`               | [`FAKER_GENERATOR_CLASS`]      |
//! | `faker.provider.<i>`            | `faker.providers[i]`           |
//! | `alice.orm`                     | [`ORM_ADAPTER_CLASS`]          |
//! | `alice.loader.<name>`           | `alice.loaders.<name>`         |
//!
//! Every name is prefixed with the extension name, `fixtures` by default.

use fixturekit_conf::{ExecutionContext, FixturesSettings};
use fixturekit_di::{Argument, ServiceDefinition, ServiceId, ServiceRef, ServiceRegistry};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::classes::{
	COMMAND_TAG, EXECUTOR_CLASS, FAKER_GENERATOR_CLASS, FIXTURE_LOADER_CLASS,
	LOAD_FIXTURES_COMMAND_CLASS, ORM_ADAPTER_CLASS, PURGER_CLASS, SET_ORM,
};
use crate::error::SeedingResult;
use crate::names::FixtureService;

/// Registrations produced by one run of the extension.
///
/// Entries keep registration order. Two runs over the same configuration
/// produce equal values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureRegistrations {
	prefix: String,
	services: IndexMap<FixtureService, ServiceDefinition>,
	provider_refs: Vec<ServiceRef>,
}

impl FixtureRegistrations {
	fn empty(prefix: &str) -> Self {
		Self {
			prefix: prefix.to_string(),
			services: IndexMap::new(),
			provider_refs: Vec::new(),
		}
	}

	fn push(&mut self, service: FixtureService, definition: ServiceDefinition) {
		tracing::debug!(
			service = %service.service_id(&self.prefix),
			class = %definition.class,
			"prepared fixture service"
		);
		self.services.insert(service, definition);
	}

	/// Number of registrations.
	pub fn len(&self) -> usize {
		self.services.len()
	}

	/// Returns true when nothing was registered.
	pub fn is_empty(&self) -> bool {
		self.services.is_empty()
	}

	/// Prefix the service names live under.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Gets the definition registered for a service.
	pub fn get(&self, service: &FixtureService) -> Option<&ServiceDefinition> {
		self.services.get(service)
	}

	/// Iterates over registrations in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&FixtureService, &ServiceDefinition)> {
		self.services.iter()
	}

	/// Full name a service is registered under.
	pub fn service_id(&self, service: &FixtureService) -> ServiceId {
		service.service_id(&self.prefix)
	}

	/// References to the faker providers, in configuration order.
	///
	/// Each points at this extension's own provider registration and
	/// displays as the provider class. The same list is passed to every
	/// declarative loader.
	pub fn provider_refs(&self) -> &[ServiceRef] {
		&self.provider_refs
	}

	/// Copies every registration into a container registry.
	///
	/// Nothing is added when any of the names is already taken.
	///
	/// # Errors
	///
	/// Returns [`DiError::DuplicateService`](fixturekit_di::DiError::DuplicateService)
	/// for the first name already present in `registry`.
	pub fn install(self, registry: &mut ServiceRegistry) -> SeedingResult<()> {
		if let Some(taken) = self
			.services
			.keys()
			.map(|service| service.service_id(&self.prefix))
			.find(|id| registry.contains(id))
		{
			return Err(fixturekit_di::DiError::DuplicateService(taken).into());
		}

		let count = self.services.len();
		for (service, definition) in self.services {
			registry.add_definition(service.service_id(&self.prefix), definition)?;
		}
		tracing::info!(prefix = %self.prefix, count, "installed fixture services");
		Ok(())
	}
}

impl<'a> IntoIterator for &'a FixtureRegistrations {
	type Item = (&'a FixtureService, &'a ServiceDefinition);
	type IntoIter = indexmap::map::Iter<'a, FixtureService, ServiceDefinition>;

	fn into_iter(self) -> Self::IntoIter {
		self.services.iter()
	}
}

/// Registers fixture-loading services from the fixtures configuration block.
///
/// # Examples
///
/// ```
/// use fixturekit_conf::ExecutionContext;
/// use fixturekit_seeding::{FixtureService, FixturesExtension};
/// use serde_json::json;
///
/// let registrations = FixturesExtension::new()
///     .load_configuration(
///         &json!({"faker": {"providers": ["app::faker::Books"]}}),
///         ExecutionContext::CommandLine,
///     )
///     .unwrap();
///
/// assert_eq!(registrations.len(), 8);
/// assert!(registrations.get(&FixtureService::AliceLoader("neon".into())).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturesExtension {
	name: String,
}

impl FixturesExtension {
	/// Prefix used by [`FixturesExtension::new`].
	pub const DEFAULT_NAME: &'static str = "fixtures";

	/// Creates the extension under the default `fixtures` prefix.
	pub fn new() -> Self {
		Self::with_name(Self::DEFAULT_NAME)
	}

	/// Creates the extension under a custom prefix.
	pub fn with_name(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	/// Prefix of the registered service names.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Merges, validates and registers a raw configuration block.
	///
	/// Returns an empty set when the merged `enabled` flag is `false`. No
	/// registrations are produced when validation fails.
	///
	/// # Errors
	///
	/// Returns [`SeedingError::InvalidConfiguration`](crate::SeedingError::InvalidConfiguration)
	/// for the first mistyped field.
	pub fn load_configuration(
		&self,
		raw: &Value,
		context: ExecutionContext,
	) -> SeedingResult<FixtureRegistrations> {
		match FixturesSettings::resolve(raw, context)? {
			Some(settings) => Ok(self.register(&settings)),
			None => {
				tracing::info!(extension = %self.name, "fixtures disabled, no services registered");
				Ok(FixtureRegistrations::empty(&self.name))
			}
		}
	}

	/// Registers services for already validated settings.
	pub fn register(&self, settings: &FixturesSettings) -> FixtureRegistrations {
		let mut registrations = FixtureRegistrations::empty(&self.name);
		if !settings.enabled {
			return registrations;
		}

		registrations.push(FixtureService::Purger, ServiceDefinition::new(PURGER_CLASS));
		registrations.push(FixtureService::Executor, ServiceDefinition::new(EXECUTOR_CLASS));
		registrations.push(
			FixtureService::FixtureLoader,
			ServiceDefinition::new(FIXTURE_LOADER_CLASS),
		);
		registrations.push(
			FixtureService::LoadFixturesCommand,
			ServiceDefinition::new(LOAD_FIXTURES_COMMAND_CLASS)
				.with_tag(COMMAND_TAG)
				.with_inject(true),
		);

		self.register_faker(&mut registrations, settings);
		self.register_alice(&mut registrations, settings);

		tracing::info!(
			extension = %self.name,
			count = registrations.len(),
			providers = settings.faker.providers.len(),
			loaders = settings.alice.loaders.len(),
			"registered fixture services"
		);
		registrations
	}

	fn register_faker(&self, registrations: &mut FixtureRegistrations, settings: &FixturesSettings) {
		registrations.push(
			FixtureService::FakerGenerator,
			ServiceDefinition::new(FAKER_GENERATOR_CLASS),
		);

		for (index, class) in settings.faker.providers.iter().enumerate() {
			registrations.push(
				FixtureService::FakerProvider(index),
				ServiceDefinition::new(class.as_str()),
			);
			registrations.provider_refs.push(ServiceRef::bound(
				FixtureService::FakerProvider(index).service_id(&self.name),
				class.as_str(),
			));
		}
	}

	fn register_alice(&self, registrations: &mut FixtureRegistrations, settings: &FixturesSettings) {
		let orm = FixtureService::OrmAdapter.service_id(&self.name);
		registrations.push(FixtureService::OrmAdapter, ServiceDefinition::new(ORM_ADAPTER_CLASS));

		let providers: Vec<Argument> = registrations
			.provider_refs
			.iter()
			.cloned()
			.map(Argument::reference)
			.collect();

		for (name, class) in &settings.alice.loaders {
			let definition = ServiceDefinition::new(class.as_str())
				.with_arguments(vec![
					Argument::value(settings.alice.locale.as_str()),
					Argument::List(providers.clone()),
					Argument::value(settings.alice.seed),
				])
				.with_setup(SET_ORM, vec![Argument::reference(ServiceRef::Service(orm.clone()))]);
			registrations.push(FixtureService::AliceLoader(name.clone()), definition);
		}
	}
}

impl Default for FixturesExtension {
	fn default() -> Self {
		Self::new()
	}
}
