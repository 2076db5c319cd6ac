//! Resolving container.
//!
//! [`Container::build`] turns a [`ServiceRegistry`] into live service
//! instances. Each class identifier is built by a [`ServiceFactory`] looked up
//! in a [`FactoryRegistry`]; references are resolved against services that are
//! already built, so instantiation follows declaration order.
//!
//! ## Example
//!
//! ```rust
//! use std::any::Any;
//! use fixturekit_di::{
//! 	Container, FactoryRegistry, Service, ServiceDefinition, ServiceId, ServiceRegistry,
//! };
//!
//! struct Purger;
//!
//! impl Service for Purger {
//! 	fn as_any(&self) -> &dyn Any {
//! 		self
//! 	}
//! }
//!
//! let mut registry = ServiceRegistry::new();
//! registry.add_definition("purger", ServiceDefinition::new("OrmPurger")).unwrap();
//!
//! let mut factories = FactoryRegistry::new();
//! factories.register_fn("OrmPurger", |_| Ok(Box::new(Purger)));
//!
//! let container = Container::build(&registry, &factories).unwrap();
//! assert!(container.get_as::<Purger>(&ServiceId::new("purger")).is_some());
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::definition::{Argument, ClassId, ServiceId, ServiceRef};
use crate::error::{DiError, DiResult};
use crate::registry::ServiceRegistry;

/// A live service instance owned by a [`Container`].
pub trait Service: Any + Send + Sync {
	/// Returns the service as `Any` for downcasting.
	fn as_any(&self) -> &dyn Any;

	/// Handles a setup call scheduled by the service definition.
	///
	/// The default implementation accepts no methods.
	fn call(&mut self, method: &str, arguments: Vec<ResolvedArgument>) -> DiResult<()> {
		let _ = arguments;
		Err(DiError::UnknownMethod {
			class: ClassId::new(std::any::type_name::<Self>()),
			method: method.to_string(),
		})
	}

	/// Injection hook, run before setup calls when the definition asks for it.
	fn inject(&mut self, container: &Container) -> DiResult<()> {
		let _ = container;
		Ok(())
	}
}

/// Argument after reference resolution.
#[derive(Clone)]
pub enum ResolvedArgument {
	/// Plain value.
	Value(Value),
	/// Shared service instance.
	Service(Arc<dyn Service>),
	/// Ordered list.
	List(Vec<ResolvedArgument>),
}

impl ResolvedArgument {
	/// Returns the string value, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ResolvedArgument::Value(value) => value.as_str(),
			_ => None,
		}
	}

	/// Returns the integer value, if any.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			ResolvedArgument::Value(value) => value.as_i64(),
			_ => None,
		}
	}

	/// Returns the service instance, if any.
	pub fn as_service(&self) -> Option<&Arc<dyn Service>> {
		match self {
			ResolvedArgument::Service(service) => Some(service),
			_ => None,
		}
	}

	/// Returns the list items, if any.
	pub fn as_list(&self) -> Option<&[ResolvedArgument]> {
		match self {
			ResolvedArgument::List(items) => Some(items),
			_ => None,
		}
	}
}

impl fmt::Debug for ResolvedArgument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ResolvedArgument::Value(value) => f.debug_tuple("Value").field(value).finish(),
			ResolvedArgument::Service(_) => f.write_str("Service(..)"),
			ResolvedArgument::List(items) => f.debug_tuple("List").field(items).finish(),
		}
	}
}

/// Builds services of one class identifier.
pub trait ServiceFactory: Send + Sync {
	/// Creates a service from resolved constructor arguments.
	fn create(&self, arguments: Vec<ResolvedArgument>) -> DiResult<Box<dyn Service>>;
}

/// Adapts a closure into a [`ServiceFactory`].
pub struct FnFactory<F>(F);

impl<F> FnFactory<F>
where
	F: Fn(Vec<ResolvedArgument>) -> DiResult<Box<dyn Service>> + Send + Sync,
{
	/// Wraps a closure.
	pub fn new(f: F) -> Self {
		Self(f)
	}
}

impl<F> ServiceFactory for FnFactory<F>
where
	F: Fn(Vec<ResolvedArgument>) -> DiResult<Box<dyn Service>> + Send + Sync,
{
	fn create(&self, arguments: Vec<ResolvedArgument>) -> DiResult<Box<dyn Service>> {
		(self.0)(arguments)
	}
}

/// Factories keyed by class identifier.
#[derive(Clone, Default)]
pub struct FactoryRegistry {
	factories: HashMap<ClassId, Arc<dyn ServiceFactory>>,
}

impl FactoryRegistry {
	/// Creates an empty factory registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a factory, replacing any previous one for the class.
	pub fn register<F: ServiceFactory + 'static>(
		&mut self,
		class: impl Into<ClassId>,
		factory: F,
	) -> &mut Self {
		self.factories.insert(class.into(), Arc::new(factory));
		self
	}

	/// Registers a closure as a factory.
	pub fn register_fn<F>(&mut self, class: impl Into<ClassId>, f: F) -> &mut Self
	where
		F: Fn(Vec<ResolvedArgument>) -> DiResult<Box<dyn Service>> + Send + Sync + 'static,
	{
		self.register(class, FnFactory::new(f))
	}

	/// Gets the factory for a class.
	pub fn get(&self, class: &ClassId) -> Option<Arc<dyn ServiceFactory>> {
		self.factories.get(class).cloned()
	}

	/// Returns true if a factory is registered for the class.
	pub fn contains(&self, class: &ClassId) -> bool {
		self.factories.contains_key(class)
	}

	/// Number of registered factories.
	pub fn len(&self) -> usize {
		self.factories.len()
	}

	/// Returns true if no factories are registered.
	pub fn is_empty(&self) -> bool {
		self.factories.is_empty()
	}
}

struct ContainerEntry {
	class: ClassId,
	tags: Vec<String>,
	instance: Arc<dyn Service>,
}

/// Built services, shared as singletons.
#[derive(Default)]
pub struct Container {
	entries: IndexMap<ServiceId, ContainerEntry>,
}

impl Container {
	/// Instantiates every definition of the registry in declaration order.
	///
	/// # Errors
	///
	/// Fails if a reference cannot be resolved, a class has no factory, a
	/// factory fails or a setup call is rejected.
	pub fn build(registry: &ServiceRegistry, factories: &FactoryRegistry) -> DiResult<Self> {
		registry.check_references()?;

		let mut container = Container::default();
		for (id, definition) in registry {
			let factory = factories
				.get(&definition.class)
				.ok_or_else(|| DiError::MissingFactory(definition.class.clone()))?;

			let arguments = container.resolve_all(id, &definition.arguments)?;
			let mut instance = factory.create(arguments)?;

			if definition.inject {
				instance.inject(&container)?;
			}
			for call in &definition.setup {
				let arguments = container.resolve_all(id, &call.arguments)?;
				instance.call(&call.method, arguments)?;
			}

			tracing::debug!(service = %id, class = %definition.class, "instantiated service");
			container.entries.insert(
				id.clone(),
				ContainerEntry {
					class: definition.class.clone(),
					tags: definition.tags.keys().cloned().collect(),
					instance: Arc::from(instance),
				},
			);
		}

		tracing::info!(services = container.len(), "container built");
		Ok(container)
	}

	/// Gets a service instance by name.
	pub fn get(&self, id: &ServiceId) -> Option<Arc<dyn Service>> {
		self.entries.get(id).map(|entry| Arc::clone(&entry.instance))
	}

	/// Gets a service instance by name, failing if it was not built.
	///
	/// # Errors
	///
	/// Returns [`DiError::UnknownService`] when no service has the name.
	pub fn require(&self, id: &ServiceId) -> DiResult<Arc<dyn Service>> {
		self.get(id).ok_or_else(|| DiError::UnknownService(id.clone()))
	}

	/// Gets a service by name and downcasts it to its concrete type.
	pub fn get_as<T: Any>(&self, id: &ServiceId) -> Option<&T> {
		self.entries
			.get(id)
			.and_then(|entry| entry.instance.as_any().downcast_ref::<T>())
	}

	/// Returns the single service implementing a class.
	pub fn get_by_class(&self, class: &ClassId) -> DiResult<Option<Arc<dyn Service>>> {
		let mut matches = self.entries.iter().filter(|(_, entry)| &entry.class == class);
		match (matches.next(), matches.next()) {
			(None, _) => Ok(None),
			(Some((_, entry)), None) => Ok(Some(Arc::clone(&entry.instance))),
			(Some(_), Some(_)) => Err(DiError::AmbiguousClass {
				class: class.clone(),
				candidates: self
					.entries
					.iter()
					.filter(|(_, entry)| &entry.class == class)
					.map(|(id, _)| id.clone())
					.collect(),
			}),
		}
	}

	/// Names of the services carrying a tag, in declaration order.
	pub fn tagged(&self, tag: &str) -> Vec<&ServiceId> {
		self.entries
			.iter()
			.filter(|(_, entry)| entry.tags.iter().any(|t| t == tag))
			.map(|(id, _)| id)
			.collect()
	}

	/// Returns true if a service with the name was built.
	pub fn contains(&self, id: &ServiceId) -> bool {
		self.entries.contains_key(id)
	}

	/// Number of built services.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no services were built.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn resolve_all(
		&self,
		service: &ServiceId,
		arguments: &[Argument],
	) -> DiResult<Vec<ResolvedArgument>> {
		arguments
			.iter()
			.map(|argument| self.resolve(service, argument))
			.collect()
	}

	fn resolve(&self, service: &ServiceId, argument: &Argument) -> DiResult<ResolvedArgument> {
		match argument {
			Argument::Value(value) => Ok(ResolvedArgument::Value(value.clone())),
			Argument::List(items) => Ok(ResolvedArgument::List(self.resolve_all(service, items)?)),
			Argument::Reference(reference) => {
				let instance = match reference {
					ServiceRef::Service(target) | ServiceRef::Bound { service: target, .. } => {
						self.get(target)
					}
					ServiceRef::Class(class) => self.get_by_class(class)?,
				};
				instance
					.map(ResolvedArgument::Service)
					.ok_or_else(|| DiError::UnresolvedReference {
						service: service.clone(),
						reference: reference.clone(),
					})
			}
		}
	}
}

impl fmt::Debug for Container {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Container")
			.field("services", &self.entries.keys().collect::<Vec<_>>())
			.finish()
	}
}
