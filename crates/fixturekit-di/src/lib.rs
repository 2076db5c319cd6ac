//! # fixturekit dependency injection
//!
//! Declarative service registrations and the container that resolves them.
//!
//! ## Features
//!
//! - **Declarative**: a [`ServiceDefinition`] names a class, its constructor
//!   arguments, post-construction setup calls and discovery tags
//! - **Typed references**: [`ServiceRef`] points at another service by name or
//!   by implementing class, never through a parsed string
//! - **Ordered**: [`ServiceRegistry`] keeps declaration order and rejects
//!   duplicate names; references may only point backwards
//! - **Explicit factories**: [`FactoryRegistry`] is an ordinary value, there is
//!   no global registration state
//!
//! ## Example
//!
//! ```rust
//! use fixturekit_di::{Argument, ServiceDefinition, ServiceRef, ServiceRegistry};
//!
//! let mut registry = ServiceRegistry::new();
//! registry
//! 	.add_definition("orm", ServiceDefinition::new("alice::orm::Doctrine"))
//! 	.unwrap();
//! registry
//! 	.add_definition(
//! 		"loader",
//! 		ServiceDefinition::new("alice::loader::Neon")
//! 			.with_arguments(vec![Argument::value("en_US")])
//! 			.with_setup("set_orm", vec![Argument::reference(ServiceRef::service("orm"))]),
//! 	)
//! 	.unwrap();
//!
//! assert!(registry.check_references().is_ok());
//! ```

pub mod container;
pub mod definition;
pub mod error;
pub mod registry;
pub mod visualization;

pub use container::{Container, FactoryRegistry, FnFactory, ResolvedArgument, Service, ServiceFactory};
pub use definition::{Argument, ClassId, ServiceDefinition, ServiceId, ServiceRef, SetupCall};
pub use error::{DiError, DiResult};
pub use registry::ServiceRegistry;
