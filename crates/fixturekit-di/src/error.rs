//! Error types for service registration and resolution.

use thiserror::Error;

use crate::definition::{ClassId, ServiceId, ServiceRef};

/// Errors raised while building a registry or resolving it into a container.
#[derive(Debug, Error)]
pub enum DiError {
	/// A service with the same name is already registered.
	#[error("Service already registered: {0}")]
	DuplicateService(ServiceId),

	/// No service is registered under the requested name.
	#[error("Service not found: {0}")]
	UnknownService(ServiceId),

	/// A definition references a service that is not declared before it.
	#[error("Service '{service}' references unresolved {reference}")]
	UnresolvedReference {
		/// Service holding the reference.
		service: ServiceId,
		/// The reference that could not be resolved.
		reference: ServiceRef,
	},

	/// A class reference matches more than one service.
	#[error("Reference @{class} is ambiguous: {candidates:?}")]
	AmbiguousClass {
		/// The referenced class identifier.
		class: ClassId,
		/// Services implementing that class.
		candidates: Vec<ServiceId>,
	},

	/// No factory is registered for a class identifier.
	#[error("No factory registered for class: {0}")]
	MissingFactory(ClassId),

	/// A setup call names a method the service does not handle.
	#[error("Unknown setup method '{method}' on {class}")]
	UnknownMethod {
		/// Class of the service receiving the call.
		class: ClassId,
		/// Method name.
		method: String,
	},

	/// An argument had an unexpected shape.
	#[error("Invalid argument {index}: expected {expected}")]
	InvalidArgument {
		/// Argument position.
		index: usize,
		/// Expected shape.
		expected: &'static str,
	},

	/// A factory failed to create its service.
	#[error("Factory error: {0}")]
	Factory(String),
}

impl DiError {
	/// Wraps a failure reported by a service factory.
	pub fn factory(source: impl std::fmt::Display) -> Self {
		Self::Factory(source.to_string())
	}
}

/// Result type alias for DI operations.
pub type DiResult<T> = Result<T, DiError>;
