//! Service definition types.
//!
//! A [`ServiceDefinition`] tells a container how to construct one service:
//! which class to build, which arguments to pass, which setup calls to run
//! after construction and which tags the service carries. References to other
//! services are typed [`ServiceRef`] handles, resolved once by the container.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Name of a registered service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
	/// Creates a service name.
	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	/// Returns the name as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ServiceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ServiceId {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for ServiceId {
	fn from(name: String) -> Self {
		Self(name)
	}
}

/// Identifier of the implementation a factory builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
	/// Creates a class identifier.
	pub fn new(class: impl Into<String>) -> Self {
		Self(class.into())
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ClassId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ClassId {
	fn from(class: &str) -> Self {
		Self::new(class)
	}
}

impl From<String> for ClassId {
	fn from(class: String) -> Self {
		Self(class)
	}
}

/// Reference from one definition to another service.
///
/// Displays as `@name` (or `@class`) but is never parsed back from a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceRef {
	/// The service registered under this name.
	Service(ServiceId),
	/// The single service implementing this class.
	Class(ClassId),
	/// A named service expected to implement `class`.
	///
	/// Resolves by name like [`ServiceRef::Service`] but displays as the
	/// class, so services of the same class elsewhere do not interfere.
	Bound {
		/// Target service.
		service: ServiceId,
		/// Class the target implements.
		class: ClassId,
	},
}

impl ServiceRef {
	/// Reference by service name.
	pub fn service(id: impl Into<ServiceId>) -> Self {
		Self::Service(id.into())
	}

	/// Reference by implementing class.
	pub fn class(class: impl Into<ClassId>) -> Self {
		Self::Class(class.into())
	}

	/// Reference by name, displayed by implementing class.
	pub fn bound(service: impl Into<ServiceId>, class: impl Into<ClassId>) -> Self {
		Self::Bound {
			service: service.into(),
			class: class.into(),
		}
	}
}

impl fmt::Display for ServiceRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ServiceRef::Service(id) => write!(f, "@{}", id),
			ServiceRef::Class(class) | ServiceRef::Bound { class, .. } => write!(f, "@{}", class),
		}
	}
}

impl Serialize for ServiceRef {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

/// Constructor or setup-call argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Argument {
	/// Plain scalar or structured value.
	Value(Value),
	/// Another service, resolved by the container.
	Reference(ServiceRef),
	/// Ordered list of arguments.
	List(Vec<Argument>),
}

impl Argument {
	/// Creates a value argument.
	pub fn value(value: impl Into<Value>) -> Self {
		Self::Value(value.into())
	}

	/// Creates a reference argument.
	pub fn reference(reference: ServiceRef) -> Self {
		Self::Reference(reference)
	}

	/// Creates a list argument.
	pub fn list(items: impl IntoIterator<Item = Argument>) -> Self {
		Self::List(items.into_iter().collect())
	}

	/// Collects every reference held by this argument, depth first.
	pub fn references(&self) -> Vec<&ServiceRef> {
		match self {
			Argument::Value(_) => Vec::new(),
			Argument::Reference(reference) => vec![reference],
			Argument::List(items) => items.iter().flat_map(Argument::references).collect(),
		}
	}
}

impl From<ServiceRef> for Argument {
	fn from(reference: ServiceRef) -> Self {
		Self::Reference(reference)
	}
}

/// Method called on a service right after it is constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetupCall {
	/// Method name.
	pub method: String,
	/// Call arguments.
	pub arguments: Vec<Argument>,
}

impl SetupCall {
	/// Creates a setup call.
	pub fn new(method: impl Into<String>, arguments: Vec<Argument>) -> Self {
		Self {
			method: method.into(),
			arguments,
		}
	}
}

/// Declarative description of one service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceDefinition {
	/// Implementing class.
	pub class: ClassId,
	/// Ordered constructor arguments.
	pub arguments: Vec<Argument>,
	/// Ordered post-construction calls.
	pub setup: Vec<SetupCall>,
	/// Discovery tags and their values.
	pub tags: IndexMap<String, Value>,
	/// Whether the container runs the service's injection hook.
	pub inject: bool,
}

impl ServiceDefinition {
	/// Creates a definition with no arguments, setup calls or tags.
	pub fn new(class: impl Into<ClassId>) -> Self {
		Self {
			class: class.into(),
			arguments: Vec::new(),
			setup: Vec::new(),
			tags: IndexMap::new(),
			inject: false,
		}
	}

	/// Replaces the constructor arguments.
	pub fn with_arguments(mut self, arguments: Vec<Argument>) -> Self {
		self.arguments = arguments;
		self
	}

	/// Appends a setup call.
	pub fn with_setup(mut self, method: impl Into<String>, arguments: Vec<Argument>) -> Self {
		self.setup.push(SetupCall::new(method, arguments));
		self
	}

	/// Adds a tag with value `true`.
	pub fn with_tag(self, tag: impl Into<String>) -> Self {
		self.with_tag_value(tag, Value::Bool(true))
	}

	/// Adds a tag with an explicit value.
	pub fn with_tag_value(mut self, tag: impl Into<String>, value: impl Into<Value>) -> Self {
		self.tags.insert(tag.into(), value.into());
		self
	}

	/// Sets the injection flag.
	pub fn with_inject(mut self, inject: bool) -> Self {
		self.inject = inject;
		self
	}

	/// Returns true if the definition carries the tag.
	pub fn has_tag(&self, tag: &str) -> bool {
		self.tags.contains_key(tag)
	}

	/// All references made by constructor arguments and setup calls, in order.
	pub fn references(&self) -> Vec<&ServiceRef> {
		self.arguments
			.iter()
			.chain(self.setup.iter().flat_map(|call| call.arguments.iter()))
			.flat_map(Argument::references)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(ServiceRef::service("fixtures.alice.orm"), "@fixtures.alice.orm")]
	#[case(ServiceRef::class("app::faker::Books"), "@app::faker::Books")]
	#[case(
		ServiceRef::bound("fixtures.faker.provider.0", "app::faker::Books"),
		"@app::faker::Books"
	)]
	fn test_reference_display(#[case] reference: ServiceRef, #[case] expected: &str) {
		assert_eq!(reference.to_string(), expected);
	}

	#[rstest]
	fn test_definition_builder() {
		let definition = ServiceDefinition::new("alice::Loader")
			.with_arguments(vec![
				Argument::value("en_US"),
				Argument::list(vec![Argument::reference(ServiceRef::class("p::A"))]),
				Argument::value(3),
			])
			.with_setup(
				"set_orm",
				vec![Argument::reference(ServiceRef::service("orm"))],
			)
			.with_tag("console.command")
			.with_inject(true);

		assert_eq!(definition.class, ClassId::new("alice::Loader"));
		assert_eq!(definition.arguments.len(), 3);
		assert_eq!(definition.setup.len(), 1);
		assert!(definition.has_tag("console.command"));
		assert!(!definition.has_tag("other"));
		assert!(definition.inject);
	}

	#[rstest]
	fn test_references_cover_arguments_and_setup() {
		let definition = ServiceDefinition::new("x")
			.with_arguments(vec![Argument::list(vec![
				Argument::reference(ServiceRef::class("a")),
				Argument::reference(ServiceRef::class("b")),
			])])
			.with_setup("set_c", vec![ServiceRef::service("c").into()]);

		let references: Vec<String> = definition
			.references()
			.into_iter()
			.map(ToString::to_string)
			.collect();
		assert_eq!(references, vec!["@a", "@b", "@c"]);
	}

	#[rstest]
	fn test_definition_serializes_references_as_strings() {
		let definition = ServiceDefinition::new("x")
			.with_arguments(vec![
				Argument::value(7),
				Argument::list(vec![Argument::reference(ServiceRef::class("p"))]),
			])
			.with_setup("set_orm", vec![ServiceRef::service("orm").into()]);

		let value = serde_json::to_value(&definition).unwrap();
		assert_eq!(value["class"], json!("x"));
		assert_eq!(value["arguments"], json!([7, ["@p"]]));
		assert_eq!(value["setup"][0]["method"], json!("set_orm"));
		assert_eq!(value["setup"][0]["arguments"], json!(["@orm"]));
	}
}
