//! Ordered registry of service definitions.
//!
//! The registry is an ordinary value: extensions produce definitions and
//! install them here, and a [`Container`](crate::Container) is built from it.
//! Declaration order matters because a definition may only reference services
//! declared before it.

use std::collections::HashSet;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::definition::{ClassId, ServiceDefinition, ServiceId, ServiceRef};
use crate::error::{DiError, DiResult};

/// Service definitions keyed by name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceRegistry {
	definitions: IndexMap<ServiceId, ServiceDefinition>,
}

impl ServiceRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a definition under a unique name.
	///
	/// Returns the stored definition for further adjustment.
	///
	/// # Errors
	///
	/// Returns [`DiError::DuplicateService`] if the name is taken.
	pub fn add_definition(
		&mut self,
		id: impl Into<ServiceId>,
		definition: ServiceDefinition,
	) -> DiResult<&mut ServiceDefinition> {
		match self.definitions.entry(id.into()) {
			Entry::Occupied(entry) => Err(DiError::DuplicateService(entry.key().clone())),
			Entry::Vacant(entry) => {
				tracing::debug!(service = %entry.key(), class = %definition.class, "registered service");
				Ok(entry.insert(definition))
			}
		}
	}

	/// Gets a definition by name.
	pub fn get(&self, id: &ServiceId) -> Option<&ServiceDefinition> {
		self.definitions.get(id)
	}

	/// Returns true if a service is registered under the name.
	pub fn contains(&self, id: &ServiceId) -> bool {
		self.definitions.contains_key(id)
	}

	/// Number of registered services.
	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}

	/// Iterates over definitions in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&ServiceId, &ServiceDefinition)> {
		self.definitions.iter()
	}

	/// Names of the services carrying a tag, in declaration order.
	pub fn find_by_tag(&self, tag: &str) -> Vec<&ServiceId> {
		self.definitions
			.iter()
			.filter(|(_, definition)| definition.has_tag(tag))
			.map(|(id, _)| id)
			.collect()
	}

	/// Names of the services implementing a class, in declaration order.
	pub fn find_by_class(&self, class: &ClassId) -> Vec<&ServiceId> {
		self.definitions
			.iter()
			.filter(|(_, definition)| &definition.class == class)
			.map(|(id, _)| id)
			.collect()
	}

	/// Checks that every reference points to a service declared earlier.
	///
	/// Class references must match exactly one earlier service. Bound
	/// references must name an earlier service of the stated class.
	pub fn check_references(&self) -> DiResult<()> {
		let mut declared: HashSet<&ServiceId> = HashSet::new();
		for (index, (id, definition)) in self.definitions.iter().enumerate() {
			for reference in definition.references() {
				match reference {
					ServiceRef::Service(target) if declared.contains(target) => {}
					ServiceRef::Bound { service: target, class }
						if declared.contains(target)
							&& self.definitions.get(target).is_some_and(|earlier| &earlier.class == class) => {}
					ServiceRef::Class(class) => {
						let candidates: Vec<ServiceId> = self
							.definitions
							.iter()
							.take(index)
							.filter(|(_, earlier)| &earlier.class == class)
							.map(|(earlier_id, _)| earlier_id.clone())
							.collect();
						match candidates.len() {
							1 => {}
							0 => {
								return Err(DiError::UnresolvedReference {
									service: id.clone(),
									reference: reference.clone(),
								});
							}
							_ => {
								return Err(DiError::AmbiguousClass {
									class: class.clone(),
									candidates,
								});
							}
						}
					}
					ServiceRef::Service(_) | ServiceRef::Bound { .. } => {
						return Err(DiError::UnresolvedReference {
							service: id.clone(),
							reference: reference.clone(),
						});
					}
				}
			}
			declared.insert(id);
		}
		Ok(())
	}
}

impl<'a> IntoIterator for &'a ServiceRegistry {
	type Item = (&'a ServiceId, &'a ServiceDefinition);
	type IntoIter = indexmap::map::Iter<'a, ServiceId, ServiceDefinition>;

	fn into_iter(self) -> Self::IntoIter {
		self.definitions.iter()
	}
}
