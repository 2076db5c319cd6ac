//! Dependency graph visualization
//!
//! Renders a [`ServiceRegistry`] in DOT format, which can be rendered using
//! Graphviz.
//!
//! ## Example
//!
//! ```rust
//! use fixturekit_di::visualization::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_node("fixtures.alice.orm", "alice::orm::Doctrine");
//! graph.add_node("fixtures.alice.loader.neon", "alice::loader::Neon");
//! graph.add_dependency("fixtures.alice.loader.neon", "fixtures.alice.orm");
//!
//! let dot = graph.to_dot();
//! assert!(dot.contains("digraph"));
//! ```

use indexmap::IndexMap;

use crate::definition::ServiceRef;
use crate::registry::ServiceRegistry;

/// Represents a node in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
	/// Service name
	pub name: String,
	/// Implementing class
	pub class: String,
	/// Whether the service carries any tag
	pub tagged: bool,
}

/// Dependency graph for visualization
#[derive(Debug, Default)]
pub struct DependencyGraph {
	nodes: IndexMap<String, GraphNode>,
	edges: Vec<(String, String)>,
}

impl DependencyGraph {
	/// Create a new empty dependency graph
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds the graph of a registry.
	///
	/// Class references point at the service implementing the class, or at a
	/// `@class` placeholder node when no such service is registered.
	pub fn from_registry(registry: &ServiceRegistry) -> Self {
		let mut graph = Self::new();
		for (id, definition) in registry {
			graph.nodes.insert(
				id.to_string(),
				GraphNode {
					name: id.to_string(),
					class: definition.class.to_string(),
					tagged: !definition.tags.is_empty(),
				},
			);
		}

		for (id, definition) in registry {
			for reference in definition.references() {
				let target = match reference {
					ServiceRef::Service(target) | ServiceRef::Bound { service: target, .. } => {
						target.to_string()
					}
					ServiceRef::Class(class) => match registry.find_by_class(class).first() {
						Some(target) => target.to_string(),
						None => reference.to_string(),
					},
				};
				graph.add_dependency(id.to_string(), target);
			}
		}
		graph
	}

	/// Add a node to the graph
	pub fn add_node(&mut self, name: impl Into<String>, class: impl Into<String>) {
		let name = name.into();
		self.nodes.insert(
			name.clone(),
			GraphNode {
				name,
				class: class.into(),
				tagged: false,
			},
		);
	}

	/// Add a dependency edge from `from` to `to`
	pub fn add_dependency(&mut self, from: impl Into<String>, to: impl Into<String>) {
		self.edges.push((from.into(), to.into()));
	}

	/// Number of nodes
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Generate DOT format output for Graphviz
	pub fn to_dot(&self) -> String {
		let mut output = String::from("digraph DependencyGraph {\n");
		output.push_str("  rankdir=LR;\n");
		output.push_str("  node [shape=box, style=rounded];\n\n");

		for node in self.nodes.values() {
			let color = if node.tagged { "lightgreen" } else { "lightblue" };
			output.push_str(&format!(
				"  \"{}\" [label=\"{}\\n({})\", fillcolor={}, style=filled];\n",
				node.name, node.name, node.class, color
			));
		}

		output.push('\n');

		for (from, to) in &self.edges {
			output.push_str(&format!("  \"{}\" -> \"{}\";\n", from, to));
		}

		output.push_str("}\n");
		output
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::definition::{Argument, ServiceDefinition};
	use rstest::rstest;

	#[rstest]
	fn test_from_registry_edges() {
		let mut registry = ServiceRegistry::new();
		registry
			.add_definition("orm", ServiceDefinition::new("Orm"))
			.unwrap();
		registry
			.add_definition("provider", ServiceDefinition::new("Books"))
			.unwrap();
		registry
			.add_definition(
				"loader",
				ServiceDefinition::new("Loader")
					.with_arguments(vec![Argument::list(vec![
						Argument::reference(ServiceRef::class("Books")),
						Argument::reference(ServiceRef::class("Missing")),
					])])
					.with_setup(
						"set_orm",
						vec![Argument::reference(ServiceRef::service("orm"))],
					),
			)
			.unwrap();

		let graph = DependencyGraph::from_registry(&registry);
		let dot = graph.to_dot();

		assert_eq!(graph.node_count(), 3);
		assert_eq!(graph.edge_count(), 3);
		assert!(dot.contains("\"loader\" -> \"provider\";"));
		assert!(dot.contains("\"loader\" -> \"@Missing\";"));
		assert!(dot.contains("\"loader\" -> \"orm\";"));
	}

	#[rstest]
	fn test_tagged_nodes_are_highlighted() {
		let mut registry = ServiceRegistry::new();
		registry
			.add_definition("cmd", ServiceDefinition::new("Cmd").with_tag("console.command"))
			.unwrap();

		let dot = DependencyGraph::from_registry(&registry).to_dot();

		assert!(dot.contains("fillcolor=lightgreen"));
	}
}
