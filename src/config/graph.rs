//! Cross-component dependency graph.
//!
//! Tracks which components reference which other components across all of
//! their versions. Iteration order is stable (sorted by name) so dependent
//! output is deterministic run to run.
//!
//! Component references are legitimately cyclic (`Schema` references
//! `Schema`), so there is no build-order sorting here; the generator only
//! needs edge queries.

use std::collections::{BTreeMap, BTreeSet};

/// A dependency graph over component names.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Component -> components it references.
    dependencies: BTreeMap<String, BTreeSet<String>>,

    /// Component -> components that reference it.
    dependents: BTreeMap<String, BTreeSet<String>>,

    /// All known components (including those with no edges).
    components: BTreeSet<String>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component in the graph, even with no edges.
    pub fn register(&mut self, name: impl Into<String>) {
        self.components.insert(name.into());
    }

    /// Add an edge: `from` references `to`. Both endpoints are registered.
    pub fn add_dependency(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into();
        let to = to.into();

        self.components.insert(from.clone());
        self.components.insert(to.clone());

        self.dependencies
            .entry(from.clone())
            .or_default()
            .insert(to.clone());

        self.dependents.entry(to).or_default().insert(from);
    }

    /// Components that `name` references, sorted.
    pub fn dependencies_of(&self, name: &str) -> impl Iterator<Item = &str> {
        self.dependencies
            .get(name)
            .map(|s| s.iter())
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Components that reference `name`, sorted.
    pub fn dependents_of(&self, name: &str) -> impl Iterator<Item = &str> {
        self.dependents
            .get(name)
            .map(|s| s.iter())
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// All registered components, sorted.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.components().count(), 0);
    }

    #[test]
    fn test_register_without_edges() {
        let mut graph = DependencyGraph::new();
        graph.register("Contact");

        assert!(graph.contains("Contact"));
        assert_eq!(graph.dependencies_of("Contact").count(), 0);
        assert_eq!(graph.dependents_of("Contact").count(), 0);
    }

    #[test]
    fn test_edges_are_directional() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Info", "Contact");

        let deps: Vec<&str> = graph.dependencies_of("Info").collect();
        assert_eq!(deps, vec!["Contact"]);

        // No spurious symmetry: Contact does not depend on Info.
        assert_eq!(graph.dependencies_of("Contact").count(), 0);

        let dependents: Vec<&str> = graph.dependents_of("Contact").collect();
        assert_eq!(dependents, vec!["Info"]);
        assert_eq!(graph.dependents_of("Info").count(), 0);
    }

    #[test]
    fn test_self_reference_is_allowed() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Schema", "Schema");

        let deps: Vec<&str> = graph.dependencies_of("Schema").collect();
        assert_eq!(deps, vec!["Schema"]);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Operation", "SecurityRequirement");
        graph.add_dependency("Operation", "Callback");
        graph.add_dependency("Operation", "ExternalDocumentation");

        let deps: Vec<&str> = graph.dependencies_of("Operation").collect();
        assert_eq!(
            deps,
            vec!["Callback", "ExternalDocumentation", "SecurityRequirement"]
        );
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Response", "Header");
        graph.add_dependency("Response", "Header");

        assert_eq!(graph.dependencies_of("Response").count(), 1);
    }
}
