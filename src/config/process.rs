//! Configuration processor.
//!
//! Walks the raw catalog, parses every type token, and accumulates the
//! dependency bookkeeping the emitters need: per-version dependency sets,
//! a per-component joined map of dependency -> versions that need it, and a
//! catalog-wide dependency graph.

use std::collections::{BTreeMap, BTreeSet};

use crate::grammar::{parse_property, Property};
use crate::naming::{pascal_case, reference_slug};

use super::graph::DependencyGraph;
use super::{ComponentsConfig, SpecVersion};

/// Default key type for additional-properties index signatures.
const DEFAULT_KEY_PATTERN: &str = "string";

/// One version of a component, fully parsed.
#[derive(Debug, Clone)]
pub struct VersionModel {
    pub allows_extensions: bool,

    /// Parsed additional-properties entry, when the object is map-like.
    pub additional_properties: Option<Property>,

    /// Key type for the additional-properties index signature.
    pub key_pattern: String,

    /// Parsed properties, in declaration order.
    pub properties: Vec<Property>,

    /// Components this version references, sorted.
    pub dependencies: BTreeSet<String>,

    pub schema_is_cacheable: bool,
}

/// A component, fully parsed across its supported versions.
#[derive(Debug, Clone)]
pub struct ComponentModel {
    /// Human-readable name, may contain spaces.
    pub full_name: String,

    /// PascalCase identifier used in generated code and paths.
    pub name: String,

    /// Kebab-case slug used in spec URLs.
    pub reference: String,

    /// Supported versions, in `v2`, `v3` order.
    pub versions: Vec<SpecVersion>,

    /// Dependency -> versions of this component that need it, sorted.
    pub joined_dependencies: BTreeMap<String, BTreeSet<SpecVersion>>,

    v2: Option<VersionModel>,
    v3: Option<VersionModel>,
}

impl ComponentModel {
    /// The model for one version, if supported.
    pub fn version(&self, version: SpecVersion) -> Option<&VersionModel> {
        match version {
            SpecVersion::V2 => self.v2.as_ref(),
            SpecVersion::V3 => self.v3.as_ref(),
        }
    }

    pub fn supports(&self, version: SpecVersion) -> bool {
        self.version(version).is_some()
    }
}

/// The processed catalog: component models in declaration order plus the
/// catalog-wide dependency graph.
#[derive(Debug)]
pub struct ProcessedConfig {
    components: Vec<ComponentModel>,
    graph: DependencyGraph,
}

impl ProcessedConfig {
    /// Component models in catalog declaration order.
    pub fn components(&self) -> &[ComponentModel] {
        &self.components
    }

    /// Look a component up by its PascalCase identifier.
    pub fn get(&self, name: &str) -> Option<&ComponentModel> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Process a raw catalog into component models.
///
/// Total: malformed type tokens parse permissively, so processing never
/// fails. All dependency containers are sorted so repeated runs produce
/// byte-identical generated output for unchanged input.
pub fn process(config: &ComponentsConfig) -> ProcessedConfig {
    let mut components = Vec::with_capacity(config.len());
    let mut graph = DependencyGraph::new();

    for (full_name, entry) in config.iter() {
        let name = pascal_case(full_name);
        let reference = reference_slug(full_name);
        graph.register(name.clone());

        let mut joined_dependencies: BTreeMap<String, BTreeSet<SpecVersion>> = BTreeMap::new();
        let mut versions = Vec::new();
        let mut v2 = None;
        let mut v3 = None;

        for version in SpecVersion::ALL {
            let Some(raw) = entry.get(version) else {
                continue;
            };
            versions.push(version);

            let additional_properties = raw
                .additional_properties
                .as_deref()
                .and_then(|token| parse_property("", token));

            let properties: Vec<Property> = raw
                .properties
                .iter()
                .filter_map(|(key, token)| parse_property(key, token))
                .collect();

            let mut dependencies = BTreeSet::new();
            for property in additional_properties.iter().chain(properties.iter()) {
                for dependency in property.component_names() {
                    dependencies.insert(dependency.to_string());
                    joined_dependencies
                        .entry(dependency.to_string())
                        .or_default()
                        .insert(version);
                    graph.add_dependency(name.clone(), dependency.to_string());
                }
            }

            let model = VersionModel {
                allows_extensions: raw.allows_extensions,
                additional_properties,
                key_pattern: raw
                    .additional_properties_key_pattern
                    .clone()
                    .unwrap_or_else(|| DEFAULT_KEY_PATTERN.to_string()),
                properties,
                dependencies,
                schema_is_cacheable: raw.schema_is_cacheable.unwrap_or(true),
            };

            match version {
                SpecVersion::V2 => v2 = Some(model),
                SpecVersion::V3 => v3 = Some(model),
            }
        }

        components.push(ComponentModel {
            full_name: full_name.to_string(),
            name,
            reference,
            versions,
            joined_dependencies,
            v2,
            v3,
        });
    }

    ProcessedConfig { components, graph }
}
