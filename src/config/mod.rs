//! Component catalog model and loading.
//!
//! The catalog maps human-readable component names ("Media Type") to
//! per-version definitions whose properties use the compact type grammar.
//! Declaration order is meaningful, driving the order of exports in the
//! generated barrel files, so the catalog and its property maps preserve
//! insertion order instead of sorting.
//!
//! A catalog is built programmatically (see [`crate::catalog`]) or loaded
//! from a YAML file:
//!
//! ```yaml
//! Contact:
//!   v3:
//!     allowsExtensions: true
//!     properties:
//!       name: string
//!       url: string
//! ```

mod graph;
mod process;

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{GenError, Result};

pub use graph::DependencyGraph;
pub use process::{process, ComponentModel, ProcessedConfig, VersionModel};

/// A supported spec major revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecVersion {
    /// OpenAPI 2.0.
    V2,
    /// OpenAPI 3.0.0 through 3.0.3.
    V3,
}

impl SpecVersion {
    pub const ALL: [SpecVersion; 2] = [SpecVersion::V2, SpecVersion::V3];

    /// Suffix used in generated type and file names ("2" / "3").
    pub fn suffix(&self) -> &'static str {
        match self {
            SpecVersion::V2 => "2",
            SpecVersion::V3 => "3",
        }
    }

    /// Catalog key ("v2" / "v3").
    pub fn key(&self) -> &'static str {
        match self {
            SpecVersion::V2 => "v2",
            SpecVersion::V3 => "v3",
        }
    }

    /// The concrete spec revisions this major version covers.
    pub fn revisions(&self) -> &'static [&'static str] {
        match self {
            SpecVersion::V2 => &["2.0"],
            SpecVersion::V3 => &["3.0.0", "3.0.1", "3.0.2", "3.0.3"],
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Declaration-ordered property map (field name -> type token).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap(Vec<(String, String)>);

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, token: impl Into<String>) {
        self.0.push((key.into(), token.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, t)| (k.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for PropertyMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PropertyMapVisitor;

        impl<'de> Visitor<'de> for PropertyMapVisitor {
            type Value = PropertyMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of property name to type token")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, token)) = access.next_entry::<String, String>()? {
                    entries.push((key, token));
                }
                Ok(PropertyMap(entries))
            }
        }

        deserializer.deserialize_map(PropertyMapVisitor)
    }
}

/// One version's raw definition within a component entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionConfig {
    /// Whether the object accepts `x-*` specification extensions.
    pub allows_extensions: bool,

    /// Type token for free-form keys, when the object is map-like.
    pub additional_properties: Option<String>,

    /// Key type for the additional-properties index signature.
    /// Defaults to `string`.
    pub additional_properties_key_pattern: Option<String>,

    /// Declared properties, field name -> type token.
    pub properties: PropertyMap,

    /// Whether the built schema may be memoized in the generated module.
    /// Defaults to true.
    pub schema_is_cacheable: Option<bool>,
}

impl VersionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allows_extensions(mut self, allows: bool) -> Self {
        self.allows_extensions = allows;
        self
    }

    pub fn additional_properties(mut self, token: &str) -> Self {
        self.additional_properties = Some(token.to_string());
        self
    }

    pub fn key_pattern(mut self, pattern: &str) -> Self {
        self.additional_properties_key_pattern = Some(pattern.to_string());
        self
    }

    pub fn property(mut self, key: &str, token: &str) -> Self {
        self.properties.insert(key, token);
        self
    }

    pub fn properties(mut self, entries: &[(&str, &str)]) -> Self {
        for (key, token) in entries {
            self.properties.insert(*key, *token);
        }
        self
    }

    pub fn schema_is_cacheable(mut self, cacheable: bool) -> Self {
        self.schema_is_cacheable = Some(cacheable);
        self
    }
}

/// A component entry: which spec versions it supports, and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    pub v2: Option<VersionConfig>,
    pub v3: Option<VersionConfig>,
}

impl ComponentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: SpecVersion, config: VersionConfig) -> Self {
        match version {
            SpecVersion::V2 => self.v2 = Some(config),
            SpecVersion::V3 => self.v3 = Some(config),
        }
        self
    }

    pub fn get(&self, version: SpecVersion) -> Option<&VersionConfig> {
        match version {
            SpecVersion::V2 => self.v2.as_ref(),
            SpecVersion::V3 => self.v3.as_ref(),
        }
    }

    /// Declared versions, in `v2`, `v3` order.
    pub fn versions(&self) -> Vec<SpecVersion> {
        SpecVersion::ALL
            .into_iter()
            .filter(|v| self.get(*v).is_some())
            .collect()
    }
}

/// The full catalog: declaration-ordered map of full component name -> entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentsConfig {
    entries: Vec<(String, ComponentConfig)>,
}

impl ComponentsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, full_name: impl Into<String>, config: ComponentConfig) {
        self.entries.push((full_name.into(), config));
    }

    pub fn get(&self, full_name: &str) -> Option<&ComponentConfig> {
        self.entries
            .iter()
            .find(|(name, _)| name == full_name)
            .map(|(_, config)| config)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentConfig)> {
        self.entries.iter().map(|(name, config)| (name.as_str(), config))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read catalog: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a catalog from YAML text.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| GenError::Config {
            message: format!("Invalid catalog: {}", e),
            help: Some("Check the catalog YAML syntax".to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for ComponentsConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ComponentsConfig;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of component name to version definitions")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, config)) = access.next_entry::<String, ComponentConfig>()? {
                    entries.push((name, config));
                }
                Ok(ComponentsConfig { entries })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
