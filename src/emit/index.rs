//! Barrel file emitters.

use crate::config::{ComponentModel, ProcessedConfig};

use super::warning_banner;

/// Root barrel re-exporting every component module, in catalog order.
pub fn components_index(config: &ProcessedConfig) -> String {
    let mut out = warning_banner();
    for component in config.components() {
        out.push_str(&format!("export * from './{}'\n", component.name));
    }
    out
}

/// Per-component barrel: the interface file plus one versioned alias per
/// supported version.
pub fn component_index(component: &ComponentModel) -> String {
    let name = &component.name;
    let mut out = warning_banner();
    out.push_str(&format!("export * from './I{name}'\n"));
    for version in &component.versions {
        let v = version.suffix();
        out.push_str(&format!("export {{ {name} as {name}{v} }} from './{name}{v}'\n"));
    }
    out
}
