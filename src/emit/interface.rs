//! Interface file emitter.
//!
//! One file per component declaring, for each supported version, the
//! author-facing `I<Name><v>Definition` shape and the built `I<Name><v>`
//! runtime shape. Cross-component references import the referenced
//! interface symbols from the parent barrel, sorted, excluding the
//! component's own symbols.

use std::collections::BTreeSet;

use crate::config::{ComponentModel, VersionModel};

use super::{property_types, warning_banner};

pub fn interface_file(component: &ComponentModel) -> String {
    let mut out = warning_banner();
    out.push_str("import { IComponentInstance } from '../IComponent'\n");

    let mut imports = BTreeSet::new();
    for (dependency, versions) in &component.joined_dependencies {
        if dependency == &component.name {
            continue;
        }
        for version in versions {
            let v = version.suffix();
            imports.insert(format!("I{dependency}{v}"));
            imports.insert(format!("I{dependency}{v}Definition"));
        }
    }
    if !imports.is_empty() {
        let list: Vec<String> = imports.into_iter().collect();
        out.push_str("import {\n  ");
        out.push_str(&list.join(",\n  "));
        out.push_str("\n} from '../'\n");
    }
    out.push('\n');

    for version in &component.versions {
        if let Some(model) = component.version(*version) {
            let v = version.suffix();

            out.push_str(&format!("export interface I{}{v}Definition {{\n", component.name));
            interface_body(&mut out, model, v, true);
            out.push_str("}\n");

            out.push_str(&format!(
                "export interface I{}{v} extends IComponentInstance {{\n",
                component.name
            ));
            interface_body(&mut out, model, v, false);
            out.push_str("}\n");
        }
    }

    out
}

fn interface_body(out: &mut String, model: &VersionModel, v: &str, definition: bool) {
    if model.allows_extensions {
        out.push_str("  [extension: `x-${string}`]: any\n");
    }

    if let Some(additional) = &model.additional_properties {
        out.push_str(&format!(
            "  [key: {}]: {}\n",
            model.key_pattern,
            property_types(additional, v, definition, None)
        ));
    }

    for property in &model.properties {
        let optional = if property.required { "" } else { "?" };
        out.push_str(&format!(
            "  {}{optional}: {}\n",
            property.key,
            property_types(property, v, definition, None)
        ));
    }
}
