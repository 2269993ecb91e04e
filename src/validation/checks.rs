//! Individual validation checks.
//!
//! Each check takes the raw or processed catalog and returns a
//! `ValidationReport`.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{ComponentsConfig, ProcessedConfig, SpecVersion};
use crate::grammar::parse_property;
use crate::naming::pascal_case;

use super::{Diagnostic, ValidationReport};

/// Collect every (component, version, property key, token) in a raw
/// catalog. Additional-properties entries use a synthetic key.
fn each_token<'a>(config: &'a ComponentsConfig) -> Vec<(&'a str, SpecVersion, String, &'a str)> {
    let mut tokens = Vec::new();

    for (full_name, entry) in config.iter() {
        for version in SpecVersion::ALL {
            let Some(raw) = entry.get(version) else {
                continue;
            };
            if let Some(token) = raw.additional_properties.as_deref() {
                tokens.push((full_name, version, "(additional properties)".to_string(), token));
            }
            for (key, token) in raw.properties.iter() {
                tokens.push((full_name, version, key.to_string(), token));
            }
        }
    }

    tokens
}

/// Two full names normalizing to the same PascalCase identifier would
/// generate into the same directory.
pub fn check_name_collisions(config: &ComponentsConfig) -> ValidationReport {
    let mut result = ValidationReport::new();
    let mut seen: BTreeMap<String, Vec<&str>> = BTreeMap::new();

    for (full_name, _) in config.iter() {
        seen.entry(pascal_case(full_name)).or_default().push(full_name);
    }

    for (name, full_names) in &seen {
        if full_names.len() > 1 {
            result.push(
                Diagnostic::error(
                    "oasgen::validate::name-collision",
                    format!(
                        "Components {} all normalize to '{}'",
                        full_names
                            .iter()
                            .map(|n| format!("'{}'", n))
                            .collect::<Vec<_>>()
                            .join(", "),
                        name
                    ),
                )
                .for_component(name.clone())
                .with_help("Rename one of the components; generated paths would overlap"),
            );
        }
    }

    result
}

/// Component references with no definition anywhere in the catalog.
///
/// These are not fatal, since the target library may define the symbol
/// by hand, but they deserve a look.
pub fn check_unknown_references(processed: &ProcessedConfig) -> ValidationReport {
    let mut result = ValidationReport::new();
    let defined: BTreeSet<&str> = processed.components().iter().map(|c| c.name.as_str()).collect();

    for component in processed.components() {
        for (dependency, versions) in &component.joined_dependencies {
            if defined.contains(dependency.as_str()) {
                continue;
            }
            let versions: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
            result.push(
                Diagnostic::warning(
                    "oasgen::validate::unknown-reference",
                    format!(
                        "References '{}' ({}) which is not defined in the catalog",
                        dependency,
                        versions.join(", ")
                    ),
                )
                .for_component(component.name.clone())
                .with_help("The generated import only resolves if the symbol is hand-written"),
            );
        }
    }

    result
}

/// Tokens carrying both `[]` and `{}` wrappers. The parser resolves these
/// deterministically (array wins) but the token is almost certainly a typo.
pub fn check_wrapper_conflicts(config: &ComponentsConfig) -> ValidationReport {
    let mut result = ValidationReport::new();

    for (full_name, version, key, token) in each_token(config) {
        let base = token.strip_suffix('!').unwrap_or(token);
        let conflicted = (base.ends_with("[]") && base[..base.len() - 2].ends_with("{}"))
            || (base.ends_with("{}") && base[..base.len() - 2].ends_with("[]"));

        if conflicted {
            result.push(
                Diagnostic::warning(
                    "oasgen::validate::wrapper-conflict",
                    format!(
                        "Token '{}' ({}) mixes array and map wrappers; the array wins",
                        token, version
                    ),
                )
                .for_component(pascal_case(full_name))
                .for_property(key),
            );
        }
    }

    result
}

/// Literal-enum tokens with empty values, e.g. a stray `='a'||'b'`.
pub fn check_empty_literals(config: &ComponentsConfig) -> ValidationReport {
    let mut result = ValidationReport::new();

    for (full_name, version, key, token) in each_token(config) {
        let Some(property) = parse_property(&key, token) else {
            continue;
        };
        if property.enum_values.iter().any(|value| value.is_empty()) {
            result.push(
                Diagnostic::warning(
                    "oasgen::validate::empty-literal",
                    format!("Token '{}' ({}) contains an empty literal value", token, version),
                )
                .for_component(pascal_case(full_name))
                .for_property(key),
            );
        }
    }

    result
}

/// Properties whose type union is empty once `Reference` is pulled out.
/// They render with no type at all.
pub fn check_reference_only_unions(config: &ComponentsConfig) -> ValidationReport {
    let mut result = ValidationReport::new();

    for (full_name, version, key, token) in each_token(config) {
        let Some(property) = parse_property(&key, token) else {
            continue;
        };
        if property.ref_allowed && property.types.is_empty() {
            result.push(
                Diagnostic::warning(
                    "oasgen::validate::reference-only",
                    format!(
                        "Token '{}' ({}) allows $ref but has no value type of its own",
                        token, version
                    ),
                )
                .for_component(pascal_case(full_name))
                .for_property(key)
                .with_help("Add a concrete alternative, e.g. 'Schema|Reference'"),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComponentConfig, VersionConfig};
    use crate::validation::validate_config;

    fn single(full_name: &str, config: VersionConfig) -> ComponentsConfig {
        let mut catalog = ComponentsConfig::new();
        catalog.insert(full_name, ComponentConfig::new().with_version(SpecVersion::V3, config));
        catalog
    }

    #[test]
    fn test_clean_catalog() {
        let mut catalog = ComponentsConfig::new();
        catalog.insert(
            "Contact",
            ComponentConfig::new().with_version(
                SpecVersion::V3,
                VersionConfig::new().allows_extensions(true).property("name", "string"),
            ),
        );
        let report = validate_config(&catalog);
        assert!(report.is_clean());
    }

    #[test]
    fn test_name_collision_is_error() {
        let mut catalog = ComponentsConfig::new();
        catalog.insert(
            "Media Type",
            ComponentConfig::new().with_version(SpecVersion::V3, VersionConfig::new()),
        );
        catalog.insert(
            "MediaType",
            ComponentConfig::new().with_version(SpecVersion::V3, VersionConfig::new()),
        );

        let report = validate_config(&catalog);
        assert!(report.has_errors());
        let diagnostic = report.iter().next().unwrap();
        assert_eq!(diagnostic.code, "oasgen::validate::name-collision");
    }

    #[test]
    fn test_unknown_reference_is_warning() {
        let catalog = single(
            "Paths",
            VersionConfig::new().allows_extensions(true).additional_properties("Path"),
        );

        let report = validate_config(&catalog);
        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 1);

        let diagnostic = report.iter().next().unwrap();
        assert_eq!(diagnostic.code, "oasgen::validate::unknown-reference");
        assert_eq!(diagnostic.component.as_deref(), Some("Paths"));
        assert!(diagnostic.message.contains("'Path'"));
    }

    #[test]
    fn test_known_references_are_quiet() {
        let mut catalog = ComponentsConfig::new();
        catalog.insert(
            "Widget",
            ComponentConfig::new().with_version(
                SpecVersion::V3,
                VersionConfig::new().property("part", "Gadget"),
            ),
        );
        catalog.insert(
            "Gadget",
            ComponentConfig::new().with_version(SpecVersion::V3, VersionConfig::new()),
        );

        let report = validate_config(&catalog);
        assert!(report.is_clean());
    }

    #[test]
    fn test_wrapper_conflict_detected() {
        let catalog = single("Thing", VersionConfig::new().property("parts", "string{}[]"));
        let report = validate_config(&catalog);

        let codes: Vec<&str> = report.iter().map(|d| d.code.as_str()).collect();
        assert!(codes.contains(&"oasgen::validate::wrapper-conflict"));
    }

    #[test]
    fn test_wrapper_conflict_other_order() {
        let catalog = single("Thing", VersionConfig::new().property("parts", "string[]{}!"));
        let report = validate_config(&catalog);
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_empty_literal_detected() {
        let catalog = single("Thing", VersionConfig::new().property("style", "='a'||'b'"));
        let report = validate_config(&catalog);

        let codes: Vec<&str> = report.iter().map(|d| d.code.as_str()).collect();
        assert!(codes.contains(&"oasgen::validate::empty-literal"));
    }

    #[test]
    fn test_reference_only_union_detected() {
        let catalog = single("Thing", VersionConfig::new().property("target", "Reference"));
        let report = validate_config(&catalog);

        let codes: Vec<&str> = report.iter().map(|d| d.code.as_str()).collect();
        assert!(codes.contains(&"oasgen::validate::reference-only"));
    }

    #[test]
    fn test_builtin_catalog_has_no_errors() {
        let report = validate_config(&crate::catalog::openapi_catalog());

        // Items and Path are hand-written in the target library, so the
        // builtin catalog warns but never errors.
        assert!(!report.has_errors());
        assert!(report.warning_count() > 0);
    }
}
