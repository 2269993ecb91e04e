//! End-to-end generation tests.
//!
//! Drives the full pipeline against a small catalog and checks the
//! generated tree, cross-component references, and regeneration behavior.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use oasgen::config::{ComponentConfig, ComponentsConfig, SpecVersion, VersionConfig};
use oasgen::{generate, GenerateOptions};

fn widget_gadget_catalog() -> ComponentsConfig {
    let mut catalog = ComponentsConfig::new();
    catalog.insert(
        "Widget",
        ComponentConfig::new().with_version(
            SpecVersion::V3,
            VersionConfig::new()
                .allows_extensions(true)
                .property("color", "string"),
        ),
    );
    catalog.insert(
        "Gadget",
        ComponentConfig::new().with_version(
            SpecVersion::V3,
            VersionConfig::new()
                .allows_extensions(true)
                .property("part", "Widget"),
        ),
    );
    catalog
}

#[test]
fn generates_expected_tree() {
    let dir = tempdir().unwrap();
    generate(&widget_gadget_catalog(), dir.path(), &GenerateOptions::default()).unwrap();

    for path in [
        "index.ts",
        "Widget/index.ts",
        "Widget/IWidget.ts",
        "Widget/Widget3.ts",
        "Gadget/index.ts",
        "Gadget/IGadget.ts",
        "Gadget/Gadget3.ts",
    ] {
        assert!(dir.path().join(path).is_file(), "missing {}", path);
    }

    let root = fs::read_to_string(dir.path().join("index.ts")).unwrap();
    assert!(root.contains("export * from './Widget'"));
    assert!(root.contains("export * from './Gadget'"));
}

#[test]
fn gadget_references_widget_for_v3_only() {
    let dir = tempdir().unwrap();
    generate(&widget_gadget_catalog(), dir.path(), &GenerateOptions::default()).unwrap();

    let interface = fs::read_to_string(dir.path().join("Gadget/IGadget.ts")).unwrap();
    assert!(interface.contains("IWidget3"));
    assert!(interface.contains("IWidget3Definition"));
    assert!(interface.contains("part?: IWidget3Definition"));
    assert!(!interface.contains("IWidget2"));

    // The implementation file references both the interfaces and the
    // component class for the schema descriptor.
    let implementation = fs::read_to_string(dir.path().join("Gadget/Gadget3.ts")).unwrap();
    assert!(implementation.contains("component: Widget3"));
    assert!(implementation.contains("part?: IWidget3"));
    assert!(!implementation.contains("Widget2"));
}

#[test]
fn widget_does_not_reference_gadget() {
    let dir = tempdir().unwrap();
    generate(&widget_gadget_catalog(), dir.path(), &GenerateOptions::default()).unwrap();

    let interface = fs::read_to_string(dir.path().join("Widget/IWidget.ts")).unwrap();
    assert!(!interface.contains("Gadget"));
}

#[test]
fn regeneration_is_idempotent() {
    let dir = tempdir().unwrap();
    let catalog = widget_gadget_catalog();

    generate(&catalog, dir.path(), &GenerateOptions::default()).unwrap();
    let first = fs::read_to_string(dir.path().join("Gadget/Gadget3.ts")).unwrap();

    let summary = generate(&catalog, dir.path(), &GenerateOptions::default()).unwrap();
    let second = fs::read_to_string(dir.path().join("Gadget/Gadget3.ts")).unwrap();

    assert_eq!(first, second);
    assert_eq!(summary.created() + summary.updated(), 0);
}

#[test]
fn custom_regions_survive_regeneration() {
    let dir = tempdir().unwrap();
    let catalog = widget_gadget_catalog();
    generate(&catalog, dir.path(), &GenerateOptions::default()).unwrap();

    let path = dir.path().join("Widget/Widget3.ts");
    let text = fs::read_to_string(&path).unwrap();
    let edited = text.replace(
        "  // <!# Custom Content Begin: BODY #!>\n  \n",
        "  // <!# Custom Content Begin: BODY #!>\n  getColor (): string | undefined {\n    return this.color\n  }\n",
    );
    assert_ne!(text, edited, "edit must land inside the BODY region");
    fs::write(&path, &edited).unwrap();

    generate(&catalog, dir.path(), &GenerateOptions::default()).unwrap();
    let regenerated = fs::read_to_string(&path).unwrap();

    assert!(regenerated.contains("getColor (): string | undefined"));
    assert_eq!(regenerated, edited);
}

#[test]
fn dropped_regions_are_reported() {
    let dir = tempdir().unwrap();
    let catalog = widget_gadget_catalog();
    generate(&catalog, dir.path(), &GenerateOptions::default()).unwrap();

    // Simulate a file generated by an older template with a region the
    // current template no longer has.
    let path = dir.path().join("Widget/Widget3.ts");
    let mut text = fs::read_to_string(&path).unwrap();
    text.push_str("// <!# Custom Content Begin: LEGACY #!>\n// old notes\n// <!# Custom Content End: LEGACY #!>\n");
    fs::write(&path, &text).unwrap();

    let summary = generate(&catalog, dir.path(), &GenerateOptions::default()).unwrap();

    let dropped: Vec<(&std::path::Path, &str)> = summary.dropped_regions().collect();
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].1, "LEGACY");

    // Documented lossy behavior: the content really is gone.
    let regenerated = fs::read_to_string(&path).unwrap();
    assert!(!regenerated.contains("LEGACY"));
    assert!(!regenerated.contains("// old notes"));
}

#[test]
fn unsupported_versions_stay_absent() {
    let dir = tempdir().unwrap();
    generate(&widget_gadget_catalog(), dir.path(), &GenerateOptions::default()).unwrap();

    assert!(!dir.path().join("Gadget/Gadget2.ts").exists());

    let barrel = fs::read_to_string(dir.path().join("Gadget/index.ts")).unwrap();
    assert!(barrel.contains("export { Gadget as Gadget3 } from './Gadget3'"));
    assert!(!barrel.contains("Gadget2"));
}

#[test]
fn spec_table_marks_unsupported_revisions() {
    let dir = tempdir().unwrap();
    generate(&widget_gadget_catalog(), dir.path(), &GenerateOptions::default()).unwrap();

    let implementation = fs::read_to_string(dir.path().join("Widget/Widget3.ts")).unwrap();
    assert!(implementation.contains("'2.0': false"));
    assert!(implementation.contains("'3.0.0': 'https://spec.openapis.org/oas/v3.0.0#widget-object'"));
}

#[test]
fn builtin_catalog_generates_and_converges() {
    let dir = tempdir().unwrap();
    let catalog = oasgen::openapi_catalog();

    let first = generate(&catalog, dir.path(), &GenerateOptions::default()).unwrap();
    assert!(first.created() > 0);

    let second = generate(&catalog, dir.path(), &GenerateOptions::default()).unwrap();
    assert_eq!(second.created(), 0);
    assert_eq!(second.updated(), 0);
    assert_eq!(second.unchanged(), first.created());
}
