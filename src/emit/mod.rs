//! Emitters: pure functions from processed component models to generated
//! file text.
//!
//! One function per target file kind: the root barrel, per-component
//! barrels, interface files, and per-version implementation files. Every
//! emitter returns complete file text beginning with the warning banner.
//! Nothing here touches the filesystem; the [`crate::generate`] pipeline
//! owns reading, merging and writing.

mod index;
mod interface;
mod schema;

pub use index::{component_index, components_index};
pub use interface::interface_file;
pub use schema::implementation_file;

use std::collections::BTreeSet;

use crate::grammar::{Property, PropertyType};
use crate::merge::{REGION_BEGIN_OPEN, REGION_CLOSE, REGION_END_OPEN};

/// Fixed banner at the top of every generated file.
pub(crate) fn warning_banner() -> String {
    [
        "/*",
        " * !!!!!!!!!!!!!!!!!!!!!!!!!!!!   IMPORTANT   !!!!!!!!!!!!!!!!!!!!!!!!!!!!",
        " *",
        " *  A portion of this file has been created from a template. You can only edit",
        " *  content in some regions within this file. Look for a region that begins with",
        " *  // <!# Custom Content Begin: *** #!>",
        " *  and ends with",
        " *  // <!# Custom Content End: *** #!>",
        " *  where the *** is replaced by a string of some value. Within these custom",
        " *  content regions you can edit the file without worrying about a loss of your",
        " *  code.",
        " */",
        "",
        "",
    ]
    .join("\n")
}

/// An editable region with an empty placeholder interior.
pub(crate) fn custom_region(name: &str, indent: &str) -> String {
    format!(
        "{indent}{REGION_BEGIN_OPEN}{name}{REGION_CLOSE}\n{indent}\n{indent}{REGION_END_OPEN}{name}{REGION_CLOSE}\n"
    )
}

/// Render a property's type union for a type position in emitted code.
///
/// Component references become `I<Name><v>` symbols (`...Definition` in the
/// author-facing shape) and are recorded in `deps` when given; primitives
/// and literals render verbatim. Array and map wrappers apply outside the
/// union.
pub(crate) fn property_types(
    property: &Property,
    suffix: &str,
    definition: bool,
    mut deps: Option<&mut BTreeSet<String>>,
) -> String {
    let rendered: Vec<String> = property
        .types
        .iter()
        .map(|alternative| match alternative {
            PropertyType::Component { name } => {
                let symbol = if definition {
                    format!("I{name}{suffix}Definition")
                } else {
                    format!("I{name}{suffix}")
                };
                if let Some(deps) = deps.as_deref_mut() {
                    deps.insert(symbol.clone());
                }
                symbol
            }
            PropertyType::Primitive(primitive) => primitive.as_str().to_string(),
            PropertyType::Literal(raw) => raw.clone(),
        })
        .collect();

    if rendered.is_empty() {
        // A union emptied by Reference removal renders as nothing; the
        // validation pass flags these properties.
        return String::new();
    }

    if property.is_array {
        if rendered.len() > 1 {
            format!("Array<{}>", rendered.join(" | "))
        } else {
            format!("{}[]", rendered[0])
        }
    } else if property.is_map {
        format!("Record<string, {}>", rendered.join(" | "))
    } else {
        rendered.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse_property;

    #[test]
    fn test_property_types_single_component() {
        let property = parse_property("server", "Server").unwrap();
        assert_eq!(property_types(&property, "3", false, None), "IServer3");
        assert_eq!(property_types(&property, "3", true, None), "IServer3Definition");
    }

    #[test]
    fn test_property_types_map_union() {
        let property = parse_property("examples", "Example|Reference{}").unwrap();
        assert_eq!(
            property_types(&property, "3", false, None),
            "Record<string, IExample3>"
        );
    }

    #[test]
    fn test_property_types_single_array() {
        let property = parse_property("servers", "Server[]").unwrap();
        assert_eq!(property_types(&property, "3", false, None), "IServer3[]");
    }

    #[test]
    fn test_property_types_union_array() {
        let property = parse_property("values", "string|number[]").unwrap();
        assert_eq!(property_types(&property, "3", false, None), "Array<string | number>");
    }

    #[test]
    fn test_property_types_literal_enum_verbatim() {
        let property = parse_property("style", "='form'|'simple'").unwrap();
        assert_eq!(property_types(&property, "3", false, None), "'form'|'simple'");
    }

    #[test]
    fn test_property_types_records_dependencies() {
        let property = parse_property("schema", "Schema|Reference").unwrap();
        let mut deps = BTreeSet::new();
        let rendered = property_types(&property, "3", false, Some(&mut deps));

        assert_eq!(rendered, "ISchema3");
        assert!(deps.contains("ISchema3"));
        assert_eq!(deps.len(), 1);
    }

    #[test]
    fn test_custom_region_shape() {
        let region = custom_region("HEADER", "  ");
        assert_eq!(
            region,
            "  // <!# Custom Content Begin: HEADER #!>\n  \n  // <!# Custom Content End: HEADER #!>\n"
        );
    }

    #[test]
    fn test_banner_markers_are_inert() {
        // The banner mentions the marker syntax with a *** placeholder
        // name, which the region scanner must not treat as a region.
        assert!(crate::merge::extract_regions(&warning_banner()).is_empty());
    }
}
