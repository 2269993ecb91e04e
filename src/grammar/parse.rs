//! Type-token parsing.

use crate::naming::pascal_case;

use super::types::{Primitive, Property, PropertyType};

/// Parse one compact type token into a structured property.
///
/// Returns `None` iff the token is empty (the property is absent for the
/// version being parsed). Suffixes strip in order: `!` (required), `[]`
/// (array), `{}` (map). A leading `=` on the remaining text switches to
/// literal-enum parsing; otherwise the text splits on `|` into alternatives.
///
/// The parser never fails: tokens that match nothing known become verbatim
/// literal types.
pub fn parse_property(key: &str, token: &str) -> Option<Property> {
    if token.is_empty() {
        return None;
    }

    let mut rest = token;
    let mut required = false;
    let mut is_array = false;
    let mut is_map = false;

    if let Some(stripped) = rest.strip_suffix('!') {
        required = true;
        rest = stripped;
    }
    if let Some(stripped) = rest.strip_suffix("[]") {
        is_array = true;
        rest = stripped;
    }
    if let Some(stripped) = rest.strip_suffix("{}") {
        // A token carrying both wrappers is contradictory; the outermost
        // suffix (the array) wins and the map suffix is dropped, keeping
        // is_array and is_map mutually exclusive. Validation flags these.
        if !is_array {
            is_map = true;
        }
        rest = stripped;
    }

    if let Some(literals) = rest.strip_prefix('=') {
        // Literal enum: ='a'|'b'. A single string-typed member is
        // synthesized carrying the verbatim literal union, and the quoted
        // values are recorded separately for schema emission.
        let enum_values = literals.split('|').map(|v| unquote(v).to_string()).collect();
        return Some(Property {
            key: key.to_string(),
            required,
            is_array,
            is_map,
            ref_allowed: false,
            types: vec![PropertyType::Literal(literals.to_string())],
            enum_values,
        });
    }

    let mut ref_allowed = false;
    let mut types = Vec::new();

    for alternative in rest.split('|') {
        if alternative.starts_with(|c: char| c.is_ascii_uppercase()) {
            let name = pascal_case(alternative);
            if name == "Reference" {
                ref_allowed = true;
            } else {
                types.push(PropertyType::Component { name });
            }
        } else if let Some(primitive) = Primitive::from_token(alternative) {
            types.push(PropertyType::Primitive(primitive));
        } else {
            types.push(PropertyType::Literal(alternative.to_string()));
        }
    }

    Some(Property {
        key: key.to_string(),
        required,
        is_array,
        is_map,
        ref_allowed,
        types,
        enum_values: Vec::new(),
    })
}

/// Strip a matched pair of single quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(value)
}
