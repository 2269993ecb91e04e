//! Name normalization helpers.
//!
//! Catalog entries use human-readable names ("Media Type", "OAuth Flow").
//! Generated code needs PascalCase identifiers derived from them, and spec
//! URLs need kebab-case reference slugs.

/// Convert a human-readable name to a PascalCase identifier.
///
/// Spaces are removed and the letter following each removed space is
/// uppercased, as is the first letter. Existing capitalization is kept, so
/// "OpenAPI" stays "OpenAPI" and "Media Type" becomes "MediaType".
pub fn pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;

    for ch in name.chars() {
        if ch == ' ' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Convert a human-readable name to the kebab-case slug used in spec URLs.
///
/// "Media Type" becomes "media-type".
pub fn reference_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Escape property names that collide with reserved words when used as
/// local variable names in emitted code.
pub fn safe_var_name(name: &str) -> String {
    match name {
        "default" | "enum" | "in" => format!("_{}", name),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_single_word() {
        assert_eq!(pascal_case("schema"), "Schema");
        assert_eq!(pascal_case("Schema"), "Schema");
    }

    #[test]
    fn test_pascal_case_spaced() {
        assert_eq!(pascal_case("Media Type"), "MediaType");
        assert_eq!(pascal_case("External Documentation"), "ExternalDocumentation");
        assert_eq!(pascal_case("OAuth Flow"), "OAuthFlow");
    }

    #[test]
    fn test_pascal_case_keeps_existing_capitals() {
        assert_eq!(pascal_case("OpenAPI"), "OpenAPI");
    }

    #[test]
    fn test_reference_slug() {
        assert_eq!(reference_slug("Media Type"), "media-type");
        assert_eq!(reference_slug("Schema"), "schema");
        assert_eq!(reference_slug("External Documentation"), "external-documentation");
    }

    #[test]
    fn test_safe_var_name_reserved() {
        assert_eq!(safe_var_name("default"), "_default");
        assert_eq!(safe_var_name("enum"), "_enum");
        assert_eq!(safe_var_name("in"), "_in");
    }

    #[test]
    fn test_safe_var_name_plain() {
        assert_eq!(safe_var_name("description"), "description");
    }
}
