//! Compact type-grammar parser.
//!
//! Catalog properties are declared with compact type tokens:
//!
//! - `string!` is a required string
//! - `Server[]` is an array of `Server` component references
//! - `Schema|Reference{}` is a map of `Schema` values with `$ref` allowed
//! - `='csv'|'ssv'` is a literal string enum
//!
//! Tokens beginning with an uppercase letter reference another generated
//! component; everything else is a primitive or a verbatim literal. The
//! parser is permissive by design: the catalog is trusted input, so an
//! unrecognized token is carried through as a literal type rather than
//! rejected.

mod parse;
mod types;

pub use parse::parse_property;
pub use types::{Primitive, Property, PropertyType};
