//! Structured property model produced by the type-grammar parser.

/// A primitive type name recognized by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Any,
    Array,
    Boolean,
    Number,
    Object,
    String,
}

impl Primitive {
    /// Match a raw token against the known primitive names.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "any" => Some(Primitive::Any),
            "array" => Some(Primitive::Array),
            "boolean" => Some(Primitive::Boolean),
            "number" => Some(Primitive::Number),
            "object" => Some(Primitive::Object),
            "string" => Some(Primitive::String),
            _ => None,
        }
    }

    /// The token text as it renders in emitted type positions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Any => "any",
            Primitive::Array => "array",
            Primitive::Boolean => "boolean",
            Primitive::Number => "number",
            Primitive::Object => "object",
            Primitive::String => "string",
        }
    }
}

/// One alternative in a property's type union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    /// A cross-reference to another generated component (raw token begins
    /// with an uppercase letter). `name` is the PascalCase identifier.
    Component { name: String },

    /// A built-in primitive type.
    Primitive(Primitive),

    /// A quoted literal (`'simple'`) or unrecognized token, carried
    /// verbatim.
    Literal(String),
}

impl PropertyType {
    /// Whether this alternative references another component.
    pub fn is_component(&self) -> bool {
        matches!(self, PropertyType::Component { .. })
    }

    /// The referenced component name, if this is a component reference.
    pub fn component_name(&self) -> Option<&str> {
        match self {
            PropertyType::Component { name } => Some(name),
            _ => None,
        }
    }
}

/// A parsed property or additional-properties entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Field name. Empty for additional-properties entries.
    pub key: String,

    /// Trailing `!` on the raw token.
    pub required: bool,

    /// Trailing `[]` on the raw token. Mutually exclusive with `is_map`.
    pub is_array: bool,

    /// Trailing `{}` on the raw token. Mutually exclusive with `is_array`.
    pub is_map: bool,

    /// True when a `Reference` alternative was present in the raw token.
    /// The alternative itself is removed from `types`: a `$ref` escape
    /// hatch is a property-level capability, not a variant of the value's
    /// own shape.
    pub ref_allowed: bool,

    /// Type alternatives, in declaration order.
    pub types: Vec<PropertyType>,

    /// Literal values for `='a'|'b'` enum tokens, unquoted.
    pub enum_values: Vec<String>,
}

impl Property {
    /// Names of all component references in the type union.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().filter_map(PropertyType::component_name)
    }
}
