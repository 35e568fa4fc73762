//! `TypeTag` — The shared type vocabulary for parameters and supplied values
//!
//! Declared parameter types and supplied argument types are compared through
//! the same small vocabulary: a handful of primitives, an `Object` top type
//! that accepts anything, and `Named` tags for nominal domain types.
//!
//! Values never flow through this crate — only their types do. The selector
//! decides *which overload* to call; actually binding values is the host's
//! concern.

use std::fmt;

/// A type in the selection vocabulary.
///
/// # Assignability
///
/// - Any tag is assignable to [`Object`](Self::Object) (the top type).
/// - [`Int`](Self::Int) widens to [`Float`](Self::Float).
/// - [`Named`](Self::Named) tags are nominal: they only match themselves.
///
/// # Example
///
/// ```
/// use finer::TypeTag;
///
/// assert!(TypeTag::Object.accepts(&TypeTag::String));
/// assert!(TypeTag::Float.accepts(&TypeTag::Int));
/// assert!(!TypeTag::Int.accepts(&TypeTag::Float)); // no narrowing
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Textual data — the most common case for route and query values.
    String,

    /// Signed integer data.
    Int,

    /// Floating-point data.
    Float,

    /// Boolean data.
    Bool,

    /// Raw bytes data.
    Bytes,

    /// The top type: every value is assignable to an `Object` parameter.
    Object,

    /// A nominal domain type, matched by name only.
    ///
    /// Convention: use `snake_case` names, e.g. `"route_values"`,
    /// `"customer_id"`.
    Named(String),
}

impl TypeTag {
    /// Returns `true` if a value of type `supplied` can bind to a parameter
    /// declared as `self`, either exactly or by widening.
    #[must_use]
    pub fn accepts(&self, supplied: &TypeTag) -> bool {
        self == supplied || self.widens_from(supplied)
    }

    /// Returns `true` if `supplied` is assignable to `self` *without* being
    /// an exact match: widening to `Object`, or `Int` to `Float`.
    #[must_use]
    pub fn widens_from(&self, supplied: &TypeTag) -> bool {
        match (self, supplied) {
            (Self::Object, s) => s != &Self::Object,
            (Self::Float, Self::Int) => true,
            _ => false,
        }
    }

    /// Returns a string naming this tag.
    ///
    /// The inverse of [`TypeTag::from`] for the primitive tags; `Named` tags
    /// render as their name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Bytes => "bytes",
            Self::Object => "object",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for TypeTag {
    /// Parse a tag from its name. Unrecognized names become [`Named`](Self::Named)
    /// tags, so domain vocabularies need no registration step.
    fn from(name: &str) -> Self {
        match name {
            "string" => Self::String,
            "int" => Self::Int,
            "float" => Self::Float,
            "bool" => Self::Bool,
            "bytes" => Self::Bytes,
            "object" => Self::Object,
            other => Self::Named(other.to_string()),
        }
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TypeTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from(name))
    }
}
