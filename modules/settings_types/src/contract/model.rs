//! Contract models for settings types
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - wire shapes live in `api::wire`.

/// Type descriptor attached to a setting by configuration metadata
///
/// An absent descriptor (`Option::None` at call sites) means the setting is
/// untyped and is handled as raw JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// Elapsed time written as `NdNhNmNs`
    Duration,
    /// Boolean toggle
    Bool,
    /// Free text
    String,
    /// Integer
    Number,
    /// Ordered sequence of elements of one inner type
    Set(Box<TypeDescriptor>),
    /// Tag this version does not know about
    Unknown(String),
}

impl TypeDescriptor {
    /// Build a `set` descriptor around the given element descriptor
    pub fn set_of(element: TypeDescriptor) -> Self {
        Self::Set(Box::new(element))
    }

    /// Discriminant tag as written in configuration metadata
    pub fn tag(&self) -> &str {
        match self {
            Self::Duration => "duration",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Number => "number",
            Self::Set(_) => "set",
            Self::Unknown(tag) => tag,
        }
    }

    /// Map a tag with an optional element descriptor onto a descriptor
    ///
    /// A `set` tag without an element descriptor has no usable element type
    /// and is kept as `Unknown("set")`.
    pub fn from_tag(tag: &str, element: Option<TypeDescriptor>) -> Self {
        match (tag, element) {
            ("duration", _) => Self::Duration,
            ("bool", _) => Self::Bool,
            ("string", _) => Self::String,
            ("number", _) => Self::Number,
            ("set", Some(element)) => Self::set_of(element),
            (other, _) => Self::Unknown(other.to_string()),
        }
    }
}
