//! Descriptor DTOs with serde derives

use serde::{Deserialize, Serialize};

/// Type descriptor as written in configuration metadata
///
/// `{"id": "set", "value": {"id": "number"}}`; `tag` and `elementType` are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptorDto {
    /// Discriminant tag
    #[serde(alias = "tag")]
    pub id: String,

    /// Element descriptor, only meaningful for `set`
    #[serde(
        default,
        alias = "elementType",
        alias = "element_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Box<TypeDescriptorDto>>,
}
