//! Mapper implementations for converting between descriptor DTOs and
//! contract models

use super::dto::TypeDescriptorDto;
use crate::contract::TypeDescriptor;
use serde_json::Value as Json;

impl From<TypeDescriptorDto> for TypeDescriptor {
    fn from(dto: TypeDescriptorDto) -> Self {
        let element = dto.value.map(|element| TypeDescriptor::from(*element));
        TypeDescriptor::from_tag(&dto.id, element)
    }
}

impl From<&TypeDescriptor> for TypeDescriptorDto {
    fn from(descriptor: &TypeDescriptor) -> Self {
        let value = match descriptor {
            TypeDescriptor::Set(element) => Some(Box::new(TypeDescriptorDto::from(&**element))),
            _ => None,
        };

        Self {
            id: descriptor.tag().to_string(),
            value,
        }
    }
}

/// Read a descriptor from already-decoded JSON
///
/// `null` means absent. JSON that is not shaped like a descriptor is also
/// treated as absent so the setting falls back to raw display.
pub fn descriptor_from_json(json: &Json) -> Option<TypeDescriptor> {
    if json.is_null() {
        return None;
    }

    match serde_json::from_value::<TypeDescriptorDto>(json.clone()) {
        Ok(dto) => Some(dto.into()),
        Err(e) => {
            tracing::debug!(error = %e, "Malformed type descriptor, treating as untyped");
            None
        }
    }
}
