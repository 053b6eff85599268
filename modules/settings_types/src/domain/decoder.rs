//! Resolves type descriptors into value types

use super::value::ValueType;
use crate::contract::TypeDescriptor;

/// Resolve a descriptor into its value type
///
/// Absent and unrecognized descriptors resolve to `Raw` so that settings with
/// newer type tags still display. Never fails.
pub fn decode(descriptor: Option<&TypeDescriptor>) -> ValueType {
    let Some(descriptor) = descriptor else {
        return ValueType::Raw;
    };

    match descriptor {
        TypeDescriptor::Duration => ValueType::Duration,
        TypeDescriptor::Bool => ValueType::Boolean,
        TypeDescriptor::String => ValueType::String,
        TypeDescriptor::Number => ValueType::Number,
        TypeDescriptor::Set(element) => ValueType::set_of(decode(Some(&**element))),
        TypeDescriptor::Unknown(tag) => {
            tracing::debug!(tag = %tag, "Unrecognized type descriptor, falling back to raw");
            ValueType::Raw
        }
    }
}
