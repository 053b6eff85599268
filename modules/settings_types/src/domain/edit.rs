//! Edit controllers and draft holders

use serde_json::Value as Json;

use super::duration::{DurationDraft, DurationField};
use super::render::{Control, DigitControl, SetItemControl};
use super::value::{Canonical, Value, ValueType};
use crate::contract::ValueError;

/// Draft value in a type-specific editable shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditValue {
    Duration(DurationDraft),
    Number(i64),
    /// Only reachable inside a set draft; top-level booleans toggle directly
    Boolean(bool),
    String(String),
    /// JSON text, re-parsed on save
    Raw(String),
    Set(Vec<Draft>),
}

impl EditValue {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Duration(_) => "duration",
            Self::Number(_) => "number",
            Self::Boolean(_) => "bool",
            Self::String(_) => "string",
            Self::Raw(_) => "raw",
            Self::Set(_) => "set",
        }
    }
}

/// Validates, saves and describes drafts of one value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditController {
    value_type: ValueType,
}

impl EditController {
    pub(crate) fn new(value_type: ValueType) -> Self {
        Self { value_type }
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// Whether `save` would succeed on this draft
    ///
    /// A draft of the wrong shape for this controller is never valid.
    pub fn validate(&self, value: &EditValue) -> bool {
        match (&self.value_type, value) {
            (ValueType::Duration, EditValue::Duration(d)) => d.is_valid(),
            (ValueType::Number, EditValue::Number(_)) => true,
            (ValueType::Boolean, EditValue::Boolean(_)) => true,
            (ValueType::String, EditValue::String(_)) => true,
            (ValueType::Raw, EditValue::Raw(text)) => serde_json::from_str::<Json>(text).is_ok(),
            (ValueType::Set(inner), EditValue::Set(items)) => items
                .iter()
                .all(|item| item.controller.value_type == **inner && item.is_valid()),
            _ => false,
        }
    }

    /// Convert a draft back into a canonical value
    ///
    /// Callers check `validate` first; an invalid draft yields an error.
    pub fn save(&self, value: &EditValue) -> Result<Canonical, ValueError> {
        let saved = match (&self.value_type, value) {
            (ValueType::Duration, EditValue::Duration(d)) => Value::Duration(d.to_duration()?),
            (ValueType::Number, EditValue::Number(n)) => Value::Number(*n),
            (ValueType::Boolean, EditValue::Boolean(b)) => Value::Boolean(*b),
            (ValueType::String, EditValue::String(s)) => Value::String(s.clone()),
            (ValueType::Raw, EditValue::Raw(text)) => Value::Raw(
                serde_json::from_str(text).map_err(|e| ValueError::InvalidDraft {
                    reason: e.to_string(),
                })?,
            ),
            (ValueType::Set(inner), EditValue::Set(items)) => Value::Set(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let element = if item.controller.value_type == **inner {
                            item.save()
                        } else {
                            Err(ValueError::TypeMismatch {
                                expected: inner.name(),
                                found: item.controller.value_type.name(),
                            })
                        };
                        element.map_err(|e| ValueError::Element {
                            index,
                            source: Box::new(e),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            (expected, found) => {
                return Err(ValueError::TypeMismatch {
                    expected: expected.name(),
                    found: found.kind().to_string(),
                })
            }
        };

        Ok(Canonical::new(self.value_type.clone(), saved))
    }

    /// Describe the input controls for a draft
    pub fn control(&self, is_valid: bool, value: &EditValue) -> Control {
        match value {
            EditValue::Duration(d) => Control::Duration {
                fields: DurationField::ALL
                    .iter()
                    .map(|field| DigitControl {
                        field: *field,
                        suffix: field.suffix(),
                        value: d.get(*field),
                        invalid: !d.is_field_valid(*field),
                    })
                    .collect(),
            },
            EditValue::Number(n) => Control::Number {
                value: *n,
                invalid: !is_valid,
            },
            EditValue::Boolean(b) => Control::Toggle { value: *b },
            EditValue::String(s) => Control::Text {
                value: s.clone(),
                invalid: !is_valid,
            },
            EditValue::Raw(text) => Control::Text {
                value: text.clone(),
                invalid: !is_valid,
            },
            EditValue::Set(items) => Control::Set {
                items: items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| SetItemControl {
                        index,
                        control: item.control(),
                    })
                    .collect(),
                invalid: !is_valid,
            },
        }
    }
}

/// Draft holder: an in-progress value together with its controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    controller: EditController,
    value: EditValue,
}

impl Draft {
    pub(crate) fn new(controller: EditController, value: EditValue) -> Self {
        Self { controller, value }
    }

    pub fn controller(&self) -> &EditController {
        &self.controller
    }

    pub fn value(&self) -> &EditValue {
        &self.value
    }

    /// Same controller, new draft value
    pub fn with_value(&self, value: EditValue) -> Self {
        Self {
            controller: self.controller.clone(),
            value,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.controller.validate(&self.value)
    }

    pub fn save(&self) -> Result<Canonical, ValueError> {
        self.controller.save(&self.value)
    }

    pub fn control(&self) -> Control {
        self.controller.control(self.is_valid(), &self.value)
    }
}
