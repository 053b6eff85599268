//! Opaque render descriptions handed to the external renderer
//!
//! The framework only promises one deterministic output per call. The
//! renderer decides what widgets these map to.

use serde::Serialize;

use super::duration::DurationField;

/// Read-only view of a canonical value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Renderable {
    /// Monospace text (durations, strings, raw JSON)
    Code { text: String },
    /// Plain text (numbers)
    Text { text: String },
    /// Boolean shown as a toggle; activating it commits the opposite value
    Toggle { value: bool },
    /// One entry per line, in order
    Lines { items: Vec<Renderable> },
}

impl Renderable {
    /// Flatten to text, one line per set element
    pub fn to_text(&self) -> String {
        match self {
            Self::Code { text } | Self::Text { text } => text.clone(),
            Self::Toggle { value } => value.to_string(),
            Self::Lines { items } => items
                .iter()
                .map(Renderable::to_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// One numeric segment of the duration editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitControl {
    #[serde(skip)]
    pub field: DurationField,
    pub suffix: &'static str,
    pub value: i64,
    pub invalid: bool,
}

/// One row of the set editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetItemControl {
    pub index: usize,
    pub control: Control,
}

/// Editable view of a draft value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    /// Four independent segments
    Duration { fields: Vec<DigitControl> },
    /// Single numeric input
    Number { value: i64, invalid: bool },
    /// Single text input
    Text { value: String, invalid: bool },
    /// Toggle inside a composite draft
    Toggle { value: bool },
    /// Element rows with remove buttons plus an append button
    Set {
        items: Vec<SetItemControl>,
        invalid: bool,
    },
}

impl Control {
    /// Whether the control is flagged invalid at its top level
    pub fn is_invalid(&self) -> bool {
        match self {
            Self::Duration { fields } => fields.iter().any(|f| f.invalid),
            Self::Number { invalid, .. } | Self::Text { invalid, .. } | Self::Set { invalid, .. } => {
                *invalid
            }
            Self::Toggle { .. } => false,
        }
    }
}
