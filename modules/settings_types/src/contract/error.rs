//! Contract error types for settings types
//!
//! These errors are transport-agnostic. None of them is fatal: each one is a
//! local verdict the caller inspects before the next lifecycle transition.

/// Errors produced while constructing or saving typed values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Text does not follow the `NdNhNmNs` duration grammar
    #[error("Invalid duration: {input:?}")]
    InvalidDuration {
        /// Offending input
        input: String,
    },

    /// Data has the wrong shape for the value type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Expected kind
        expected: String,
        /// Kind actually supplied
        found: String,
    },

    /// A set element failed
    #[error("Set element {index}: {source}")]
    Element {
        /// Position of the element
        index: usize,
        /// Element error
        #[source]
        source: Box<ValueError>,
    },

    /// Draft was saved while invalid
    #[error("Invalid draft: {reason}")]
    InvalidDraft {
        /// Why the draft is invalid
        reason: String,
    },

    /// Set mutation applied to something that is not a set
    #[error("Not a set")]
    NotASet,
}

/// Errors produced by the editing session
///
/// The session state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Field is not being edited")]
    NotEditing,

    #[error("Field is already being edited")]
    AlreadyEditing,

    #[error("Value type {value_type} has no edit control")]
    NoEditControl {
        /// Name of the value type
        value_type: String,
    },

    #[error("Value type {value_type} cannot be toggled")]
    NotToggleable {
        /// Name of the value type
        value_type: String,
    },

    #[error("Draft is invalid; commit refused")]
    InvalidDraft,

    #[error(transparent)]
    Value(#[from] ValueError),
}
