//! Editing session for a single settings field
//!
//! Viewing -> Editing on `begin_edit`, back to Viewing on `commit` (valid
//! drafts only) or `cancel`. Booleans never enter Editing; `toggle` commits
//! immediately. Every draft change swaps the whole draft for a new one.

use serde_json::Value as Json;

use super::duration::DurationField;
use super::edit::{Draft, EditValue};
use super::render::{Control, Renderable};
use super::value::{Canonical, ValueType};
use crate::config::Config;
use crate::contract::{SessionError, ValueError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Viewing,
    Editing,
}

/// Owner of one field's canonical value and, while editing, its draft
#[derive(Debug, Clone)]
pub struct EditingSession {
    config: Config,
    canonical: Canonical,
    draft: Option<Draft>,
}

impl EditingSession {
    pub fn new(canonical: Canonical, config: Config) -> Self {
        Self {
            config,
            canonical,
            draft: None,
        }
    }

    /// Start a session from wire data
    pub fn from_raw(
        value_type: &ValueType,
        raw: &Json,
        config: Config,
    ) -> Result<Self, ValueError> {
        Ok(Self::new(value_type.construct(raw)?, config))
    }

    pub fn state(&self) -> SessionState {
        if self.draft.is_some() {
            SessionState::Editing
        } else {
            SessionState::Viewing
        }
    }

    pub fn value_type(&self) -> &ValueType {
        self.canonical.value_type()
    }

    pub fn canonical(&self) -> &Canonical {
        &self.canonical
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn render(&self) -> Renderable {
        self.canonical.render()
    }

    /// Input controls for the current draft, `None` while viewing
    pub fn control(&self) -> Option<Control> {
        self.draft.as_ref().map(Draft::control)
    }

    /// Live validity of the draft; `false` while viewing
    pub fn is_valid(&self) -> bool {
        self.draft.as_ref().is_some_and(Draft::is_valid)
    }

    pub fn serialize(&self) -> Json {
        self.canonical.serialize()
    }

    /// Enter Editing from the current canonical value
    pub fn begin_edit(&mut self) -> Result<&Draft, SessionError> {
        let value_type = self.canonical.value_type();
        if !value_type.has_edit_control() {
            return Err(SessionError::NoEditControl {
                value_type: value_type.name(),
            });
        }

        if self.draft.is_some() && !self.config.restart_edit_on_begin {
            return Err(SessionError::AlreadyEditing);
        }

        tracing::debug!(value_type = %value_type.name(), "Begin edit");
        let draft = self.canonical.edit_with(self.config.raw_draft_style);
        Ok(&*self.draft.insert(draft))
    }

    /// Replace the whole draft value
    pub fn set_draft(&mut self, value: EditValue) -> Result<(), SessionError> {
        let draft = self.draft.as_ref().ok_or(SessionError::NotEditing)?;
        self.draft = Some(draft.with_value(value));
        Ok(())
    }

    /// Change one segment of a duration draft
    pub fn set_duration_field(
        &mut self,
        field: DurationField,
        value: i64,
    ) -> Result<(), SessionError> {
        let draft = self.draft.as_ref().ok_or(SessionError::NotEditing)?;
        let next = match draft.value() {
            EditValue::Duration(d) => EditValue::Duration(d.with_field(field, value)),
            other => {
                return Err(ValueError::TypeMismatch {
                    expected: "duration".to_string(),
                    found: other.kind().to_string(),
                }
                .into())
            }
        };
        self.draft = Some(draft.with_value(next));
        Ok(())
    }

    /// Append a default element to a set draft
    pub fn append(&mut self) -> Result<(), SessionError> {
        self.map_draft(|draft| draft.controller().append(draft.value()))
    }

    /// Remove an element from a set draft; out-of-range is a no-op
    pub fn remove(&mut self, index: usize) -> Result<(), SessionError> {
        self.map_draft(|draft| draft.controller().remove(draft.value(), index))
    }

    /// Replace one element of a set draft; out-of-range is a no-op
    pub fn update(&mut self, index: usize, element: EditValue) -> Result<(), SessionError> {
        self.map_draft(|draft| draft.controller().update(draft.value(), index, element))
    }

    fn map_draft<F>(&mut self, f: F) -> Result<(), SessionError>
    where
        F: FnOnce(&Draft) -> Result<EditValue, ValueError>,
    {
        let draft = self.draft.as_ref().ok_or(SessionError::NotEditing)?;
        let next = f(draft)?;
        self.draft = Some(draft.with_value(next));
        Ok(())
    }

    /// Save a valid draft as the new canonical value and return to Viewing
    ///
    /// An invalid draft is refused and stays in place.
    pub fn commit(&mut self) -> Result<&Canonical, SessionError> {
        let draft = self.draft.as_ref().ok_or(SessionError::NotEditing)?;
        if !draft.is_valid() {
            tracing::debug!(
                value_type = %self.canonical.value_type().name(),
                "Commit refused, draft invalid"
            );
            return Err(SessionError::InvalidDraft);
        }

        let saved = draft.save()?;
        tracing::debug!(value_type = %saved.value_type().name(), "Commit");
        self.canonical = saved;
        self.draft = None;
        Ok(&self.canonical)
    }

    /// Drop the draft; the canonical value is untouched
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        if self.draft.take().is_none() {
            return Err(SessionError::NotEditing);
        }
        tracing::debug!(value_type = %self.canonical.value_type().name(), "Cancel edit");
        Ok(())
    }

    /// Flip a boolean field; a single atomic value change
    pub fn toggle(&mut self) -> Result<&Canonical, SessionError> {
        let toggled = self
            .canonical
            .toggled()
            .ok_or_else(|| SessionError::NotToggleable {
                value_type: self.canonical.value_type().name(),
            })?;
        tracing::debug!(value_type = %toggled.value_type().name(), "Toggle");
        self.canonical = toggled;
        Ok(&self.canonical)
    }
}
