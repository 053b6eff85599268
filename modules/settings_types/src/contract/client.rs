//! Native client trait for inter-module communication
//!
//! This trait defines the API that the settings renderer and persistence
//! layers use to work with typed values. NO I/O - direct function calls.

use super::{
    error::ValueError,
    model::TypeDescriptor,
};
use crate::domain::{Canonical, EditingSession, ValueType};
use serde_json::Value as Json;

/// Settings types API for inter-module communication
pub trait SettingsTypesApi: Send + Sync {
    /// Resolve a descriptor; absent or unknown descriptors resolve to raw
    fn decode(&self, descriptor: Option<&TypeDescriptor>) -> ValueType;

    /// Build a canonical value from wire data
    fn construct(
        &self,
        descriptor: Option<&TypeDescriptor>,
        raw: &Json,
    ) -> Result<Canonical, ValueError>;

    /// Open an editing session for one field
    fn open_session(
        &self,
        descriptor: Option<&TypeDescriptor>,
        raw: &Json,
    ) -> Result<EditingSession, ValueError>;

    /// Wire form of a canonical value
    fn serialize(&self, value: &Canonical) -> Json;
}
