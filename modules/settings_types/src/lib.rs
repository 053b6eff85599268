//! Settings Types Module
//!
//! Typed value framework for editable settings. A type descriptor resolves
//! to a `ValueType` that builds, renders, edits, validates and serializes
//! values of that type, including sets of any other type.

// Public exports
pub mod contract;
pub use contract::{SessionError, SettingsTypesApi, TypeDescriptor, ValueError};

pub mod config;
pub use config::{Config, JsonStyle};

pub mod domain;
pub use domain::{
    decode, Canonical, Control, Draft, Duration, EditController, EditValue, EditingSession,
    Renderable, SessionState, Value, ValueType,
};

pub mod api;
pub use api::native::NativeClient;
pub use api::wire::descriptor_from_json;
