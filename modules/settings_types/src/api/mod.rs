//! API layer - adapters around the domain

pub mod native;
pub mod wire;
