//! Wire shapes for type descriptors as they arrive from configuration metadata

pub mod dto;
pub mod mapper;

pub use dto::TypeDescriptorDto;
pub use mapper::descriptor_from_json;
