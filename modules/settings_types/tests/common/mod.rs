//! Common test utilities and shared descriptors

#![allow(dead_code)]

use serde_json::json;
use settings_types::{descriptor_from_json, TypeDescriptor};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

/// `set<set<number>>` as it arrives from configuration metadata
pub fn nested_number_sets() -> TypeDescriptor {
    descriptor_from_json(&json!({
        "id": "set",
        "value": {"id": "set", "value": {"id": "number"}}
    }))
    .unwrap()
}

pub fn set_of(element: TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor::set_of(element)
}
