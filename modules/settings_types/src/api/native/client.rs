//! Native client implementation - wraps the domain for in-process calls

use crate::config::Config;
use crate::contract::{SettingsTypesApi, TypeDescriptor, ValueError};
use crate::domain::{decode, Canonical, EditingSession, ValueType};
use serde_json::Value as Json;

/// Native client implementation that directly calls the domain
#[derive(Debug, Clone, Default)]
pub struct NativeClient {
    config: Config,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl SettingsTypesApi for NativeClient {
    fn decode(&self, descriptor: Option<&TypeDescriptor>) -> ValueType {
        decode(descriptor)
    }

    fn construct(
        &self,
        descriptor: Option<&TypeDescriptor>,
        raw: &Json,
    ) -> Result<Canonical, ValueError> {
        decode(descriptor).construct(raw)
    }

    fn open_session(
        &self,
        descriptor: Option<&TypeDescriptor>,
        raw: &Json,
    ) -> Result<EditingSession, ValueError> {
        EditingSession::from_raw(&decode(descriptor), raw, self.config.clone())
    }

    fn serialize(&self, value: &Canonical) -> Json {
        value.serialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JsonStyle;
    use crate::domain::EditValue;
    use serde_json::json;

    #[test]
    fn test_construct_through_client() {
        let client = NativeClient::default();
        let descriptor = TypeDescriptor::set_of(TypeDescriptor::Duration);
        let value = client
            .construct(Some(&descriptor), &json!(["1m", "2h"]))
            .unwrap();
        assert_eq!(client.serialize(&value), json!(["1m", "2h"]));
    }

    #[test]
    fn test_session_uses_config() {
        let client = NativeClient::new(Config {
            raw_draft_style: JsonStyle::Pretty,
            ..Config::default()
        });
        let mut session = client.open_session(None, &json!({"a": true})).unwrap();
        let draft = session.begin_edit().unwrap();
        assert_eq!(draft.value(), &EditValue::Raw("{\n  \"a\": true\n}".into()));
    }
}
