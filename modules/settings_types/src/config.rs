//! Configuration for settings types

use serde::Deserialize;
use serde_json::Value as Json;

/// Settings types configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON encoding used for raw value drafts
    #[serde(default)]
    pub raw_draft_style: JsonStyle,

    /// Restart from the canonical value when editing begins twice
    #[serde(default)]
    pub restart_edit_on_begin: bool,
}

/// JSON text layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonStyle {
    #[default]
    Compact,
    Pretty,
}

impl JsonStyle {
    pub fn encode(&self, json: &Json) -> String {
        match self {
            Self::Compact => json.to_string(),
            Self::Pretty => format!("{:#}", json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.raw_draft_style, JsonStyle::Compact);
        assert!(!cfg.restart_edit_on_begin);
    }

    #[test]
    fn test_from_yaml() {
        let cfg: Config =
            serde_yaml::from_str("raw_draft_style: pretty\nrestart_edit_on_begin: true\n").unwrap();
        assert_eq!(cfg.raw_draft_style, JsonStyle::Pretty);
        assert!(cfg.restart_edit_on_begin);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_yaml::from_str::<Config>("max_depth: 3").is_err());
    }

    #[test]
    fn test_encode() {
        let v = json!({"a": 1});
        assert_eq!(JsonStyle::Compact.encode(&v), r#"{"a":1}"#);
        assert_eq!(JsonStyle::Pretty.encode(&v), "{\n  \"a\": 1\n}");
    }
}
