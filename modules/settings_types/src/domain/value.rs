//! Value types and canonical value holders
//!
//! `ValueType` is the closed set of kinds a setting can have. A `Canonical`
//! pairs a value type with a value of matching shape; the pair is only ever
//! built by `construct`, `default_value` or `EditController::save`, so the
//! shapes cannot drift apart.

use serde_json::Value as Json;

use super::duration::Duration;
use super::edit::{Draft, EditController, EditValue};
use super::render::Renderable;
use crate::config::JsonStyle;
use crate::contract::ValueError;

/// Runtime value type resolved from a type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Duration,
    Number,
    Boolean,
    String,
    /// Untyped JSON passthrough
    Raw,
    /// Ordered sequence of elements of the inner type
    Set(Box<ValueType>),
}

impl ValueType {
    pub fn set_of(inner: ValueType) -> Self {
        Self::Set(Box::new(inner))
    }

    /// Human readable name, e.g. `set<set<number>>`
    pub fn name(&self) -> String {
        match self {
            Self::Duration => "duration".to_string(),
            Self::Number => "number".to_string(),
            Self::Boolean => "bool".to_string(),
            Self::String => "string".to_string(),
            Self::Raw => "raw".to_string(),
            Self::Set(inner) => format!("set<{}>", inner.name()),
        }
    }

    /// Booleans commit on toggle and never enter an edit state
    pub fn has_edit_control(&self) -> bool {
        !matches!(self, Self::Boolean)
    }

    pub fn default_value(&self) -> Canonical {
        let value = match self {
            Self::Duration => Value::Duration(Duration::new(0, 0, 0, 1)),
            Self::Number => Value::Number(0),
            Self::Boolean => Value::Boolean(false),
            Self::String => Value::String(String::new()),
            Self::Raw => Value::Raw(Json::Object(serde_json::Map::new())),
            Self::Set(_) => Value::Set(Vec::new()),
        };

        Canonical::new(self.clone(), value)
    }

    /// Wire form of the default value
    pub fn default_raw(&self) -> Json {
        self.default_value().serialize()
    }

    /// Build a canonical value from already-decoded wire data
    pub fn construct(&self, raw: &Json) -> Result<Canonical, ValueError> {
        let value = match self {
            Self::Duration => match raw {
                Json::String(text) => Value::Duration(text.parse::<Duration>()?),
                other => return Err(mismatch(self, other)),
            },
            Self::Number => Value::Number(coerce_number(raw)),
            Self::Boolean => match raw {
                Json::Bool(b) => Value::Boolean(*b),
                other => return Err(mismatch(self, other)),
            },
            Self::String => match raw {
                Json::String(s) => Value::String(s.clone()),
                other => return Err(mismatch(self, other)),
            },
            Self::Raw => Value::Raw(raw.clone()),
            Self::Set(inner) => match raw {
                Json::Array(items) => Value::Set(
                    items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            inner.construct(item).map_err(|e| ValueError::Element {
                                index,
                                source: Box::new(e),
                            })
                        })
                        .collect::<Result<Vec<_>, _>>()?,
                ),
                other => return Err(mismatch(self, other)),
            },
        };

        Ok(Canonical::new(self.clone(), value))
    }

    pub fn edit_controller(&self) -> EditController {
        EditController::new(self.clone())
    }
}

/// Value representation, private in meaning to its value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Duration(Duration),
    Number(i64),
    Boolean(bool),
    String(String),
    Raw(Json),
    Set(Vec<Canonical>),
}

/// Canonical value holder: a value together with the type that interprets it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    value_type: ValueType,
    value: Value,
}

impl Canonical {
    pub(crate) fn new(value_type: ValueType, value: Value) -> Self {
        Self { value_type, value }
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn render(&self) -> Renderable {
        match &self.value {
            Value::Duration(d) => Renderable::Code { text: d.format() },
            Value::Number(n) => Renderable::Text {
                text: n.to_string(),
            },
            Value::Boolean(b) => Renderable::Toggle { value: *b },
            Value::String(s) => Renderable::Code { text: s.clone() },
            Value::Raw(json) => Renderable::Code {
                text: json.to_string(),
            },
            Value::Set(items) => Renderable::Lines {
                items: items.iter().map(Canonical::render).collect(),
            },
        }
    }

    /// Enter edit mode with compact JSON for raw drafts
    pub fn edit(&self) -> Draft {
        self.edit_with(JsonStyle::Compact)
    }

    pub fn edit_with(&self, style: JsonStyle) -> Draft {
        let value = match &self.value {
            Value::Duration(d) => EditValue::Duration((*d).into()),
            Value::Number(n) => EditValue::Number(*n),
            Value::Boolean(b) => EditValue::Boolean(*b),
            Value::String(s) => EditValue::String(s.clone()),
            Value::Raw(json) => EditValue::Raw(style.encode(json)),
            Value::Set(items) => {
                EditValue::Set(items.iter().map(|item| item.edit_with(style)).collect())
            }
        };

        Draft::new(self.value_type.edit_controller(), value)
    }

    pub fn serialize(&self) -> Json {
        match &self.value {
            Value::Duration(d) => Json::String(d.format()),
            Value::Number(n) => Json::from(*n),
            Value::Boolean(b) => Json::Bool(*b),
            Value::String(s) => Json::String(s.clone()),
            Value::Raw(json) => json.clone(),
            Value::Set(items) => Json::Array(items.iter().map(Canonical::serialize).collect()),
        }
    }

    /// Flipped copy of a boolean value, `None` for every other type
    pub fn toggled(&self) -> Option<Canonical> {
        match self.value {
            Value::Boolean(b) => Some(Canonical::new(self.value_type.clone(), Value::Boolean(!b))),
            _ => None,
        }
    }
}

/// Coerce text typed into a number input; anything non-numeric reads as 0
///
/// Fractions are truncated toward zero.
pub fn parse_number_input(input: &str) -> i64 {
    let input = input.trim();
    input
        .parse::<i64>()
        .ok()
        .or_else(|| input.parse::<f64>().ok().map(truncate))
        .unwrap_or(0)
}

fn coerce_number(raw: &Json) -> i64 {
    match raw {
        Json::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(truncate))
            .unwrap_or(0),
        Json::String(s) => parse_number_input(s),
        _ => 0,
    }
}

fn truncate(f: f64) -> i64 {
    if f.is_finite() {
        f.trunc() as i64
    } else {
        0
    }
}

pub(crate) fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

fn mismatch(expected: &ValueType, found: &Json) -> ValueError {
    ValueError::TypeMismatch {
        expected: expected.name(),
        found: json_kind(found).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        assert_eq!(ValueType::Duration.default_raw(), json!("1s"));
        assert_eq!(ValueType::Number.default_raw(), json!(0));
        assert_eq!(ValueType::Boolean.default_raw(), json!(false));
        assert_eq!(ValueType::String.default_raw(), json!(""));
        assert_eq!(ValueType::Raw.default_raw(), json!({}));
        assert_eq!(ValueType::set_of(ValueType::Number).default_raw(), json!([]));
    }

    #[test]
    fn test_construct_default_raw_matches_default_value() {
        for ty in [
            ValueType::Duration,
            ValueType::Number,
            ValueType::Boolean,
            ValueType::String,
            ValueType::Raw,
            ValueType::set_of(ValueType::set_of(ValueType::Duration)),
        ] {
            assert_eq!(ty.construct(&ty.default_raw()).unwrap(), ty.default_value());
        }
    }

    #[test]
    fn test_number_coercion() {
        let n = |raw: Json| match ValueType::Number.construct(&raw).unwrap().into_value() {
            Value::Number(n) => n,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(n(json!(42)), 42);
        assert_eq!(n(json!(-7)), -7);
        assert_eq!(n(json!(3.9)), 3);
        assert_eq!(n(json!("12")), 12);
        assert_eq!(n(json!("NaN")), 0);
        assert_eq!(n(json!("abc")), 0);
        assert_eq!(n(json!(null)), 0);
    }

    #[test]
    fn test_parse_number_input() {
        assert_eq!(parse_number_input("10"), 10);
        assert_eq!(parse_number_input("2.5"), 2);
        assert_eq!(parse_number_input("-2.5"), -2);
        assert_eq!(parse_number_input(""), 0);
        assert_eq!(parse_number_input("inf"), 0);
    }

    #[test]
    fn test_construct_type_mismatch() {
        let err = ValueType::Boolean.construct(&json!("yes")).unwrap_err();
        assert_eq!(
            err,
            ValueError::TypeMismatch {
                expected: "bool".to_string(),
                found: "string".to_string()
            }
        );

        assert!(ValueType::String.construct(&json!(1)).is_err());
        assert!(ValueType::Duration.construct(&json!(5)).is_err());
        assert!(ValueType::set_of(ValueType::Number).construct(&json!({})).is_err());
    }

    #[test]
    fn test_construct_invalid_duration() {
        let err = ValueType::Duration.construct(&json!("bogus")).unwrap_err();
        assert!(matches!(err, ValueError::InvalidDuration { .. }));
    }

    #[test]
    fn test_set_element_error_carries_index() {
        let ty = ValueType::set_of(ValueType::Duration);
        let err = ty.construct(&json!(["1s", "2m", "nope"])).unwrap_err();
        match err {
            ValueError::Element { index, source } => {
                assert_eq!(index, 2);
                assert!(matches!(*source, ValueError::InvalidDuration { .. }));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_render() {
        let d = ValueType::Duration.construct(&json!("1d2h")).unwrap();
        assert_eq!(d.render(), Renderable::Code { text: "1d2h".into() });

        let raw = ValueType::Raw.construct(&json!({"a": [1, 2]})).unwrap();
        assert_eq!(raw.render().to_text(), r#"{"a":[1,2]}"#);

        let set = ValueType::set_of(ValueType::Number)
            .construct(&json!([3, 1, 2]))
            .unwrap();
        assert_eq!(set.render().to_text(), "3\n1\n2");
    }

    #[test]
    fn test_serialize_stored_unbounded_duration() {
        let d = ValueType::Duration.construct(&json!("36h")).unwrap();
        assert_eq!(d.serialize(), json!("36h"));
    }

    #[test]
    fn test_toggled() {
        let b = ValueType::Boolean.default_value();
        assert_eq!(b.toggled().unwrap().serialize(), json!(true));
        assert!(ValueType::Number.default_value().toggled().is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(
            ValueType::set_of(ValueType::set_of(ValueType::Number)).name(),
            "set<set<number>>"
        );
        assert!(!ValueType::Boolean.has_edit_control());
        assert!(ValueType::set_of(ValueType::Boolean).has_edit_control());
    }
}
