//! Structural edits on set drafts
//!
//! Every operation returns a fresh sequence and leaves its input untouched.

use super::edit::{Draft, EditController, EditValue};
use super::value::ValueType;
use crate::contract::ValueError;

impl EditController {
    fn set_parts<'a>(
        &'a self,
        value: &'a EditValue,
    ) -> Result<(&'a ValueType, &'a [Draft]), ValueError> {
        match (self.value_type(), value) {
            (ValueType::Set(inner), EditValue::Set(items)) => Ok((&**inner, items.as_slice())),
            _ => Err(ValueError::NotASet),
        }
    }

    /// Append a default-valued element, already in edit mode
    pub fn append(&self, value: &EditValue) -> Result<EditValue, ValueError> {
        let (inner, items) = self.set_parts(value)?;

        let mut next = items.to_vec();
        next.push(inner.default_value().edit());

        tracing::trace!(value_type = %inner.name(), len = next.len(), "Appended set element");
        Ok(EditValue::Set(next))
    }

    /// Remove the element at `index`; out-of-range indices change nothing
    pub fn remove(&self, value: &EditValue, index: usize) -> Result<EditValue, ValueError> {
        let (_, items) = self.set_parts(value)?;

        let mut next = items.to_vec();
        if index < next.len() {
            next.remove(index);
            tracing::trace!(index, len = next.len(), "Removed set element");
        }

        Ok(EditValue::Set(next))
    }

    /// Replace the draft value at `index`; out-of-range indices change nothing
    pub fn update(
        &self,
        value: &EditValue,
        index: usize,
        element: EditValue,
    ) -> Result<EditValue, ValueError> {
        let (_, items) = self.set_parts(value)?;

        let mut next = items.to_vec();
        if let Some(slot) = next.get_mut(index) {
            *slot = slot.with_value(element);
            tracing::trace!(index, "Updated set element");
        }

        Ok(EditValue::Set(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numbers(values: serde_json::Value) -> Draft {
        ValueType::set_of(ValueType::Number)
            .construct(&values)
            .unwrap()
            .edit()
    }

    fn saved(draft: &Draft, value: EditValue) -> serde_json::Value {
        draft.with_value(value).save().unwrap().serialize()
    }

    #[test]
    fn test_append_to_empty() {
        let draft = numbers(json!([]));
        let next = draft.controller().append(draft.value()).unwrap();

        match &next {
            EditValue::Set(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].value(), &EditValue::Number(0));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(saved(&draft, next), json!([0]));
        // input untouched
        assert_eq!(draft.value(), &EditValue::Set(vec![]));
    }

    #[test]
    fn test_remove_preserves_order() {
        let draft = numbers(json!([1, 2, 3]));
        let next = draft.controller().remove(draft.value(), 1).unwrap();
        assert_eq!(saved(&draft, next), json!([1, 3]));
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let draft = numbers(json!([1, 2]));
        let next = draft.controller().remove(draft.value(), 2).unwrap();
        assert_eq!(&next, draft.value());
    }

    #[test]
    fn test_update_touches_only_one_element() {
        let draft = numbers(json!([1, 2, 3]));
        let next = draft
            .controller()
            .update(draft.value(), 0, EditValue::Number(9))
            .unwrap();
        assert_eq!(saved(&draft, next), json!([9, 2, 3]));

        let unchanged = draft
            .controller()
            .update(draft.value(), 7, EditValue::Number(9))
            .unwrap();
        assert_eq!(&unchanged, draft.value());
    }

    #[test]
    fn test_not_a_set() {
        let draft = ValueType::Number.default_value().edit();
        assert_eq!(
            draft.controller().append(draft.value()),
            Err(ValueError::NotASet)
        );
        assert_eq!(
            draft.controller().remove(draft.value(), 0),
            Err(ValueError::NotASet)
        );
    }

    #[test]
    fn test_validity_aggregation() {
        let draft = ValueType::set_of(ValueType::Raw)
            .construct(&json!([{"a": 1}, [2]]))
            .unwrap()
            .edit();
        assert!(draft.is_valid());

        let broken = draft.with_value(
            draft
                .controller()
                .update(draft.value(), 1, EditValue::Raw("[".into()))
                .unwrap(),
        );
        assert!(!broken.is_valid());
        assert!(broken.control().is_invalid());

        let reverted = broken.with_value(
            broken
                .controller()
                .update(broken.value(), 1, EditValue::Raw("[2]".into()))
                .unwrap(),
        );
        assert!(reverted.is_valid());
        assert_eq!(reverted.save().unwrap().serialize(), json!([{"a": 1}, [2]]));
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert!(numbers(json!([])).is_valid());
    }
}
