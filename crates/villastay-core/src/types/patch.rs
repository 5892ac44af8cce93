//! Field-level patch documents for partial updates.
//!
//! A patch is an ordered sequence of operations on named top-level fields
//! of a JSON object snapshot. Applying a patch never mutates the input
//! snapshot; it produces a new one, which the caller re-validates and
//! persists as a full replacement.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::result::AppResult;

/// The kind of mutation a single patch operation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOpKind {
    /// Set a field to a value.
    Add,
    /// Set a field to a value.
    Replace,
    /// Clear a field to null. Re-validation decides whether the target
    /// representation accepts the cleared field.
    Remove,
    /// Copy the value at `from` onto `path`, then clear `from`.
    Move,
}

/// A single operation on a named top-level field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchOp {
    /// The operation kind.
    pub op: PatchOpKind,
    /// The target field, written `/field` or `field`.
    pub path: String,
    /// The value for `add` and `replace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// The source field for `move`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// An ordered patch document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(pub Vec<PatchOp>);

impl PatchDocument {
    /// Whether the document contains no operations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply all operations, in order, to an object snapshot and return
    /// the patched snapshot.
    ///
    /// Operations targeting a field the snapshot does not contain are
    /// rejected with a validation error.
    pub fn apply(&self, snapshot: &Value) -> AppResult<Value> {
        let mut doc = match snapshot {
            Value::Object(map) => map.clone(),
            _ => return Err(AppError::internal("Patch target must be a JSON object")),
        };

        for op in &self.0 {
            let field = field_name(&op.path)?;
            if !doc.contains_key(field) {
                return Err(AppError::validation(format!(
                    "Patch targets unknown field '{field}'"
                )));
            }

            match op.op {
                PatchOpKind::Add | PatchOpKind::Replace => {
                    let value = op.value.clone().ok_or_else(|| {
                        AppError::validation(format!("Patch of '{field}' requires a value"))
                    })?;
                    doc.insert(field.to_string(), value);
                }
                PatchOpKind::Remove => {
                    doc.insert(field.to_string(), Value::Null);
                }
                PatchOpKind::Move => {
                    let from_path = op.from.as_deref().ok_or_else(|| {
                        AppError::validation("Patch 'move' requires a 'from' field")
                    })?;
                    let from = field_name(from_path)?;
                    let value = doc.get(from).cloned().ok_or_else(|| {
                        AppError::validation(format!("Patch targets unknown field '{from}'"))
                    })?;
                    doc.insert(field.to_string(), value);
                    doc.insert(from.to_string(), Value::Null);
                }
            }
        }

        Ok(Value::Object(doc))
    }
}

/// Resolve a single-level field name from a `/field` or `field` path.
fn field_name(path: &str) -> AppResult<&str> {
    let name = path.strip_prefix('/').unwrap_or(path);
    if name.is_empty() || name.contains('/') {
        return Err(AppError::validation(format!(
            "Patch path '{path}' must name a single top-level field"
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn doc(ops: Value) -> PatchDocument {
        serde_json::from_value(ops).expect("patch document")
    }

    #[test]
    fn test_replace_leaves_other_fields_unchanged() {
        let snapshot = json!({"name": "Pool View", "sqft": 100, "occupancy": 4});
        let patch = doc(json!([{"op": "replace", "path": "/name", "value": "Lake View"}]));

        let patched = patch.apply(&snapshot).unwrap();

        assert_eq!(patched["name"], "Lake View");
        assert_eq!(patched["sqft"], 100);
        assert_eq!(patched["occupancy"], 4);
        // input snapshot untouched
        assert_eq!(snapshot["name"], "Pool View");
    }

    #[test]
    fn test_operations_apply_in_order() {
        let snapshot = json!({"name": "a"});
        let patch = doc(json!([
            {"op": "replace", "path": "/name", "value": "b"},
            {"op": "replace", "path": "/name", "value": "c"}
        ]));

        let patched = patch.apply(&snapshot).unwrap();
        assert_eq!(patched["name"], "c");
    }

    #[test]
    fn test_remove_clears_to_null() {
        let snapshot = json!({"details": "spacious"});
        let patch = doc(json!([{"op": "remove", "path": "/details"}]));

        let patched = patch.apply(&snapshot).unwrap();
        assert_eq!(patched["details"], Value::Null);
    }

    #[test]
    fn test_move_copies_then_clears_source() {
        let snapshot = json!({"details": "text", "amenity": "pool"});
        let patch = doc(json!([{"op": "move", "path": "/details", "from": "/amenity"}]));

        let patched = patch.apply(&snapshot).unwrap();
        assert_eq!(patched["details"], "pool");
        assert_eq!(patched["amenity"], Value::Null);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let snapshot = json!({"name": "a"});
        let patch = doc(json!([{"op": "replace", "path": "/nme", "value": "b"}]));

        let err = patch.apply(&snapshot).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_nested_path_rejected() {
        let snapshot = json!({"name": "a"});
        let patch = doc(json!([{"op": "replace", "path": "/name/first", "value": "b"}]));

        let err = patch.apply(&snapshot).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_replace_without_value_rejected() {
        let snapshot = json!({"name": "a"});
        let patch = doc(json!([{"op": "replace", "path": "/name"}]));

        let err = patch.apply(&snapshot).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_empty_document_is_identity() {
        let snapshot = json!({"name": "a"});
        let patch = PatchDocument::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply(&snapshot).unwrap(), snapshot);
    }
}
