//! Bulk constructor application over located slots.

use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use crate::error::PathError;
use crate::traverse::traverse_mut;

/// A constructor: consumes a slot's old value and builds its replacement.
pub type Constructor = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Replace the slot at `path` inside every object with the result of a
/// constructor applied to the slot's old value.
///
/// Constructors are assigned round-robin: object `i` uses constructor
/// `i % constructors.len()`, with no further bounds validation. With an
/// empty path each object is replaced wholesale. A missing terminal key
/// hands the constructor `Null` and creates the slot. An empty constructor
/// list is a no-op.
pub fn objectify(
    objects: &mut [Value],
    path: &[&str],
    constructors: &[Constructor],
) -> Result<(), PathError> {
    if constructors.is_empty() {
        return Ok(());
    }
    for (index, object) in objects.iter_mut().enumerate() {
        let construct = constructors[index % constructors.len()].as_ref();
        apply(object, path, construct)?;
        trace!(index, path = ?path, "slot rewritten");
    }
    Ok(())
}

fn apply(object: &mut Value, path: &[&str], construct: &dyn Fn(Value) -> Value) -> Result<(), PathError> {
    let Some((last, parents)) = path.split_last() else {
        let old = object.take();
        *object = construct(old);
        return Ok(());
    };
    let Some(Value::Object(parent)) = traverse_mut(object, parents) else {
        return Err(PathError::Unreachable {
            path: path.iter().map(|segment| segment.to_string()).collect(),
        });
    };
    let old = parent.get(*last).cloned().unwrap_or(Value::Null);
    parent.insert((*last).to_string(), construct(old));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrapping(tag: &str) -> Constructor {
        let tag = tag.to_string();
        Arc::new(move |old| json!({"tag": tag, "was": old}))
    }

    #[test]
    fn rewrites_the_slot_at_the_path() {
        let mut objects = vec![json!({"user": {"id": 1}})];
        objectify(&mut objects, &["user", "id"], &[wrapping("a")]).unwrap();
        assert_eq!(objects[0], json!({"user": {"id": {"tag": "a", "was": 1}}}));
    }

    #[test]
    fn empty_path_replaces_objects_wholesale() {
        let mut objects = vec![json!({"id": 1})];
        objectify(&mut objects, &[], &[wrapping("a")]).unwrap();
        assert_eq!(objects[0], json!({"tag": "a", "was": {"id": 1}}));
    }

    #[test]
    fn constructors_are_assigned_round_robin() {
        let mut objects = vec![json!({"v": 1}), json!({"v": 2}), json!({"v": 3})];
        objectify(&mut objects, &["v"], &[wrapping("a"), wrapping("b")]).unwrap();
        assert_eq!(objects[0]["v"]["tag"], json!("a"));
        assert_eq!(objects[1]["v"]["tag"], json!("b"));
        assert_eq!(objects[2]["v"]["tag"], json!("a"));
    }

    #[test]
    fn missing_slot_is_created_from_null() {
        let mut objects = vec![json!({})];
        objectify(&mut objects, &["x"], &[wrapping("a")]).unwrap();
        assert_eq!(objects[0], json!({"x": {"tag": "a", "was": null}}));
    }

    #[test]
    fn unreachable_parent_path_errors() {
        let mut objects = vec![json!({"a": 1})];
        let err = objectify(&mut objects, &["a", "b", "c"], &[wrapping("a")]).unwrap_err();
        assert!(err.to_string().contains("does not reach an object"));
    }

    #[test]
    fn empty_constructor_list_is_a_no_op() {
        let mut objects = vec![json!({"v": 1})];
        objectify(&mut objects, &["v"], &[]).unwrap();
        assert_eq!(objects[0], json!({"v": 1}));
    }

    #[test]
    fn single_object_via_slice_from_mut() {
        let mut object = json!({"v": 1});
        objectify(std::slice::from_mut(&mut object), &["v"], &[wrapping("a")]).unwrap();
        assert_eq!(object["v"]["tag"], json!("a"));
    }
}
