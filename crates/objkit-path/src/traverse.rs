//! Key-path lookup into nested property bags.

use serde_json::Value;

/// Walk `path` into nested objects and return the terminal value.
///
/// An empty path yields the root itself. The walk stops with `None` as soon
/// as it would have to enter something that is not an object, or a key that
/// is not there. Arrays are not entered; a path segment never indexes into a
/// sequence.
pub fn traverse<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |current, key| current.as_object()?.get(*key))
}

/// Mutable variant of [`traverse`] with identical semantics.
pub fn traverse_mut<'a>(root: &'a mut Value, path: &[&str]) -> Option<&'a mut Value> {
    path.iter()
        .try_fold(root, |current, key| current.as_object_mut()?.get_mut(*key))
}
