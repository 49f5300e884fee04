//! Shallow merge: one level of parent entries into a child bag.

use std::borrow::Cow;

use serde_json::Value;

use crate::{Bag, MergePolicy};

/// Merge the entries of `parent` into `child`, one level deep.
///
/// An entry equal to the child's existing value is skipped. With
/// `policy.overwrite` unset, keys the child already has (including
/// `Null`-valued ones) are kept; with it set, the parent's value replaces
/// them. With `policy.copy_on_write` set the child is never touched: the
/// first write creates a clone, every later write of the same invocation
/// lands on that clone, and the result comes back as [`Cow::Owned`]. In
/// every other case the child is mutated in place and returned as
/// [`Cow::Borrowed`].
///
/// Callers must use the returned bag rather than assume the child holds the
/// merged state.
pub fn extend<'a>(child: &'a mut Bag, parent: &Bag, policy: MergePolicy) -> Cow<'a, Bag> {
    if policy.copy_on_write {
        return extend_detached(child, parent, policy);
    }
    for (key, incoming) in parent {
        if write_allowed(child.get(key), incoming, policy) {
            child.insert(key.clone(), incoming.clone());
        }
    }
    Cow::Borrowed(child)
}

fn extend_detached<'a>(child: &'a Bag, parent: &Bag, policy: MergePolicy) -> Cow<'a, Bag> {
    let mut clone: Option<Bag> = None;
    for (key, incoming) in parent {
        let target = clone.as_ref().unwrap_or(child);
        if write_allowed(target.get(key), incoming, policy) {
            clone
                .get_or_insert_with(|| child.clone())
                .insert(key.clone(), incoming.clone());
        }
    }
    match clone {
        Some(merged) => Cow::Owned(merged),
        None => Cow::Borrowed(child),
    }
}

/// Leaf write rule shared by both merge depths: skip entries equal to the
/// existing value, keep occupied slots unless the policy overwrites.
pub(crate) fn write_allowed(existing: Option<&Value>, incoming: &Value, policy: MergePolicy) -> bool {
    match existing {
        Some(current) => current != incoming && policy.overwrite,
        None => true,
    }
}
