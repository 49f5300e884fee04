//! Deep merge: recursive application of the shallow rules through nested
//! objects and arrays.

use std::borrow::Cow;

use serde_json::Value;

use crate::shallow::write_allowed;
use crate::{Bag, MergePolicy};

/// Recursively merge the entries of `parent` into `child`.
///
/// Nested objects merge key by key. Arrays concatenate: every parent element
/// is appended to the child's array as a detached deep copy, never merged
/// positionally, so repeating the same merge keeps growing the array.
/// Scalars follow the shallow leaf rule.
///
/// Copy-on-write is scoped per recursion level: every level that has to
/// write clones its own bag once, and the child is never touched. The
/// outermost call reports the top-level clone decision through the returned
/// [`Cow`].
///
/// There is no depth guard. Input nested deeply enough to exhaust the stack
/// aborts the process; that is an accepted limitation, not a handled
/// condition.
pub fn deep_extend<'a>(child: &'a mut Bag, parent: &Bag, policy: MergePolicy) -> Cow<'a, Bag> {
    if policy.copy_on_write {
        return deep_extend_detached(child, parent, policy);
    }
    deep_extend_in_place(child, parent, policy);
    Cow::Borrowed(child)
}

fn deep_extend_in_place(child: &mut Bag, parent: &Bag, policy: MergePolicy) {
    for (key, incoming) in parent {
        if child.get(key) == Some(incoming) {
            continue;
        }
        match incoming {
            Value::Object(src) => match child.get_mut(key) {
                Some(Value::Object(dst)) => deep_extend_in_place(dst, src, policy),
                Some(Value::Null) | None => {
                    let mut fresh = Bag::new();
                    deep_extend_in_place(&mut fresh, src, policy);
                    child.insert(key.clone(), Value::Object(fresh));
                }
                Some(_) if policy.overwrite => {
                    child.insert(key.clone(), detach(incoming, policy));
                }
                Some(_) => {}
            },
            Value::Array(elems) => {
                if reset_needed(child.get(key), policy) {
                    child.insert(key.clone(), Value::Array(Vec::new()));
                }
                if let Some(Value::Array(seq)) = child.get_mut(key) {
                    seq.extend(elems.iter().map(|elem| detach(elem, policy)));
                }
            }
            _ => {
                if write_allowed(child.get(key), incoming, policy) {
                    child.insert(key.clone(), incoming.clone());
                }
            }
        }
    }
}

fn deep_extend_detached<'a>(child: &'a Bag, parent: &Bag, policy: MergePolicy) -> Cow<'a, Bag> {
    let mut clone: Option<Bag> = None;
    for (key, incoming) in parent {
        let existing = clone.as_ref().unwrap_or(child).get(key);
        if existing == Some(incoming) {
            continue;
        }
        if let Some(value) = merged_slot(existing, incoming, policy) {
            clone
                .get_or_insert_with(|| child.clone())
                .insert(key.clone(), value);
        }
    }
    match clone {
        Some(merged) => Cow::Owned(merged),
        None => Cow::Borrowed(child),
    }
}

/// Replacement value for one slot under the deep rules, or `None` when the
/// existing value is kept as is.
fn merged_slot(existing: Option<&Value>, incoming: &Value, policy: MergePolicy) -> Option<Value> {
    match incoming {
        Value::Object(src) => match existing {
            Some(Value::Object(dst)) => match deep_extend_detached(dst, src, policy) {
                Cow::Owned(merged) => Some(Value::Object(merged)),
                Cow::Borrowed(_) => None,
            },
            Some(Value::Null) | None => Some(detach(incoming, policy)),
            Some(_) if policy.overwrite => Some(detach(incoming, policy)),
            Some(_) => None,
        },
        Value::Array(elems) => {
            let grown = match existing {
                Some(Value::Array(seq)) => {
                    if elems.is_empty() {
                        return None;
                    }
                    let mut grown = seq.clone();
                    grown.extend(elems.iter().map(|elem| detach(elem, policy)));
                    grown
                }
                slot if reset_needed(slot, policy) => {
                    elems.iter().map(|elem| detach(elem, policy)).collect()
                }
                _ => return None,
            };
            Some(Value::Array(grown))
        }
        _ => {
            if write_allowed(existing, incoming, policy) {
                Some(incoming.clone())
            } else {
                None
            }
        }
    }
}

/// A slot is reset to an empty array when the parent brings an array and the
/// slot holds anything but one: always for absent or `Null` slots, and for
/// other values only when overwriting.
fn reset_needed(existing: Option<&Value>, policy: MergePolicy) -> bool {
    match existing {
        None | Some(Value::Null) => true,
        Some(Value::Array(_)) => false,
        Some(_) => policy.overwrite,
    }
}

/// Detached deep copy of a parent value, the way array elements enter a
/// child. Objects are rebuilt through a fresh-bag merge; arrays and scalars
/// copy recursively.
fn detach(value: &Value, policy: MergePolicy) -> Value {
    match value {
        Value::Object(src) => {
            let mut fresh = Bag::new();
            deep_extend_in_place(&mut fresh, src, policy);
            Value::Object(fresh)
        }
        Value::Array(elems) => Value::Array(elems.iter().map(|elem| detach(elem, policy)).collect()),
        other => other.clone(),
    }
}


#[cfg(test)]
mod merge_laws {
    use std::borrow::Cow;

    use proptest::prelude::*;
    use serde_json::Value;

    use crate::{deep_extend, extend, Bag, MergePolicy};

    fn scalar_bag() -> impl Strategy<Value = Bag> {
        proptest::collection::btree_map("[a-f]", any::<i64>(), 0..6).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(key, value)| (key, Value::from(value)))
                .collect::<Bag>()
        })
    }

    proptest! {
        #[test]
        fn overwrite_adopts_every_parent_entry(mut child in scalar_bag(), parent in scalar_bag()) {
            let merged = extend(&mut child, &parent, MergePolicy::overwriting()).into_owned();
            for (key, value) in &parent {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }

        #[test]
        fn copy_on_write_never_touches_the_child(mut child in scalar_bag(), parent in scalar_bag()) {
            let before = child.clone();
            let _ = extend(&mut child, &parent, MergePolicy::detached());
            prop_assert_eq!(child, before);
        }

        #[test]
        fn self_merge_is_a_borrowed_no_op(mut child in scalar_bag()) {
            let parent = child.clone();
            let merged = deep_extend(&mut child, &parent, MergePolicy::detached());
            prop_assert!(matches!(merged, Cow::Borrowed(_)));
        }
    }
}
