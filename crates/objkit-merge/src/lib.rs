//! Merge engine for objkit.
//!
//! Policy-driven merging of property bags: one-level [`extend`] and
//! recursive [`deep_extend`], sharing the same [`MergePolicy`] semantics
//! for overwriting and copy-on-write.
//!
//! # Key Types
//!
//! - [`Bag`] — insertion-ordered property bag (string keys to JSON values)
//! - [`MergePolicy`] — the overwrite / copy-on-write flags
//! - [`extend`] / [`deep_extend`] — the two merge entry points

pub mod deep;
pub mod policy;
pub mod shallow;

pub use deep::deep_extend;
pub use policy::MergePolicy;
pub use shallow::extend;

/// An ordered property bag: string keys mapped to JSON values.
///
/// Absence of a key is the only "no value" state; [`serde_json::Value::Null`]
/// is an ordinary value that occupies its slot.
pub type Bag = serde_json::Map<String, serde_json::Value>;
