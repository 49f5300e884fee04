//! The merge policy shared by the shallow and deep entry points.

use serde::{Deserialize, Serialize};

/// Controls how parent entries land in a child bag.
///
/// Both flags default to `false`: existing child entries win, and the child
/// is mutated in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePolicy {
    /// When `true`, a parent entry replaces the child's existing entry.
    /// When `false`, parent entries only fill keys the child does not have.
    pub overwrite: bool,
    /// When `true`, writes land on a lazily created clone of the child and
    /// the child itself is left untouched. The clone is created at most once
    /// per merge invocation.
    pub copy_on_write: bool,
}

impl MergePolicy {
    /// Policy that lets parent entries replace existing child entries.
    pub fn overwriting() -> Self {
        Self {
            overwrite: true,
            ..Self::default()
        }
    }

    /// Policy that leaves the child untouched and returns a detached result.
    pub fn detached() -> Self {
        Self {
            copy_on_write: true,
            ..Self::default()
        }
    }
}
