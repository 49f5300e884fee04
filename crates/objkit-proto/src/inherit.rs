//! Inheritance wiring between classes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use objkit_merge::{deep_extend, extend, MergePolicy};

use crate::class::Class;
use crate::prototype::Prototype;

/// Options for [`inherit`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InheritOptions {
    /// Copy the parent's statics with a deep merge instead of a shallow one.
    pub deep_merge: bool,
}

/// Wire `child` to inherit from `parent`.
///
/// The parent's static members are merged into the child's under the default
/// policy, so statics the child already defines are preserved and the parent
/// fills the gaps. The child's prototype is rebuilt as a fresh table that
/// delegates to the parent's chain, with the child's own methods laid on top
/// so they shadow anything inherited. The child keeps its own name and
/// records the parent as its superclass. The parent is never mutated.
pub fn inherit(child: &mut Class, parent: &Class, options: InheritOptions) {
    let policy = MergePolicy::default();
    if options.deep_merge {
        deep_extend(&mut child.statics, &parent.statics, policy);
    } else {
        extend(&mut child.statics, &parent.statics, policy);
    }

    // Fresh table delegating to the parent's chain; the child's own methods
    // land on top and always win over inherited ones.
    let mut rewired = Prototype::child_of(Arc::clone(&parent.prototype));
    rewired.methods = child.prototype.methods.clone();
    child.prototype = Arc::new(rewired);
    child.superclass = Some(parent.name.clone());

    debug!(
        child = %child.name,
        parent = %parent.name,
        deep = options.deep_merge,
        "inheritance wired"
    );
}
