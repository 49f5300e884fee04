//! Prototype method tables and chain resolution.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::class::Instance;
use crate::error::ProtoError;

/// A callable member of a prototype: the dispatch-table entry type.
pub type Method =
    Arc<dyn Fn(&mut Instance, &[Value]) -> Result<Value, ProtoError> + Send + Sync>;

/// A method table with an optional delegation link to a parent table.
///
/// Resolution checks the own table first and then walks the parent chain, so
/// a derived table shadows anything it redefines.
#[derive(Clone, Default)]
pub struct Prototype {
    pub(crate) methods: BTreeMap<String, Method>,
    pub(crate) parent: Option<Arc<Prototype>>,
}

impl Prototype {
    /// An empty prototype with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty prototype delegating to `parent`.
    pub fn child_of(parent: Arc<Prototype>) -> Self {
        Self {
            methods: BTreeMap::new(),
            parent: Some(parent),
        }
    }

    /// Define (or redefine) an own method.
    pub fn define(&mut self, name: impl Into<String>, method: Method) {
        self.methods.insert(name.into(), method);
    }

    /// Resolve a method through the delegation chain.
    pub fn resolve(&self, name: &str) -> Option<&Method> {
        self.methods
            .get(name)
            .or_else(|| self.parent.as_deref().and_then(|parent| parent.resolve(name)))
    }

    /// Returns `true` if the chain defines `name`.
    pub fn responds_to(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Own method names, not including inherited ones.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// The parent table this prototype delegates to, if any.
    pub fn parent(&self) -> Option<&Arc<Prototype>> {
        self.parent.as_ref()
    }
}

impl fmt::Debug for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prototype")
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .field("parent", &self.parent)
            .finish()
    }
}

/// A stub method for abstract slots: it fails until a subclass overrides it.
///
/// The returned method unconditionally errors with
/// `unimplemented function <name>`.
pub fn placeholder(name: impl Into<String>) -> Method {
    let name = name.into();
    Arc::new(move |_instance: &mut Instance, _args: &[Value]| {
        Err(ProtoError::Unimplemented { name: name.clone() })
    })
}
