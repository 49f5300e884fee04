//! Class descriptors and the instances they create.

use std::sync::Arc;

use serde_json::Value;

use objkit_merge::Bag;

use crate::error::ProtoError;
use crate::prototype::{Method, Prototype};

/// A named type descriptor: static members plus a prototype for instances.
#[derive(Clone, Debug)]
pub struct Class {
    pub(crate) name: String,
    pub(crate) statics: Bag,
    pub(crate) prototype: Arc<Prototype>,
    pub(crate) superclass: Option<String>,
}

impl Class {
    /// A class with an empty prototype and no static members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statics: Bag::new(),
            prototype: Arc::new(Prototype::new()),
            superclass: None,
        }
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the class this one inherited from, if any.
    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    /// The static members.
    pub fn statics(&self) -> &Bag {
        &self.statics
    }

    /// A single static member by key.
    pub fn static_member(&self, key: &str) -> Option<&Value> {
        self.statics.get(key)
    }

    /// Set a static member.
    pub fn define_static(&mut self, key: impl Into<String>, value: Value) {
        self.statics.insert(key.into(), value);
    }

    /// Define (or redefine) an instance method on this class's prototype.
    ///
    /// Instances created before the call keep dispatching through the table
    /// they were created with.
    pub fn define_method(&mut self, name: impl Into<String>, method: Method) {
        Arc::make_mut(&mut self.prototype).define(name, method);
    }

    /// The prototype instances of this class dispatch through.
    pub fn prototype(&self) -> &Arc<Prototype> {
        &self.prototype
    }

    /// Create an instance with empty fields.
    pub fn instantiate(&self) -> Instance {
        self.instantiate_with(Bag::new())
    }

    /// Create an instance with initial fields.
    pub fn instantiate_with(&self, fields: Bag) -> Instance {
        Instance {
            class: self.name.clone(),
            fields,
            prototype: Arc::clone(&self.prototype),
        }
    }
}

/// An object created from a [`Class`]: per-instance fields plus a shared
/// handle to the class's prototype chain.
#[derive(Clone, Debug)]
pub struct Instance {
    class: String,
    /// Per-instance state, readable and writable by methods.
    pub fields: Bag,
    prototype: Arc<Prototype>,
}

impl Instance {
    /// The name of the class this instance was created from.
    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// Returns `true` if the prototype chain defines `name`.
    pub fn responds_to(&self, name: &str) -> bool {
        self.prototype.responds_to(name)
    }

    /// Invoke a method through the prototype chain.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, ProtoError> {
        let prototype = Arc::clone(&self.prototype);
        let Some(method) = prototype.resolve(name).map(Arc::clone) else {
            return Err(ProtoError::MethodNotFound {
                class: self.class.clone(),
                method: name.to_string(),
            });
        };
        (*method)(self, args)
    }
}
