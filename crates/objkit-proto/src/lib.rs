//! Prototype-style inheritance for objkit.
//!
//! A [`Class`] couples static members (a property bag) with a [`Prototype`]
//! method table. [`inherit`] wires a child class to a parent: statics are
//! merged gap-filling, and the child's prototype is rebuilt to delegate to
//! the parent's chain with the child's own methods shadowing inherited ones.
//!
//! # Key Types
//!
//! - [`Class`] / [`Instance`] — type descriptors and the objects they create
//! - [`Prototype`] / [`Method`] — the dispatch table and its entry type
//! - [`inherit`] / [`InheritOptions`] — the wiring operation
//! - [`placeholder`] — abstract-method stubs that fail until overridden

pub mod class;
pub mod error;
pub mod inherit;
pub mod prototype;

pub use class::{Class, Instance};
pub use error::ProtoError;
pub use inherit::{inherit, InheritOptions};
pub use prototype::{placeholder, Method, Prototype};
