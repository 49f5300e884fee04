//! Path helpers for objkit.
//!
//! Key-path lookup into nested property bags ([`traverse`] /
//! [`traverse_mut`]) and bulk constructor application over located slots
//! ([`objectify`]).

pub mod error;
pub mod objectify;
pub mod traverse;

pub use error::PathError;
pub use objectify::{objectify, Constructor};
pub use traverse::{traverse, traverse_mut};
