//! Error types for the prototype crate.

use thiserror::Error;

/// Errors raised by prototype method dispatch.
#[derive(Debug, Error)]
pub enum ProtoError {
    /// A placeholder method was invoked before a subclass overrode it.
    #[error("unimplemented function {name}")]
    Unimplemented { name: String },

    /// No prototype in the chain defines the requested method.
    #[error("no method {method:?} on {class}")]
    MethodNotFound { class: String, method: String },
}
