use thiserror::Error;

use crate::flags::errors::FlagError;




/// Failure reported by a transform pass. Sequences hand it back untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransformError {
    #[error("Pass `{pass}` does not support plan node `{node}`.")]
    UnsupportedNode { pass: String, node: String },

    #[error("Pass `{pass}` precondition violated: {reason}")]
    PreconditionViolated { pass: String, reason: String },

    #[error("Pass `{pass}` failed: {reason}")]
    Failed { pass: String, reason: String },
}


#[derive(Debug, Clone, Error, PartialEq)]
pub enum SequenceError {
    #[error("Pass `{0}` is not registered in this transform sequence.")]
    UnregisteredPass(String),

    #[error("Pass `{0}` is zero-sized and has no identity of its own; gate it with `set_should_run_by_id`.")]
    ZeroSizedPass(String),

    #[error("No pass with id {0} in this transform sequence.")]
    UnknownPassId(usize),

    #[error("FlagError: {0}")]
    InvalidFlags(#[from] FlagError),
}
