use thiserror::Error;

use crate::{
    config::errors::ConfigError,
    context::errors::ContextError,
    flags::errors::FlagError,
    transform::errors::{SequenceError, TransformError},
};


#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlanTransformError {
    #[error("FlagError: {0}")]
    Flag(#[from] FlagError),
    #[error("ContextError: {0}")]
    Context(#[from] ContextError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("SequenceError: {0}")]
    Sequence(#[from] SequenceError),
    #[error("TransformError: {0}")]
    Transform(#[from] TransformError),
}
