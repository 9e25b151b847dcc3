use thiserror::Error;

use crate::{context::errors::ContextError, flags::errors::FlagError};




#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("FlagError: {0}")]
    Flag(#[from] FlagError),

    #[error("ContextError: {0}")]
    Context(#[from] ContextError),

    #[error("`{var}` must be `default`, `none` or a comma separated list of flags, got `{value}`.")]
    InvalidFlagList { var: &'static str, value: String },
}
