use thiserror::Error;

use crate::flags::errors::FlagError;




#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContextError {
    #[error("FlagError: {0}")]
    InvalidFlags(#[from] FlagError),

    #[error("Option `{key}` is not a {expected} value.")]
    OptionTypeMismatch { key: String, expected: &'static str },

    #[error("Could not parse transformation options: {0}")]
    InvalidOptions(String),
}
