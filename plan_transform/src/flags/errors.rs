use thiserror::Error;

use crate::flags::flag_set::Flag;




#[derive(Debug, Clone, Error, PartialEq)]
pub enum FlagError {
    #[error("Flag `{flag}` requires `{requires}` to be set.")]
    MissingDependency { flag: Flag, requires: Flag },

    #[error("Unknown transform flag `{0}`.")]
    UnknownFlag(String),

    #[error("Flag bits {0:#010b} use positions reserved for future flags.")]
    ReservedBits(u8),
}
