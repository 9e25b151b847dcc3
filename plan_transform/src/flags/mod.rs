pub mod errors;
pub mod flag_set;

pub use errors::FlagError;
pub use flag_set::{Flag, FlagSet};
