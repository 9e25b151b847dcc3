pub mod errors;
pub mod options;
pub mod transformation_context;

pub use errors::ContextError;
pub use options::{OptionValue, TransformationOptions};
pub use transformation_context::TransformationContext;
