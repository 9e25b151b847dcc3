use std::sync::Arc;

use crate::{flags::flag_set::Flag, transform::errors::TransformError};



pub type TransformResult<T> = Result<T, TransformError>;

/// A rewrite from one plan tree to a new one.
///
/// The input is never modified. A pass with nothing to rewrite returns the
/// input `Arc` itself.
pub trait TransformPass<P> {
    fn transform(&self, plan: Arc<P>) -> TransformResult<Arc<P>>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Optional behaviors this pass implements. A sequence configured with a
    /// flag set lacking any of them skips the pass.
    fn required_flags(&self) -> &[Flag] {
        &[]
    }
}
