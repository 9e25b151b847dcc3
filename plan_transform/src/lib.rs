//! Pass framework for rewriting immutable query-plan trees.
//!
//! Transform passes map one plan to a new one; analysis passes inspect a plan
//! without changing it. A [`TransformSequence`] chains transform passes in a
//! fixed order behind per-pass gates, and a [`FlagSet`] carries the optional
//! behaviors that passes may depend on.

pub mod config;
pub mod context;
pub mod errors;
pub mod flags;
pub mod transform;
pub mod transformed;

#[cfg(test)]
mod testing;

pub use config::TransformConfig;
pub use context::{OptionValue, TransformationContext, TransformationOptions};
pub use errors::PlanTransformError;
pub use flags::{Flag, FlagSet};
pub use transform::{
    AnalysisPass, PassId, SequenceBuilder, SequenceError, SequenceReport, SlotOutcome, SlotReport, TransformError,
    TransformPass, TransformResult, TransformSequence,
};
pub use transformed::Transformed;
