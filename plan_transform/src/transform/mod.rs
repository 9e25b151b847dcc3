pub mod analysis_pass;
pub mod errors;
pub mod transform_pass;
pub mod transform_sequence;

pub use analysis_pass::{AnalysisPass, run_analyses};
pub use errors::{SequenceError, TransformError};
pub use transform_pass::{TransformPass, TransformResult};
pub use transform_sequence::{PassId, SequenceBuilder, SequenceReport, SlotOutcome, SlotReport, TransformSequence};
