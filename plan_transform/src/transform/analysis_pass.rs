use log::debug;

use crate::context::transformation_context::TransformationContext;




/// Read-only inspection of a plan tree.
///
/// Findings go into the context options or into the analysis itself; callers
/// typically use them to flip gates on a sequence before running it.
pub trait AnalysisPass<P> {
    fn run(&mut self, plan: &P, ctx: &mut TransformationContext);

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}


pub fn run_analyses<P>(plan: &P, analyses: &mut [&mut dyn AnalysisPass<P>], ctx: &mut TransformationContext) {
    for analysis in analyses.iter_mut() {
        debug!("running analysis '{}'", analysis.name());
        analysis.run(plan, ctx);
    }
}
