use std::{fmt, sync::Arc};

use log::{debug, trace, warn};

use crate::{
    flags::flag_set::FlagSet,
    transform::{errors::SequenceError, transform_pass::{TransformPass, TransformResult}},
    transformed::Transformed,
};


/// Identity of a pass inside one [`TransformSequence`], assigned at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassId(usize);

impl PassId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// A linear sequence of transform passes applied to a plan, each behind a
/// should-run gate.
///
/// Passes are borrowed, never owned, so they must outlive the sequence. Gates
/// are keyed by pass identity rather than by position: a pass listed twice
/// has one gate, and disabling it skips both occurrences.
///
/// A sequence is itself a [`TransformPass`]. Nested in another sequence it
/// runs as one unit behind its own gate, and its inner gates apply only when
/// it runs. Inner gates cannot change while the outer sequence borrows it.
pub struct TransformSequence<'a, P> {
    name: String,
    // indexed by PassId
    passes: Vec<&'a dyn TransformPass<P>>,
    should_run: Vec<bool>,
    slots: Vec<PassId>,
}

impl<'a, P> TransformSequence<'a, P> {
    /// Registers each distinct pass instance once, compared by address, and
    /// keeps the given order. Zero-sized passes have no address of their own,
    /// so every occurrence of one gets a fresh identity; gate those through
    /// [`TransformSequence::set_should_run_by_id`].
    pub fn new(transformations: &[&'a dyn TransformPass<P>]) -> Self {
        let mut builder = SequenceBuilder::new();
        for transformation in transformations {
            match find_pass(&builder.passes, *transformation) {
                Some(id) => builder.slots.push(id),
                None => {
                    builder.add(*transformation);
                }
            }
        }
        builder.build()
    }

    pub fn builder() -> SequenceBuilder<'a, P> {
        SequenceBuilder::new()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn pass_id(&self, pass: &dyn TransformPass<P>) -> Option<PassId> {
        find_pass(&self.passes, pass)
    }

    pub fn should_run(&self, pass: &dyn TransformPass<P>) -> Option<bool> {
        self.pass_id(pass).map(|id| self.should_run[id.0])
    }

    /// Fails without touching any gate when `pass` was never registered or
    /// is zero-sized.
    pub fn set_should_run(&mut self, pass: &dyn TransformPass<P>, should_run: bool) -> Result<(), SequenceError> {
        if std::mem::size_of_val(pass) == 0 {
            return Err(SequenceError::ZeroSizedPass(pass.name().to_string()));
        }
        let id = self
            .pass_id(pass)
            .ok_or_else(|| SequenceError::UnregisteredPass(pass.name().to_string()))?;
        self.set_should_run_by_id(id, should_run)
    }

    pub fn set_should_run_by_id(&mut self, id: PassId, should_run: bool) -> Result<(), SequenceError> {
        let gate = self
            .should_run
            .get_mut(id.0)
            .ok_or(SequenceError::UnknownPassId(id.0))?;
        *gate = should_run;
        trace!("gate of pass '{}' {} set to {}", self.passes[id.0].name(), id, should_run);
        Ok(())
    }

    /// Turns off every pass whose required flags are not all in `flags`.
    /// Gates are only ever switched off here, so earlier decisions made from
    /// analysis results survive.
    pub fn apply_flags(&mut self, flags: FlagSet) -> Result<(), SequenceError> {
        if let Err(e) = flags.validate() {
            warn!("rejecting transform flags {}: {}", flags, e);
            return Err(e.into());
        }

        for (index, pass) in self.passes.iter().enumerate() {
            if !flags.contains_all(pass.required_flags()) {
                debug!("disabling pass '{}': flags {} lack {:?}", pass.name(), flags, pass.required_flags());
                self.should_run[index] = false;
            }
        }
        Ok(())
    }

    /// Number of slots, counting repeated passes once per occurrence.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in execution order with their pass identity, name and gate.
    pub fn passes(&self) -> impl Iterator<Item = (PassId, &str, bool)> + '_ {
        self.slots
            .iter()
            .map(|id| (*id, self.passes[id.0].name(), self.should_run[id.0]))
    }

    /// Like [`TransformPass::transform`], also reporting what each slot did.
    pub fn transform_with_report(&self, plan: Arc<P>) -> TransformResult<(Arc<P>, SequenceReport)> {
        let mut current = plan;
        let mut slots = Vec::with_capacity(self.slots.len());

        for (slot, id) in self.slots.iter().copied().enumerate() {
            let pass = self.passes[id.0];
            let outcome = if self.should_run[id.0] {
                debug!("running pass '{}' in slot {} of '{}'", pass.name(), slot, self.name);
                let next = pass
                    .transform(current.clone())
                    .inspect_err(|e| debug!("pass '{}' failed: {}", pass.name(), e))?;
                let transformed = Transformed::compare(&current, next);
                let outcome = if transformed.is_yes() { SlotOutcome::Rewritten } else { SlotOutcome::Unchanged };
                current = transformed.get_plan();
                outcome
            } else {
                debug!("skipping pass '{}' in slot {} of '{}'", pass.name(), slot, self.name);
                SlotOutcome::Skipped
            };

            slots.push(SlotReport {
                slot,
                pass: id,
                name: pass.name().to_string(),
                outcome,
            });
        }

        Ok((current, SequenceReport { slots }))
    }
}

impl<'a, P> TransformPass<P> for TransformSequence<'a, P> {
    fn transform(&self, plan: Arc<P>) -> TransformResult<Arc<P>> {
        self.transform_with_report(plan).map(|(plan, _)| plan)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<'a, P> fmt::Debug for TransformSequence<'a, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformSequence")
            .field("name", &self.name)
            .field("slots", &self.passes().collect::<Vec<_>>())
            .finish()
    }
}


// Zero-sized values may all sit at one address, so they never match.
fn find_pass<P>(passes: &[&dyn TransformPass<P>], pass: &dyn TransformPass<P>) -> Option<PassId> {
    let size = std::mem::size_of_val(pass);
    if size == 0 {
        return None;
    }
    passes
        .iter()
        .position(|registered| std::ptr::addr_eq(*registered, pass) && std::mem::size_of_val(*registered) == size)
        .map(PassId)
}


/// Builds a sequence with explicit pass identities.
///
/// [`SequenceBuilder::add`] always creates a new identity, even for a pass
/// that was added before; [`SequenceBuilder::repeat`] appends another slot
/// sharing an existing identity and gate.
pub struct SequenceBuilder<'a, P> {
    passes: Vec<&'a dyn TransformPass<P>>,
    slots: Vec<PassId>,
}

impl<'a, P> SequenceBuilder<'a, P> {
    pub fn new() -> Self {
        SequenceBuilder {
            passes: vec![],
            slots: vec![],
        }
    }

    pub fn add(&mut self, pass: &'a dyn TransformPass<P>) -> PassId {
        let id = PassId(self.passes.len());
        self.passes.push(pass);
        self.slots.push(id);
        id
    }

    pub fn repeat(&mut self, id: PassId) -> Result<(), SequenceError> {
        if id.0 >= self.passes.len() {
            return Err(SequenceError::UnknownPassId(id.0));
        }
        self.slots.push(id);
        Ok(())
    }

    pub fn build(self) -> TransformSequence<'a, P> {
        TransformSequence {
            name: "transform_sequence".to_string(),
            should_run: vec![true; self.passes.len()],
            passes: self.passes,
            slots: self.slots,
        }
    }
}

impl<'a, P> Default for SequenceBuilder<'a, P> {
    fn default() -> Self {
        Self::new()
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    Skipped,
    /// Ran and handed back its input.
    Unchanged,
    Rewritten,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotReport {
    pub slot: usize,
    pub pass: PassId,
    pub name: String,
    pub outcome: SlotOutcome,
}

/// Per-slot account of one sequence run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequenceReport {
    pub slots: Vec<SlotReport>,
}

impl SequenceReport {
    /// Names of the passes that ran, in order.
    pub fn executed(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|slot| slot.outcome != SlotOutcome::Skipped)
            .map(|slot| slot.name.as_str())
            .collect()
    }

    pub fn skipped(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|slot| slot.outcome == SlotOutcome::Skipped)
            .map(|slot| slot.name.as_str())
            .collect()
    }

    pub fn rewritten(&self) -> bool {
        self.slots.iter().any(|slot| slot.outcome == SlotOutcome::Rewritten)
    }
}
