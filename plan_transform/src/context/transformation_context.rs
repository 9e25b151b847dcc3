use std::fmt;

use crate::{context::{errors::ContextError, options::TransformationOptions}, flags::flag_set::FlagSet};


/// Per-run configuration handed by reference to passes and analyses.
///
/// The flag set is validated on the way in, so anything reading
/// [`TransformationContext::flags`] may assume its dependencies hold.
#[derive(Debug, PartialEq, Clone)]
pub struct TransformationContext {
    flags: FlagSet,
    options: TransformationOptions,
}

impl TransformationContext {
    pub fn new(flags: FlagSet) -> Result<Self, ContextError> {
        Self::with_options(flags, TransformationOptions::new())
    }

    pub fn with_options(flags: FlagSet, options: TransformationOptions) -> Result<Self, ContextError> {
        flags.validate()?;
        Ok(TransformationContext { flags, options })
    }

    pub fn flags(&self) -> FlagSet {
        self.flags
    }

    pub fn options(&self) -> &TransformationOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut TransformationOptions {
        &mut self.options
    }
}

impl Default for TransformationContext {
    fn default() -> Self {
        TransformationContext {
            flags: FlagSet::DEFAULT,
            options: TransformationOptions::new(),
        }
    }
}

impl fmt::Display for TransformationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n---- TransformationContext Starts Here ----")?;
        writeln!(f, "  flags: {}", self.flags)?;
        let mut keys: Vec<&String> = self.options.iter().map(|(key, _)| key).collect();
        keys.sort();
        for key in keys {
            if let Some(value) = self.options.get(key) {
                writeln!(f, "  [{}]: {:?}", key, value)?;
            }
        }
        writeln!(f, "---- TransformationContext Ends Here ----")?;
        Ok(())
    }
}
