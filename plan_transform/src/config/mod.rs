use std::env;

use log::warn;

use crate::{
    config::errors::ConfigError,
    context::{options::TransformationOptions, transformation_context::TransformationContext},
    flags::flag_set::{Flag, FlagSet},
};

pub mod errors;


pub const FLAGS_VAR: &str = "PLAN_TRANSFORM_FLAGS";
pub const OPTIONS_VAR: &str = "PLAN_TRANSFORM_OPTIONS";


/// Flags and options for a pipeline run, read from the environment.
///
/// `PLAN_TRANSFORM_FLAGS` is `default`, `none` or a comma separated list of
/// flag names (unlisted flags are off); unset means the default flags.
/// `PLAN_TRANSFORM_OPTIONS` is a JSON object of option values.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct TransformConfig {
    pub flags: FlagSet,
    pub options: TransformationOptions,
}

impl TransformConfig {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        // skip variables that are not valid unicode instead of panicking
        Self::from_vars(
            env::vars_os().filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?))),
        )
    }

    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = TransformConfig::default();
        for (key, value) in vars {
            match key.as_ref() {
                FLAGS_VAR => config.flags = parse_flag_list(value.as_ref())?,
                OPTIONS_VAR => config.options = TransformationOptions::from_json(value.as_ref())?,
                _ => {}
            }
        }
        Ok(config)
    }

    /// Validates the flags and builds the context for one run.
    pub fn into_context(self) -> Result<TransformationContext, ConfigError> {
        if let Err(e) = self.flags.validate() {
            warn!("configured transform flags {} are invalid: {}", self.flags, e);
            return Err(e.into());
        }
        Ok(TransformationContext::with_options(self.flags, self.options)?)
    }
}


fn parse_flag_list(value: &str) -> Result<FlagSet, ConfigError> {
    match value.trim() {
        "default" => return Ok(FlagSet::DEFAULT),
        "none" => return Ok(FlagSet::EMPTY),
        _ => {}
    }

    let mut flags = FlagSet::EMPTY;
    for name in value.split(',') {
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidFlagList {
                var: FLAGS_VAR,
                value: value.to_string(),
            });
        }
        flags.set(name.parse::<Flag>()?, true);
    }
    Ok(flags)
}
