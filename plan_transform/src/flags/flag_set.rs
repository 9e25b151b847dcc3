use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::flags::errors::FlagError;


/// Named optional behaviors. The discriminant is the bit position inside a
/// [`FlagSet`]; new flags are appended, existing positions never move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Flag {
    /// Use codegen for filter expressions.
    CompileFilter = 0,
    /// Merge filter into projection.
    MergeFilter = 1,
    /// Enable the default null optimization.
    EnableDefaultNullOpt = 2,
    /// Use the extended default null definition for filters.
    EnableFilterDefaultNull = 3,
}

impl Flag {
    pub const ALL: [Flag; 4] = [
        Flag::CompileFilter,
        Flag::MergeFilter,
        Flag::EnableDefaultNullOpt,
        Flag::EnableFilterDefaultNull,
    ];

    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Flag::CompileFilter => "compile_filter",
            Flag::MergeFilter => "merge_filter",
            Flag::EnableDefaultNullOpt => "enable_default_null_opt",
            Flag::EnableFilterDefaultNull => "enable_filter_default_null",
        }
    }

    pub const fn camel_name(self) -> &'static str {
        match self {
            Flag::CompileFilter => "compileFilter",
            Flag::MergeFilter => "mergeFilter",
            Flag::EnableDefaultNullOpt => "enableDefaultNullOpt",
            Flag::EnableFilterDefaultNull => "enableFilterDefaultNull",
        }
    }

    /// The flag that must also be set for this one to be meaningful.
    pub const fn requires(self) -> Option<Flag> {
        match self {
            Flag::MergeFilter => Some(Flag::CompileFilter),
            Flag::EnableFilterDefaultNull => Some(Flag::EnableDefaultNullOpt),
            Flag::CompileFilter | Flag::EnableDefaultNullOpt => None,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flag {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Flag::ALL
            .into_iter()
            .find(|flag| flag.name() == s || flag.camel_name() == s)
            .ok_or_else(|| FlagError::UnknownFlag(s.to_string()))
    }
}


/// Bit-packed set of [`Flag`]s.
///
/// Comparison and hashing go through the packed scalar, so a `FlagSet` can key
/// a cache of pass results. `set` is a raw write: call [`FlagSet::validate`]
/// before handing a set to anything that configures passes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FlagSet(u8);

impl FlagSet {
    const KNOWN_BITS: u8 = 0b0000_1111;

    pub const EMPTY: FlagSet = FlagSet(0);

    /// Every known optional behavior switched on.
    pub const DEFAULT: FlagSet = FlagSet(Self::KNOWN_BITS);

    pub fn from_bits(bits: u8) -> Result<Self, FlagError> {
        if bits & !Self::KNOWN_BITS != 0 {
            return Err(FlagError::ReservedBits(bits));
        }
        Ok(FlagSet(bits))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn get(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub fn set(&mut self, flag: Flag, value: bool) {
        if value {
            self.0 |= flag.bit();
        } else {
            self.0 &= !flag.bit();
        }
    }

    pub fn with(mut self, flag: Flag, value: bool) -> Self {
        self.set(flag, value);
        self
    }

    pub fn is_valid(self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(self) -> Result<(), FlagError> {
        for flag in self.iter() {
            if let Some(requires) = flag.requires() {
                if !self.get(requires) {
                    return Err(FlagError::MissingDependency { flag, requires });
                }
            }
        }
        Ok(())
    }

    /// Enabled flags in bit order.
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |flag| self.get(*flag))
    }

    pub fn contains_all(self, flags: &[Flag]) -> bool {
        flags.iter().all(|flag| self.get(*flag))
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        FlagSet::DEFAULT
    }
}

impl TryFrom<u8> for FlagSet {
    type Error = FlagError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        FlagSet::from_bits(bits)
    }
}

impl From<FlagSet> for u8 {
    fn from(flags: FlagSet) -> Self {
        flags.0
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        iter.into_iter().fold(FlagSet::EMPTY, |acc, flag| acc.with(flag, true))
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(Flag::name).collect();
        f.write_str(&names.join("|"))
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:#06b}: {})", self.0, self)
    }
}
