use std::collections::{HashMap, hash_map};

use serde::{Deserialize, Serialize};

use crate::context::errors::ContextError;


/// Value of a single transformation option.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<OptionValue>),
}

impl OptionValue {
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Int(_) => "int",
            OptionValue::Float(_) => "float",
            OptionValue::Text(_) => "text",
            OptionValue::List(_) => "list",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(value: Vec<OptionValue>) -> Self {
        OptionValue::List(value)
    }
}


/// Named options shared by every pass of a run. An absent key means the
/// option is not configured.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformationOptions {
    options: HashMap<String, OptionValue>,
}

impl TransformationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object such as `{"max_depth": 8, "dialect": "presto"}`.
    pub fn from_json(json: &str) -> Result<Self, ContextError> {
        serde_json::from_str(json).map_err(|e| ContextError::InvalidOptions(e.to_string()))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Option<OptionValue> {
        self.options.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.options.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, OptionValue> {
        self.options.iter()
    }

    /// Copies every entry of `other` over this set of options.
    pub fn extend(&mut self, other: TransformationOptions) {
        self.options.extend(other.options);
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ContextError> {
        match self.get(key) {
            None => Ok(None),
            Some(OptionValue::Bool(value)) => Ok(Some(*value)),
            Some(_) => Err(Self::mismatch(key, "bool")),
        }
    }

    pub fn get_int(&self, key: &str) -> Result<Option<i64>, ContextError> {
        match self.get(key) {
            None => Ok(None),
            Some(OptionValue::Int(value)) => Ok(Some(*value)),
            Some(_) => Err(Self::mismatch(key, "int")),
        }
    }

    // ints widen, nothing else does
    pub fn get_float(&self, key: &str) -> Result<Option<f64>, ContextError> {
        match self.get(key) {
            None => Ok(None),
            Some(OptionValue::Float(value)) => Ok(Some(*value)),
            Some(OptionValue::Int(value)) => Ok(Some(*value as f64)),
            Some(_) => Err(Self::mismatch(key, "float")),
        }
    }

    pub fn get_text(&self, key: &str) -> Result<Option<&str>, ContextError> {
        match self.get(key) {
            None => Ok(None),
            Some(OptionValue::Text(value)) => Ok(Some(value.as_str())),
            Some(_) => Err(Self::mismatch(key, "text")),
        }
    }

    pub fn get_list(&self, key: &str) -> Result<Option<&[OptionValue]>, ContextError> {
        match self.get(key) {
            None => Ok(None),
            Some(OptionValue::List(values)) => Ok(Some(values.as_slice())),
            Some(_) => Err(Self::mismatch(key, "list")),
        }
    }

    fn mismatch(key: &str, expected: &'static str) -> ContextError {
        ContextError::OptionTypeMismatch {
            key: key.to_string(),
            expected,
        }
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for TransformationOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TransformationOptions {
            options: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
