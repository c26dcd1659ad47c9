use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::WizardError;

/// The wizard's partial data record.
///
/// A shallow JSON object the wizard carries between steps without ever
/// inspecting its contents beyond key-level merging. Step views fill it in
/// piece by piece via `update_data`; `reset_data` replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WizardData(Map<String, Value>);

impl WizardData {
    /// Create an empty data record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a data record from a JSON value.
    ///
    /// Only objects are accepted; any other value kind is rejected.
    pub fn from_value(value: Value) -> Result<Self, WizardError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(WizardError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }

    /// Get a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a single field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Shallow-merge `patch` into this record.
    ///
    /// Existing keys are overwritten wholesale; nested objects are replaced,
    /// not deep-merged.
    pub fn merge(&mut self, patch: WizardData) {
        for (key, value) in patch.0 {
            self.0.insert(key, value);
        }
    }

    /// Check if a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the fields in key insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the record, returning the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for WizardData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for WizardData {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
