use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single animal as returned by the data file or the remote API.
///
/// Every field is optional on the wire. Missing fields deserialize to their
/// empty value so rendering can treat "absent" and "empty" the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub locations: Vec<String>,
    /// Free-form attributes such as `diet`, `skin_type` or `top_speed`.
    #[serde(default, deserialize_with = "scalar_characteristics")]
    pub characteristics: BTreeMap<String, String>,
    /// Carried through untouched, never rendered.
    #[serde(default)]
    pub taxonomy: Map<String, Value>,
}

impl AnimalRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    pub fn with_characteristic(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.characteristics.insert(key.into(), value.into());
        self
    }

    /// Returns the characteristic stored under `key`, treating an empty string as absent.
    pub fn characteristic(&self, key: &str) -> Option<&str> {
        self.characteristics
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn skin_type(&self) -> Option<&str> {
        self.characteristic("skin_type")
    }
}

/// Keeps string, number and boolean characteristics as text. `null`, arrays
/// and objects are dropped so they read as absent instead of failing the load.
fn scalar_characteristics<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, text)),
            Value::Number(number) => Some((key, number.to_string())),
            Value::Bool(flag) => Some((key, flag.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
        .collect())
}
