use ipgeo_core::{IpGeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model the hosted runtime serves the agent with.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// A `provider/model` identifier, e.g. `google/gemini-2.5-flash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId {
    id: String,
    /// Byte index of the `/` separating provider and model.
    split: usize,
}

impl ModelId {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let provider = provider.into();
        let model = model.into();
        if provider.trim().is_empty() || model.trim().is_empty() {
            return Err(IpGeoError::Config(format!(
                "model id needs a provider and a model name, got '{}/{}'",
                provider, model
            )));
        }
        Ok(Self { split: provider.len(), id: format!("{}/{}", provider, model) })
    }

    pub fn provider(&self) -> &str {
        &self.id[..self.split]
    }

    pub fn model(&self) -> &str {
        &self.id[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self { id: DEFAULT_MODEL.to_string(), split: "google".len() }
    }
}

impl FromStr for ModelId {
    type Err = IpGeoError;

    fn from_str(s: &str) -> Result<Self> {
        let (provider, model) = s.trim().split_once('/').ok_or_else(|| {
            IpGeoError::Config(format!("model id '{}' is not of the form provider/model", s))
        })?;
        Self::new(provider, model)
    }
}

impl TryFrom<String> for ModelId {
    type Error = IpGeoError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
