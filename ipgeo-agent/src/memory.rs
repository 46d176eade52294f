use ipgeo_core::{IpGeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default location of the conversational memory store.
pub const DEFAULT_MEMORY_URL: &str = "file:ipgeo.db";

const IN_MEMORY_URL: &str = ":memory:";

/// Where the runtime keeps the agent's conversational memory.
///
/// Only the location is described here; the embedded store itself belongs
/// to the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MemoryBinding {
    /// A database file, `file:<path>`.
    File(String),
    /// A store that lives only as long as the runtime process.
    InMemory,
}

impl MemoryBinding {
    pub fn file(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(IpGeoError::Config("memory store path is empty".to_string()));
        }
        Ok(MemoryBinding::File(path))
    }

    pub fn in_memory() -> Self {
        MemoryBinding::InMemory
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, MemoryBinding::File(_))
    }

    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl Default for MemoryBinding {
    fn default() -> Self {
        MemoryBinding::File("ipgeo.db".to_string())
    }
}

impl FromStr for MemoryBinding {
    type Err = IpGeoError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == IN_MEMORY_URL {
            return Ok(MemoryBinding::InMemory);
        }
        match s.strip_prefix("file:") {
            Some(path) => MemoryBinding::file(path),
            None => Err(IpGeoError::Config(format!(
                "memory store url '{}' must be 'file:<path>' or '{}'",
                s, IN_MEMORY_URL
            ))),
        }
    }
}

impl TryFrom<String> for MemoryBinding {
    type Error = IpGeoError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MemoryBinding> for String {
    fn from(binding: MemoryBinding) -> Self {
        binding.to_string()
    }
}

impl fmt::Display for MemoryBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryBinding::File(path) => write!(f, "file:{}", path),
            MemoryBinding::InMemory => f.write_str(IN_MEMORY_URL),
        }
    }
}
