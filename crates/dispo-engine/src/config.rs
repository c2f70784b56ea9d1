//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! buffer_policy = "symmetric"
//! validate_order = true
//! ```
//!
//! Missing keys fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculator::BufferPolicy;
use crate::error::{DispoError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub buffer_policy: BufferPolicy,
    /// Reject datasets whose dates are not strictly ascending.
    pub validate_order: bool,
}

impl EngineConfig {
    /// # Errors
    /// Returns `DispoError::Config` if the text is not valid configuration TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DispoError::Config(e.to_string()))
    }

    /// # Errors
    /// Returns `DispoError::Config` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DispoError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}
