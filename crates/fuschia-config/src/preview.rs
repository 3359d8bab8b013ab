use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings a preview is rendered with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
  /// Message templates keyed by message key, layered over the defaults.
  #[serde(default, skip_serializing_if = "HashMap::is_empty")]
  pub messages: HashMap<String, String>,

  /// Pinned output per node name.
  #[serde(default, skip_serializing_if = "HashMap::is_empty")]
  pub pin_data: HashMap<String, serde_json::Value>,

  /// Whether the node owning the expression has run data.
  #[serde(default)]
  pub node_has_run_data: bool,

  /// Whether the parameter is edited in a specialized (code, SQL, ...) editor.
  #[serde(default)]
  pub specialized_editor: bool,
}

impl PreviewConfig {
  pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(s)?)
  }

  /// Load a config from a JSON file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json_str(&content)
  }
}
