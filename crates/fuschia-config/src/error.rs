use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("failed to read config file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The config is not valid JSON or has the wrong shape.
  #[error("invalid config: {0}")]
  Parse(#[from] serde_json::Error),
}
