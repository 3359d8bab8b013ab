//! Read-only collaborators consulted while describing errors.

use std::fmt;

/// Keys of every message this crate may ask a [`Translator`] for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
  NoExecutionData,
  /// Interpolates `node`.
  NoNodeExecutionData,
  NoInputConnection,
  PairedItemConnectionError,
  /// Interpolates `node`.
  PairedItemInvalidPinnedError,
  PairedItemError,
  PairedItemErrorNoRunData,
  /// Label placed in front of an error message.
  Error,
  /// Placeholder shown when an expression evaluated to `""`.
  EmptyString,
}

impl MessageKey {
  pub const ALL: [MessageKey; 9] = [
    MessageKey::NoExecutionData,
    MessageKey::NoNodeExecutionData,
    MessageKey::NoInputConnection,
    MessageKey::PairedItemConnectionError,
    MessageKey::PairedItemInvalidPinnedError,
    MessageKey::PairedItemError,
    MessageKey::PairedItemErrorNoRunData,
    MessageKey::Error,
    MessageKey::EmptyString,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      MessageKey::NoExecutionData => "expression.no_execution_data",
      MessageKey::NoNodeExecutionData => "expression.no_node_execution_data",
      MessageKey::NoInputConnection => "expression.no_input_connection",
      MessageKey::PairedItemConnectionError => "expression.paired_item_connection_error",
      MessageKey::PairedItemInvalidPinnedError => "expression.paired_item_invalid_pinned_error",
      MessageKey::PairedItemError => "expression.paired_item_error",
      MessageKey::PairedItemErrorNoRunData => "expression.paired_item_error.no_run_data",
      MessageKey::Error => "parameter_input.error",
      MessageKey::EmptyString => "parameter_input.empty_string",
    }
  }
}

impl fmt::Display for MessageKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Localized message lookup.
///
/// Implementations must not fail: an unknown key or a broken template still
/// yields some string.
pub trait Translator {
  fn translate(&self, key: &str, args: &[(&str, &str)]) -> String;
}

/// Pinned sample output, keyed by node name.
pub trait PinnedData {
  fn pinned_data_for_node(&self, node_name: &str) -> Option<&serde_json::Value>;

  /// Whether `node_name` has pinned data. A `null` entry counts as absent.
  fn is_pinned(&self, node_name: &str) -> bool {
    self
      .pinned_data_for_node(node_name)
      .is_some_and(|data| !data.is_null())
  }
}

impl<T: Translator + ?Sized> Translator for &T {
  fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
    (**self).translate(key, args)
  }
}

impl<P: PinnedData + ?Sized> PinnedData for &P {
  fn pinned_data_for_node(&self, node_name: &str) -> Option<&serde_json::Value> {
    (**self).pinned_data_for_node(node_name)
  }
}

/// A pinned-data source with nothing pinned.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPinnedData;

impl PinnedData for NoPinnedData {
  fn pinned_data_for_node(&self, _node_name: &str) -> Option<&serde_json::Value> {
    None
  }
}
