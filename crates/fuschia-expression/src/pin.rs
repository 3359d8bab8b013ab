use std::collections::HashMap;

use crate::lookup::PinnedData;

/// In-memory pinned data, keyed by node name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinDataStore {
  nodes: HashMap<String, serde_json::Value>,
}

impl PinDataStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pin `data` for `node_name`, replacing anything pinned before.
  pub fn pin(&mut self, node_name: impl Into<String>, data: serde_json::Value) {
    self.nodes.insert(node_name.into(), data);
  }

  pub fn unpin(&mut self, node_name: &str) -> Option<serde_json::Value> {
    self.nodes.remove(node_name)
  }
}

impl From<HashMap<String, serde_json::Value>> for PinDataStore {
  fn from(nodes: HashMap<String, serde_json::Value>) -> Self {
    Self { nodes }
  }
}

impl FromIterator<(String, serde_json::Value)> for PinDataStore {
  fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
    Self {
      nodes: iter.into_iter().collect(),
    }
  }
}

impl PinnedData for PinDataStore {
  fn pinned_data_for_node(&self, node_name: &str) -> Option<&serde_json::Value> {
    self.nodes.get(node_name)
  }
}
