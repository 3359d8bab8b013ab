//! Default message catalog.
//!
//! Messages are minijinja templates rendered against the interpolation
//! arguments, e.g. `"Execute node '{{ node }}' for preview"`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use minijinja::{Environment, Value};
use tracing::{debug, warn};

use crate::lookup::{MessageKey, Translator};

/// A [`Translator`] backed by an in-memory set of templates.
pub struct Catalog {
  messages: HashMap<String, String>,
  env: Environment<'static>,
}

impl Catalog {
  /// An empty catalog; every lookup falls back to the key itself.
  pub fn empty() -> Self {
    Self {
      messages: HashMap::new(),
      env: Environment::new(),
    }
  }

  /// The built-in English messages.
  pub fn english() -> Self {
    let mut catalog = Self::empty();
    for key in MessageKey::ALL {
      catalog.insert(key.as_str(), english_message(key));
    }
    catalog
  }

  /// Add or replace a single message.
  pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
    self.messages.insert(key.into(), template.into());
  }

  /// Layer `overrides` on top of the current messages.
  pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    for (key, template) in overrides {
      self.insert(key, template);
    }
    self
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.messages.get(key).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.messages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.messages.is_empty()
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self::english()
  }
}

impl fmt::Debug for Catalog {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Catalog")
      .field("messages", &self.messages)
      .finish_non_exhaustive()
  }
}

impl Translator for Catalog {
  fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
    let Some(template) = self.get(key) else {
      debug!(key, "missing message, falling back to key");
      return key.to_string();
    };

    let context: BTreeMap<&str, &str> = args.iter().copied().collect();
    match self.env.render_str(template, Value::from_serialize(&context)) {
      Ok(rendered) => rendered,
      Err(e) => {
        warn!(key, error = %e, "failed to render message template");
        template.to_string()
      }
    }
  }
}

fn english_message(key: MessageKey) -> &'static str {
  match key {
    MessageKey::NoExecutionData => "Execute previous nodes for preview",
    MessageKey::NoNodeExecutionData => "Execute node '{{ node }}' for preview",
    MessageKey::NoInputConnection => "No input connected",
    MessageKey::PairedItemConnectionError => "No path back to node",
    MessageKey::PairedItemInvalidPinnedError => "Unpin '{{ node }}' and execute",
    MessageKey::PairedItemError => "Can't determine which item to use",
    MessageKey::PairedItemErrorNoRunData => {
      "Can't determine which item to use - execute node for more info"
    }
    MessageKey::Error => "ERROR",
    MessageKey::EmptyString => "[empty]",
  }
}
