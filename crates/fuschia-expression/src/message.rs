//! Human-readable descriptions of evaluation errors.

use tracing::debug;

use crate::classify::{is_any_paired_item, kind_of};
use crate::error::{ErrorKind, EvaluationError};
use crate::lookup::{MessageKey, PinnedData, Translator};

/// Describes evaluation errors using an injected [`Translator`] and
/// [`PinnedData`] source.
#[derive(Debug, Clone)]
pub struct MessageResolver<T, P> {
  translator: T,
  pin_data: P,
}

impl<T: Translator, P: PinnedData> MessageResolver<T, P> {
  pub fn new(translator: T, pin_data: P) -> Self {
    Self {
      translator,
      pin_data,
    }
  }

  pub(crate) fn message(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
    self.translator.translate(key.as_str(), args)
  }

  /// The most specific message for `error`.
  ///
  /// Checks run in priority order; the first that applies wins. Invalid or
  /// missing paired item info on a node without pinned data falls through to
  /// the generic paired item message, and anything unrecognized yields the
  /// error's own message.
  pub fn describe(&self, error: &EvaluationError, node_has_run_data: bool) -> String {
    let node = error
      .as_expression()
      .and_then(|err| err.node_cause())
      .unwrap_or_default();

    match kind_of(error) {
      Some(ErrorKind::NoExecutionData | ErrorKind::PairedItemIntermediateNodes) => {
        return self.message(MessageKey::NoExecutionData, &[]);
      }
      Some(ErrorKind::NoNodeExecutionData) => {
        return self.message(MessageKey::NoNodeExecutionData, &[("node", node)]);
      }
      Some(ErrorKind::NoInputConnection) => {
        return self.message(MessageKey::NoInputConnection, &[]);
      }
      Some(ErrorKind::PairedItemNoConnection) => {
        return self.message(MessageKey::PairedItemConnectionError, &[]);
      }
      Some(ErrorKind::PairedItemInvalidInfo | ErrorKind::PairedItemNoInfo) => {
        if !node.is_empty() && self.pin_data.is_pinned(node) {
          return self.message(MessageKey::PairedItemInvalidPinnedError, &[("node", node)]);
        }
      }
      None => {}
    }

    if is_any_paired_item(error) {
      let key = if node_has_run_data {
        MessageKey::PairedItemError
      } else {
        MessageKey::PairedItemErrorNoRunData
      };
      return self.message(key, &[]);
    }

    debug!(message = error.message(), "no specific message, using raw error");
    error.message().to_string()
  }
}
