use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::classify::{
  is_no_execution_data, is_no_node_execution_data, is_paired_item_intermediate_nodes,
};
use crate::error::EvaluationError;

/// Whether an evaluation result can be trusted, should be retried once run data
/// exists, or is a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvableState {
  Valid,
  /// Required execution data is absent; callers hide error UI and retry later.
  Pending,
  Invalid,
}

impl ResolvableState {
  pub fn as_str(&self) -> &'static str {
    match self {
      ResolvableState::Valid => "valid",
      ResolvableState::Pending => "pending",
      ResolvableState::Invalid => "invalid",
    }
  }
}

impl fmt::Display for ResolvableState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Collapse an optional evaluation error into a [`ResolvableState`].
///
/// `ignore_error` turns every error into `Pending`, regardless of its tag.
pub fn resolvable_state(error: Option<&EvaluationError>, ignore_error: bool) -> ResolvableState {
  let Some(error) = error else {
    return ResolvableState::Valid;
  };

  let state = if ignore_error
    || is_no_execution_data(error)
    || is_no_node_execution_data(error)
    || is_paired_item_intermediate_nodes(error)
  {
    ResolvableState::Pending
  } else {
    ResolvableState::Invalid
  };

  trace!(state = %state, ignore_error, "resolved expression state");
  state
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::{ErrorKind, ExpressionError, Functionality};

  fn expression(kind: ErrorKind) -> EvaluationError {
    ExpressionError::new("failed").with_kind(kind).into()
  }

  #[test]
  fn test_no_error_is_valid() {
    assert_eq!(resolvable_state(None, false), ResolvableState::Valid);
    assert_eq!(resolvable_state(None, true), ResolvableState::Valid);
  }

  #[test]
  fn test_transient_tags_are_pending() {
    for kind in [
      ErrorKind::NoExecutionData,
      ErrorKind::NoNodeExecutionData,
      ErrorKind::PairedItemIntermediateNodes,
    ] {
      assert_eq!(
        resolvable_state(Some(&expression(kind)), false),
        ResolvableState::Pending,
        "{kind}"
      );
    }
  }

  #[test]
  fn test_other_tags_are_invalid() {
    for kind in [
      ErrorKind::PairedItemNoConnection,
      ErrorKind::PairedItemInvalidInfo,
      ErrorKind::PairedItemNoInfo,
      ErrorKind::NoInputConnection,
    ] {
      assert_eq!(
        resolvable_state(Some(&expression(kind)), false),
        ResolvableState::Invalid,
        "{kind}"
      );
    }
  }

  #[test]
  fn test_ignore_error_always_pending() {
    for kind in ErrorKind::ALL {
      assert_eq!(
        resolvable_state(Some(&expression(kind)), true),
        ResolvableState::Pending
      );
    }
    let foreign = EvaluationError::other("boom");
    assert_eq!(resolvable_state(Some(&foreign), true), ResolvableState::Pending);
  }

  #[test]
  fn test_unclassified_errors_are_invalid() {
    let foreign = EvaluationError::other("boom");
    assert_eq!(resolvable_state(Some(&foreign), false), ResolvableState::Invalid);

    let paired: EvaluationError = ExpressionError::new("lost")
      .with_functionality(Functionality::PairedItem)
      .into();
    assert_eq!(resolvable_state(Some(&paired), false), ResolvableState::Invalid);
  }

  #[test]
  fn test_serializes_lowercase() {
    assert_eq!(
      serde_json::to_string(&ResolvableState::Pending).unwrap(),
      "\"pending\""
    );
    assert_eq!(ResolvableState::Invalid.to_string(), "invalid");
  }
}
