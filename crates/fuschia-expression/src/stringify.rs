//! Rendering of evaluation outcomes for display.

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::lookup::{MessageKey, PinnedData, Translator};
use crate::message::MessageResolver;
use crate::state::{ResolvableState, resolvable_state};

/// What the evaluator produced for one expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum EvaluationOutcome {
  Success(serde_json::Value),
  Failure(EvaluationError),
}

impl EvaluationOutcome {
  pub fn error(&self) -> Option<&EvaluationError> {
    match self {
      EvaluationOutcome::Success(_) => None,
      EvaluationOutcome::Failure(err) => Some(err),
    }
  }

  pub fn resolvable_state(&self, ignore_error: bool) -> ResolvableState {
    resolvable_state(self.error(), ignore_error)
  }
}

impl From<Result<serde_json::Value, EvaluationError>> for EvaluationOutcome {
  fn from(result: Result<serde_json::Value, EvaluationError>) -> Self {
    match result {
      Ok(value) => EvaluationOutcome::Success(value),
      Err(err) => EvaluationOutcome::Failure(err),
    }
  }
}

impl<T: Translator, P: PinnedData> MessageResolver<T, P> {
  /// The display string for an evaluation outcome.
  ///
  /// Failures that are merely pending render as `""`; only invalid results
  /// produce a bracketed error. A successful `""` renders as the empty string
  /// placeholder so it can be told apart from `null`. Other values render as
  /// compact JSON, except that integral floats drop their fraction (`1.0` is
  /// shown as `1`).
  pub fn stringify(&self, outcome: &EvaluationOutcome, node_has_run_data: bool) -> String {
    match outcome {
      EvaluationOutcome::Failure(err) => {
        if resolvable_state(Some(err), false) != ResolvableState::Invalid {
          return String::new();
        }
        format!(
          "[{}: {}]",
          self.message(MessageKey::Error, &[]),
          self.describe(err, node_has_run_data)
        )
      }
      EvaluationOutcome::Success(value) => match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) if s.is_empty() => self.message(MessageKey::EmptyString, &[]),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => number_text(n),
        other => other.to_string(),
      },
    }
  }
}

/// Largest magnitude at which every integral `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn number_text(n: &serde_json::Number) -> String {
  match n.as_f64() {
    Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
      format!("{}", f as i64)
    }
    _ => n.to_string(),
  }
}
