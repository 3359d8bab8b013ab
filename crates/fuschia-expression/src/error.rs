//! Error model for expression evaluation failures.
//!
//! The evaluator hands us either an [`ExpressionError`] (something it knows how
//! to describe) or an opaque foreign error. Expression errors carry a closed
//! [`ErrorKind`] in their context; tags outside that set deserialize to `None`
//! and never match a classifier.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Closed set of reasons an expression could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
  /// No run data exists anywhere in the workflow yet.
  NoExecutionData,
  /// Run data exists, but not for the referenced node.
  NoNodeExecutionData,
  /// Paired item information was lost across intermediate nodes.
  PairedItemIntermediateNodes,
  /// The referenced node has no connection path back to this one.
  PairedItemNoConnection,
  /// Paired item metadata is present but malformed.
  PairedItemInvalidInfo,
  /// Paired item metadata is missing entirely.
  PairedItemNoInfo,
  /// The node has no input connection at all.
  NoInputConnection,
}

impl ErrorKind {
  pub const ALL: [ErrorKind; 7] = [
    ErrorKind::NoExecutionData,
    ErrorKind::NoNodeExecutionData,
    ErrorKind::PairedItemIntermediateNodes,
    ErrorKind::PairedItemNoConnection,
    ErrorKind::PairedItemInvalidInfo,
    ErrorKind::PairedItemNoInfo,
    ErrorKind::NoInputConnection,
  ];

  /// The wire tag for this kind.
  pub fn as_str(&self) -> &'static str {
    match self {
      ErrorKind::NoExecutionData => "no_execution_data",
      ErrorKind::NoNodeExecutionData => "no_node_execution_data",
      ErrorKind::PairedItemIntermediateNodes => "paired_item_intermediate_nodes",
      ErrorKind::PairedItemNoConnection => "paired_item_no_connection",
      ErrorKind::PairedItemInvalidInfo => "paired_item_invalid_info",
      ErrorKind::PairedItemNoInfo => "paired_item_no_info",
      ErrorKind::NoInputConnection => "no_input_connection",
    }
  }

  /// Parse an exact wire tag. Anything else is unrecognized.
  pub fn from_tag(tag: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
  }

  /// Whether this kind belongs to the paired item family.
  pub fn is_paired_item(&self) -> bool {
    matches!(
      self,
      ErrorKind::PairedItemIntermediateNodes
        | ErrorKind::PairedItemNoConnection
        | ErrorKind::PairedItemInvalidInfo
        | ErrorKind::PairedItemNoInfo
    )
  }
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Which part of the evaluator raised the error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Functionality {
  #[default]
  Regular,
  /// Raised while following paired item lineage.
  PairedItem,
}

/// Structured context attached to an [`ExpressionError`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
  #[serde(
    rename = "type",
    default,
    deserialize_with = "deserialize_kind",
    skip_serializing_if = "Option::is_none"
  )]
  pub kind: Option<ErrorKind>,

  /// Name of the node implicated in the failure.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub node_cause: Option<String>,

  /// Any other fields the evaluator attached.
  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<Option<ErrorKind>, D::Error>
where
  D: Deserializer<'de>,
{
  let tag: Option<serde_json::Value> = Option::deserialize(deserializer)?;
  Ok(
    tag
      .as_ref()
      .and_then(serde_json::Value::as_str)
      .and_then(ErrorKind::from_tag),
  )
}

/// An error raised by the expression evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ExpressionError {
  pub message: String,
  #[serde(default)]
  pub functionality: Functionality,
  #[serde(default)]
  pub context: ErrorContext,
}

impl ExpressionError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      functionality: Functionality::Regular,
      context: ErrorContext::default(),
    }
  }

  pub fn with_kind(mut self, kind: ErrorKind) -> Self {
    self.context.kind = Some(kind);
    self
  }

  pub fn with_node_cause(mut self, node: impl Into<String>) -> Self {
    self.context.node_cause = Some(node.into());
    self
  }

  pub fn with_functionality(mut self, functionality: Functionality) -> Self {
    self.functionality = functionality;
    self
  }

  pub fn kind(&self) -> Option<ErrorKind> {
    self.context.kind
  }

  pub fn node_cause(&self) -> Option<&str> {
    self.context.node_cause.as_deref()
  }
}

/// Anything the evaluator can fail with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluationError {
  /// A recognized expression error.
  #[error(transparent)]
  Expression(ExpressionError),

  /// Any other error; only its message is known.
  #[error("{message}")]
  Other { message: String },
}

impl EvaluationError {
  pub fn other(message: impl Into<String>) -> Self {
    EvaluationError::Other {
      message: message.into(),
    }
  }

  /// The raw message text, verbatim.
  pub fn message(&self) -> &str {
    match self {
      EvaluationError::Expression(err) => &err.message,
      EvaluationError::Other { message } => message,
    }
  }

  pub fn as_expression(&self) -> Option<&ExpressionError> {
    match self {
      EvaluationError::Expression(err) => Some(err),
      EvaluationError::Other { .. } => None,
    }
  }
}

impl From<ExpressionError> for EvaluationError {
  fn from(err: ExpressionError) -> Self {
    EvaluationError::Expression(err)
  }
}
