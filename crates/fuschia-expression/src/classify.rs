//! Predicates over evaluation errors.
//!
//! Every predicate is total: foreign errors and expression errors with an
//! unrecognized tag simply answer `false`.

use crate::error::{ErrorKind, EvaluationError, ExpressionError, Functionality};

/// The taxonomy tag carried by `error`, if it is an expression error with a
/// recognized tag.
pub fn kind_of(error: &EvaluationError) -> Option<ErrorKind> {
  error.as_expression().and_then(ExpressionError::kind)
}

fn has_kind(error: &EvaluationError, kind: ErrorKind) -> bool {
  kind_of(error) == Some(kind)
}

pub fn is_no_execution_data(error: &EvaluationError) -> bool {
  has_kind(error, ErrorKind::NoExecutionData)
}

pub fn is_no_node_execution_data(error: &EvaluationError) -> bool {
  has_kind(error, ErrorKind::NoNodeExecutionData)
}

pub fn is_paired_item_intermediate_nodes(error: &EvaluationError) -> bool {
  has_kind(error, ErrorKind::PairedItemIntermediateNodes)
}

pub fn is_paired_item_no_connection(error: &EvaluationError) -> bool {
  has_kind(error, ErrorKind::PairedItemNoConnection)
}

pub fn is_paired_item_invalid_info(error: &EvaluationError) -> bool {
  has_kind(error, ErrorKind::PairedItemInvalidInfo)
}

pub fn is_paired_item_no_info(error: &EvaluationError) -> bool {
  has_kind(error, ErrorKind::PairedItemNoInfo)
}

pub fn is_no_input_connection(error: &EvaluationError) -> bool {
  has_kind(error, ErrorKind::NoInputConnection)
}

/// True for any error raised while following paired item lineage, whether
/// flagged through `functionality` or through a `paired_item_*` tag.
pub fn is_any_paired_item(error: &EvaluationError) -> bool {
  match error.as_expression() {
    Some(err) => {
      err.functionality == Functionality::PairedItem
        || err.kind().is_some_and(|kind| kind.is_paired_item())
    }
    None => false,
  }
}
