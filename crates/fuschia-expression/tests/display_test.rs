//! End-to-end tests: JSON outcomes from the evaluator through to display text.

use fuschia_expression::syntax::{
  auto_complete_syntax, is_convertible_to_expression, strip_expression_prefix,
};
use fuschia_expression::{
  Catalog, ErrorKind, EvaluationError, EvaluationOutcome, ExpressionError, MessageKey,
  MessageResolver, NoPinnedData, PinDataStore, ResolvableState, resolvable_state,
};
use serde_json::json;

fn paired_item_invalid_info(node: &str) -> EvaluationOutcome {
  serde_json::from_value(json!({
    "outcome": "failure",
    "value": {
      "kind": "expression",
      "message": "Paired item data for item from node 'NodeA' is unavailable",
      "functionality": "paired_item",
      "context": { "type": "paired_item_invalid_info", "node_cause": node }
    }
  }))
  .expect("valid outcome")
}

#[test]
fn test_pinned_paired_item_scenario() {
  let outcome = paired_item_invalid_info("NodeA");

  let mut pins = PinDataStore::new();
  pins.pin("NodeA", json!([{ "json": { "id": 1 } }]));
  let resolver = MessageResolver::new(Catalog::english(), pins);

  let error = outcome.error().expect("failure outcome");
  assert_eq!(resolver.describe(error, false), "Unpin 'NodeA' and execute");
  assert_eq!(
    resolver.stringify(&outcome, false),
    "[ERROR: Unpin 'NodeA' and execute]"
  );
}

#[test]
fn test_unpinned_paired_item_scenario() {
  let outcome = paired_item_invalid_info("NodeA");
  let resolver = MessageResolver::new(Catalog::english(), NoPinnedData);

  let error = outcome.error().expect("failure outcome");
  assert_eq!(
    resolver.describe(error, false),
    "Can't determine which item to use - execute node for more info"
  );
  assert_eq!(
    resolver.describe(error, true),
    "Can't determine which item to use"
  );
}

#[test]
fn test_pending_until_node_runs() {
  let resolver = MessageResolver::new(Catalog::english(), NoPinnedData);

  let before: EvaluationOutcome = Err::<serde_json::Value, _>(EvaluationError::from(
    ExpressionError::new("Referenced node is unexecuted")
      .with_kind(ErrorKind::NoNodeExecutionData)
      .with_node_cause("Fetch"),
  ))
  .into();
  assert_eq!(before.resolvable_state(false), ResolvableState::Pending);
  assert_eq!(resolver.stringify(&before, false), "");

  let after: EvaluationOutcome = Ok::<_, EvaluationError>(json!("alice@example.com")).into();
  assert_eq!(after.resolvable_state(false), ResolvableState::Valid);
  assert_eq!(resolver.stringify(&after, true), "alice@example.com");
}

#[test]
fn test_ignore_error_overrides_every_kind() {
  for kind in ErrorKind::ALL {
    let error: EvaluationError = ExpressionError::new("x").with_kind(kind).into();
    assert_eq!(resolvable_state(Some(&error), true), ResolvableState::Pending);
  }
  assert_eq!(resolvable_state(None, true), ResolvableState::Valid);
}

#[test]
fn test_success_values() {
  let resolver = MessageResolver::new(Catalog::english(), NoPinnedData);
  let render = |value| resolver.stringify(&EvaluationOutcome::Success(value), false);

  assert_eq!(render(json!(null)), "");
  assert_eq!(render(json!("")), "[empty]");
  assert_eq!(render(json!("hello")), "hello");
  assert_eq!(render(json!(42)), "42");
}

#[test]
fn test_localized_catalog() {
  let catalog = Catalog::english().with_overrides([
    (MessageKey::Error.as_str(), "FEHLER"),
    (MessageKey::NoInputConnection.as_str(), "Kein Eingang verbunden"),
    (MessageKey::EmptyString.as_str(), "[leer]"),
  ]);
  let resolver = MessageResolver::new(catalog, NoPinnedData);

  let outcome = EvaluationOutcome::Failure(
    ExpressionError::new("No input")
      .with_kind(ErrorKind::NoInputConnection)
      .into(),
  );
  assert_eq!(
    resolver.stringify(&outcome, false),
    "[FEHLER: Kein Eingang verbunden]"
  );
  assert_eq!(
    resolver.stringify(&EvaluationOutcome::Success(json!("")), false),
    "[leer]"
  );
}

#[test]
fn test_unrecognized_tag_uses_raw_message() {
  let outcome: EvaluationOutcome = serde_json::from_value(json!({
    "outcome": "failure",
    "value": {
      "kind": "expression",
      "message": "Unsupported operation",
      "context": { "type": "no_such_tag", "node_cause": "NodeA" }
    }
  }))
  .expect("valid outcome");

  let resolver = MessageResolver::new(Catalog::english(), NoPinnedData);
  assert_eq!(outcome.resolvable_state(false), ResolvableState::Invalid);
  assert_eq!(
    resolver.stringify(&outcome, true),
    "[ERROR: Unsupported operation]"
  );
}

#[test]
fn test_syntax_round_trip() {
  let completed = auto_complete_syntax("{{$", false);
  assert!(completed.starts_with('='));
  assert!(strip_expression_prefix(Some(&*completed)).contains("{{ $ }}"));

  assert!(!is_convertible_to_expression("={{x}}", false));
  assert!(is_convertible_to_expression("{{x}}", false));
}

#[test]
fn test_non_string_tag_renders_raw_message() {
  let outcome: EvaluationOutcome = serde_json::from_value(json!({
    "outcome": "failure",
    "value": { "kind": "expression", "message": "m", "context": { "type": 5 } }
  }))
  .expect("valid outcome");

  let resolver = MessageResolver::new(Catalog::english(), NoPinnedData);
  assert_eq!(outcome.resolvable_state(false), ResolvableState::Invalid);
  assert_eq!(resolver.stringify(&outcome, false), "[ERROR: m]");
}

#[test]
fn test_integral_float_renders_without_fraction() {
  let resolver = MessageResolver::new(Catalog::english(), NoPinnedData);
  let outcome: EvaluationOutcome =
    serde_json::from_str(r#"{ "outcome": "success", "value": 1.0 }"#).expect("valid outcome");

  assert_eq!(resolver.stringify(&outcome, false), "1");
}
