//! Fuschia Expression
//!
//! Classifies the outcome of evaluating a template expression in a workflow
//! node and renders it for display. The evaluator itself lives elsewhere; this
//! crate only consumes its [`EvaluationOutcome`].
//!
//! - [`resolvable_state`] collapses an outcome into valid, pending or invalid.
//!   Pending means run data is still missing and the result should be retried.
//! - [`MessageResolver`] turns an error into a localized message and renders
//!   whole outcomes via [`MessageResolver::stringify`].
//! - [`syntax`] holds editing helpers over raw parameter text.
//!
//! Localization and pinned data are injected through the [`Translator`] and
//! [`PinnedData`] traits. [`Catalog`] and [`PinDataStore`] are in-memory
//! implementations of each.

pub mod classify;
mod catalog;
mod error;
mod lookup;
mod message;
mod pin;
mod state;
mod stringify;
pub mod syntax;

pub use catalog::Catalog;
pub use error::{ErrorContext, ErrorKind, EvaluationError, ExpressionError, Functionality};
pub use lookup::{MessageKey, NoPinnedData, PinnedData, Translator};
pub use message::MessageResolver;
pub use pin::PinDataStore;
pub use state::{ResolvableState, resolvable_state};
pub use stringify::EvaluationOutcome;
