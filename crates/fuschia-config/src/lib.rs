//! Fuschia Config
//!
//! Serializable configuration for previewing expression results: message
//! overrides for the display catalog, pinned data per node, and the editor
//! context flags the preview is rendered under.
//!
//! Configuration is loaded from JSON files:
//!
//! ```json
//! {
//!   "messages": { "expression.no_input_connection": "Connect an input" },
//!   "pin_data": { "NodeA": [{ "json": { "id": 1 } }] },
//!   "node_has_run_data": false,
//!   "specialized_editor": false
//! }
//! ```

mod error;
mod preview;

pub use error::ConfigError;
pub use preview::PreviewConfig;
