//! Helpers over raw, unevaluated parameter text.
//!
//! An expression is a string marked with a leading `=` whose `{{ }}` segments
//! are evaluated. These helpers are used while editing; none of them parse or
//! validate the code inside the braces.
//!
//! ```text
//! "Hello {{ $json.name }}"   convertible, not yet an expression
//! "={{ $json.name }}"        expression
//! "Hello {{ "                auto-completes to "=Hello {{  }}"
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMPTY_PLACEHOLDER: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\{\{\s*\}\}").expect("invalid regex pattern"));
static WRAPPED: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\{\{(.*)\}\}").expect("invalid regex pattern"));
static SECRETS_PATH: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\$secrets(\.[a-zA-Z0-9_]+)+$").expect("invalid regex pattern")
});

const EXPRESSION_PREFIX: char = '=';
const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Whether `text` is marked as an expression.
pub fn is_expression(text: &str) -> bool {
  text.starts_with(EXPRESSION_PREFIX)
}

/// Whether `text` contains a `{{ }}` pair with only whitespace inside.
pub fn is_empty_placeholder(text: &str) -> bool {
  EMPTY_PLACEHOLDER.is_match(text)
}

/// Replace the outermost `{{ … }}` span with its body, then trim.
pub fn unwrap_expression(text: &str) -> String {
  WRAPPED.replace(text, "$1").trim().to_string()
}

/// Drop the expression marker if present. An absent input becomes `""`.
pub fn strip_expression_prefix(text: Option<&str>) -> &str {
  match text {
    Some(text) => text.strip_prefix(EXPRESSION_PREFIX).unwrap_or(text),
    None => "",
  }
}

/// Whether plain text should be turned into an expression: it is not marked
/// yet but already contains both delimiters. Specialized editors manage their
/// own mode and never convert.
pub fn is_convertible_to_expression(text: &str, specialized_editor: bool) -> bool {
  !specialized_editor && !is_expression(text) && text.contains(OPEN) && text.contains(CLOSE)
}

/// Close an unfinished `{{ ` or `{{$` at the end of plain text and mark the
/// result as an expression. Everything else is returned unchanged.
pub fn auto_complete_syntax(text: &str, specialized_editor: bool) -> Cow<'_, str> {
  if specialized_editor || is_expression(text) {
    return Cow::Borrowed(text);
  }

  if text.ends_with("{{ ") {
    return Cow::Owned(format!("{EXPRESSION_PREFIX}{text} }}}}"));
  }

  if let Some(head) = text.strip_suffix('$').filter(|head| head.ends_with(OPEN)) {
    return Cow::Owned(format!("{EXPRESSION_PREFIX}{head} $ }}}}"));
  }

  Cow::Borrowed(text)
}

/// A piece of template text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
  /// Literal text outside any braces.
  Text { text: String },
  /// The body of a `{{ }}` pair. `closed` is false when the text ended before
  /// the closing braces.
  Code { text: String, closed: bool },
}

impl Segment {
  fn new(buffer: String, in_code: bool, closed: bool) -> Self {
    if in_code {
      // Only the first escaped closing delimiter is unescaped.
      Segment::Code {
        text: buffer.replacen("\\}}", CLOSE, 1),
        closed,
      }
    } else {
      Segment::Text { text: buffer }
    }
  }

  pub fn text(&self) -> &str {
    match self {
      Segment::Text { text } | Segment::Code { text, .. } => text,
    }
  }

  pub fn is_code(&self) -> bool {
    matches!(self, Segment::Code { .. })
  }
}

/// Split template text into literal and code segments.
///
/// A delimiter preceded by a backslash is kept as part of the current segment.
pub fn split_expression(text: &str) -> Vec<Segment> {
  let mut segments = Vec::new();
  let mut buffer = String::new();
  let mut in_code = false;
  let mut rest = text;

  while !rest.is_empty() {
    let delimiter = if in_code { CLOSE } else { OPEN };
    let Some(pos) = rest.find(delimiter) else {
      buffer.push_str(rest);
      segments.push(Segment::new(buffer, in_code, false));
      return segments;
    };

    let end = pos + delimiter.len();
    if rest[..pos].ends_with('\\') {
      buffer.push_str(&rest[..end]);
    } else {
      buffer.push_str(&rest[..pos]);
      segments.push(Segment::new(std::mem::take(&mut buffer), in_code, true));
      in_code = !in_code;
    }
    rest = &rest[end..];
  }

  if !buffer.is_empty() {
    segments.push(Segment::new(buffer, in_code, false));
  }
  segments
}

/// Whether every code segment only reads a `$secrets` path, which can be
/// resolved without any run data.
pub fn is_testable_expression(text: &str) -> bool {
  split_expression(text).iter().all(|segment| match segment {
    Segment::Text { .. } => true,
    Segment::Code { text, .. } => SECRETS_PATH.is_match(text.trim()),
  })
}
