//! Error payload normalization
//!
//! Turns error-like values, typically the JSON body of a failed HTTP call,
//! into the list of messages shown to the user, one toast per message.

use std::error::Error as StdError;

use serde_json::Value;

/// Shown when an error payload yields no message at all
pub const FALLBACK_ERROR_MESSAGE: &str = "An internal error occurred; reload and try again.";

/// Anything that can be reported through the error toast path.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorInput {
    /// Plain text, shown as-is in a single toast
    Text(String),
    /// Structured, unknown-shaped error payload
    Payload(Value),
}

impl ErrorInput {
    /// Report a Rust error by its display text
    pub fn from_error(error: &dyn StdError) -> Self {
        Self::Text(error.to_string())
    }

    /// Messages this input produces, before the fallback is applied
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Text(text) => vec![text.clone()],
            Self::Payload(value) => normalize_error_payload(value),
        }
    }
}

impl From<&str> for ErrorInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ErrorInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A JSON string is plain text; any other value is a payload.
impl From<Value> for ErrorInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Payload(other),
        }
    }
}

impl From<&Value> for ErrorInput {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

/// Read-only structural view over an error payload.
///
/// Every accessor is optional: a field that is missing or `null` reads as
/// `None`. Non-object payloads have no fields.
#[derive(Debug, Clone, Copy)]
pub struct ErrorPayload<'a> {
    value: &'a Value,
}

impl<'a> ErrorPayload<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Top-level `message`
    pub fn message(&self) -> Option<&'a Value> {
        field(self.value, "message")
    }

    /// Nested `error` object
    pub fn error(&self) -> Option<&'a Value> {
        field(self.value, "error")
    }

    /// `error.message`
    pub fn error_message(&self) -> Option<&'a Value> {
        self.error().and_then(|error| field(error, "message"))
    }

    /// `error.message`, falling back to `message` when absent
    pub fn primary_message(&self) -> Option<&'a Value> {
        self.error_message().or_else(|| self.message())
    }

    /// Validation mapping: `error.obj` if truthy, otherwise `obj` if truthy
    pub fn error_object(&self) -> Option<&'a Value> {
        self.error()
            .and_then(|error| field(error, "obj"))
            .filter(|obj| is_truthy(obj))
            .or_else(|| field(self.value, "obj").filter(|obj| is_truthy(obj)))
    }
}

/// Extract user-facing messages from an error payload.
///
/// Three checks run in order and all of them contribute:
///
/// 1. When `error.message ?? message` is a non-empty string, the top-level
///    `message` is appended (only if it is itself a non-empty string).
/// 2. A non-empty string `error.message` is appended.
/// 3. Every value of `error.obj || obj` is appended in insertion order.
///
/// The same text can therefore appear twice; callers show each entry.
pub fn normalize_error_payload(value: &Value) -> Vec<String> {
    let payload = ErrorPayload::new(value);
    let mut errors = Vec::new();

    // Gate on the primary message, but append the top-level one.
    if non_empty_str(payload.primary_message()).is_some() {
        if let Some(message) = non_empty_str(payload.message()) {
            errors.push(message.to_string());
        }
    }

    if let Some(message) = non_empty_str(payload.error_message()) {
        errors.push(message.to_string());
    }

    if let Some(object) = payload.error_object() {
        errors.extend(object_values(object).into_iter().map(value_to_text));
    }

    errors
}

fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object()?.get(key).filter(|v| !v.is_null())
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value?.as_str().filter(|s| !s.is_empty())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn object_values(value: &Value) -> Vec<&Value> {
    match value {
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        _ => Vec::new(),
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
