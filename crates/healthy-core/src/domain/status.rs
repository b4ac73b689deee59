//! Turning a server reply into the text shown to the user.
//!
//! The registration server answers every request with a JSON object that
//! carries either a `message` (the patient was stored) or an `error` (it was
//! not).  Both end up as plain text in the same status element, so the user
//! tells them apart by wording only.
//!
//! A reply with neither field is not treated as a failure: the status element
//! is simply emptied.
//!
//! A field only counts when its value is "truthy" in the browser's sense:
//! `null`, `false`, `0` and `""` are the same as a missing key.  So
//! `{"message": false, "error": "CPF duplicado"}` shows the error and keeps
//! the form.

use std::fmt::Display;

use serde_json::Value;

/// Text placed before the error description when the request itself failed.
pub const FAILURE_PREFIX: &str = "Erro ao cadastrar paciente: ";

/// The fields of a registration reply the page cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl RegistrationResponse {
    /// A reply reporting success.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            error: None,
        }
    }

    /// A reply reporting a server-side refusal.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(text.into()),
        }
    }

    /// Extracts `message` and `error` from any JSON value.
    ///
    /// Strings are taken verbatim and any other value is kept as its JSON
    /// text.  `null`, `false`, `0` and `""` count as absent.  A value that is
    /// not an object has neither field.
    pub fn from_value(value: &Value) -> Self {
        Self {
            message: field_text(value, "message"),
            error: field_text(value, "error"),
        }
    }

    fn success_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

fn field_text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        field if is_falsy(field) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Chooses the status text for a reply that parsed as JSON.
///
/// A non-empty `message` wins; otherwise `error` is shown; with neither the
/// text is empty.
///
/// ```rust
/// use healthy_core::{select_status_text, RegistrationResponse};
///
/// assert_eq!(select_status_text(&RegistrationResponse::message("ok")), "ok");
/// assert_eq!(select_status_text(&RegistrationResponse::default()), "");
/// ```
pub fn select_status_text(response: &RegistrationResponse) -> String {
    match response.success_message() {
        Some(message) => message.to_string(),
        None => response.error.clone().unwrap_or_default(),
    }
}

/// Whether the form should be cleared after `response`.
///
/// Only a non-empty `message` clears the form.
pub fn should_reset_form(response: &RegistrationResponse) -> bool {
    response.success_message().is_some()
}

/// Status text for a request that failed before a JSON reply was read.
pub fn failure_text(error: &impl Display) -> String {
    format!("{FAILURE_PREFIX}{error}")
}
