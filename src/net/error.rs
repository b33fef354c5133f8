//! API error taxonomy and backend error-message flattening.
//!
//! ERROR HANDLING
//! ==============
//! Every API call surfaces the transport error unchanged. Pages and forms
//! turn it into one displayable line via [`ApiError::user_message`]; nothing
//! is retried and nothing panics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Fallback shown when the backend gives nothing readable.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Value },
    /// A 2xx response whose body did not match the expected record.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Called outside a browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body, keeping JSON when it parses.
    pub fn from_status(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str(raw_body).unwrap_or_else(|_| {
            if raw_body.trim().is_empty() {
                Value::Null
            } else {
                Value::String(raw_body.to_owned())
            }
        });
        Self::Status { status, body }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend rejected the stored credential.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// One human-readable line for inline form/page errors.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { body, .. } => read_backend_error(body),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Flatten a backend error body into a single message.
///
/// `{"detail": "..."}` wins outright. Otherwise each `field: [messages]`
/// pair becomes `"field: message"`; `non_field_errors` drop the prefix.
pub fn read_backend_error(body: &Value) -> String {
    match body {
        Value::String(text) if !text.trim().is_empty() => text.clone(),
        Value::Object(map) => {
            if let Some(Value::String(detail)) = map.get("detail") {
                return detail.clone();
            }
            let mut parts = Vec::new();
            for (field, messages) in map {
                for message in message_list(messages) {
                    if field == "non_field_errors" {
                        parts.push(message);
                    } else {
                        parts.push(format!("{field}: {message}"));
                    }
                }
            }
            if parts.is_empty() {
                GENERIC_ERROR_MESSAGE.to_owned()
            } else {
                parts.join(" ")
            }
        }
        _ => GENERIC_ERROR_MESSAGE.to_owned(),
    }
}

fn message_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => vec![text.clone()],
        Value::Array(items) => items.iter().flat_map(message_list).collect(),
        Value::Object(nested) => nested
            .iter()
            .flat_map(|(field, inner)| {
                message_list(inner)
                    .into_iter()
                    .map(move |message| format!("{field}: {message}"))
            })
            .collect(),
        _ => Vec::new(),
    }
}
