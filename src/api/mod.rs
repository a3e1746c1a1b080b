//! Server endpoints consumed by the form and the admin page.
//!
//! Both endpoints take a JSON body and answer with a JSON object carrying a
//! `success` flag, an optional `msg` and (for step submission) an optional
//! `redirect`. Handlers in this crate act on an [`ApiReply`]; anything that
//! does not decode into one is a [`TransportError`].

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TransportError;
use crate::form::model::StepSubmission;

pub use http::HttpFormApi;

/// Identifier of the user record to delete. Sent back exactly as the admin
/// page holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Opaque(String),
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self::Numeric(id.into())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::Opaque(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self::Opaque(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Opaque(s) => write!(f, "{s}"),
        }
    }
}

/// JSON body of `POST /admin/delete_user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    pub id: UserId,
}

/// Decoded server answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiReply {
    pub success: bool,
    /// Server message, present only when non-empty.
    pub msg: Option<String>,
    /// Navigation target, present only when non-empty.
    pub redirect: Option<String>,
}

impl ApiReply {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: Some(msg.into()).filter(|m| !m.is_empty()),
            redirect: None,
        }
    }

    /// Interpret a decoded JSON body with browser truthiness: a missing or
    /// falsy `success` is a failure, and empty strings count as absent.
    ///
    /// `null` has no fields to read and is rejected like a non-JSON body.
    pub fn from_value(value: &Value) -> Result<Self, TransportError> {
        if value.is_null() {
            return Err(TransportError::Decode("response body is null".to_string()));
        }
        Ok(Self {
            success: value.get("success").is_some_and(is_truthy),
            msg: value.get("msg").and_then(display_text),
            redirect: value.get("redirect").and_then(display_text),
        })
    }

    /// The server message, or `fallback` when it sent none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.msg.as_deref().unwrap_or(fallback)
    }
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

/// Text for a truthy field value; `None` for falsy ones.
fn display_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// The two server endpoints.
#[async_trait]
pub trait FormApi: Send + Sync {
    /// `POST /submit_step` with one page's data.
    async fn submit_step(&self, submission: &StepSubmission) -> Result<ApiReply, TransportError>;

    /// `POST /admin/delete_user`.
    async fn delete_user(&self, request: &DeleteUserRequest) -> Result<ApiReply, TransportError>;
}
