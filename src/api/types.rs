// API request/response body types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"status": ..., "message": ...}` acknowledgement returned by every write
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: &'static str,
}

impl StatusMessage {
    pub const fn ok(message: &'static str) -> Self {
        Self {
            status: "ok",
            message,
        }
    }

    pub const fn error(message: &'static str) -> Self {
        Self {
            status: "error",
            message,
        }
    }
}

/// Login form; non-string values simply fail the comparison
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Value,
    #[serde(default)]
    pub password: Value,
}

impl LoginRequest {
    pub fn username(&self) -> Option<&str> {
        self.username.as_str()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_str()
    }
}

/// Admin edit of an order's status and note to the customer
///
/// Whatever is sent replaces both fields; an omitted one is cleared.
#[derive(Debug, Deserialize)]
pub struct OrderUpdate {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}
