//! # Response Envelope
//!
//! The backend wraps every JSON reply in
//! `{errorCode, status, tip, message, data}`; paged listings add
//! `page`, `size` and `total`.

use super::error::ErrorBody;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The canonical "no error" code.
pub const SUCCESS_CODE: &str = "00000";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl ResponseEnvelope {
    /// Reads the envelope fields out of a body; `None` for non-object bodies.
    pub fn from_body(body: &Value) -> Option<Self> {
        if !body.is_object() {
            return None;
        }
        serde_json::from_value(body.clone()).ok()
    }

    /// Builds the application-error body, filling gaps from the HTTP status.
    pub fn into_error_body(self, http_status: u16) -> ErrorBody {
        let message = self.message.or_else(|| self.tip.clone()).unwrap_or_default();
        ErrorBody {
            tip: self.tip.unwrap_or_else(|| message.clone()),
            message,
            error_code: self.error_code.unwrap_or_default(),
            status: self.status.unwrap_or(http_status),
        }
    }
}

/// One page of a listing, with the counters the server echoed back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

impl<T> Page<T> {
    /// Whether later pages remain after this one.
    pub fn has_more(&self) -> bool {
        self.page.saturating_mul(self.size) < self.total
    }
}

/// The `errorCode` of a body, if it carries a non-empty one.
pub fn error_code_of(body: &Value) -> Option<&str> {
    body.get("errorCode")
        .and_then(Value::as_str)
        .filter(|code| !code.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_code_of() {
        assert_eq!(error_code_of(&json!({"errorCode": "A1001"})), Some("A1001"));
        assert_eq!(error_code_of(&json!({"errorCode": ""})), None);
        assert_eq!(error_code_of(&json!({"errorCode": null})), None);
        assert_eq!(error_code_of(&json!({"data": 1})), None);
        assert_eq!(error_code_of(&json!("plain text")), None);
    }

    #[test]
    fn test_page_has_more() {
        let page = Page { items: vec![1, 2], page: 1, size: 2, total: 3 };
        assert!(page.has_more());
        let last = Page { items: vec![3], page: 2, size: 2, total: 3 };
        assert!(!last.has_more());
    }

    #[test]
    fn test_error_body_falls_back_to_http_status() {
        let envelope = ResponseEnvelope::from_body(&json!({
            "errorCode": "B2001",
            "message": "storage not found"
        }))
        .unwrap();
        let body = envelope.into_error_body(404);
        assert_eq!(body.error_code, "B2001");
        assert_eq!(body.status, 404);
        assert_eq!(body.tip, "storage not found");
    }
}
