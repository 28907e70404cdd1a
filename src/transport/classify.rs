//! # Response Classification
//!
//! Maps the completion of one request to its terminal outcome:
//!
//! | completion | outcome |
//! |---|---|
//! | cancelled | [`ApiError::Cancelled`] with code `CANCEL` |
//! | no server response | [`ApiError::Network`] with code `D0000` |
//! | `errorCode` in [`TOKEN_ERROR_CODES`] | expiry hook, then [`ApiError::SessionExpired`] (401) |
//! | 2xx without `errorCode`, or with `00000` | the payload |
//! | anything else | [`ApiError::Application`] carrying the server's envelope |
//!
//! The order of the rows is the order of the checks. There is exactly one
//! attempt per call.

use super::envelope::{error_code_of, ResponseEnvelope, SUCCESS_CODE};
use super::error::{ApiError, ErrorBody};
use serde_json::Value;
use tracing::{debug, warn};

/// Codes meaning the credential is expired or invalid.
pub const TOKEN_ERROR_CODES: [&str; 2] = ["A1001", "A1002"];

/// How a request finished at the transport level.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The caller abandoned the request before it completed.
    Cancelled,
    /// The request never produced a server response.
    NoResponse { reason: String },
    /// The server answered; `body` is JSON, or a JSON string for other content.
    Response { status: u16, body: Value },
}

pub fn is_token_error(error_code: &str) -> bool {
    TOKEN_ERROR_CODES.contains(&error_code)
}

/// Classifies `completion`, running `on_login_expired` once for expiry codes.
pub fn classify<F>(completion: Completion, on_login_expired: F) -> Result<Value, ApiError>
where
    F: FnOnce(),
{
    match completion {
        Completion::Cancelled => {
            debug!("Request cancelled");
            Err(ApiError::Cancelled(ErrorBody::cancelled()))
        }
        Completion::NoResponse { reason } => {
            warn!(%reason, "No response from server");
            Err(ApiError::Network(ErrorBody::network()))
        }
        Completion::Response { status, body } => classify_response(status, body, on_login_expired),
    }
}

fn classify_response<F>(status: u16, body: Value, on_login_expired: F) -> Result<Value, ApiError>
where
    F: FnOnce(),
{
    let success = (200..300).contains(&status);
    let error_code = error_code_of(&body).map(str::to_owned);
    match error_code.as_deref() {
        Some(code) if is_token_error(code) => {
            warn!(error_code = code, status, "Credential rejected by server");
            let error = ErrorBody::session_expired(code);
            on_login_expired();
            Err(ApiError::SessionExpired(error))
        }
        None if success => Ok(body),
        Some(SUCCESS_CODE) if success => Ok(body),
        _ => {
            let error = application_error(status, &body);
            debug!(error_code = %error.error_code, status, "Application error");
            Err(ApiError::Application(error))
        }
    }
}

fn application_error(status: u16, body: &Value) -> ErrorBody {
    match ResponseEnvelope::from_body(body) {
        Some(envelope) => envelope.into_error_body(status),
        None => {
            let text = match body {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            ErrorBody::new(String::new(), status, text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::error::{CANCEL_CODE, NETWORK_ERROR_CODE};
    use serde_json::json;
    use std::cell::Cell;

    fn respond(status: u16, body: Value) -> Completion {
        Completion::Response { status, body }
    }

    #[test]
    fn test_success_code_returns_envelope() {
        let body = json!({"errorCode": "00000", "status": 200, "data": {"id": 1}});
        let result = classify(respond(200, body.clone()), || panic!("no expiry expected"));
        assert_eq!(result, Ok(body));
    }

    #[test]
    fn test_body_without_error_code_is_returned_whole() {
        let body = json!({"id": 3, "name": "a.txt"});
        assert_eq!(classify(respond(200, body.clone()), || {}), Ok(body));
    }

    #[test]
    fn test_cancel_ignores_everything_else() {
        let calls = Cell::new(0);
        let result = classify(Completion::Cancelled, || calls.set(calls.get() + 1));
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Cancelled(_)));
        assert_eq!(err.error_code(), Some(CANCEL_CODE));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_no_response_is_network_error() {
        let err = classify(
            Completion::NoResponse {
                reason: "connection refused".to_string(),
            },
            || {},
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.error_code(), Some(NETWORK_ERROR_CODE));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_token_codes_fire_hook_once() {
        for code in TOKEN_ERROR_CODES {
            for http_status in [200, 401, 403] {
                let calls = Cell::new(0);
                let err = classify(
                    respond(
                        http_status,
                        json!({"errorCode": code, "message": "bad token"}),
                    ),
                    || calls.set(calls.get() + 1),
                )
                .unwrap_err();
                assert_eq!(calls.get(), 1);
                assert!(matches!(err, ApiError::SessionExpired(_)));
                assert_eq!(err.status(), Some(401));
                assert_eq!(err.error_code(), Some(code));
            }
        }
    }

    #[test]
    fn test_other_codes_pass_through_as_application_errors() {
        let calls = Cell::new(0);
        let err = classify(
            respond(
                400,
                json!({"errorCode": "B1003", "status": 400, "tip": "Name taken", "message": "name exists"}),
            ),
            || calls.set(calls.get() + 1),
        )
        .unwrap_err();
        assert_eq!(calls.get(), 0);
        assert_eq!(
            err,
            ApiError::Application(ErrorBody {
                tip: "Name taken".to_string(),
                message: "name exists".to_string(),
                error_code: "B1003".to_string(),
                status: 400,
            })
        );
    }

    #[test]
    fn test_error_code_on_success_status_is_still_an_error() {
        let err = classify(respond(200, json!({"errorCode": "B0001"})), || {}).unwrap_err();
        assert_eq!(err.error_code(), Some("B0001"));
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn test_non_json_failure_keeps_text() {
        let err = classify(respond(502, json!("Bad Gateway")), || {}).unwrap_err();
        let body = err.body().unwrap();
        assert_eq!(body.message, "Bad Gateway");
        assert_eq!(body.status, 502);
        assert_eq!(body.error_code, "");
    }
}
