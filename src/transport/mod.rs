//! # Transport Wrapper
//!
//! One shared client for every backend call:
//!
//! 1. [`request_config`] attaches the session credential (and the JSON
//!    content type when a body is sent);
//! 2. an [`HttpBackend`] performs the request exactly once;
//! 3. [`classify`](classify::classify) turns the completion into either the
//!    payload or one normalized [`ApiError`].
//!
//! There are no retries and no backoff.

pub mod backend;
pub mod classify;
pub mod client;
pub mod envelope;
pub mod error;
pub mod mock;
pub mod request;

pub use backend::{HttpBackend, ReqwestBackend};
pub use classify::{is_token_error, Completion, TOKEN_ERROR_CODES};
pub use client::{data, page_of, ApiClient, LoginExpiredHook};
pub use envelope::{Page, ResponseEnvelope, SUCCESS_CODE};
pub use error::{ApiError, ErrorBody, CANCEL_CODE, NETWORK_ERROR_CODE};
pub use request::{
    request_config, ApiRequest, Method, PreparedRequest, RequestConfig, AUTHORIZATION, CONTENT_TYPE,
    JSON_CONTENT_TYPE,
};
