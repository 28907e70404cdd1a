//! # Mock Backends
//!
//! Utilities for testing code that talks to the server without opening a
//! socket. This module is compiled in normal builds, not under `#[cfg(test)]`,
//! so integration tests in `tests/` can use it too.
//!
//! ## Fluent expectations
//!
//! [`MockBackend`] answers requests from a queue of expectations, in order:
//!
//! ```rust
//! use cloudhub_portal::session::SessionSnapshot;
//! use cloudhub_portal::transport::{mock::MockBackend, ApiClient, Method};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mock = MockBackend::new();
//! mock.expect(Method::Get, "http://h/api/v1/user")
//!     .respond_ok(json!({"userId": 1}));
//!
//! let client = ApiClient::new(mock.clone(), Arc::new(SessionSnapshot::anonymous()));
//! let user: serde_json::Value = client.get("http://h/api/v1/user").await.unwrap();
//! assert_eq!(user["userId"], 1);
//!
//! mock.verify();
//! # }
//! ```
//!
//! ## Channel backend
//!
//! When a test needs to inspect a request *before* deciding the answer, use
//! [`create_mock_backend`]: every request arrives on a receiver together with
//! a responder, and [`expect_request`] pulls the next one.

use super::backend::HttpBackend;
use super::classify::Completion;
use super::envelope::SUCCESS_CODE;
use super::request::{Method, PreparedRequest};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

struct Expectation {
    method: Method,
    url: String,
    completion: Completion,
    delay: Option<Duration>,
}

/// A backend answering from a queue of expectations.
///
/// Clones share the same queue and request log, so a test can keep one handle
/// while the [`ApiClient`](super::ApiClient) owns another.
#[derive(Clone, Default)]
pub struct MockBackend {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<PreparedRequest>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next request to be `method url`.
    pub fn expect(&self, method: Method, url: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            url: url.into(),
            delay: None,
            expectations: Arc::clone(&self.expectations),
        }
    }

    /// Every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len();
        assert_eq!(
            remaining,
            0,
            "{remaining} expected request(s) never arrived"
        );
    }
}

#[async_trait]
impl HttpBackend for MockBackend {
    async fn send(&self, request: PreparedRequest) -> Completion {
        let expectation = {
            let mut queue = self.expectations.lock().unwrap_or_else(|e| e.into_inner());
            queue.pop_front()
        };
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        let Some(expectation) = expectation else {
            panic!("Unexpected request: {} {}", request.method, request.url);
        };
        if expectation.method != request.method || expectation.url != request.url {
            panic!(
                "Request mismatch: expected {} {}, got {} {}",
                expectation.method, expectation.url, request.method, request.url
            );
        }

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.completion
    }
}

/// Completes an expectation created by [`MockBackend::expect`].
pub struct ExpectationBuilder {
    method: Method,
    url: String,
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Holds the answer back for `delay`, so cancellation can win the race.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answers with a raw status and body.
    pub fn respond(self, status: u16, body: Value) {
        self.push(Completion::Response { status, body });
    }

    /// Answers `200` with a success envelope around `data`.
    pub fn respond_ok(self, data: Value) {
        self.respond(
            200,
            json!({
                "errorCode": SUCCESS_CODE,
                "status": 200,
                "tip": "OK",
                "message": "OK",
                "data": data,
            }),
        );
    }

    /// Answers with an error envelope.
    pub fn respond_error(self, status: u16, error_code: &str, message: &str) {
        self.respond(
            status,
            json!({
                "errorCode": error_code,
                "status": status,
                "tip": message,
                "message": message,
                "data": null,
            }),
        );
    }

    /// Simulates a request that never reached the server.
    pub fn fail_network(self, reason: &str) {
        self.push(Completion::NoResponse {
            reason: reason.to_string(),
        });
    }

    pub fn cancel(self) {
        self.push(Completion::Cancelled);
    }

    fn push(self, completion: Completion) {
        self.expectations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Expectation {
                method: self.method,
                url: self.url,
                completion,
                delay: self.delay,
            });
    }
}

// =============================================================================
// CHANNEL BACKEND
// =============================================================================

/// A request in flight through a [`ChannelBackend`].
pub struct BackendCall {
    pub request: PreparedRequest,
    pub respond_to: oneshot::Sender<Completion>,
}

/// Forwards every request to a receiver held by the test.
#[derive(Clone)]
pub struct ChannelBackend {
    sender: mpsc::Sender<BackendCall>,
}

#[async_trait]
impl HttpBackend for ChannelBackend {
    async fn send(&self, request: PreparedRequest) -> Completion {
        let (respond_to, response) = oneshot::channel();
        if self
            .sender
            .send(BackendCall { request, respond_to })
            .await
            .is_err()
        {
            return Completion::NoResponse {
                reason: "mock backend closed".to_string(),
            };
        }
        response.await.unwrap_or_else(|_| Completion::NoResponse {
            reason: "mock responder dropped".to_string(),
        })
    }
}

/// Creates a channel backend and the receiver its requests arrive on.
pub fn create_mock_backend(buffer: usize) -> (ChannelBackend, mpsc::Receiver<BackendCall>) {
    let (sender, receiver) = mpsc::channel(buffer);
    (ChannelBackend { sender }, receiver)
}

/// Waits for the next request and returns it with its responder.
pub async fn expect_request(
    receiver: &mut mpsc::Receiver<BackendCall>,
) -> Option<(PreparedRequest, oneshot::Sender<Completion>)> {
    receiver
        .recv()
        .await
        .map(|call| (call.request, call.respond_to))
}
