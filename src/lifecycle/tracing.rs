//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose
//! level is taken from `RUST_LOG`.
//!
//! ```bash
//! # Navigation decisions and completed requests
//! RUST_LOG=info cargo run
//!
//! # Every guard decision, redirect and request classification
//! RUST_LOG=debug cargo run
//!
//! # Only the transport
//! RUST_LOG=cloudhub_portal::transport=debug cargo run
//! ```
//!
//! Client calls run inside `#[instrument]` spans, so with the compact format a
//! request line reads like:
//!
//! ```text
//! DEBUG login:execute: Sending request method=POST url=http://localhost:7010/api/v1/user/login/password
//! WARN fetch:execute: Credential rejected by server error_code="A1001" status=200
//! WARN fetch:execute: Login expired, clearing session
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
