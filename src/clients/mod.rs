//! Typed clients over the shared [`ApiClient`](crate::transport::ApiClient).

pub mod auth_client;
pub mod portal_client;
pub mod storage_client;

pub use auth_client::*;
pub use portal_client::*;
pub use storage_client::*;
