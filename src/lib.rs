//! # Cloudhub Portal
//!
//! > **The client-side core of the Cloudhub personal file library.**
//!
//! This crate holds everything a Cloudhub front end needs besides the views
//! themselves: where every backend resource lives, how a call is sent and how
//! its outcome is classified, which screens exist and who may enter them, and
//! what the side menus contain.
//!
//! ## 🏗️ Design
//!
//! ### Session as an explicit dependency
//! Nothing reads login state from a global. The navigation gate and the
//! transport receive a [`SessionProvider`](session::SessionProvider); the
//! portal hands both the same [`SharedSession`](session::SharedSession).
//!
//! ### Closed route names
//! Routes are identified by the [`RouteName`](navigation::RouteName) enum, so a
//! menu link or a guard redirect cannot point at a screen that does not exist.
//!
//! ### One error shape per call
//! Every failed call is one of four [`ApiError`](transport::ApiError) variants,
//! each carrying the same `{tip, message, errorCode, status}` body.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. URLs ([`endpoints`])
//! - **Role**: Pure functions from resource coordinates to backend URLs, with
//!   an admin flag that only swaps the prefix.
//! - **Key items**: [`EndpointCatalog`](endpoints::EndpointCatalog).
//!
//! ### 2. Calls ([`transport`])
//! - **Role**: Attaches the credential, sends once, classifies the completion.
//! - **Key items**: [`ApiClient`](transport::ApiClient),
//!   [`HttpBackend`](transport::HttpBackend),
//!   [`MockBackend`](transport::mock::MockBackend).
//!
//! ### 3. Screens ([`navigation`])
//! - **Role**: Route table, the gate run before every transition and the
//!   document title set after it.
//! - **Key items**: [`RouteTable`](navigation::RouteTable),
//!   [`NavigationGate`](navigation::NavigationGate),
//!   [`Navigator`](navigation::Navigator).
//!
//! ### 4. Menus ([`menu`])
//! - **Role**: User and admin side menus as a tree of links and groups.
//! - **Key items**: [`standard_menus`](menu::standard_menus),
//!   [`convert_to_menu_options`](menu::convert_to_menu_options).
//!
//! ### 5. Clients ([`clients`])
//! - **Role**: Typed calls for login and storage management.
//! - **Key items**: [`AuthClient`](clients::AuthClient),
//!   [`StorageClient`](clients::StorageClient).
//!
//! ### 6. Wiring ([`lifecycle`], [`config`])
//! - **Role**: Loads configuration, sets up tracing and builds the
//!   [`Portal`](lifecycle::Portal).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! CLOUDHUB_BASE_URL=disk.example.org RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod lifecycle;
pub mod menu;
pub mod navigation;
pub mod session;
pub mod transport;

pub use error::PortalError;
