//! Paydesk is a client for a personal payments backend.
//!
//! It logs in with a username and password, keeps the access token between
//! runs, and lets the user browse and edit their transactions and
//! contractors. Views are guarded so that only a logged in user can reach
//! them, and a token the backend rejects ends the session.
//!
//! The [App] ties everything together:
//!
//! - [ApiClient] sends requests to the backend and attaches the stored token.
//! - [services] wrap one backend endpoint each.
//! - [stores] hold the client-side state for transactions and contractors.
//! - [SessionStore] holds the token and logs the user in and out.
//! - [router] decides which view a navigation ends up on.

#![warn(missing_docs)]

mod app;
mod config;
mod endpoints;
mod error;
mod http_client;
mod logging;
pub mod models;
pub mod router;
pub mod services;
mod session;
pub mod storage;
pub mod stores;

pub use app::App;
pub use config::{API_BASE_URL_VAR, Config, DEFAULT_STORAGE_PATH, LOG_FILE_VAR, STORAGE_PATH_VAR};
pub use error::Error;
pub use http_client::ApiClient;
pub use logging::{LOG_BODY_LENGTH_LIMIT, redact_form_field, setup_logging};
pub use session::{SessionStore, decode_user};

#[cfg(test)]
mod test_utils;
