//! Stateless wrappers around the backend endpoints, one per resource.
//!
//! Every operation issues exactly one request through the [ApiClient] and
//! returns the decoded response body as is. Nothing is cached and errors are
//! passed straight back to the caller.
//!
//! [ApiClient]: crate::ApiClient

mod auth;
mod contractors;
mod health;
mod statuses;
mod transaction_types;
mod transactions;
mod users;

pub use auth::AuthService;
pub use contractors::ContractorService;
pub use health::HealthService;
pub use statuses::{DEFAULT_LANGUAGE, StatusService};
pub use transaction_types::TransactionTypeService;
pub use transactions::TransactionService;
pub use users::UserService;
