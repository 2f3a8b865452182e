//! The records exchanged with the backend.

pub(crate) mod amount;
mod auth;
mod contractor;
mod health;
mod ids;
mod status;
pub(crate) mod timestamp;
mod transaction;
mod transaction_type;
mod user;

pub use auth::{
    Credentials, LoginResponse, PASSWORD_MIN_LENGTH, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH,
};
pub use contractor::{Contractor, ContractorCreate};
pub use health::Health;
pub use ids::{ContractorId, StatusId, TransactionId, TransactionTypeId, UserId};
pub use status::Status;
pub use transaction::{
    TransactionCreateRequest, TransactionDetail, TransactionListItem, TransactionListResponse,
    TransactionUpdateRequest,
};
pub use transaction_type::TransactionType;
pub use user::{CurrentUser, User};
