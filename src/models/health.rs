use serde::{Deserialize, Serialize};

/// The response body of the backend's health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    /// The backend's self-reported status, e.g. "ok".
    pub status: String,
}
