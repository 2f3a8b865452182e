use serde::{Deserialize, Serialize};

use crate::models::{ContractorId, UserId};

/// A payer or payee that belongs to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    /// The contractor ID.
    pub contractor_id: ContractorId,
    /// The user that owns this contractor.
    pub user_id: UserId,
    /// The contractor's display name.
    pub name: String,
}

/// The body of a request to create a contractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractorCreate {
    /// The new contractor's display name.
    pub name: String,
}
