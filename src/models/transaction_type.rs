use serde::{Deserialize, Serialize};

use crate::models::TransactionTypeId;

/// The kind of a transaction, e.g. "Card Payment" or "Transfer".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionType {
    /// The transaction type ID.
    pub transaction_type_id: TransactionTypeId,
    /// A machine readable code, e.g. "PAYMENT".
    pub code: String,
    /// The label to show to the user.
    pub display_name: String,
}
