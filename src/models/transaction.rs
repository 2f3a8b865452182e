//! Defines the transaction records exchanged with the backend and the list projection used by the
//! recent transactions view.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::{
    ContractorId, Status, StatusId, TransactionId, TransactionType, TransactionTypeId, amount,
    timestamp,
};

/// A transaction with all of its details, as returned when fetching, creating
/// or updating a single transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetail {
    /// The transaction ID.
    pub transaction_id: TransactionId,
    /// The name of the contractor the money came from.
    pub contractor_from: String,
    /// The name of the contractor the money went to.
    pub contractor_to: String,
    /// The amount of money transferred.
    #[serde(deserialize_with = "amount::deserialize")]
    pub amount: f64,
    /// What kind of transaction this is.
    pub transaction_type: TransactionType,
    /// The processing state of the transaction.
    pub status: Status,
    /// When the transaction was created.
    #[serde(with = "timestamp")]
    pub created_at: OffsetDateTime,
    /// When the transaction was last changed.
    #[serde(with = "timestamp")]
    pub updated_at: OffsetDateTime,
}

/// A transaction as shown in the list of recent transactions.
///
/// This is a flattened copy of a [TransactionDetail] where the transaction
/// type is reduced to its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListItem {
    /// The transaction ID.
    pub transaction_id: TransactionId,
    /// The name of the contractor the money came from.
    pub contractor_from: String,
    /// The name of the contractor the money went to.
    pub contractor_to: String,
    /// The amount of money transferred.
    #[serde(deserialize_with = "amount::deserialize")]
    pub amount: f64,
    /// The display name of the transaction type.
    pub transaction_type: String,
    /// The processing state of the transaction.
    pub status: Status,
    /// When the transaction was created.
    #[serde(with = "timestamp")]
    pub created_at: OffsetDateTime,
}

impl From<&TransactionDetail> for TransactionListItem {
    fn from(detail: &TransactionDetail) -> Self {
        Self {
            transaction_id: detail.transaction_id,
            contractor_from: detail.contractor_from.clone(),
            contractor_to: detail.contractor_to.clone(),
            amount: detail.amount,
            transaction_type: detail.transaction_type.display_name.clone(),
            status: detail.status.clone(),
            created_at: detail.created_at,
        }
    }
}

/// The response body of the recent transactions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    /// The most recent transactions, newest first.
    pub items: Vec<TransactionListItem>,
}

/// The body of a request to create a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreateRequest {
    /// The contractor the money comes from.
    pub contractor_from_id: ContractorId,
    /// The contractor the money goes to.
    pub contractor_to_id: ContractorId,
    /// The amount of money to transfer.
    pub amount: f64,
    /// The initial status of the transaction.
    pub status_id: StatusId,
    /// What kind of transaction this is.
    pub transaction_type_id: TransactionTypeId,
}

/// The body of a request to update a transaction.
///
/// Fields set to `None` are left out of the request and are not changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdateRequest {
    /// The new status of the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<StatusId>,
}

#[cfg(test)]
mod transaction_tests {
    use time::macros::datetime;

    use crate::models::{
        Status, StatusId, TransactionDetail, TransactionId, TransactionListItem,
        TransactionListResponse, TransactionType, TransactionTypeId, TransactionUpdateRequest,
    };

    fn detail() -> TransactionDetail {
        TransactionDetail {
            transaction_id: TransactionId::new(3),
            contractor_from: "Alice".to_owned(),
            contractor_to: "Bob".to_owned(),
            amount: 100.5,
            transaction_type: TransactionType {
                transaction_type_id: TransactionTypeId::new(2),
                code: "CARD".to_owned(),
                display_name: "Card Payment".to_owned(),
            },
            status: Status {
                status_id: Some(StatusId::new(1)),
                code: "completed".to_owned(),
                display_name: "Completed".to_owned(),
                color: "green".to_owned(),
            },
            created_at: datetime!(2026-02-15 10:00:00 UTC),
            updated_at: datetime!(2026-02-16 08:30:00 UTC),
        }
    }

    #[test]
    fn list_item_flattens_transaction_type() {
        let detail = detail();

        let item = TransactionListItem::from(&detail);

        assert_eq!(item.transaction_id, detail.transaction_id);
        assert_eq!(item.contractor_from, "Alice");
        assert_eq!(item.contractor_to, "Bob");
        assert_eq!(item.amount, 100.5);
        assert_eq!(item.transaction_type, "Card Payment");
        assert_eq!(item.status, detail.status);
        assert_eq!(item.created_at, detail.created_at);
    }

    #[test]
    fn deserializes_backend_detail() {
        let json = r#"{
            "transaction_id": 3,
            "contractor_from": "Sender",
            "contractor_to": "Receiver",
            "amount": "50.00",
            "transaction_type": {"transaction_type_id": 2, "code": "PAYMENT", "display_name": "Payment"},
            "status": {"status_id": 1, "code": "OK", "display_name": "Ok", "color": "green"},
            "created_at": "2026-02-15T10:00:00",
            "updated_at": "2026-02-15T10:00:00.5"
        }"#;

        let detail: TransactionDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.amount, 50.0);
        assert_eq!(detail.transaction_type.display_name, "Payment");
        assert_eq!(detail.created_at, datetime!(2026-02-15 10:00:00 UTC));
        assert_eq!(detail.updated_at, datetime!(2026-02-15 10:00:00.5 UTC));
    }

    #[test]
    fn deserializes_list_response() {
        let json = r#"{"items": [{
            "transaction_id": 1,
            "contractor_from": "Alice",
            "contractor_to": "Bob",
            "amount": 100.5,
            "transaction_type": "Card Payment",
            "status": {"code": "completed", "display_name": "Completed", "color": "green"},
            "created_at": "2026-02-15T10:00:00Z"
        }]}"#;

        let response: TransactionListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].transaction_type, "Card Payment");
        assert_eq!(response.items[0].status.status_id, None);
    }

    #[test]
    fn empty_update_request_serializes_to_empty_object() {
        let json = serde_json::to_string(&TransactionUpdateRequest::default()).unwrap();

        assert_eq!(json, "{}");
    }

    #[test]
    fn update_request_serializes_status_id() {
        let request = TransactionUpdateRequest {
            status_id: Some(StatusId::new(5)),
        };

        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(json, r#"{"status_id":5}"#);
    }
}
