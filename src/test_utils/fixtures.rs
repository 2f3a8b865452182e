use jsonwebtoken::{EncodingKey, Header};
use serde_json::{Value, json};

use crate::models::{Contractor, TransactionDetail, TransactionListItem};

/// Sign a token whose claims are `claims`, the way the backend does.
#[track_caller]
pub(crate) fn make_token(claims: Value) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"supersecret"),
    )
    .expect("Could not encode token")
}

fn status_json(status_id: i64) -> Value {
    match status_id {
        1 => json!({"status_id": 1, "code": "completed", "display_name": "Completed", "color": "green"}),
        2 => json!({"status_id": 2, "code": "pending", "display_name": "Pending", "color": "yellow"}),
        id => json!({"status_id": id, "code": format!("status_{id}"), "display_name": format!("Status {id}"), "color": "grey"}),
    }
}

/// A transaction detail as the backend would send it.
pub(crate) fn transaction_detail_json(transaction_id: i64, status_id: i64) -> Value {
    json!({
        "transaction_id": transaction_id,
        "contractor_from": "Alice",
        "contractor_to": "Bob",
        "amount": "100.50",
        "transaction_type": {"transaction_type_id": 1, "code": "CARD", "display_name": "Card Payment"},
        "status": status_json(status_id),
        "created_at": "2026-02-15T10:00:00",
        "updated_at": "2026-02-15T10:00:00"
    })
}

/// A recent transactions list item as the backend would send it.
pub(crate) fn transaction_list_item_json(transaction_id: i64) -> Value {
    let mut status = status_json(1);
    status
        .as_object_mut()
        .expect("status is an object")
        .remove("status_id");

    json!({
        "transaction_id": transaction_id,
        "contractor_from": "Alice",
        "contractor_to": "Bob",
        "amount": "100.50",
        "transaction_type": "Card Payment",
        "status": status,
        "created_at": "2026-02-15T10:00:00"
    })
}

/// A contractor as the backend would send it.
pub(crate) fn contractor_json(contractor_id: i64, user_id: i64, name: &str) -> Value {
    json!({"contractor_id": contractor_id, "user_id": user_id, "name": name})
}

#[track_caller]
pub(crate) fn transaction_detail(transaction_id: i64, status_id: i64) -> TransactionDetail {
    serde_json::from_value(transaction_detail_json(transaction_id, status_id))
        .expect("Could not decode transaction detail fixture")
}

#[track_caller]
pub(crate) fn transaction_list_item(transaction_id: i64) -> TransactionListItem {
    serde_json::from_value(transaction_list_item_json(transaction_id))
        .expect("Could not decode transaction list item fixture")
}

#[track_caller]
pub(crate) fn contractor(contractor_id: i64, user_id: i64, name: &str) -> Contractor {
    serde_json::from_value(contractor_json(contractor_id, user_id, name))
        .expect("Could not decode contractor fixture")
}
