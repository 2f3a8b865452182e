use serde::{Deserialize, Serialize};

use crate::models::StatusId;

/// The processing state of a transaction, e.g. "Pending" or "Completed".
///
/// Statuses are owned by the backend and are never constructed by the client
/// except to decode responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// The status ID. The recent transactions endpoint omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<StatusId>,
    /// A machine readable code, e.g. "completed".
    pub code: String,
    /// The label to show to the user.
    pub display_name: String,
    /// The colour to show the status in.
    pub color: String,
}

#[cfg(test)]
mod status_tests {
    use crate::models::{Status, StatusId};

    #[test]
    fn deserializes_full_status() {
        let json = r#"{"status_id": 1, "code": "completed", "display_name": "Completed", "color": "green"}"#;

        let status: Status = serde_json::from_str(json).unwrap();

        assert_eq!(status.status_id, Some(StatusId::new(1)));
        assert_eq!(status.display_name, "Completed");
    }

    #[test]
    fn deserializes_status_without_id() {
        let json = r#"{"code": "pending", "display_name": "Pending", "color": "yellow"}"#;

        let status: Status = serde_json::from_str(json).unwrap();

        assert_eq!(status.status_id, None);
        assert_eq!(status.code, "pending");
    }
}
