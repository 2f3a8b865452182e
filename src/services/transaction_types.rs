use crate::{ApiClient, Error, endpoints, models::TransactionType};

/// Fetches the transaction types.
#[derive(Clone, Copy)]
pub struct TransactionTypeService<'a> {
    client: &'a ApiClient,
}

impl<'a> TransactionTypeService<'a> {
    /// Create a service that sends requests with `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get every transaction type.
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn all(&self) -> Result<Vec<TransactionType>, Error> {
        self.client.get(endpoints::TRANSACTION_TYPES).await
    }
}

#[cfg(test)]
mod transaction_type_service_tests {
    use axum::{Json, Router, routing::get};
    use serde_json::{Value, json};

    use crate::{
        endpoints,
        models::TransactionTypeId,
        services::TransactionTypeService,
        test_utils::{get_client, spawn_backend},
    };

    async fn stub_types() -> Json<Value> {
        Json(json!([
            {"transaction_type_id": 1, "code": "CARD", "display_name": "Card Payment"},
            {"transaction_type_id": 2, "code": "TRANSFER", "display_name": "Transfer"}
        ]))
    }

    #[tokio::test]
    async fn all_returns_types() {
        let router = Router::new().route(endpoints::TRANSACTION_TYPES, get(stub_types));
        let base_url = spawn_backend(router).await;
        let (client, _) = get_client(&base_url, None);

        let types = TransactionTypeService::new(&client).all().await.unwrap();

        assert_eq!(types.len(), 2);
        assert_eq!(types[1].transaction_type_id, TransactionTypeId::new(2));
        assert_eq!(types[1].display_name, "Transfer");
    }
}
