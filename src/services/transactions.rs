use serde::Serialize;

use crate::{
    ApiClient, Error,
    endpoints::{self, format_endpoint},
    models::{
        TransactionCreateRequest, TransactionDetail, TransactionId, TransactionListResponse,
        TransactionUpdateRequest,
    },
};

#[derive(Serialize)]
struct RecentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

/// Fetches, creates and updates transactions.
#[derive(Clone, Copy)]
pub struct TransactionService<'a> {
    client: &'a ApiClient,
}

impl<'a> TransactionService<'a> {
    /// Create a service that sends requests with `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get the logged in user's most recent transactions, newest first.
    ///
    /// The backend returns at most 50 transactions unless `limit` says otherwise.
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn recent(&self, limit: Option<u32>) -> Result<TransactionListResponse, Error> {
        self.client
            .get_with_query(endpoints::RECENT_TRANSACTIONS, &RecentQuery { limit })
            .await
    }

    /// Get a single transaction.
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn get(&self, id: TransactionId) -> Result<TransactionDetail, Error> {
        self.client
            .get(&format_endpoint(endpoints::TRANSACTION, id))
            .await
    }

    /// Create a transaction.
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn create(
        &self,
        request: &TransactionCreateRequest,
    ) -> Result<TransactionDetail, Error> {
        self.client
            .post_json(endpoints::CREATE_TRANSACTION, request)
            .await
    }

    /// Update the fields of a transaction that are set in `request`.
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn update(
        &self,
        id: TransactionId,
        request: &TransactionUpdateRequest,
    ) -> Result<TransactionDetail, Error> {
        self.client
            .patch_json(&format_endpoint(endpoints::TRANSACTION, id), request)
            .await
    }
}
