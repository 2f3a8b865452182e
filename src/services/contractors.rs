use crate::{
    ApiClient, Error,
    endpoints::{self, format_endpoint},
    models::{Contractor, ContractorCreate, ContractorId, UserId},
};

/// Fetches and creates contractors.
#[derive(Clone, Copy)]
pub struct ContractorService<'a> {
    client: &'a ApiClient,
}

impl<'a> ContractorService<'a> {
    /// Create a service that sends requests with `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get the contractors that belong to `user_id`.
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Contractor>, Error> {
        self.client
            .get(&format_endpoint(endpoints::USER_CONTRACTORS, user_id))
            .await
    }

    /// Get a single contractor.
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn get(&self, id: ContractorId) -> Result<Contractor, Error> {
        self.client
            .get(&format_endpoint(endpoints::CONTRACTOR, id))
            .await
    }

    /// Create a contractor for `user_id`.
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn create_for_user(
        &self,
        user_id: UserId,
        request: &ContractorCreate,
    ) -> Result<Contractor, Error> {
        self.client
            .post_json(&format_endpoint(endpoints::USER_CONTRACTORS, user_id), request)
            .await
    }
}
