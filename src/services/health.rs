use crate::{ApiClient, Error, endpoints, models::Health};

/// Checks whether the backend is up.
#[derive(Clone, Copy)]
pub struct HealthService<'a> {
    client: &'a ApiClient,
}

impl<'a> HealthService<'a> {
    /// Create a service that sends requests with `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Ask the backend for its health status.
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn check(&self) -> Result<Health, Error> {
        self.client.get(endpoints::HEALTH).await
    }
}
