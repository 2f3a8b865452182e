use crate::{ApiClient, Error, endpoints, models::CurrentUser};

/// Fetches the logged in user's account.
#[derive(Clone, Copy)]
pub struct UserService<'a> {
    client: &'a ApiClient,
}

impl<'a> UserService<'a> {
    /// Create a service that sends requests with `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get the account that the stored access token belongs to.
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn me(&self) -> Result<CurrentUser, Error> {
        self.client.get(endpoints::CURRENT_USER).await
    }
}
