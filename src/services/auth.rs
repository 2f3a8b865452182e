use crate::{
    ApiClient, Error, endpoints,
    models::{Credentials, LoginResponse},
};

/// Exchanges credentials for an access token.
#[derive(Clone, Copy)]
pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    /// Create a service that sends requests with `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Log in with `credentials`, sent as a URL encoded form.
    ///
    /// # Errors
    /// Returns an [Error::Api] with a 401 status if the backend rejected the
    /// credentials, or any other error from [ApiClient].
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, Error> {
        self.client.post_form(endpoints::LOG_IN, credentials).await
    }
}
