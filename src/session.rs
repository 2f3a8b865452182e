//! The authentication session: the access token, the user it belongs to, and logging in and out.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::{
    ApiClient, Error,
    models::{Credentials, User, UserId},
    router::{Navigator, Route},
    services::AuthService,
    storage::{ACCESS_TOKEN_KEY, SharedStorage},
};

/// The claims of the access token that the client reads.
#[derive(Deserialize)]
struct TokenClaims {
    /// The user ID, formatted as a string.
    sub: String,
}

/// Get the user an access token was issued to.
///
/// The token's signature and expiry are not checked, that is the backend's
/// job. Returns `None` if the token cannot be decoded, has no subject, or the
/// subject is not an integer.
pub fn decode_user(token: &str) -> Option<User> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let claims = decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()?
        .claims;

    claims
        .sub
        .parse::<UserId>()
        .ok()
        .map(|user_id| User { user_id })
}

/// Holds the access token and manages logging in and out.
pub struct SessionStore {
    token: Option<String>,
    storage: SharedStorage,
    navigator: Navigator,
}

impl SessionStore {
    /// Restore the session from the token persisted in `storage`, if any.
    ///
    /// # Errors
    /// Returns an error if the storage cannot be read.
    pub fn load(storage: SharedStorage, navigator: Navigator) -> Result<Self, Error> {
        let token = storage.get(ACCESS_TOKEN_KEY)?;

        Ok(Self {
            token,
            storage,
            navigator,
        })
    }

    /// The current access token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether there is a non-empty access token.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// The logged in user, if the token can be decoded.
    pub fn user(&self) -> Option<User> {
        self.token.as_deref().and_then(decode_user)
    }

    /// Log in with `credentials`, persist the access token and navigate to the
    /// transactions view.
    ///
    /// # Errors
    /// Returns the error from the backend, e.g. an [Error::Api] with a 401
    /// status for wrong credentials, in which case nothing is persisted. Also
    /// returns an error if the token cannot be persisted.
    pub async fn login(&mut self, client: &ApiClient, credentials: &Credentials) -> Result<(), Error> {
        let response = AuthService::new(client).login(credentials).await?;

        self.storage.set(ACCESS_TOKEN_KEY, &response.access_token)?;
        self.token = Some(response.access_token);
        tracing::info!("Logged in as {}", credentials.username);

        self.navigator
            .push(Route::Transactions, self.is_authenticated());

        Ok(())
    }

    /// Remove the access token and navigate to the log-in view.
    pub fn logout(&mut self) {
        if let Err(error) = self.storage.remove(ACCESS_TOKEN_KEY) {
            tracing::error!("Could not remove the persisted access token: {error}");
        }

        self.token = None;
        tracing::info!("Logged out");

        self.navigator.push(Route::Login, false);
    }

    /// End a session whose token the backend rejected and navigate to the
    /// log-in view.
    ///
    /// The HTTP client removes the persisted token before it reports
    /// [Error::SessionExpired]. The removal is repeated here so a rejected token
    /// cannot outlive the session if that first attempt failed.
    pub fn expire(&mut self) {
        if let Err(error) = self.storage.remove(ACCESS_TOKEN_KEY) {
            tracing::error!("Could not remove the persisted access token: {error}");
        }

        self.token = None;
        tracing::info!("Session expired");

        self.navigator.push(Route::Login, false);
    }
}
