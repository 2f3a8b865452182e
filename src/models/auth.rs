use serde::{Deserialize, Serialize};

/// The shortest username the backend accepts.
pub const USERNAME_MIN_LENGTH: usize = 5;
/// The longest username the backend accepts.
pub const USERNAME_MAX_LENGTH: usize = 30;
/// The shortest password the backend accepts.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// The username and password entered during log-in.
///
/// Sent to the backend as a URL encoded form.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// The username.
    pub username: String,
    /// The password.
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

impl Credentials {
    /// Create a new set of credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// A hint for the user if a field is outside the lengths the backend
    /// accepts.
    ///
    /// This is advisory only: the credentials are still sent as entered and
    /// the backend has the final say.
    pub fn length_hint(&self) -> Option<String> {
        let username_length = self.username.chars().count();

        if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&username_length) {
            return Some(format!(
                "usernames are between {USERNAME_MIN_LENGTH} and {USERNAME_MAX_LENGTH} characters long"
            ));
        }

        if self.password.chars().count() < PASSWORD_MIN_LENGTH {
            return Some(format!(
                "passwords are at least {PASSWORD_MIN_LENGTH} characters long"
            ));
        }

        None
    }
}

/// The response body of a successful log-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The bearer token to send with authenticated requests.
    pub access_token: String,
    /// Not issued by the current backend and never used by the client.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// The token scheme, always "bearer".
    pub token_type: String,
}
