//! Defines the crate level error type and conversions from the errors of the underlying libraries.

use reqwest::StatusCode;

/// The errors that may occur in the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the response could not be read, e.g.
    /// the backend is unreachable.
    #[error("could not reach the backend: {0}")]
    Transport(String),

    /// The backend rejected the stored access token on an endpoint other than
    /// log-in.
    ///
    /// By the time the caller sees this error the persisted token has already
    /// been removed. The caller should end the session and send the user to
    /// the log-in page.
    #[error("the session has expired, please log in again")]
    SessionExpired,

    /// An operation needs the logged in user's ID but there is no session or
    /// its token does not name a user.
    #[error("no user is logged in")]
    NotLoggedIn,

    /// The backend responded with an error status.
    ///
    /// `detail` holds the backend's error message when it sent one, otherwise
    /// the raw response body. A rejected log-in attempt surfaces here with a
    /// 401 status.
    #[error("the backend responded with {status}: {detail}")]
    Api {
        /// The HTTP status code of the response.
        status: StatusCode,
        /// The error message sent by the backend.
        detail: String,
    },

    /// The response body did not have the expected shape.
    #[error("could not decode the response body: {0}")]
    Decode(String),

    /// An unhandled/unexpected SQL error from the persisted client storage.
    #[error("an unexpected SQL error occurred: {0}")]
    Storage(rusqlite::Error),

    /// Could not acquire the storage lock.
    #[error("could not acquire the storage lock")]
    StorageLock,

    /// A configuration value is missing or malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A path could not be parsed as an application route.
    #[error("\"{0}\" is not a valid route")]
    InvalidRoute(String),
}

impl Error {
    /// Whether the error is a rejection of the user's credentials by the
    /// log-in endpoint.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::Storage(value)
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Error::Decode(value.to_string())
        } else {
            Error::Transport(value.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Decode(value.to_string())
    }
}

#[cfg(test)]
mod error_tests {
    use reqwest::StatusCode;

    use crate::Error;

    #[test]
    fn unauthorized_api_error_is_invalid_credentials() {
        let error = Error::Api {
            status: StatusCode::UNAUTHORIZED,
            detail: "Invalid username or password".to_owned(),
        };

        assert!(error.is_invalid_credentials());
    }

    #[test]
    fn other_errors_are_not_invalid_credentials() {
        let not_found = Error::Api {
            status: StatusCode::NOT_FOUND,
            detail: "Transaction not found".to_owned(),
        };

        assert!(!not_found.is_invalid_credentials());
        assert!(!Error::SessionExpired.is_invalid_credentials());
    }

    #[test]
    fn api_error_message_includes_detail() {
        let error = Error::Api {
            status: StatusCode::BAD_REQUEST,
            detail: "Invalid contractor".to_owned(),
        };

        assert_eq!(
            error.to_string(),
            "the backend responded with 400 Bad Request: Invalid contractor"
        );
    }
}
