//! The HTTP client every request to the backend goes through.
//!
//! The client attaches the persisted access token to outgoing requests and
//! tears the session down when the backend rejects that token.

use reqwest::{
    Client, Method, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    Error, endpoints,
    logging::{TOKEN_FIELDS, log_request, log_response, redact_form_field, redact_json_fields},
    storage::{ACCESS_TOKEN_KEY, SharedStorage},
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// The encoded body of an outgoing request.
enum RequestBody {
    Empty,
    Json(String),
    Form(String),
}

impl RequestBody {
    /// The body text that is safe to write to the logs.
    fn loggable_text(&self) -> String {
        match self {
            RequestBody::Empty => String::new(),
            RequestBody::Json(text) => text.clone(),
            RequestBody::Form(text) => redact_form_field(text, "password"),
        }
    }
}

/// A client for the backend API.
///
/// Cloning the client is cheap, clones share the connection pool and the
/// persisted storage.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    storage: SharedStorage,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` that reads the access
    /// token from `storage`.
    ///
    /// `base_url` should not end with a slash, see [crate::Config].
    ///
    /// # Errors
    /// Returns [Error::Transport] if the underlying HTTP client cannot be created.
    pub fn new(base_url: &str, storage: SharedStorage) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            storage,
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a GET request to `path` and decode the JSON response.
    ///
    /// # Errors
    /// See [ApiClient::send].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.send(Method::GET, path, RequestBody::Empty).await
    }

    /// Send a GET request to `path` with `query` encoded as the query string
    /// and decode the JSON response.
    ///
    /// # Errors
    /// See [ApiClient::send].
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(query)
            .map_err(|error| Error::Decode(format!("could not encode query: {error}")))?;

        if query_string.is_empty() {
            self.get(path).await
        } else {
            self.get(&format!("{path}?{query_string}")).await
        }
    }

    /// Send `body` as JSON in a POST request to `path` and decode the JSON response.
    ///
    /// # Errors
    /// See [ApiClient::send].
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.send(Method::POST, path, RequestBody::Json(body)).await
    }

    /// Send `body` as JSON in a PATCH request to `path` and decode the JSON response.
    ///
    /// # Errors
    /// See [ApiClient::send].
    pub async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.send(Method::PATCH, path, RequestBody::Json(body)).await
    }

    /// Send `body` as a URL encoded form in a POST request to `path` and
    /// decode the JSON response.
    ///
    /// # Errors
    /// See [ApiClient::send].
    pub async fn post_form<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_urlencoded::to_string(body)
            .map_err(|error| Error::Decode(format!("could not encode form: {error}")))?;
        self.send(Method::POST, path, RequestBody::Form(body)).await
    }

    fn bearer_token(&self) -> Result<Option<String>, Error> {
        Ok(self
            .storage
            .get(ACCESS_TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    /// Send a request and decode the JSON response.
    ///
    /// The persisted access token, if any, is sent as a bearer token.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::SessionExpired] if the backend responded with 401 to any
    ///   endpoint other than log-in. The persisted token is removed first.
    /// - [Error::Api] for any other error status, including a 401 from the
    ///   log-in endpoint,
    /// - [Error::Transport] if the request could not be sent,
    /// - or [Error::Decode] if the response body is not the expected JSON.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);
        log_request(&method, &url, &body.loggable_text());

        let mut request = self.client.request(method.clone(), &url);

        if let Some(token) = self.bearer_token()? {
            request = request.bearer_auth(token);
        }

        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(text) => request
                .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
                .body(text),
            RequestBody::Form(text) => request
                .header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
                .body(text),
        };

        let response = request.send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        if endpoints::is_log_in(path) {
            log_response(&method, &url, status, &redact_json_fields(&body_text, &TOKEN_FIELDS));
        } else {
            log_response(&method, &url, status, &body_text);
        }

        if status == StatusCode::UNAUTHORIZED && !endpoints::is_log_in(path) {
            tracing::warn!("The backend rejected the access token for {method} {path}. Ending the session.");

            if let Err(error) = self.storage.remove(ACCESS_TOKEN_KEY) {
                tracing::error!("Could not remove the persisted access token: {error}");
            }

            return Err(Error::SessionExpired);
        }

        if !status.is_success() {
            return Err(Error::Api {
                status,
                detail: extract_error_detail(status, &body_text),
            });
        }

        serde_json::from_str(&body_text).map_err(Error::from)
    }
}

/// Get a readable error message from an error response body.
///
/// The backend sends `{"detail": "message"}`, or for validation errors
/// `{"detail": [{"msg": "message", ...}, ...]}`. Other bodies are returned as is.
fn extract_error_detail(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned();
    }

    let detail = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut fields)) => fields.remove("detail"),
        _ => None,
    };

    match detail {
        Some(Value::String(message)) => message,
        Some(Value::Array(errors)) => {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|error| error.get("msg").and_then(Value::as_str))
                .collect();

            if messages.is_empty() {
                body.to_owned()
            } else {
                messages.join("; ")
            }
        }
        _ => body.to_owned(),
    }
}
