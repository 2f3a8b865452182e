//! Logging setup and helpers for logging outgoing requests and incoming responses.

use std::{fs::OpenOptions, io, path::Path, sync::Arc};

use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing_subscriber::{
    EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::Error;

/// Bodies longer than this many bytes are truncated at the `info` level and
/// logged in full at the `debug` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Install the global tracing subscriber.
///
/// Logs go to stderr, keeping stdout for command output, filtered by `RUST_LOG` (default `info`). If `log_file`
/// is given, everything at `debug` and above is also appended to that file.
///
/// # Errors
/// Returns [Error::InvalidConfig] if the log file cannot be opened.
pub fn setup_logging(log_file: Option<&Path>) -> Result<(), Error> {
    let terminal_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let debug_log = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| {
                    Error::InvalidConfig(format!(
                        "could not open log file {}: {error}",
                        path.display()
                    ))
                })?;

            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(filter::LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(terminal_log)
        .with(debug_log)
        .init();

    Ok(())
}

/// Replace the value of `field_name` in a URL encoded form with asterisks.
pub fn redact_form_field(form_text: &str, field_name: &str) -> String {
    let prefix = format!("{field_name}=");

    form_text
        .split('&')
        .map(|pair| {
            if pair.starts_with(&prefix) {
                format!("{prefix}********")
            } else {
                pair.to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// The fields of a log-in response that hold credentials.
pub(crate) const TOKEN_FIELDS: [&str; 2] = ["access_token", "refresh_token"];

/// Replace the string values of `field_names` in a JSON object with asterisks.
///
/// Bodies that are not a JSON object are returned as is.
pub(crate) fn redact_json_fields(json_text: &str, field_names: &[&str]) -> String {
    let Ok(Value::Object(mut fields)) = serde_json::from_str::<Value>(json_text) else {
        return json_text.to_owned();
    };

    for field_name in field_names {
        if let Some(value) = fields.get_mut(*field_name).filter(|value| value.is_string()) {
            *value = Value::String("********".to_owned());
        }
    }

    Value::Object(fields).to_string()
}

fn truncate(body: &str) -> &str {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return body;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

/// Log an outgoing request. Form bodies should be redacted by the caller.
pub(crate) fn log_request(method: &Method, url: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!("Sending request: {method} {url}\nbody: {}...", truncate(body));
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Sending request: {method} {url}\nbody: {body:?}");
    }
}

/// Log a response received for the request `method url`.
pub(crate) fn log_response(method: &Method, url: &str, status: StatusCode, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received response: {status} for {method} {url}\nbody: {}...",
            truncate(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Received response: {status} for {method} {url}\nbody: {body:?}");
    }
}
