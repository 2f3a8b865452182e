//! Client configuration read from the environment.

use std::{env, path::PathBuf};

use crate::Error;

/// The environment variable holding the backend's base URL.
pub const API_BASE_URL_VAR: &str = "PAYDESK_API_BASE_URL";
/// The environment variable holding the path of the client storage database.
pub const STORAGE_PATH_VAR: &str = "PAYDESK_STORAGE_PATH";
/// The environment variable holding the path of the debug log file.
pub const LOG_FILE_VAR: &str = "PAYDESK_LOG_FILE";

/// The storage database used when [STORAGE_PATH_VAR] is not set.
pub const DEFAULT_STORAGE_PATH: &str = "paydesk.sqlite3";

/// The settings needed to build an [crate::App].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The absolute http(s) URL of the backend, without a trailing slash.
    pub api_base_url: String,
    /// Where the access token is persisted between runs.
    pub storage_path: PathBuf,
    /// Where to write the debug log, if anywhere.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Create a config, validating and normalising `api_base_url`.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if `api_base_url` is not an absolute
    /// http or https URL.
    pub fn new(
        api_base_url: &str,
        storage_path: impl Into<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, Error> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url)?,
            storage_path: storage_path.into(),
            log_file,
        })
    }

    /// Read the config from the environment.
    ///
    /// Explicit values, e.g. from command line arguments, take precedence
    /// over the environment variables.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if no base URL was given or if it is
    /// malformed.
    pub fn from_env(
        api_base_url: Option<String>,
        storage_path: Option<PathBuf>,
    ) -> Result<Self, Error> {
        let api_base_url = api_base_url
            .or_else(|| env::var(API_BASE_URL_VAR).ok())
            .ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "the backend URL must be given with --api-base-url or the environment variable '{API_BASE_URL_VAR}'"
                ))
            })?;
        let storage_path = storage_path
            .or_else(|| env::var(STORAGE_PATH_VAR).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH));
        let log_file = env::var(LOG_FILE_VAR).ok().map(PathBuf::from);

        Self::new(&api_base_url, storage_path, log_file)
    }
}

fn normalize_base_url(raw_url: &str) -> Result<String, Error> {
    let url = raw_url.trim().trim_end_matches('/');

    let host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| {
            Error::InvalidConfig(format!(
                "\"{raw_url}\" is not an absolute http or https URL"
            ))
        })?;

    if host.is_empty() {
        return Err(Error::InvalidConfig(format!(
            "\"{raw_url}\" does not name a host"
        )));
    }

    Ok(url.to_owned())
}

#[cfg(test)]
mod config_tests {
    use std::path::PathBuf;

    use crate::{Error, config::Config};

    #[test]
    fn trailing_slash_is_removed() {
        let config = Config::new("http://localhost:8000/", "test.sqlite3", None).unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.storage_path, PathBuf::from("test.sqlite3"));
    }

    #[test]
    fn base_url_with_path_is_kept() {
        let config = Config::new("https://example.com/api", "test.sqlite3", None).unwrap();

        assert_eq!(config.api_base_url, "https://example.com/api");
    }

    #[test]
    fn relative_url_is_rejected() {
        let result = Config::new("localhost:8000", "test.sqlite3", None);

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn url_without_host_is_rejected() {
        let result = Config::new("https://", "test.sqlite3", None);

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn explicit_values_take_precedence() {
        let config = Config::from_env(
            Some("http://127.0.0.1:9000".to_owned()),
            Some(PathBuf::from("explicit.sqlite3")),
        )
        .unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.storage_path, PathBuf::from("explicit.sqlite3"));
    }
}
