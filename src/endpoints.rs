//! The backend API endpoint paths.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

/// The route for logging in a user.
pub const LOG_IN: &str = "/auth/login";
/// The route for the logged in user's account.
pub const CURRENT_USER: &str = "/me/me";
/// The route for the most recent transactions.
pub const RECENT_TRANSACTIONS: &str = "/transactions/recent";
/// The route to create a transaction.
pub const CREATE_TRANSACTION: &str = "/transactions/create";
/// The route to fetch or update a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to list or create the contractors of a user.
pub const USER_CONTRACTORS: &str = "/contractors/user/{user_id}";
/// The route to fetch a single contractor.
pub const CONTRACTOR: &str = "/contractors/{contractor_id}";
/// The route for the transaction statuses.
pub const STATUSES: &str = "/statuses";
/// The route for the transaction types.
pub const TRANSACTION_TYPES: &str = "/transaction-types";
/// The route for the backend's health check.
pub const HEALTH: &str = "/health";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace and ends with a
/// right brace. For example, in the endpoint path '/contractors/{contractor_id}',
/// '{contractor_id}' is the parameter.
///
/// This function assumes that an endpoint path contains at most a single parameter.
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

/// Whether `path` is the log-in endpoint, whose 401 responses mean
/// "wrong credentials" rather than "session expired".
pub fn is_log_in(path: &str) -> bool {
    path.contains(LOG_IN)
}

#[cfg(test)]
mod endpoints_tests {
    use reqwest::Url;

    use crate::{endpoints, models::TransactionId};

    use super::{format_endpoint, is_log_in};

    fn assert_endpoint_is_valid_url(path: &str) {
        assert!(Url::parse(&format!("http://localhost{path}")).is_ok());
    }

    #[test]
    fn endpoints_are_valid_urls() {
        assert_endpoint_is_valid_url(endpoints::LOG_IN);
        assert_endpoint_is_valid_url(endpoints::CURRENT_USER);
        assert_endpoint_is_valid_url(endpoints::RECENT_TRANSACTIONS);
        assert_endpoint_is_valid_url(endpoints::CREATE_TRANSACTION);
        assert_endpoint_is_valid_url(&format_endpoint(endpoints::TRANSACTION, 1));
        assert_endpoint_is_valid_url(&format_endpoint(endpoints::USER_CONTRACTORS, 1));
        assert_endpoint_is_valid_url(&format_endpoint(endpoints::CONTRACTOR, 1));
        assert_endpoint_is_valid_url(endpoints::STATUSES);
        assert_endpoint_is_valid_url(endpoints::TRANSACTION_TYPES);
        assert_endpoint_is_valid_url(endpoints::HEALTH);
    }

    #[test]
    fn replaces_parameter() {
        let formatted_path = format_endpoint(endpoints::TRANSACTION, TransactionId::new(12));

        assert_eq!(formatted_path, "/transactions/12");
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", 1);

        assert_eq!(formatted_path, "/hello/1/bye");
    }

    #[test]
    fn detects_log_in_path() {
        assert!(is_log_in("/auth/login"));
        assert!(is_log_in("/api/v1/auth/login"));
        assert!(!is_log_in("/transactions/recent"));
    }
}
