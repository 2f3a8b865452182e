//! The application's views, the navigation guard that protects them, and the
//! navigator that tracks which view is current.

use std::{str::FromStr, sync::Arc};

use tokio::sync::watch;

use crate::{
    Error,
    models::{ContractorId, TransactionId},
};

/// The root route which redirects to the transactions view.
pub const ROOT: &str = "/";
/// The route for the log-in view.
pub const LOG_IN_VIEW: &str = "/login";
/// The route for the recent transactions view.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The route for a single transaction.
pub const TRANSACTION_VIEW: &str = "/transactions/{transaction_id}";
/// The route for the contractors view.
pub const CONTRACTORS_VIEW: &str = "/contractors";
/// The route for a single contractor.
pub const CONTRACTOR_VIEW: &str = "/contractors/{contractor_id}";

/// A view of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, always redirected to [Route::Transactions].
    Root,
    /// `/login`
    Login,
    /// `/transactions`
    Transactions,
    /// `/transactions/{transaction_id}`
    TransactionDetail(TransactionId),
    /// `/contractors`
    Contractors,
    /// `/contractors/{contractor_id}`
    ContractorDetail(ContractorId),
    /// Any path that does not match a view.
    NotFound(String),
}

impl Route {
    /// Whether the view may only be shown to a logged in user.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Root
                | Route::Transactions
                | Route::TransactionDetail(_)
                | Route::Contractors
                | Route::ContractorDetail(_)
        )
    }

    /// The path of the view.
    pub fn path(&self) -> String {
        match self {
            Route::Root => ROOT.to_owned(),
            Route::Login => LOG_IN_VIEW.to_owned(),
            Route::Transactions => TRANSACTIONS_VIEW.to_owned(),
            Route::TransactionDetail(id) => format!("{TRANSACTIONS_VIEW}/{id}"),
            Route::Contractors => CONTRACTORS_VIEW.to_owned(),
            Route::ContractorDetail(id) => format!("{CONTRACTORS_VIEW}/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl FromStr for Route {
    type Err = Error;

    /// Match a path, ignoring any query string, fragment and trailing slash.
    ///
    /// Paths that do not start with a slash are rejected with
    /// [Error::InvalidRoute]. Paths that do not match a view, including views
    /// with a non-numeric ID, become [Route::NotFound].
    fn from_str(raw_path: &str) -> Result<Self, Self::Err> {
        if !raw_path.starts_with('/') {
            return Err(Error::InvalidRoute(raw_path.to_owned()));
        }

        let path = raw_path
            .split(['?', '#'])
            .next()
            .unwrap_or(raw_path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Root,
            ["login"] => Route::Login,
            ["transactions"] => Route::Transactions,
            ["transactions", id] => id
                .parse()
                .map(Route::TransactionDetail)
                .unwrap_or_else(|_| Route::NotFound(path.to_owned())),
            ["contractors"] => Route::Contractors,
            ["contractors", id] => id
                .parse()
                .map(Route::ContractorDetail)
                .unwrap_or_else(|_| Route::NotFound(path.to_owned())),
            _ => Route::NotFound(path.to_owned()),
        };

        Ok(route)
    }
}

/// Decide where a navigation to `target` ends up.
///
/// [Route::Root] is redirected to [Route::Transactions]. A route that requires
/// auth is redirected to [Route::Login] if the user is not logged in. Every
/// other navigation proceeds to `target`.
pub fn guard(target: Route, is_authenticated: bool) -> Route {
    let target = match target {
        Route::Root => Route::Transactions,
        target => target,
    };

    if target.requires_auth() && !is_authenticated {
        Route::Login
    } else {
        target
    }
}

/// Tracks the current view.
///
/// Clones share the same location, so the session and the views all see the
/// same navigation.
#[derive(Debug, Clone)]
pub struct Navigator {
    location: Arc<watch::Sender<Route>>,
}

impl Navigator {
    /// Create a navigator that starts at `initial` without running the guard.
    pub fn new(initial: Route) -> Self {
        let (sender, _) = watch::channel(initial);

        Self {
            location: Arc::new(sender),
        }
    }

    /// Navigate to `target`, running the guard once, and return where the
    /// navigation ended up.
    pub fn push(&self, target: Route, is_authenticated: bool) -> Route {
        let resolved = guard(target.clone(), is_authenticated);

        if resolved != target {
            tracing::debug!(
                "Redirecting navigation to {} to {}",
                target.path(),
                resolved.path()
            );
        }

        self.location.send_replace(resolved.clone());

        resolved
    }

    /// The current view.
    pub fn current(&self) -> Route {
        self.location.borrow().clone()
    }

    /// Get notified whenever the current view changes.
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.location.subscribe()
    }
}


#[cfg(test)]
mod guard_tests {
    use crate::{
        models::{ContractorId, TransactionId},
        router::{Route, guard},
    };

    fn protected_routes() -> Vec<Route> {
        vec![
            Route::Transactions,
            Route::TransactionDetail(TransactionId::new(1)),
            Route::Contractors,
            Route::ContractorDetail(ContractorId::new(1)),
        ]
    }

    #[test]
    fn unauthenticated_navigation_to_protected_route_redirects_to_log_in() {
        for route in protected_routes() {
            assert_eq!(guard(route.clone(), false), Route::Login, "route {route:?}");
        }
    }

    #[test]
    fn authenticated_navigation_proceeds() {
        for route in protected_routes() {
            assert_eq!(guard(route.clone(), true), route);
        }
    }

    #[test]
    fn root_redirects_to_transactions() {
        assert_eq!(guard(Route::Root, true), Route::Transactions);
        assert_eq!(guard(Route::Root, false), Route::Login);
    }

    #[test]
    fn log_in_is_always_reachable() {
        assert_eq!(guard(Route::Login, false), Route::Login);
        assert_eq!(guard(Route::Login, true), Route::Login);
    }
}
