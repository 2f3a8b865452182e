use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::{
    ApiClient,
    storage::{ACCESS_TOKEN_KEY, MemoryStorage, Storage},
};

/// Serve `router` on a random local port and return its base URL.
///
/// The server runs until the test's runtime shuts down.
pub(crate) async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test backend");
    let address = listener
        .local_addr()
        .expect("Could not get test backend address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test backend stopped unexpectedly");
    });

    format!("http://{address}")
}

/// Create a client for `base_url` backed by in-memory storage, optionally
/// holding `token`.
///
/// The returned storage shares its data with the client's.
#[track_caller]
pub(crate) fn get_client(base_url: &str, token: Option<&str>) -> (ApiClient, MemoryStorage) {
    let storage = MemoryStorage::new();

    if let Some(token) = token {
        storage
            .set(ACCESS_TOKEN_KEY, token)
            .expect("Could not store token");
    }

    let client =
        ApiClient::new(base_url, Arc::new(storage.clone())).expect("Could not create client");

    (client, storage)
}
