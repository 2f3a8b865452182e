use serde::Serialize;

use crate::{ApiClient, Error, endpoints, models::Status};

/// The language status names are requested in when none is given.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Serialize)]
struct StatusQuery<'a> {
    lang: &'a str,
}

/// Fetches the transaction statuses.
#[derive(Clone, Copy)]
pub struct StatusService<'a> {
    client: &'a ApiClient,
}

impl<'a> StatusService<'a> {
    /// Create a service that sends requests with `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get every status, with display names in `lang` (e.g. "en").
    ///
    /// # Errors
    /// Returns the request's error, see `ApiClient::send`.
    pub async fn all(&self, lang: &str) -> Result<Vec<Status>, Error> {
        self.client
            .get_with_query(endpoints::STATUSES, &StatusQuery { lang })
            .await
    }
}

#[cfg(test)]
mod status_service_tests {
    use std::collections::HashMap;

    use axum::{Json, Router, extract::Query, routing::get};
    use serde_json::{Value, json};

    use crate::{
        endpoints,
        services::{DEFAULT_LANGUAGE, StatusService},
        test_utils::{get_client, spawn_backend},
    };

    async fn stub_statuses(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
        let display_name = match query.get("lang").map(String::as_str) {
            Some("pl") => "Zakończona",
            _ => "Completed",
        };

        Json(json!([
            {"status_id": 1, "code": "completed", "display_name": display_name, "color": "green"}
        ]))
    }

    #[tokio::test]
    async fn all_sends_language() {
        let router = Router::new().route(endpoints::STATUSES, get(stub_statuses));
        let base_url = spawn_backend(router).await;
        let (client, _) = get_client(&base_url, None);
        let service = StatusService::new(&client);

        let english = service.all(DEFAULT_LANGUAGE).await.unwrap();
        let polish = service.all("pl").await.unwrap();

        assert_eq!(english[0].display_name, "Completed");
        assert_eq!(polish[0].display_name, "Zakończona");
    }
}
