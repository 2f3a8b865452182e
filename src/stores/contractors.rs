use tokio::sync::broadcast;

use crate::{
    ApiClient, Error,
    models::{Contractor, ContractorCreate, ContractorId, UserId},
    services::ContractorService,
    stores::{StoreEvent, event_channel, notify},
};

/// Holds the user's contractors and the contractor that is being viewed.
pub struct ContractorStore {
    contractors: Vec<Contractor>,
    current: Option<Contractor>,
    events: broadcast::Sender<StoreEvent>,
}

impl Default for ContractorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            contractors: Vec::new(),
            current: None,
            events: event_channel(),
        }
    }

    /// The user's contractors in the order the backend listed them.
    pub fn contractors(&self) -> &[Contractor] {
        &self.contractors
    }

    /// The contractor that is being viewed.
    pub fn current(&self) -> Option<&Contractor> {
        self.current.as_ref()
    }

    /// Get notified whenever the store's state changes.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Replace the contractors with those that belong to `user_id`.
    ///
    /// # Errors
    /// Returns the request's error and leaves the list unchanged.
    pub async fn fetch_contractors(
        &mut self,
        client: &ApiClient,
        user_id: UserId,
    ) -> Result<(), Error> {
        let contractors = ContractorService::new(client)
            .list_for_user(user_id)
            .await?;

        tracing::debug!("Fetched {} contractors", contractors.len());
        self.contractors = contractors;
        notify(&self.events, StoreEvent::Contractors);

        Ok(())
    }

    /// Fetch the contractor `id` and make it the current contractor.
    ///
    /// # Errors
    /// Returns the request's error and leaves the current contractor unchanged.
    pub async fn fetch_contractor(
        &mut self,
        client: &ApiClient,
        id: ContractorId,
    ) -> Result<(), Error> {
        let contractor = ContractorService::new(client).get(id).await?;

        self.current = Some(contractor);
        notify(&self.events, StoreEvent::CurrentContractor);

        Ok(())
    }

    /// Create a contractor for `user_id` and add it to the end of the list.
    ///
    /// # Errors
    /// Returns the request's error and leaves the list unchanged.
    pub async fn create_contractor(
        &mut self,
        client: &ApiClient,
        user_id: UserId,
        request: &ContractorCreate,
    ) -> Result<Contractor, Error> {
        let contractor = ContractorService::new(client)
            .create_for_user(user_id, request)
            .await?;

        tracing::info!("Created contractor {}", contractor.contractor_id);
        self.contractors.push(contractor.clone());
        notify(&self.events, StoreEvent::Contractors);

        Ok(contractor)
    }
}

#[cfg(test)]
mod contractor_store_tests {
    use axum::{
        Json, Router,
        extract::Path,
        http::StatusCode,
        routing::get,
    };
    use serde_json::{Value, json};

    use crate::{
        endpoints,
        models::{ContractorCreate, ContractorId, UserId},
        stores::{ContractorStore, StoreEvent},
        test_utils::{contractor, contractor_json, get_client, spawn_backend},
    };

    async fn stub_list(Path(user_id): Path<i64>) -> Json<Value> {
        Json(json!([
            contractor_json(1, user_id, "Alice"),
            contractor_json(2, user_id, "Bob")
        ]))
    }

    async fn stub_create(
        Path(user_id): Path<i64>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        match body["name"].as_str() {
            Some(name) if !name.is_empty() => (
                StatusCode::CREATED,
                Json(contractor_json(3, user_id, name)),
            ),
            _ => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": [{"msg": "name must not be empty"}]})),
            ),
        }
    }

    async fn stub_get(Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
        if id == 1 {
            (StatusCode::OK, Json(contractor_json(1, 4, "Alice")))
        } else {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"detail": "Contractor not found"})),
            )
        }
    }

    fn get_router() -> Router {
        Router::new()
            .route(endpoints::USER_CONTRACTORS, get(stub_list).post(stub_create))
            .route(endpoints::CONTRACTOR, get(stub_get))
    }

    #[tokio::test]
    async fn fetch_contractors_replaces_list() {
        let base_url = spawn_backend(get_router()).await;
        let (client, _) = get_client(&base_url, Some("token"));
        let mut store = ContractorStore::new();
        let mut events = store.subscribe();

        store.fetch_contractors(&client, UserId::new(4)).await.unwrap();

        assert_eq!(
            store.contractors(),
            &[contractor(1, 4, "Alice"), contractor(2, 4, "Bob")]
        );
        assert_eq!(events.try_recv().unwrap(), StoreEvent::Contractors);
    }

    #[tokio::test]
    async fn create_appends_to_list() {
        let base_url = spawn_backend(get_router()).await;
        let (client, _) = get_client(&base_url, Some("token"));
        let mut store = ContractorStore::new();
        store.fetch_contractors(&client, UserId::new(4)).await.unwrap();

        let created = store
            .create_contractor(
                &client,
                UserId::new(4),
                &ContractorCreate {
                    name: "Carol".to_owned(),
                },
            )
            .await
            .unwrap();

        assert_eq!(created, contractor(3, 4, "Carol"));
        assert_eq!(store.contractors().len(), 3);
        assert_eq!(store.contractors().last(), Some(&created));
    }

    #[tokio::test]
    async fn failed_create_leaves_list_unchanged() {
        let base_url = spawn_backend(get_router()).await;
        let (client, _) = get_client(&base_url, Some("token"));
        let mut store = ContractorStore::new();
        store.fetch_contractors(&client, UserId::new(4)).await.unwrap();

        let error = store
            .create_contractor(
                &client,
                UserId::new(4),
                &ContractorCreate {
                    name: String::new(),
                },
            )
            .await
            .unwrap_err();

        assert!(error.to_string().contains("name must not be empty"), "got {error}");
        assert_eq!(store.contractors().len(), 2);
    }

    #[tokio::test]
    async fn fetch_contractor_sets_current() {
        let base_url = spawn_backend(get_router()).await;
        let (client, _) = get_client(&base_url, Some("token"));
        let mut store = ContractorStore::new();

        store
            .fetch_contractor(&client, ContractorId::new(1))
            .await
            .unwrap();
        let result = store.fetch_contractor(&client, ContractorId::new(2)).await;

        assert!(result.is_err());
        assert_eq!(store.current(), Some(&contractor(1, 4, "Alice")));
    }
}
