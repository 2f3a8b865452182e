//! Wires the storage, HTTP client, session, stores and navigator together.

use std::sync::Arc;

use crate::{
    ApiClient, Config, Error,
    models::{
        Contractor, ContractorCreate, ContractorId, Credentials, CurrentUser, Health, Status,
        TransactionCreateRequest, TransactionDetail, TransactionId, TransactionType,
        TransactionUpdateRequest, UserId,
    },
    router::{Navigator, Route},
    services::{HealthService, StatusService, TransactionTypeService, UserService},
    session::SessionStore,
    storage::{SharedStorage, SqliteStorage},
    stores::{ContractorStore, TransactionStore},
};

/// The client application.
///
/// Created once at start up, it owns every component and hands them out by
/// reference. When the backend rejects the session during any operation the
/// session is ended and the navigator is sent to the log-in view before the
/// error is returned.
pub struct App {
    client: ApiClient,
    session: SessionStore,
    transactions: TransactionStore,
    contractors: ContractorStore,
    navigator: Navigator,
}

impl App {
    /// Create the application described by `config`, persisting the session
    /// in the SQLite database at `config.storage_path`.
    ///
    /// # Errors
    /// Returns an error if the storage database cannot be opened.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let storage = SqliteStorage::open(&config.storage_path)?;
        tracing::debug!("Opened client storage at {}", config.storage_path.display());

        Self::with_storage(&config.api_base_url, Arc::new(storage))
    }

    /// Create the application with an already opened storage.
    ///
    /// The navigator starts wherever a navigation to `/` would end up.
    ///
    /// # Errors
    /// Returns an error if the storage cannot be read or the HTTP client
    /// cannot be built.
    pub fn with_storage(api_base_url: &str, storage: SharedStorage) -> Result<Self, Error> {
        let client = ApiClient::new(api_base_url, storage.clone())?;
        let navigator = Navigator::new(Route::Login);
        let session = SessionStore::load(storage, navigator.clone())?;
        navigator.push(Route::Root, session.is_authenticated());

        Ok(Self {
            client,
            session,
            transactions: TransactionStore::new(),
            contractors: ContractorStore::new(),
            navigator,
        })
    }

    /// The HTTP client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The authentication session.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The transaction state.
    pub fn transactions(&self) -> &TransactionStore {
        &self.transactions
    }

    /// The contractor state.
    pub fn contractors(&self) -> &ContractorStore {
        &self.contractors
    }

    /// The navigator.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The current view.
    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    /// Navigate to `path` and return the view the navigation ended up on.
    ///
    /// # Errors
    /// Returns [Error::InvalidRoute] if `path` is not an absolute path.
    pub fn navigate(&self, path: &str) -> Result<Route, Error> {
        let target: Route = path.parse()?;

        Ok(self.navigator.push(target, self.session.is_authenticated()))
    }

    /// Navigate to `path` and load the data its view shows.
    ///
    /// Returns the view the navigation ended up on, which is the log-in view
    /// if there is no session.
    ///
    /// # Errors
    /// Returns [Error::InvalidRoute] for a relative path, or the error from
    /// loading the view's data. If the backend rejects the session while
    /// loading, [Error::SessionExpired] is returned and the navigator is
    /// already on the log-in view.
    pub async fn open(&mut self, path: &str) -> Result<Route, Error> {
        let route = self.navigate(path)?;

        match &route {
            Route::Transactions => self.fetch_recent_transactions(None).await?,
            Route::TransactionDetail(id) => self.fetch_transaction(*id).await?,
            Route::Contractors => self.fetch_contractors().await?,
            Route::ContractorDetail(id) => self.fetch_contractor(*id).await?,
            Route::Root | Route::Login | Route::NotFound(_) => {}
        }

        Ok(route)
    }

    /// Log in and go to the transactions view.
    ///
    /// # Errors
    /// Returns the error from the backend, see [SessionStore::login].
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), Error> {
        if let Some(hint) = credentials.length_hint() {
            tracing::warn!("The backend will probably reject these credentials: {hint}");
        }

        self.session.login(&self.client, credentials).await
    }

    /// Log out and go to the log-in view.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// The ID of the logged in user.
    ///
    /// # Errors
    /// Returns [Error::NotLoggedIn] if there is no session or the token does
    /// not name a user.
    pub fn user_id(&self) -> Result<UserId, Error> {
        self.session
            .user()
            .map(|user| user.user_id)
            .ok_or(Error::NotLoggedIn)
    }

    /// Ask the backend who the logged in user is.
    ///
    /// # Errors
    /// Returns the request's error.
    pub async fn me(&mut self) -> Result<CurrentUser, Error> {
        let result = UserService::new(&self.client).me().await;
        self.check_session(result)
    }

    /// Refresh the recent transactions.
    ///
    /// # Errors
    /// Returns the request's error.
    pub async fn fetch_recent_transactions(&mut self, limit: Option<u32>) -> Result<(), Error> {
        let result = self.transactions.fetch_recent(&self.client, limit).await;
        self.check_session(result)
    }

    /// Load a single transaction.
    ///
    /// # Errors
    /// Returns the request's error.
    pub async fn fetch_transaction(&mut self, id: TransactionId) -> Result<(), Error> {
        let result = self.transactions.fetch_transaction(&self.client, id).await;
        self.check_session(result)
    }

    /// Create a transaction.
    ///
    /// # Errors
    /// Returns the request's error.
    pub async fn create_transaction(
        &mut self,
        request: &TransactionCreateRequest,
    ) -> Result<TransactionDetail, Error> {
        let result = self
            .transactions
            .create_transaction(&self.client, request)
            .await;
        self.check_session(result)
    }

    /// Update a transaction.
    ///
    /// # Errors
    /// Returns the request's error.
    pub async fn update_transaction(
        &mut self,
        id: TransactionId,
        request: &TransactionUpdateRequest,
    ) -> Result<TransactionDetail, Error> {
        let result = self
            .transactions
            .update_transaction(&self.client, id, request)
            .await;
        self.check_session(result)
    }

    /// Refresh the logged in user's contractors.
    ///
    /// # Errors
    /// Returns [Error::NotLoggedIn] without a user, or the request's error.
    pub async fn fetch_contractors(&mut self) -> Result<(), Error> {
        let user_id = self.user_id()?;
        let result = self
            .contractors
            .fetch_contractors(&self.client, user_id)
            .await;
        self.check_session(result)
    }

    /// Load a single contractor.
    ///
    /// # Errors
    /// Returns the request's error.
    pub async fn fetch_contractor(&mut self, id: ContractorId) -> Result<(), Error> {
        let result = self.contractors.fetch_contractor(&self.client, id).await;
        self.check_session(result)
    }

    /// Create a contractor for the logged in user.
    ///
    /// # Errors
    /// Returns [Error::NotLoggedIn] without a user, or the request's error.
    pub async fn create_contractor(
        &mut self,
        request: &ContractorCreate,
    ) -> Result<Contractor, Error> {
        let user_id = self.user_id()?;
        let result = self
            .contractors
            .create_contractor(&self.client, user_id, request)
            .await;
        self.check_session(result)
    }

    /// Get the transaction statuses with names in `lang`.
    ///
    /// # Errors
    /// Returns the request's error.
    pub async fn statuses(&mut self, lang: &str) -> Result<Vec<Status>, Error> {
        let result = StatusService::new(&self.client).all(lang).await;
        self.check_session(result)
    }

    /// Get the transaction types.
    ///
    /// # Errors
    /// Returns the request's error.
    pub async fn transaction_types(&mut self) -> Result<Vec<TransactionType>, Error> {
        let result = TransactionTypeService::new(&self.client).all().await;
        self.check_session(result)
    }

    /// Check whether the backend is up.
    ///
    /// # Errors
    /// Returns the request's error.
    pub async fn health(&mut self) -> Result<Health, Error> {
        let result = HealthService::new(&self.client).check().await;
        self.check_session(result)
    }

    fn check_session<T>(&mut self, result: Result<T, Error>) -> Result<T, Error> {
        if let Err(Error::SessionExpired) = result {
            self.session.expire();
        }

        result
    }
}
