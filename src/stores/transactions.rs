use tokio::sync::broadcast;

use crate::{
    ApiClient, Error,
    models::{
        TransactionCreateRequest, TransactionDetail, TransactionId, TransactionListItem,
        TransactionUpdateRequest,
    },
    services::TransactionService,
    stores::{StoreEvent, event_channel, notify},
};

/// Holds the recent transactions and the transaction that is being viewed.
pub struct TransactionStore {
    recent: Vec<TransactionListItem>,
    current: Option<TransactionDetail>,
    events: broadcast::Sender<StoreEvent>,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            recent: Vec::new(),
            current: None,
            events: event_channel(),
        }
    }

    /// The recent transactions, newest first.
    pub fn recent(&self) -> &[TransactionListItem] {
        &self.recent
    }

    /// The transaction that is being viewed.
    pub fn current(&self) -> Option<&TransactionDetail> {
        self.current.as_ref()
    }

    /// Get notified whenever the store's state changes.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Replace the recent transactions with the latest from the backend.
    ///
    /// # Errors
    /// Returns the request's error and leaves the list unchanged.
    pub async fn fetch_recent(
        &mut self,
        client: &ApiClient,
        limit: Option<u32>,
    ) -> Result<(), Error> {
        let response = TransactionService::new(client).recent(limit).await?;

        tracing::debug!("Fetched {} recent transactions", response.items.len());
        self.recent = response.items;
        notify(&self.events, StoreEvent::RecentTransactions);

        Ok(())
    }

    /// Fetch the transaction `id` and make it the current transaction.
    ///
    /// # Errors
    /// Returns the request's error and leaves the current transaction
    /// unchanged.
    pub async fn fetch_transaction(
        &mut self,
        client: &ApiClient,
        id: TransactionId,
    ) -> Result<(), Error> {
        let transaction = TransactionService::new(client).get(id).await?;

        self.current = Some(transaction);
        notify(&self.events, StoreEvent::CurrentTransaction);

        Ok(())
    }

    /// Create a transaction and put it at the top of the recent transactions.
    ///
    /// # Errors
    /// Returns the request's error and leaves the list unchanged.
    pub async fn create_transaction(
        &mut self,
        client: &ApiClient,
        request: &TransactionCreateRequest,
    ) -> Result<TransactionDetail, Error> {
        let transaction = TransactionService::new(client).create(request).await?;

        tracing::info!("Created transaction {}", transaction.transaction_id);
        self.apply_created(&transaction);

        Ok(transaction)
    }

    /// Update a transaction and refresh any copies of it held by the store.
    ///
    /// # Errors
    /// Returns the request's error and leaves the store unchanged.
    pub async fn update_transaction(
        &mut self,
        client: &ApiClient,
        id: TransactionId,
        request: &TransactionUpdateRequest,
    ) -> Result<TransactionDetail, Error> {
        let transaction = TransactionService::new(client).update(id, request).await?;

        tracing::info!("Updated transaction {id}");
        self.apply_updated(id, &transaction);

        Ok(transaction)
    }

    /// Prepend the list item for a newly created transaction.
    pub fn apply_created(&mut self, transaction: &TransactionDetail) {
        self.recent.insert(0, TransactionListItem::from(transaction));
        notify(&self.events, StoreEvent::RecentTransactions);
    }

    /// Replace the stored copies of transaction `id` with `transaction`.
    ///
    /// The current transaction is only replaced if it is transaction `id`.
    /// The list item is replaced in place. If `id` is not in the list, the
    /// list is left as is.
    pub fn apply_updated(&mut self, id: TransactionId, transaction: &TransactionDetail) {
        if self
            .current
            .as_ref()
            .is_some_and(|current| current.transaction_id == id)
        {
            self.current = Some(transaction.clone());
            notify(&self.events, StoreEvent::CurrentTransaction);
        }

        if let Some(item) = self
            .recent
            .iter_mut()
            .find(|item| item.transaction_id == id)
        {
            *item = TransactionListItem::from(transaction);
            notify(&self.events, StoreEvent::RecentTransactions);
        }
    }
}
