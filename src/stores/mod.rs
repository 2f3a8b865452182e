//! The client-side state for each resource.
//!
//! Stores own their collections exclusively. State only changes after a
//! successful response, and every change is announced to subscribers with a
//! [StoreEvent].

mod contractors;
mod transactions;

use tokio::sync::broadcast;

pub use contractors::ContractorStore;
pub use transactions::TransactionStore;

/// How many unread events a subscriber can fall behind by before it starts
/// missing events.
const EVENT_CAPACITY: usize = 16;

/// Describes which part of a store's state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The list of recent transactions changed.
    RecentTransactions,
    /// The focused transaction changed.
    CurrentTransaction,
    /// The list of contractors changed.
    Contractors,
    /// The focused contractor changed.
    CurrentContractor,
}

fn event_channel() -> broadcast::Sender<StoreEvent> {
    let (sender, _) = broadcast::channel(EVENT_CAPACITY);
    sender
}

/// Notify subscribers, if there are any.
fn notify(events: &broadcast::Sender<StoreEvent>, event: StoreEvent) {
    // Sending only fails when nobody is subscribed.
    let _ = events.send(event);
}
