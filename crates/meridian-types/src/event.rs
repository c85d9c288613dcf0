//! Transaction execution events.

use crate::hash::Hash;

/// An event emitted while executing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    /// Fully qualified type identifier, e.g. `A.0000000000000001.Market.Sale`.
    pub event_type: String,
    /// Transaction that emitted the event.
    pub transaction_id: Hash,
    /// Zero-based position among the events of that transaction.
    pub event_index: u32,
    /// Encoded event payload; opaque to the SDK.
    pub payload: Vec<u8>,
}
