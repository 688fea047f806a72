//! One registration in the subscription table.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::listeners::{DeliveryMode, Listener};

/// Global sequence counter for entry ids.
static ENTRY_SEQ: AtomicU64 = AtomicU64::new(0);

/// One registration: a listener handle plus its delivery mode.
///
/// The id is unique per registration, not per listener: subscribing the same
/// handle twice yields two entries with distinct ids. Dispatch bookkeeping
/// (removal of spent [`DeliveryMode::Once`] entries) goes by id, which keeps
/// it idempotent even when a listener unsubscribed itself mid-pass.
#[derive(Clone)]
pub(crate) struct Entry {
    id: u64,
    mode: DeliveryMode,
    listener: Listener,
}

impl Entry {
    /// Creates an entry with the next global id.
    pub(crate) fn new(listener: Listener, mode: DeliveryMode) -> Self {
        Self {
            id: ENTRY_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            mode,
            listener,
        }
    }

    #[inline]
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub(crate) fn mode(&self) -> DeliveryMode {
        self.mode
    }

    #[inline]
    pub(crate) fn listener(&self) -> &Listener {
        &self.listener
    }
}
