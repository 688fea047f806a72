//! # The subscription table and its dispatcher.
//!
//! [`Registry`] maps each topic to the insertion-ordered list of entries
//! registered for it. All methods take `&self`: the table sits behind a
//! [`parking_lot::Mutex`] that is held for bookkeeping only and released
//! before any callback runs, so listeners are free to re-enter subscribe,
//! unsubscribe, publish, and notify without deadlocking.
//!
//! ## Dispatch
//! ```text
//! publish(topic, &data) / notify(topic)
//!   1. lock     snapshot the entry list for topic (Arc clones)
//!   2. unlock   invoke every snapshot entry in insertion order
//!   3. lock     drop spent Once entries by id; drop the key if empty
//! ```
//!
//! Consequences of the snapshot policy:
//! - entries subscribed during a pass are not invoked until the next pass;
//! - entries unsubscribed during a pass still run in that pass;
//! - a nested publish of the same topic is an independent pass over the
//!   table's state at that moment, and listeners that keep re-triggering it
//!   recurse the call stack unboundedly (caller responsibility).

use std::any::Any;
use std::collections::HashMap;

use parking_lot::Mutex;

use crate::events::{Payload, Topic};
use crate::listeners::{DeliveryMode, Listener};
use crate::registry::Entry;

/// Subscription table plus dispatcher.
///
/// Invariant: a topic key is present exactly while its entry list is
/// non-empty; emptying a list (by unsubscription or spent [`DeliveryMode::Once`]
/// entries) removes the key.
///
/// ## Example
/// ```rust
/// use eventry::{Listener, Registry};
///
/// let registry = Registry::new();
/// let greeter = Listener::new(|name: Option<&String>| {
///     if let Some(name) = name {
///         println!("hello, {name}");
///     }
/// });
///
/// registry.subscribe("user.joined", &greeter);
/// registry.publish("user.joined", &String::from("ada"));
/// registry.unsubscribe("user.joined", &greeter);
/// ```
#[derive(Default)]
pub struct Registry {
    table: Mutex<HashMap<Topic, Vec<Entry>>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `topics` topics.
    #[must_use]
    pub fn with_capacity(topics: usize) -> Self {
        Self {
            table: Mutex::new(HashMap::with_capacity(topics)),
        }
    }

    /// Registers `listener` for `topic`, surviving every invocation until
    /// explicitly unsubscribed.
    ///
    /// Appends to the end of the topic's entry list, creating the list if
    /// the topic is new. Duplicate registrations of the same handle are
    /// permitted and tracked as independent entries. Never fails.
    pub fn subscribe(&self, topic: impl Into<Topic>, listener: &Listener) {
        self.register(topic.into(), listener.clone(), DeliveryMode::Persistent);
    }

    /// Registers `listener` for `topic`, to be removed automatically after
    /// the first dispatch pass that invokes it.
    pub fn subscribe_once(&self, topic: impl Into<Topic>, listener: &Listener) {
        self.register(topic.into(), listener.clone(), DeliveryMode::Once);
    }

    /// Dispatches `topic` to all currently registered listeners, carrying
    /// `data` as the payload.
    ///
    /// Listeners run synchronously, in insertion order, on the calling
    /// thread. An unknown topic is a silent no-op. A panicking listener
    /// propagates to the caller and the remaining listeners of that pass are
    /// not invoked (fail-fast, no isolation).
    pub fn publish<T: Any>(&self, topic: &str, data: &T) {
        self.dispatch(topic, Some(Payload::new(data)));
    }

    /// Dispatches `topic` without a payload.
    ///
    /// Typed listeners observe `None`; otherwise identical to
    /// [`Registry::publish`].
    pub fn notify(&self, topic: &str) {
        self.dispatch(topic, None);
    }

    /// Removes the first entry for `topic` whose listener shares identity
    /// with `listener`, scanning in insertion order.
    ///
    /// At most one entry is removed per call, so duplicate registrations
    /// are peeled off one at a time. Unknown topics and unregistered
    /// listeners are silent no-ops.
    pub fn unsubscribe(&self, topic: &str, listener: &Listener) {
        let mut table = self.table.lock();
        let drained = match table.get_mut(topic) {
            Some(entries) => {
                if let Some(pos) = entries.iter().position(|e| e.listener().ptr_eq(listener)) {
                    entries.remove(pos);
                }
                entries.is_empty()
            }
            None => false,
        };
        if drained {
            table.remove(topic);
        }
    }

    /// Removes every entry for `topic` unconditionally.
    ///
    /// A silent no-op when the topic has no entries.
    pub fn unsubscribe_all(&self, topic: &str) {
        self.table.lock().remove(topic);
    }

    /// Number of entries currently registered for `topic`.
    #[must_use]
    pub fn listener_count(&self, topic: &str) -> usize {
        self.table.lock().get(topic).map_or(0, Vec::len)
    }

    /// Returns the sorted list of topics with at least one entry.
    #[must_use]
    pub fn topics(&self) -> Vec<Topic> {
        let mut names: Vec<Topic> = self.table.lock().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Returns `true` when no topic has any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.lock().is_empty()
    }

    /// Appends one entry to the topic's list, creating the list if absent.
    fn register(&self, topic: Topic, listener: Listener, mode: DeliveryMode) {
        let mut table = self.table.lock();
        table
            .entry(topic)
            .or_default()
            .push(Entry::new(listener, mode));
    }

    /// Runs one dispatch pass over the snapshot of entries for `topic`.
    fn dispatch(&self, topic: &str, payload: Option<Payload<'_>>) {
        let snapshot: Vec<Entry> = match self.table.lock().get(topic) {
            Some(entries) => entries.clone(),
            None => return,
        };

        // Lock released; re-entrant registry calls are fine from here on.
        for entry in &snapshot {
            entry.listener().invoke(payload);
        }

        let spent: Vec<u64> = snapshot
            .iter()
            .filter(|e| e.mode().is_once())
            .map(Entry::id)
            .collect();
        if spent.is_empty() {
            return;
        }

        let mut table = self.table.lock();
        let drained = match table.get_mut(topic) {
            Some(entries) => {
                entries.retain(|e| !spent.contains(&e.id()));
                entries.is_empty()
            }
            None => false,
        };
        if drained {
            table.remove(topic);
        }
    }
}
