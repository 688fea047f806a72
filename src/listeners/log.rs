//! # Simple logging listener for debugging and demos.
//!
//! [`LogWriter`] builds listeners that print each dispatch to stdout in a
//! human-readable format. This is primarily useful for development,
//! debugging, and examples.
//!
//! ## Output format
//! ```text
//! [dispatch] topic=user.joined payload=yes
//! [dispatch] topic=user.joined payload=no
//! ```
//!
//! ## Example
//! ```no_run
//! # use eventry::{LogWriter, Registry};
//! let registry = Registry::new();
//! registry.subscribe("user.joined", &LogWriter::for_topic("user.joined"));
//! registry.notify("user.joined");
//! ```

use crate::listeners::Listener;

/// Factory for stdout logging listeners.
///
/// Enabled via the `logging` feature. Because a callback only receives the
/// payload, the topic name is baked into each listener at construction time.
///
/// Not intended for production use - register a custom [`Listener`] for
/// structured logging.
pub struct LogWriter;

impl LogWriter {
    /// Builds a listener that logs every dispatch of `topic`.
    #[must_use]
    pub fn for_topic(topic: impl Into<String>) -> Listener {
        let topic = topic.into();
        Listener::raw(move |payload| {
            let present = if payload.is_some() { "yes" } else { "no" };
            println!("[dispatch] topic={topic} payload={present}");
        })
    }
}
