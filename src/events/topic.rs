//! Topic identifiers.
//!
//! A topic is a caller-chosen string naming one slot of the subscription
//! table. Topics are not declared in advance: the registry creates storage
//! for a topic on first subscription and reclaims it when the last entry is
//! removed.

use std::sync::Arc;

/// Shared string identifier for one slot of the subscription table.
///
/// Stored as `Arc<str>` so that table keys and [`Registry::topics`] results
/// are cheap to clone. Anything `Into<Arc<str>>` (notably `&str` and
/// `String`) is accepted wherever a topic is expected.
///
/// [`Registry::topics`]: crate::Registry::topics
pub type Topic = Arc<str>;
