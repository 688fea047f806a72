//! Event identifiers and payloads.
//!
//! This module groups the event **data model** of the crate:
//! - [`Topic`] the caller-chosen string identifier partitioning the
//!   subscription table
//! - [`Payload`] the type-erased view of a published value, with typed
//!   recovery helpers
//!
//! ## Quick reference
//! - **Producers**: [`Registry::publish`](crate::Registry::publish) wraps the
//!   published value into a [`Payload`].
//! - **Consumers**: [`Listener`](crate::Listener) callbacks receive
//!   `Option<Payload<'_>>` (the untyped form) or `Option<&T>` (the typed
//!   facade).

mod payload;
mod topic;

pub use payload::Payload;
pub use topic::Topic;
