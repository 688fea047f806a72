//! # Registry: the subscription table and its operations.
//!
//! The [`Registry`] owns a mapping from topic to an insertion-ordered list
//! of entries and provides the whole operation surface of the crate:
//! subscribe, unsubscribe, publish, notify, plus introspection helpers.
//!
//! ## Rules
//! - A topic key is present only while its entry list is non-empty.
//! - The table lock is held for bookkeeping only, never across a listener
//!   invocation, so listeners may re-enter any registry operation.
//! - Each publish pass operates on the snapshot of entries taken when it
//!   begins.

mod core;
mod entry;

pub use core::Registry;

pub(crate) use entry::Entry;
