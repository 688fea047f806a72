//! # eventry
//!
//! **Eventry** is a synchronous, in-process event registry for Rust.
//!
//! Callers register named [`Listener`]s against string-keyed topics and later
//! trigger immediate, in-order dispatch of those listeners, optionally
//! carrying a single payload. Everything happens in the calling context:
//! there is no queue, no background worker, and no suspension point anywhere
//! in the API. The crate is designed as a small building block for in-memory
//! decoupling inside a larger application.
//!
//! ## Architecture
//! ```text
//!   subscribe(topic, &listener) ─┐
//!   subscribe_once(topic, &l)  ──┤
//!                                ▼
//! ┌───────────────────────────────────────────────────────┐
//! │  Registry (subscription table)                        │
//! │  topic ──► [ Entry, Entry, ... ]  (insertion order)   │
//! │  - Entry: unique id + DeliveryMode + Listener handle  │
//! │  - lock held for bookkeeping only, never across a     │
//! │    listener invocation                                │
//! └──────────────────────────┬────────────────────────────┘
//!                            │ publish(topic, &data) / notify(topic)
//!                            ▼
//!              snapshot of current entries
//!                            │
//!              ┌─────────────┼─────────────┐
//!              ▼             ▼             ▼
//!         listener 1    listener 2    listener N   (synchronous, in order)
//!                            │
//!              Once entries removed after the pass
//! ```
//!
//! ## Dispatch semantics
//! - The set of listeners a publish invokes is the snapshot taken when the
//!   pass begins: listeners subscribed *during* the pass wait for the next
//!   one, listeners unsubscribed during the pass still run in this one.
//! - Single-shot ([`DeliveryMode::Once`]) entries are removed once the pass
//!   completes; a topic whose entry list empties disappears entirely.
//! - A panicking listener propagates to the publisher and aborts the rest of
//!   that pass. There is no per-listener isolation.
//!
//! ## Features
//! | Area           | Description                                            | Key types                      |
//! |----------------|--------------------------------------------------------|--------------------------------|
//! | **Registry**   | Topic table with subscribe/unsubscribe/publish/notify. | [`Registry`]                   |
//! | **Listeners**  | Cloneable callback handles, typed or untyped.          | [`Listener`], [`DeliveryMode`] |
//! | **Payloads**   | Type-erased payload view with typed recovery.          | [`Payload`], [`PayloadError`]  |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] listener _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use eventry::{Listener, Registry};
//!
//! let registry = Registry::new();
//!
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = {
//!     let seen = Arc::clone(&seen);
//!     Listener::new(move |delta: Option<&usize>| {
//!         seen.fetch_add(delta.copied().unwrap_or(1), Ordering::Relaxed);
//!     })
//! };
//!
//! registry.subscribe("tick", &counter);
//! registry.publish("tick", &3usize); // typed payload
//! registry.notify("tick");           // no payload
//! assert_eq!(seen.load(Ordering::Relaxed), 4);
//!
//! registry.unsubscribe("tick", &counter);
//! assert!(registry.is_empty());
//! ```
mod error;
mod events;
mod listeners;
mod registry;

// ---- Public re-exports ----

pub use error::PayloadError;
pub use events::{Payload, Topic};
pub use listeners::{DeliveryMode, Listener};
pub use registry::Registry;

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogWriter;
