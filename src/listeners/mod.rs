//! # Listeners: callback handles registered against topics.
//!
//! This module provides the [`Listener`] handle and its delivery mode.
//!
//! ## Listener forms
//! - **Typed** ([`Listener::new`]) - the callback receives `Option<&T>` and
//!   observes foreign-typed or absent payloads as `None`.
//! - **Zero-argument** ([`Listener::unit`]) - the callback ignores any
//!   payload entirely.
//! - **Untyped** ([`Listener::raw`]) - the callback receives
//!   `Option<Payload<'_>>` and performs its own downcasting.
//!
//! ## Identity
//! A listener is identified by the `Arc` pointer behind it: clones of one
//! handle share identity (and can unsubscribe each other), independently
//! constructed listeners never do, even when built from identical code.

mod listener;
mod mode;

#[cfg(feature = "logging")]
mod log;

pub use listener::Listener;
pub use mode::DeliveryMode;

#[cfg(feature = "logging")]
pub use log::LogWriter;
