//! # Cloneable callback handle (`Listener`)
//!
//! [`Listener`] wraps a callback behind an `Arc`, so handles are cheap to
//! clone and snapshots of the subscription table only bump reference counts.
//!
//! ## Identity semantics
//! - Clones of one handle compare equal under [`Listener::ptr_eq`] and can
//!   be used interchangeably for unsubscription.
//! - Two handles built by separate constructor calls are always distinct,
//!   even when the closures are textually identical.
//! - The same handle may be subscribed several times; each subscription is
//!   an independent entry.
//!
//! ## Example
//! ```rust
//! use eventry::Listener;
//!
//! let original = Listener::unit(|| {});
//! let clone = original.clone();
//! let unrelated = Listener::unit(|| {});
//!
//! assert!(original.ptr_eq(&clone));
//! assert!(!original.ptr_eq(&unrelated));
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::events::Payload;

/// The erased callback form every listener is stored as.
type RawCallback = dyn for<'a> Fn(Option<Payload<'a>>) + Send + Sync;

/// Handle to one callback, registrable against any number of topics.
///
/// The callback receives `Some` payload when the publisher supplied one and
/// `None` otherwise; which of the two happens is decided solely by the
/// publish call, never by inspecting the callback.
#[derive(Clone)]
pub struct Listener {
    callback: Arc<RawCallback>,
}

impl Listener {
    /// Creates a typed listener.
    ///
    /// The callback observes the payload as `Some(&T)` when the publisher
    /// supplied a value of type `T`, and as `None` when the payload is
    /// absent **or** of a different concrete type.
    ///
    /// ## Example
    /// ```rust
    /// use eventry::Listener;
    ///
    /// let l = Listener::new(|msg: Option<&String>| {
    ///     if let Some(msg) = msg {
    ///         println!("got: {msg}");
    ///     }
    /// });
    /// # let _ = l;
    /// ```
    pub fn new<T, F>(f: F) -> Self
    where
        T: Any,
        F: Fn(Option<&T>) + Send + Sync + 'static,
    {
        Self::raw(move |payload| f(payload.and_then(|p| p.downcast_ref::<T>())))
    }

    /// Creates a zero-argument listener that ignores any payload.
    pub fn unit<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::raw(move |_payload| f())
    }

    /// Creates an untyped listener working directly on [`Payload`].
    ///
    /// This is the lowest-level form; prefer [`Listener::new`] unless the
    /// callback has to accept payloads of several concrete types.
    pub fn raw<F>(f: F) -> Self
    where
        F: for<'a> Fn(Option<Payload<'a>>) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(f),
        }
    }

    /// Returns `true` when both handles wrap the same callback allocation.
    ///
    /// This is the identity used by
    /// [`Registry::unsubscribe`](crate::Registry::unsubscribe).
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Listener) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }

    /// Invokes the callback with the given payload view.
    #[inline]
    pub(crate) fn invoke(&self, payload: Option<Payload<'_>>) {
        (self.callback)(payload);
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Arc::as_ptr(&self.callback))
            .finish()
    }
}
