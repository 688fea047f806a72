//! # Type-erased payload view.
//!
//! A publish call carries at most one value, and different call sites flow
//! different concrete types through the same registry. [`Payload`] is the
//! erased borrow handed to untyped listeners; typed listeners never see it
//! because the [`Listener::new`](crate::Listener::new) facade recovers the
//! concrete type before invoking the callback.
//!
//! Two recovery paths exist:
//! - [`Payload::downcast_ref`] — silent, yields `None` on mismatch;
//! - [`Payload::get`] — explicit, yields [`PayloadError`] on mismatch.
//!
//! ## Example
//! ```rust
//! use eventry::Payload;
//!
//! let value = String::from("hello");
//! let payload = Payload::new(&value);
//!
//! assert!(payload.is::<String>());
//! assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("hello"));
//! assert!(payload.downcast_ref::<u32>().is_none());
//! ```

use std::any::{self, Any};
use std::fmt;

use crate::error::PayloadError;

/// Borrowed, type-erased view of a published value.
///
/// `Copy` by design: a payload is only ever a reference valid for the
/// duration of one dispatch pass, so handing it to every listener in the
/// snapshot costs nothing.
#[derive(Clone, Copy)]
pub struct Payload<'a> {
    value: &'a dyn Any,
}

impl<'a> Payload<'a> {
    /// Wraps a reference to a concrete value.
    #[inline]
    pub fn new<T: Any>(value: &'a T) -> Self {
        Self { value }
    }

    /// Returns `true` if the published value is a `T`.
    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Recovers the concrete value, or `None` if it is not a `T`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.value.downcast_ref::<T>()
    }

    /// Recovers the concrete value, or a [`PayloadError`] naming the
    /// requested type if it is not a `T`.
    pub fn get<T: Any>(&self) -> Result<&'a T, PayloadError> {
        self.downcast_ref::<T>().ok_or(PayloadError::TypeMismatch {
            expected: any::type_name::<T>(),
        })
    }
}

impl fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downcast_ref_matching_type() {
        let value = 42u32;
        let payload = Payload::new(&value);
        assert_eq!(payload.downcast_ref::<u32>(), Some(&42));
    }

    #[test]
    fn test_downcast_ref_mismatched_type() {
        let value = 42u32;
        let payload = Payload::new(&value);
        assert_eq!(payload.downcast_ref::<String>(), None);
    }

    #[test]
    fn test_get_reports_expected_type() {
        let value = String::from("x");
        let payload = Payload::new(&value);
        let err = payload.get::<u32>().unwrap_err();
        assert_eq!(err.as_label(), "payload_type_mismatch");
        assert!(err.to_string().contains("u32"), "message was: {err}");
    }

    #[test]
    fn test_is_checks_concrete_type() {
        let value = vec![1u8, 2, 3];
        let payload = Payload::new(&value);
        assert!(payload.is::<Vec<u8>>());
        assert!(!payload.is::<Vec<u16>>());
    }
}
