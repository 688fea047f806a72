//! Error types used by the eventry payload accessors.
//!
//! The registry API itself never fails: publishing to an unknown topic,
//! unsubscribing a listener that was never registered, and duplicate
//! registration are all silent no-ops or permitted behavior. The only
//! fallible surface is the explicit typed accessor [`Payload::get`], which
//! returns [`PayloadError`] when the published value is not of the requested
//! type.
//!
//! [`Payload::get`]: crate::Payload::get

use thiserror::Error;

/// # Errors produced by typed payload recovery.
///
/// Returned by [`Payload::get`](crate::Payload::get) when the concrete type
/// of the published value does not match the requested one. The silent
/// alternative, [`Payload::downcast_ref`](crate::Payload::downcast_ref),
/// yields `None` instead.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The published value is not of the requested type.
    #[error("payload is not a `{expected}`")]
    TypeMismatch {
        /// Name of the type the caller asked for.
        expected: &'static str,
    },
}

impl PayloadError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use eventry::{Payload, PayloadError};
    ///
    /// let value = 7u32;
    /// let payload = Payload::new(&value);
    /// let err = payload.get::<String>().unwrap_err();
    /// assert_eq!(err.as_label(), "payload_type_mismatch");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PayloadError::TypeMismatch { .. } => "payload_type_mismatch",
        }
    }
}
