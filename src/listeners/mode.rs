//! Delivery mode of one registration.

/// How long a registration survives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryMode {
    /// The entry survives every invocation until explicitly unsubscribed.
    #[default]
    Persistent,
    /// The entry is removed automatically after the first dispatch pass that
    /// invoked it.
    Once,
}

impl DeliveryMode {
    /// Returns `true` for [`DeliveryMode::Once`].
    #[inline]
    #[must_use]
    pub fn is_once(&self) -> bool {
        matches!(self, DeliveryMode::Once)
    }
}
