//! The dial service capability.

use async_trait::async_trait;

use crate::{Dial, DialError, DialId};

/// A service for managing dials.
///
/// Implemented by the embedded store (`dials-store`) and the remote HTTP
/// client (`dials-client`); callers hold an `Arc<dyn DialService>` and are
/// agnostic to which backend is behind it.
#[async_trait]
pub trait DialService: Send + Sync {
    /// Return a dial by identifier.
    ///
    /// An absent dial is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::CorruptRecord`] if the stored record cannot be
    /// decoded, or [`DialError::Internal`] on storage/transport failure.
    async fn dial(&self, id: &DialId) -> Result<Option<Dial>, DialError>;

    /// Create a new dial and return it with the store-assigned
    /// modification time. The caller's token is preserved in the returned
    /// value.
    ///
    /// # Errors
    ///
    /// - [`DialError::DialIdRequired`] if the identifier is empty.
    /// - [`DialError::DialExists`] if the identifier is already taken; the
    ///   existing record is left untouched.
    /// - [`DialError::Internal`] on storage/transport failure.
    async fn create_dial(&self, dial: Dial) -> Result<Dial, DialError>;

    /// Set the level of an existing dial.
    ///
    /// The token must match the one assigned at creation; the authorization
    /// check precedes any write, so a rejected call never mutates the record.
    ///
    /// # Errors
    ///
    /// - [`DialError::DialNotFound`] if no dial has this identifier.
    /// - [`DialError::Unauthorized`] if the token does not match.
    /// - [`DialError::Internal`] on storage/transport failure.
    async fn set_level(&self, id: &DialId, token: &str, level: f64) -> Result<(), DialError>;
}
