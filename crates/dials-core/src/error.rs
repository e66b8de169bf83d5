//! Error taxonomy shared across every `DialService` backend.

use thiserror::Error;

/// Generic message substituted for internal errors on the wire.
///
/// Endpoints log the real cause server-side and send only this string, so
/// storage and transport detail never leaks to clients.
pub const INTERNAL_MESSAGE: &str = "internal error";

/// Errors from dial operations.
///
/// The first five variants are the public taxonomy: their `Display` strings
/// are the wire contract, carried verbatim in response bodies and mapped back
/// by the remote client via [`DialError::from_wire_message`]. `CorruptRecord`
/// and `Internal` never cross the wire as-is; both collapse to
/// [`INTERNAL_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialError {
    /// No dial was supplied to a create call.
    #[error("dial required")]
    DialRequired,

    /// The supplied dial has an empty identifier.
    #[error("dial id required")]
    DialIdRequired,

    /// A dial with this identifier already exists.
    #[error("dial already exists")]
    DialExists,

    /// No dial with this identifier exists.
    #[error("dial not found")]
    DialNotFound,

    /// The supplied token does not match the dial's token.
    #[error("unauthorized")]
    Unauthorized,

    /// A persisted record could not be decoded.
    #[error("corrupt dial record: {reason}")]
    CorruptRecord {
        /// Description of the decode failure.
        reason: String,
    },

    /// Storage or transport failure; catch-all for everything unrecognized.
    #[error("internal error: {reason}")]
    Internal {
        /// The underlying cause, for server-side logging only.
        reason: String,
    },
}

impl DialError {
    /// Shorthand for an [`DialError::Internal`] wrapping any displayable cause.
    pub fn internal(reason: impl ToString) -> Self {
        Self::Internal { reason: reason.to_string() }
    }

    /// Shorthand for a [`DialError::CorruptRecord`] wrapping a decode failure.
    pub fn corrupt(reason: impl ToString) -> Self {
        Self::CorruptRecord { reason: reason.to_string() }
    }

    /// The exact string carried in a response body for this error.
    ///
    /// Public taxonomy variants map to their `Display` strings; everything
    /// else collapses to [`INTERNAL_MESSAGE`] so internal detail stays
    /// server-side.
    pub fn wire_message(&self) -> &'static str {
        match self {
            Self::DialRequired => "dial required",
            Self::DialIdRequired => "dial id required",
            Self::DialExists => "dial already exists",
            Self::DialNotFound => "dial not found",
            Self::Unauthorized => "unauthorized",
            Self::CorruptRecord { .. } | Self::Internal { .. } => INTERNAL_MESSAGE,
        }
    }

    /// Map a response-body error string back to the taxonomy.
    ///
    /// This is the string-keyed lookup used by the remote client: recognized
    /// strings become their sentinel variant, anything else becomes
    /// [`DialError::Internal`] carrying the raw message.
    pub fn from_wire_message(message: &str) -> Self {
        match message {
            "dial required" => Self::DialRequired,
            "dial id required" => Self::DialIdRequired,
            "dial already exists" => Self::DialExists,
            "dial not found" => Self::DialNotFound,
            "unauthorized" => Self::Unauthorized,
            other => Self::Internal { reason: other.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_message_matches_display_for_public_taxonomy() {
        for err in [
            DialError::DialRequired,
            DialError::DialIdRequired,
            DialError::DialExists,
            DialError::DialNotFound,
            DialError::Unauthorized,
        ] {
            assert_eq!(err.wire_message(), err.to_string());
        }
    }

    #[test]
    fn wire_roundtrip_for_public_taxonomy() {
        for err in [
            DialError::DialRequired,
            DialError::DialIdRequired,
            DialError::DialExists,
            DialError::DialNotFound,
            DialError::Unauthorized,
        ] {
            assert_eq!(DialError::from_wire_message(err.wire_message()), err);
        }
    }

    #[test]
    fn internal_hides_reason_on_wire() {
        let err = DialError::internal("redb: file locked");
        assert_eq!(err.wire_message(), INTERNAL_MESSAGE);
        assert!(err.to_string().contains("redb: file locked"));
    }

    #[test]
    fn corrupt_record_collapses_to_internal_on_wire() {
        let err = DialError::corrupt("truncated record");
        assert_eq!(err.wire_message(), INTERNAL_MESSAGE);
    }

    #[test]
    fn unrecognized_wire_string_becomes_internal() {
        let err = DialError::from_wire_message("invalid json");
        assert_eq!(err, DialError::Internal { reason: "invalid json".to_string() });
    }
}
