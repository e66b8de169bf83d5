//! Optional per-user authentication collaborator.
//!
//! The primary authorization model is token-per-dial: the secret stored on
//! the dial itself gates level updates, and nothing else is consulted. When
//! per-user ownership is required instead, a session layer authenticates the
//! caller through this capability before invoking dial operations. Only the
//! boundary is defined here; no production implementation ships in-tree.

use async_trait::async_trait;
use thiserror::Error;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable user identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// Errors from authentication.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token does not identify any user.
    #[error("unauthorized")]
    Unauthorized,

    /// The authentication backend failed.
    #[error("internal error: {reason}")]
    Internal {
        /// The underlying cause.
        reason: String,
    },
}

/// Capability for resolving a session token to a user.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve `token` to the user it identifies.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthorized`] for unknown tokens and
    /// [`AuthError::Internal`] on backend failure.
    async fn authenticate(&self, token: &str) -> Result<User, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticAuthenticator;

    #[async_trait]
    impl Authenticator for StaticAuthenticator {
        async fn authenticate(&self, token: &str) -> Result<User, AuthError> {
            if token == "SESSION" {
                Ok(User { id: 123, name: "susy".to_string() })
            } else {
                Err(AuthError::Unauthorized)
            }
        }
    }

    #[tokio::test]
    async fn known_token_resolves_user() {
        let auth = StaticAuthenticator;
        let user = auth.authenticate("SESSION").await.unwrap();
        assert_eq!(user.id, 123);
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let auth = StaticAuthenticator;
        assert_eq!(auth.authenticate("NOPE").await, Err(AuthError::Unauthorized));
    }
}
