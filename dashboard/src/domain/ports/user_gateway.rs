//! Driven port for the remote user gateway.
//!
//! The domain owns the contract; adapters map transport failures into
//! the typed variants here instead of leaking `reqwest` errors. The
//! gateway is non-authoritative for the session: callers check only
//! whether a call succeeded and never inspect mutation response bodies.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{User, UserDraft, UserId};

/// Errors surfaced while calling the user gateway.
///
/// The dashboard collapses `Transport` and `Status` into one banner
/// message; the distinction exists for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserGatewayError {
    /// Network transport failed before a response arrived.
    #[error("user gateway transport failed: {message}")]
    Transport {
        /// Underlying transport failure description.
        message: String,
    },
    /// The gateway answered with a non-success status.
    #[error("user gateway returned status {status}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
    },
    /// The response body could not be decoded.
    #[error("user gateway response decode failed: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
}

impl UserGatewayError {
    /// Build a [`UserGatewayError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`UserGatewayError::Status`].
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Build a [`UserGatewayError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for listing, fetching, and mutating users on the remote side.
///
/// Mutations are status-only contracts: a success tells the caller the
/// gateway accepted the request, nothing more. Implementations must not
/// retry or serialise calls; each invocation stands alone.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Fetch every user, already mapped into the local record shape.
    async fn list_users(&self) -> Result<Vec<User>, UserGatewayError>;

    /// Fetch a single user by identifier.
    async fn fetch_user(&self, id: UserId) -> Result<User, UserGatewayError>;

    /// Ask the gateway to create a user from the draft.
    async fn create_user(&self, draft: &UserDraft) -> Result<(), UserGatewayError>;

    /// Ask the gateway to replace the user under `id` with the draft.
    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<(), UserGatewayError>;

    /// Ask the gateway to delete the user under `id`.
    async fn delete_user(&self, id: UserId) -> Result<(), UserGatewayError>;
}

/// Fixture implementation for tests that do not exercise the gateway:
/// an empty directory that accepts every mutation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserGateway;

#[async_trait]
impl UserGateway for FixtureUserGateway {
    async fn list_users(&self) -> Result<Vec<User>, UserGatewayError> {
        Ok(Vec::new())
    }

    async fn fetch_user(&self, _id: UserId) -> Result<User, UserGatewayError> {
        Err(UserGatewayError::status(404))
    }

    async fn create_user(&self, _draft: &UserDraft) -> Result<(), UserGatewayError> {
        Ok(())
    }

    async fn update_user(&self, _id: UserId, _draft: &UserDraft) -> Result<(), UserGatewayError> {
        Ok(())
    }

    async fn delete_user(&self, _id: UserId) -> Result<(), UserGatewayError> {
        Ok(())
    }
}
