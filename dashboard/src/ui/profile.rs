//! Profile page state for a single user.
//!
//! The profile performs its own fetch against the gateway, independent
//! of whatever the dashboard already loaded. On failure the whole view
//! is replaced by an error state whose return action leads back to the
//! dashboard.

use crate::domain::ports::{UserGateway, UserGatewayError};
use crate::domain::{User, UserId};
use crate::ui::Route;

/// Message shown when the gateway answered but had no such user.
pub const USER_NOT_FOUND: &str = "User not found";

/// View state of the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePage {
    /// The fetch is still pending.
    Loading,
    /// The user arrived and the profile renders.
    Loaded(User),
    /// The fetch failed; the view shows the message and a return link.
    Failed {
        /// User-visible failure description.
        message: String,
    },
}

impl ProfilePage {
    /// Fetch the user under `id` and resolve the view state.
    pub async fn load<G: UserGateway>(gateway: &G, id: UserId) -> Self {
        match gateway.fetch_user(id).await {
            Ok(user) => Self::Loaded(user),
            Err(UserGatewayError::Status { .. }) => Self::Failed {
                message: USER_NOT_FOUND.to_owned(),
            },
            Err(error) => Self::Failed {
                message: error.to_string(),
            },
        }
    }

    /// The loaded user, when the fetch succeeded.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Loaded(user) => Some(user),
            Self::Loading | Self::Failed { .. } => None,
        }
    }

    /// Whether the fetch is still pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The failure message, when the view is the error state.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            Self::Loading | Self::Loaded(_) => None,
        }
    }

    /// Where the error view's return action navigates to.
    #[must_use]
    pub const fn return_route() -> Route {
        Route::Dashboard
    }
}
