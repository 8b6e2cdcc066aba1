//! State core for a user-management dashboard.
//!
//! The crate owns everything between user events and the remote REST
//! gateway: field and form validation, the create/edit form state, an
//! optimistic in-memory user collection, client-side pagination, and
//! the page controllers a renderer drives. Markup, styling, and the
//! actual persistence behaviour of the gateway are external concerns.

pub mod domain;
pub mod outbound;
pub mod ui;

pub use domain::{User, UserDirectory, UserDraft, UserForm, UserId};
pub use ui::{DashboardPage, ProfilePage, Route};
