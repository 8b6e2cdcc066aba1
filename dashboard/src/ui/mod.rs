//! Page-level state controllers and route parsing.
//!
//! Presentation markup is someone else's concern; these types hold the
//! state a renderer reads and the operations user events trigger.

mod dashboard;
mod profile;
mod routes;

pub use dashboard::{DashboardPage, USERS_PER_PAGE};
pub use profile::{ProfilePage, USER_NOT_FOUND};
pub use routes::Route;
