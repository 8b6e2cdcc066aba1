//! Path parsing for the three-route navigation surface.

use crate::domain::UserId;

/// Where the application is navigated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The user list at `/`.
    Dashboard,
    /// A single user's profile at `/users/:id`.
    UserProfile(UserId),
    /// Catch-all for everything else.
    NotFound,
}

impl Route {
    /// Parse a request path.
    ///
    /// Only decimal identifiers reach the profile route; any other
    /// `/users/...` shape falls through to [`Route::NotFound`] rather
    /// than reaching the gateway with a malformed id.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if path == "/" {
            return Self::Dashboard;
        }
        let Some(rest) = path.strip_prefix("/users/") else {
            return Self::NotFound;
        };
        match rest.trim_end_matches('/').parse::<u64>() {
            Ok(id) if !rest.is_empty() => Self::UserProfile(UserId::new(id)),
            _ => Self::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn root_is_the_dashboard() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
    }

    #[rstest]
    #[case::plain("/users/4", 4)]
    #[case::trailing_slash("/users/10/", 10)]
    fn numeric_user_paths_reach_the_profile(#[case] path: &str, #[case] id: u64) {
        assert_eq!(Route::parse(path), Route::UserProfile(UserId::new(id)));
    }

    #[rstest]
    #[case::empty_id("/users/")]
    #[case::non_numeric("/users/abc")]
    #[case::nested("/users/4/posts")]
    #[case::bare_collection("/users")]
    #[case::unknown("/settings")]
    #[case::empty("")]
    fn everything_else_is_not_found(#[case] path: &str) {
        assert_eq!(Route::parse(path), Route::NotFound);
    }
}
