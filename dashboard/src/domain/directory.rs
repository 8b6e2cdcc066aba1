//! In-memory user collection with optimistic CRUD.
//!
//! Every operation performs the remote call first and mutates the local
//! collection only on a successful status. The gateway is treated as
//! non-authoritative for the session: mutation response bodies are
//! ignored and the local collection is the source of truth for the UI.
//! Operations are independent — nothing queues, retries, serialises, or
//! cancels an in-flight call; a failure is terminal for that single
//! operation and the user re-triggers it manually.

use std::sync::Arc;

use tracing::warn;

use super::ports::{UserGateway, UserGatewayError};
use super::user::{User, UserDraft, UserId};

/// Banner shown when the initial fetch fails.
pub const LOAD_FAILED: &str = "Failed to fetch users";
/// Banner shown when a create is rejected.
pub const CREATE_FAILED: &str = "Failed to add user";
/// Banner shown when an update is rejected.
pub const UPDATE_FAILED: &str = "Failed to update user";
/// Banner shown when a delete is rejected.
pub const DELETE_FAILED: &str = "Failed to delete user";

/// Ordered user collection mirrored from gateway responses.
///
/// Ordering is arrival order from the initial fetch followed by append
/// order for creates. The collection is session-local and rebuilt from
/// scratch on every full reload.
#[derive(Debug, Clone)]
pub struct UserDirectory<G> {
    gateway: Arc<G>,
    users: Vec<User>,
    error: Option<String>,
}

impl<G> UserDirectory<G> {
    /// An empty directory backed by `gateway`.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            users: Vec::new(),
            error: None,
        }
    }

    /// Every user in collection order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up one user by identifier.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Number of users in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the collection holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The banner message from the most recent failure, if any.
    ///
    /// Later successes do not clear it; only [`Self::clear_error`]
    /// does, mirroring a banner dismissed by navigation.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismiss the banner.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Successor of the highest identifier currently in the collection,
    /// so created records stay unique even after deletions. For a
    /// freshly loaded contiguous collection this equals `len + 1`.
    fn next_user_id(&self) -> UserId {
        let highest = self
            .users
            .iter()
            .map(|user| user.id.as_u64())
            .max()
            .unwrap_or(0);
        UserId::new(highest + 1)
    }
}

impl<G: UserGateway> UserDirectory<G> {
    /// Fetch every user and replace the whole collection.
    ///
    /// On failure the collection is left empty and the banner set.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure after recording the banner.
    pub async fn load(&mut self) -> Result<(), UserGatewayError> {
        match self.gateway.list_users().await {
            Ok(users) => {
                self.users = users;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "user list fetch failed");
                self.users.clear();
                self.error = Some(LOAD_FAILED.to_owned());
                Err(error)
            }
        }
    }

    /// Send the draft to the gateway and, on success, append a record
    /// under a locally synthesised identifier.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure; the collection is unchanged and
    /// the banner set.
    pub async fn create(&mut self, draft: UserDraft) -> Result<UserId, UserGatewayError> {
        match self.gateway.create_user(&draft).await {
            Ok(()) => {
                let id = self.next_user_id();
                self.users.push(draft.into_user(id));
                Ok(id)
            }
            Err(error) => {
                warn!(%error, "user create failed");
                self.error = Some(CREATE_FAILED.to_owned());
                Err(error)
            }
        }
    }

    /// Send the draft for `id` and, on success, replace the matching
    /// record's fields, preserving its identifier. A successful call
    /// for an identifier absent from the collection is a local no-op.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure; the collection is unchanged and
    /// the banner set.
    pub async fn update(&mut self, id: UserId, draft: UserDraft) -> Result<(), UserGatewayError> {
        match self.gateway.update_user(id, &draft).await {
            Ok(()) => {
                if let Some(user) = self.users.iter_mut().find(|user| user.id == id) {
                    *user = draft.into_user(id);
                }
                Ok(())
            }
            Err(error) => {
                warn!(%error, user_id = id.as_u64(), "user update failed");
                self.error = Some(UPDATE_FAILED.to_owned());
                Err(error)
            }
        }
    }

    /// Send a delete for `id` and, on success, remove exactly the
    /// matching record.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure; the collection is unchanged and
    /// the banner set.
    pub async fn delete(&mut self, id: UserId) -> Result<(), UserGatewayError> {
        match self.gateway.delete_user(id).await {
            Ok(()) => {
                self.users.retain(|user| user.id != id);
                Ok(())
            }
            Err(error) => {
                warn!(%error, user_id = id.as_u64(), "user delete failed");
                self.error = Some(DELETE_FAILED.to_owned());
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::ports::MockUserGateway;

    fn user(id: u64, first: &str) -> User {
        User {
            id: UserId::new(id),
            first_name: first.to_owned(),
            last_name: "Doe".to_owned(),
            email: format!("{}@example.com", first.to_lowercase()),
            department: "IT".to_owned(),
        }
    }

    fn draft(first: &str) -> UserDraft {
        UserDraft {
            first_name: first.to_owned(),
            last_name: "Doe".to_owned(),
            email: format!("{}@example.com", first.to_lowercase()),
            department: "IT".to_owned(),
        }
    }

    fn loaded_directory(users: Vec<User>, gateway: MockUserGateway) -> UserDirectory<MockUserGateway> {
        let mut directory = UserDirectory::new(Arc::new(gateway));
        directory.users = users;
        directory
    }

    #[tokio::test]
    async fn load_replaces_the_collection_in_arrival_order() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_list_users()
            .times(1)
            .return_once(|| Ok(vec![user(1, "Ann"), user(2, "Ben"), user(3, "Cal")]));

        let mut directory = UserDirectory::new(Arc::new(gateway));
        directory.load().await.expect("load succeeds");

        assert_eq!(directory.len(), 3);
        assert_eq!(directory.users()[0].first_name, "Ann");
        assert_eq!(directory.error(), None);
    }

    #[tokio::test]
    async fn failed_load_leaves_the_collection_empty_with_a_banner() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_list_users()
            .times(1)
            .return_once(|| Err(UserGatewayError::status(503)));

        let mut directory = UserDirectory::new(Arc::new(gateway));
        let error = directory.load().await.expect_err("load fails");

        assert_eq!(error, UserGatewayError::status(503));
        assert!(directory.is_empty());
        assert_eq!(directory.error(), Some(LOAD_FAILED));
    }

    #[tokio::test]
    async fn create_appends_one_record_with_the_next_identifier() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_create_user()
            .times(1)
            .return_once(|_| Ok(()));

        let mut directory =
            loaded_directory(vec![user(1, "Ann"), user(2, "Ben"), user(3, "Cal")], gateway);
        let before = directory.len();
        let id = directory.create(draft("Dee")).await.expect("create succeeds");

        assert_eq!(id, UserId::new(before as u64 + 1));
        assert_eq!(directory.len(), before + 1);
        assert_eq!(directory.get(id).map(|u| u.first_name.as_str()), Some("Dee"));
    }

    #[tokio::test]
    async fn failed_create_leaves_the_collection_unchanged() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_create_user()
            .times(1)
            .return_once(|_| Err(UserGatewayError::transport("connection reset")));

        let mut directory = loaded_directory(vec![user(1, "Ann")], gateway);
        directory
            .create(draft("Dee"))
            .await
            .expect_err("create fails");

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.error(), Some(CREATE_FAILED));
    }

    #[tokio::test]
    async fn create_after_a_deletion_never_reuses_a_live_identifier() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_delete_user()
            .with(eq(UserId::new(2)))
            .times(1)
            .return_once(|_| Ok(()));
        gateway
            .expect_create_user()
            .times(1)
            .return_once(|_| Ok(()));

        let mut directory =
            loaded_directory(vec![user(1, "Ann"), user(2, "Ben"), user(3, "Cal")], gateway);
        directory
            .delete(UserId::new(2))
            .await
            .expect("delete succeeds");
        let id = directory.create(draft("Dee")).await.expect("create succeeds");

        assert_eq!(id, UserId::new(4), "successor of the highest id, not len + 1");
        let ids: Vec<u64> = directory.users().iter().map(|u| u.id.as_u64()).collect();
        assert_eq!(ids, vec![1, 3, 4], "identifiers stay unique");
    }

    #[tokio::test]
    async fn update_replaces_fields_and_preserves_the_identifier() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_update_user()
            .with(eq(UserId::new(2)), eq(draft("Bea")))
            .times(1)
            .return_once(|_, _| Ok(()));

        let mut directory = loaded_directory(vec![user(1, "Ann"), user(2, "Ben")], gateway);
        directory
            .update(UserId::new(2), draft("Bea"))
            .await
            .expect("update succeeds");

        let updated = directory.get(UserId::new(2)).expect("record still present");
        assert_eq!(updated.first_name, "Bea");
        assert_eq!(directory.len(), 2);
    }

    #[tokio::test]
    async fn update_of_an_unknown_identifier_is_a_local_noop() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_update_user()
            .times(1)
            .return_once(|_, _| Ok(()));

        let mut directory = loaded_directory(vec![user(1, "Ann")], gateway);
        directory
            .update(UserId::new(9), draft("Zed"))
            .await
            .expect("gateway accepted the update");

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.users()[0].first_name, "Ann");
    }

    #[tokio::test]
    async fn failed_update_mutates_nothing_and_sets_the_banner() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_update_user()
            .times(1)
            .return_once(|_, _| Err(UserGatewayError::status(500)));

        let mut directory = loaded_directory(vec![user(1, "Ann")], gateway);
        directory
            .update(UserId::new(1), draft("Axl"))
            .await
            .expect_err("update fails");

        assert_eq!(directory.users()[0].first_name, "Ann");
        assert_eq!(directory.error(), Some(UPDATE_FAILED));
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_matching_record() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_delete_user()
            .with(eq(UserId::new(2)))
            .times(1)
            .return_once(|_| Ok(()));

        let mut directory =
            loaded_directory(vec![user(1, "Ann"), user(2, "Ben"), user(3, "Cal")], gateway);
        directory
            .delete(UserId::new(2))
            .await
            .expect("delete succeeds");

        let ids: Vec<u64> = directory.users().iter().map(|u| u.id.as_u64()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn failed_delete_is_a_collection_noop_with_a_banner() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_delete_user()
            .times(1)
            .return_once(|_| Err(UserGatewayError::transport("timed out")));

        let mut directory = loaded_directory(vec![user(1, "Ann"), user(2, "Ben")], gateway);
        directory
            .delete(UserId::new(1))
            .await
            .expect_err("delete fails");

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.error(), Some(DELETE_FAILED));
    }

    #[tokio::test]
    async fn banner_survives_later_successes_until_dismissed() {
        let mut gateway = MockUserGateway::new();
        gateway.expect_create_user().times(2).returning(|_| Ok(()));
        gateway
            .expect_delete_user()
            .times(1)
            .return_once(|_| Err(UserGatewayError::status(500)));

        let mut directory = loaded_directory(vec![user(1, "Ann")], gateway);
        directory
            .delete(UserId::new(1))
            .await
            .expect_err("delete fails");
        assert_eq!(directory.error(), Some(DELETE_FAILED));

        directory.create(draft("Dee")).await.expect("create succeeds");
        assert_eq!(
            directory.error(),
            Some(DELETE_FAILED),
            "successes never clear the banner",
        );

        directory.clear_error();
        assert_eq!(directory.error(), None);

        directory.create(draft("Eve")).await.expect("create succeeds");
        assert_eq!(directory.error(), None);
    }
}
