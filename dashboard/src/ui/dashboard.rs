//! Dashboard page state: the list, the banner, and the create/edit
//! form lifecycle.
//!
//! A single logical writer drives all state (`&mut self`), so gateway
//! calls need no locking; if the caller races two mutations, whichever
//! response is applied last wins, with no conflict detection.

use std::num::NonZeroUsize;
use std::sync::Arc;

use pagination::{Page, page_size, paginate};

use crate::domain::ports::UserGateway;
use crate::domain::{User, UserDirectory, UserForm, UserId};

/// Fixed page size the list renders with.
pub const USERS_PER_PAGE: NonZeroUsize = page_size(5);

/// State machine behind the user list page.
///
/// The form being `Some` corresponds to the form view replacing the
/// list; `editing` distinguishes the edit flow from the create flow.
#[derive(Debug)]
pub struct DashboardPage<G> {
    directory: UserDirectory<G>,
    form: Option<UserForm>,
    editing: Option<UserId>,
    loading: bool,
    current_page: usize,
}

impl<G> DashboardPage<G> {
    /// A dashboard in its initial loading state.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            directory: UserDirectory::new(gateway),
            form: None,
            editing: None,
            loading: true,
            current_page: 1,
        }
    }

    /// Whether the initial fetch is still pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The collection store backing the list.
    #[must_use]
    pub const fn directory(&self) -> &UserDirectory<G> {
        &self.directory
    }

    /// The open form, when the form view is showing.
    #[must_use]
    pub fn form(&self) -> Option<&UserForm> {
        self.form.as_ref()
    }

    /// Mutable access to the open form, for change/blur events.
    pub fn form_mut(&mut self) -> Option<&mut UserForm> {
        self.form.as_mut()
    }

    /// Identifier of the user being edited, if the open form is an
    /// edit rather than a create.
    #[must_use]
    pub const fn editing(&self) -> Option<UserId> {
        self.editing
    }

    /// Open an empty form for a new user.
    pub fn open_create_form(&mut self) {
        self.form = Some(UserForm::new());
        self.editing = None;
    }

    /// Close the form and discard its draft, touched, and error state.
    pub fn cancel_form(&mut self) {
        self.form = None;
        self.editing = None;
    }

    /// 1-indexed page the list is showing.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Show another page. Pure state update; no network effect.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// The banner from the most recent failed operation, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.directory.error()
    }

    /// Dismiss the banner, as navigation away would.
    pub fn dismiss_error(&mut self) {
        self.directory.clear_error();
    }
}

impl<G: UserGateway> DashboardPage<G> {
    /// Run the initial fetch. The loading state clears whether or not
    /// the fetch succeeded; failures surface through the banner.
    pub async fn load(&mut self) {
        let _ = self.directory.load().await;
        self.loading = false;
    }

    /// Open a form prefilled from the stored record under `id`.
    /// No-op when the identifier is not in the collection.
    pub fn open_edit_form(&mut self, id: UserId) {
        if let Some(user) = self.directory.get(id) {
            self.form = Some(UserForm::prefilled(user));
            self.editing = Some(id);
        }
    }

    /// Submit the open form.
    ///
    /// Invalid drafts never reach the gateway; the form stays open with
    /// its errors visible. A valid draft is created or updated through
    /// the store, and the form closes only when the gateway accepted
    /// the call — on failure it stays open over the banner.
    pub async fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let Some(draft) = form.submit() else {
            return;
        };

        let applied = match self.editing {
            Some(id) => self.directory.update(id, draft).await.is_ok(),
            None => self.directory.create(draft).await.is_ok(),
        };
        if applied {
            self.form = None;
            self.editing = None;
        }
    }

    /// Delete the user under `id`. Failures surface through the banner
    /// and leave the list untouched.
    pub async fn delete_user(&mut self, id: UserId) {
        let _ = self.directory.delete(id).await;
    }

    /// The window of users visible on the current page.
    #[must_use]
    pub fn visible_users(&self) -> Page<'_, User> {
        paginate(self.directory.users(), self.current_page, USERS_PER_PAGE)
    }
}
