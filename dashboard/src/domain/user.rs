//! User records and in-progress form drafts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable user identifier.
///
/// Loaded records carry the identifier the gateway assigned; records
/// created during the session carry one synthesised by the collection
/// store. Unique within the collection at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One member of the user collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier within the collection.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name; may be empty when the upstream name had one token.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Department the user belongs to.
    pub department: String,
}

impl User {
    /// Name rendered on the profile page, `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Leading characters of the first and last name, for the avatar
    /// badge. Either half is omitted when the name part is empty.
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

/// In-progress, possibly-invalid form input: a user record minus the
/// identifier.
///
/// Created empty (or prefilled from an existing record when editing
/// begins), mutated on every keystroke, and discarded on cancel or
/// successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Candidate given name.
    pub first_name: String,
    /// Candidate family name.
    pub last_name: String,
    /// Candidate email address.
    pub email: String,
    /// Candidate department.
    pub department: String,
}

impl UserDraft {
    /// Prefill a draft from an existing record, for edit forms.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
        }
    }

    /// Promote a validated draft into a record under `id`.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            department: self.department,
        }
    }
}
