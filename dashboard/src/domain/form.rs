//! Form state controller for the create/edit user form.
//!
//! Owns the draft values, the per-field touched flags, and the
//! per-field errors. Error display is gated on a field being touched,
//! so typing in an untouched field never shows an error mid-entry; a
//! submit attempt touches every field so its failures become visible
//! even for fields the user never reached.

use super::user::{User, UserDraft};
use super::validation::{Field, ValidationError, ValidationErrors, validate_draft, validate_field};

/// Which fields have lost focus at least once.
///
/// Reset whenever a new draft begins; a fresh form shows no errors
/// until the user leaves a field or attempts a submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFields {
    first_name: bool,
    last_name: bool,
    email: bool,
    department: bool,
}

impl TouchedFields {
    /// Whether `field` has lost focus at least once.
    #[must_use]
    pub const fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::Email => self.email,
            Field::Department => self.department,
        }
    }

    fn touch(&mut self, field: Field) {
        match field {
            Field::FirstName => self.first_name = true,
            Field::LastName => self.last_name = true,
            Field::Email => self.email = true,
            Field::Department => self.department = true,
        }
    }

    fn touch_all(&mut self) {
        for field in Field::ALL {
            self.touch(field);
        }
    }
}

/// Draft values plus the touched and error state that drives the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    draft: UserDraft,
    touched: TouchedFields,
    errors: ValidationErrors,
}

impl UserForm {
    /// An empty form for creating a new user.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form prefilled from an existing record, for editing.
    #[must_use]
    pub fn prefilled(user: &User) -> Self {
        Self {
            draft: UserDraft::from_user(user),
            ..Self::default()
        }
    }

    /// Current draft values.
    #[must_use]
    pub const fn draft(&self) -> &UserDraft {
        &self.draft
    }

    /// Current value of one field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.draft.first_name,
            Field::LastName => &self.draft.last_name,
            Field::Email => &self.draft.email,
            Field::Department => &self.draft.department,
        }
    }

    /// Record a keystroke: the draft always updates, and a field that
    /// is already touched re-validates live. Untouched fields keep
    /// their error state until blur.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if self.touched.is_touched(field) {
            self.errors.set(field, validate_field(field, &value));
        }
        match field {
            Field::FirstName => self.draft.first_name = value,
            Field::LastName => self.draft.last_name = value,
            Field::Email => self.draft.email = value,
            Field::Department => self.draft.department = value,
        }
    }

    /// Record the field losing focus: mark it touched and validate it.
    pub fn blur(&mut self, field: Field) {
        self.touched.touch(field);
        let error = validate_field(field, self.value(field));
        self.errors.set(field, error);
    }

    /// Attempt a submit.
    ///
    /// Every field becomes touched so displayed errors include fields
    /// the user never blurred. Returns the draft when the whole form
    /// validates; the form state is deliberately not reset — the owner
    /// closes the form once the submission lands. Returns `None` on
    /// validation failure with the errors stored for display.
    pub fn submit(&mut self) -> Option<UserDraft> {
        self.touched.touch_all();
        self.errors = validate_draft(&self.draft);
        self.errors.is_empty().then(|| self.draft.clone())
    }

    /// The error rendered next to `field`: present only when the field
    /// has an error and is touched.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<&ValidationError> {
        self.touched
            .is_touched(field)
            .then(|| self.errors.get(field))
            .flatten()
    }

    /// Whether `field` has lost focus at least once.
    #[must_use]
    pub const fn is_touched(&self, field: Field) -> bool {
        self.touched.is_touched(field)
    }

    /// The full error set, regardless of touched state.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}
