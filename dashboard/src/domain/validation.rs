//! Field and whole-form validation for the user form.
//!
//! Rules evaluate in order and the first failing rule wins. The email
//! check is a minimal structural pattern (something, `@`, something,
//! `.`, something), not full RFC validation; that limitation is
//! deliberate and matches the behaviour users already see.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::UserDraft;

/// Minimum length for first name, last name, and department.
pub const FIELD_MIN: usize = 2;

/// The closed set of user form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Contact email address.
    Email,
    /// Department name.
    Department,
}

impl Field {
    /// Every field, in form layout order.
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Department];

    /// Label shown next to the field in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Department => "Department",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field value was rejected. The `Display` output is the message
/// rendered inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value is empty or whitespace-only.
    #[error("{0} is required")]
    Required(Field),
    /// Value is shorter than the minimum length.
    #[error("{field} must be at least {min} characters")]
    TooShort {
        /// Field the rule applies to.
        field: Field,
        /// Minimum accepted length.
        min: usize,
    },
    /// Value contains characters outside letters, spaces, and hyphens.
    #[error("{0} can only contain letters, spaces, and hyphens")]
    InvalidCharacters(Field),
    /// Value does not look like an email address.
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z\s-]+$")
            .unwrap_or_else(|error| panic!("name regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Check one candidate value against the rules for `field`.
///
/// Returns `None` when the value is acceptable.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::Required(field));
    }
    match field {
        Field::FirstName | Field::LastName => {
            if value.chars().count() < FIELD_MIN {
                return Some(ValidationError::TooShort {
                    field,
                    min: FIELD_MIN,
                });
            }
            if !name_regex().is_match(value) {
                return Some(ValidationError::InvalidCharacters(field));
            }
        }
        Field::Email => {
            if !email_regex().is_match(value) {
                return Some(ValidationError::InvalidEmail);
            }
        }
        Field::Department => {
            if value.chars().count() < FIELD_MIN {
                return Some(ValidationError::TooShort {
                    field,
                    min: FIELD_MIN,
                });
            }
        }
    }
    None
}

/// Per-field validation results for the whole form.
///
/// The field set is closed, so this is a fixed-shape record of one
/// optional error per field rather than an open-ended map. An entry of
/// `None` (or an entirely empty set) means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    first_name: Option<ValidationError>,
    last_name: Option<ValidationError>,
    email: Option<ValidationError>,
    department: Option<ValidationError>,
}

impl ValidationErrors {
    /// The stored error for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        match field {
            Field::FirstName => self.first_name.as_ref(),
            Field::LastName => self.last_name.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Department => self.department.as_ref(),
        }
    }

    /// Replace the stored error for `field`.
    pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Department => &mut self.department,
        };
        *slot = error;
    }

    /// Whether every field passed: the form is valid iff this is true.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

/// Run [`validate_field`] over every field of the draft and aggregate
/// the failures. No cross-field rules exist.
#[must_use]
pub fn validate_draft(draft: &UserDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    errors.set(
        Field::FirstName,
        validate_field(Field::FirstName, &draft.first_name),
    );
    errors.set(
        Field::LastName,
        validate_field(Field::LastName, &draft.last_name),
    );
    errors.set(Field::Email, validate_field(Field::Email, &draft.email));
    errors.set(
        Field::Department,
        validate_field(Field::Department, &draft.department),
    );
    errors
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("Jo")]
    #[case::hyphenated("Anne-Marie")]
    #[case::spaced("Mary Jane")]
    fn accepts_well_formed_names(#[case] value: &str) {
        assert_eq!(validate_field(Field::FirstName, value), None);
        assert_eq!(validate_field(Field::LastName, value), None);
    }

    #[test]
    fn rejects_digits_in_names() {
        assert_eq!(
            validate_field(Field::FirstName, "A1"),
            Some(ValidationError::InvalidCharacters(Field::FirstName)),
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace_only("   ")]
    fn blank_names_are_required_failures(#[case] value: &str) {
        assert_eq!(
            validate_field(Field::FirstName, value),
            Some(ValidationError::Required(Field::FirstName)),
        );
    }

    #[test]
    fn single_character_name_is_too_short() {
        assert_eq!(
            validate_field(Field::LastName, "D"),
            Some(ValidationError::TooShort {
                field: Field::LastName,
                min: FIELD_MIN,
            }),
        );
    }

    #[rstest]
    #[case::minimal("a@b.c")]
    #[case::ordinary("jo.doe@example.com")]
    fn accepts_structurally_plausible_emails(#[case] value: &str) {
        assert_eq!(validate_field(Field::Email, value), None);
    }

    #[rstest]
    #[case::no_at_sign("no-at-sign")]
    #[case::no_dot_after_at("a@b")]
    #[case::space_inside("a b@c.d")]
    #[case::double_at("a@b@c.d")]
    fn rejects_malformed_emails(#[case] value: &str) {
        assert_eq!(
            validate_field(Field::Email, value),
            Some(ValidationError::InvalidEmail),
        );
    }

    #[test]
    fn empty_email_reports_required_not_format() {
        assert_eq!(
            validate_field(Field::Email, ""),
            Some(ValidationError::Required(Field::Email)),
        );
    }

    #[test]
    fn department_needs_two_characters_but_any_alphabet() {
        assert_eq!(
            validate_field(Field::Department, "R"),
            Some(ValidationError::TooShort {
                field: Field::Department,
                min: FIELD_MIN,
            }),
        );
        assert_eq!(validate_field(Field::Department, "R&D"), None);
    }

    #[test]
    fn messages_match_the_form_copy() {
        assert_eq!(
            ValidationError::Required(Field::FirstName).to_string(),
            "First name is required",
        );
        assert_eq!(
            ValidationError::TooShort {
                field: Field::LastName,
                min: FIELD_MIN,
            }
            .to_string(),
            "Last name must be at least 2 characters",
        );
        assert_eq!(
            ValidationError::InvalidCharacters(Field::FirstName).to_string(),
            "First name can only contain letters, spaces, and hyphens",
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address",
        );
    }

    #[test]
    fn fully_valid_draft_yields_an_empty_error_set() {
        let draft = UserDraft {
            first_name: "Jo".to_owned(),
            last_name: "Do".to_owned(),
            email: "jo@do.com".to_owned(),
            department: "IT".to_owned(),
        };
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn empty_draft_fails_every_field() {
        let errors = validate_draft(&UserDraft::default());
        for field in Field::ALL {
            assert_eq!(
                errors.get(field),
                Some(&ValidationError::Required(field)),
                "{field} should report a required failure",
            );
        }
        assert!(!errors.is_empty());
    }
}
