//! Domain core: records, validation, form state, and the user
//! collection store. Transport-agnostic; adapters live in
//! [`crate::outbound`].

mod directory;
mod form;
pub mod ports;
mod user;
mod validation;

pub use directory::{CREATE_FAILED, DELETE_FAILED, LOAD_FAILED, UPDATE_FAILED, UserDirectory};
pub use form::{TouchedFields, UserForm};
pub use user::{User, UserDraft, UserId};
pub use validation::{
    FIELD_MIN, Field, ValidationError, ValidationErrors, validate_draft, validate_field,
};
