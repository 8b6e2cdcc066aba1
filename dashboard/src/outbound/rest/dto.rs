//! DTOs for decoding gateway user payloads.
//!
//! The adapter decodes into these transport DTOs first, then maps into
//! the local record shape in one pass. The upstream schema carries a
//! single `name` field and nests the department under `company`; the
//! local shape wants first/last name and a flat department.

use serde::Deserialize;

use crate::domain::{User, UserId};

#[derive(Debug, Deserialize)]
pub(super) struct RemoteUserDto {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) email: String,
    pub(super) company: RemoteCompanyDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct RemoteCompanyDto {
    pub(super) name: String,
}

impl RemoteUserDto {
    pub(super) fn into_user(self) -> User {
        let (first_name, last_name) = split_name(&self.name);
        User {
            id: UserId::new(self.id),
            first_name,
            last_name,
            email: self.email,
            department: self.company.name,
        }
    }
}

/// Split on the first space: first token becomes the first name, the
/// remainder the last name. A single-token name gets an empty last
/// name.
fn split_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, rest)) => (first.to_owned(), rest.to_owned()),
        None => (name.to_owned(), String::new()),
    }
}
