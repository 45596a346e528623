//! Validation of collection owners.
//!
//! The user name selects a directory of the file store, so it must never be
//! able to address anything outside of the data directory.

use std::fmt;

pub const MAX_USER_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyUser,
    UserTooLong { len: usize },
    ForbiddenCharacter { user: String, character: char },
    ReservedName { user: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyUser => write!(f, "user name is empty"),
            ValidationError::UserTooLong { len } => write!(
                f,
                "user name is {} bytes long, at most {} are allowed",
                len, MAX_USER_LEN
            ),
            ValidationError::ForbiddenCharacter { user, character } => {
                write!(f, "user name '{}' contains {:?}", user, character)
            }
            ValidationError::ReservedName { user } => {
                write!(f, "user name '{}' is reserved", user)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_user(user: &str) -> Result<(), ValidationError> {
    if user.is_empty() {
        return Err(ValidationError::EmptyUser);
    }
    if user.len() > MAX_USER_LEN {
        return Err(ValidationError::UserTooLong { len: user.len() });
    }
    if let Some(character) = user
        .chars()
        .find(|c| matches!(c, '/' | '\\' | ':') || c.is_control())
    {
        return Err(ValidationError::ForbiddenCharacter {
            user: user.to_string(),
            character,
        });
    }
    // Hidden and relative directory names
    if user.starts_with('.') {
        return Err(ValidationError::ReservedName {
            user: user.to_string(),
        });
    }
    Ok(())
}
