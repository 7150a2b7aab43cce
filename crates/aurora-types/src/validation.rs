use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::id::UserId;
use crate::user::User;

/// Minimum length of a trimmed display name.
pub const MIN_NAME_LEN: usize = 2;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Simple `local@domain.tld` check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Why an add-user draft was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidName,
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidName => write!(f, "Please enter a valid name"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Raw input of the add-user form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub contact: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    /// Name is checked before email; the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::InvalidName);
        }
        let email = self.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and build a record with trimmed fields and an empty profile.
    pub fn into_user(self, id: UserId) -> Result<User, ValidationError> {
        self.validate()?;
        Ok(User::new(
            id,
            self.name.trim(),
            self.email.trim(),
            self.contact.trim(),
        ))
    }
}
