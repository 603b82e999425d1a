//! Core domain types for moonpaper.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Everything here can be used from any layer of the application.

use std::fmt;

use thiserror::Error;

/// The display name of the account authoring the report.
///
/// Guaranteed non-empty and free of surrounding whitespace: the constructor
/// trims its input and rejects anything that is empty afterwards. Holding an
/// `AuthorName` is proof the name is usable, so downstream consumers (the
/// document renderer in particular) never re-validate.
///
/// The name is spliced into LaTeX source verbatim. LaTeX-special characters
/// (`&`, `_`, `%`, `#`, ...) are not escaped; a display name containing them
/// yields a document that may not compile cleanly. This is a known,
/// deliberate limitation of the author field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

#[derive(Debug, Error)]
#[error("author name must not be empty")]
pub struct EmptyAuthorError;

impl AuthorName {
    /// Trims `value` and wraps it; rejects empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyAuthorError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(EmptyAuthorError)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for AuthorName {
    type Error = EmptyAuthorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for AuthorName {
    type Error = EmptyAuthorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AuthorName> for String {
    fn from(value: AuthorName) -> Self {
        value.0
    }
}

impl std::ops::Deref for AuthorName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for AuthorName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
