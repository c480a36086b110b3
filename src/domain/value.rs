use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// ServerChan send key (`SCKEY`), the per-channel push credential.
///
/// Invariant: non-empty after trimming. The key is opaque to this crate; it is
/// never validated beyond non-emptiness and never persisted.
pub struct SendKey(String);

impl SendKey {
    /// Create a validated [`SendKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySendKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message title (`text`).
///
/// Invariant: non-empty after trimming. Stored trimmed, as ServerChan treats
/// surrounding whitespace in the title as absent.
pub struct MessageTitle(String);

impl MessageTitle {
    /// Form field name used by ServerChan (`text`).
    pub const FIELD: &'static str = "text";

    /// Create a validated [`MessageTitle`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated title.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Message body (`desp`), Markdown per the ServerChan docs.
///
/// May be empty; a title-only push is valid.
pub struct MessageBody(String);

impl MessageBody {
    /// Form field name used by ServerChan (`desp`).
    pub const FIELD: &'static str = "desp";

    /// Create a message body. Empty input is allowed.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the body as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
