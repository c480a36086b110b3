use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The send key is empty after trimming. No request is made.
    EmptySendKey,
    /// The message title is empty after trimming. No request is made.
    EmptyTitle,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySendKey => write!(f, "send key must not be empty"),
            Self::EmptyTitle => write!(f, "message title must not be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
