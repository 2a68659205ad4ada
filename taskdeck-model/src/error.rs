use std::fmt::{self, Display};

/// Errors produced by payload validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    BlankField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "field '{field}' is required")
            }
            ValidationError::BlankField(field) => {
                write!(f, "field '{field}' must not be blank")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
