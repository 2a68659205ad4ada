//! Todo record types.
//!
//! `TodoRecord` is the stored shape and `Todo` is what leaves the service.
//! The write payloads carry optional fields so that a missing title can be
//! reported as a validation failure instead of a decoding failure.

use crate::error::{Result, ValidationError};
use crate::ids::TodoId;

/// Stored todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl TodoRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            title: title.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Externally visible todo representation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// Payload for creating a todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewTodo {
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
}

impl NewTodo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Returns the validated title.
    pub fn validate(&self) -> Result<&str> {
        required_title(self.title.as_deref())
    }
}

/// Payload replacing every mutable field of a todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TodoReplacement {
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed: Option<bool>,
}

impl TodoReplacement {
    /// Returns the validated `(title, completed)` pair.
    pub fn validate(&self) -> Result<(&str, bool)> {
        let title = required_title(self.title.as_deref())?;
        let completed = self
            .completed
            .ok_or(ValidationError::MissingField("completed"))?;
        Ok((title, completed))
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TodoPatch {
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn validate(&self) -> Result<()> {
        match self.title.as_deref() {
            Some(title) if title.trim().is_empty() => {
                Err(ValidationError::BlankField("title"))
            }
            _ => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

fn required_title(title: Option<&str>) -> Result<&str> {
    match title {
        None => Err(ValidationError::MissingField("title")),
        Some(value) if value.trim().is_empty() => {
            Err(ValidationError::BlankField("title"))
        }
        Some(value) => Ok(value),
    }
}
