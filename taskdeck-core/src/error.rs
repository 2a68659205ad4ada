use taskdeck_model::{TodoId, ValidationError};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    #[error("Invalid payload: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, TodoError>;
