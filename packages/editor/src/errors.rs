//! Error types for the editor.

use thiserror::Error;

use crate::import::NestingError;
use crate::mutations::MutationError;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("nesting error: {0}")]
    Nesting(#[from] NestingError),

    #[error("mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EditorResult<T> = Result<T, EditorError>;
