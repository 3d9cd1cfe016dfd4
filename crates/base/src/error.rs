use serde::{Deserialize, Serialize};
use thiserror::Error;

#[must_use]
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum CreateError {
    #[error("Invalid heap options: {reason}.")]
    InvalidHeapOptions { reason: String },
}

#[must_use]
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum InsertError {
    #[error("Heap is full.")]
    Full,
}

#[must_use]
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum PopError {
    #[error("Heap is empty.")]
    Empty,
}

#[must_use]
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum PeekError {
    #[error("Heap is empty.")]
    Empty,
}

#[must_use]
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum ReplaceError {
    #[error("Heap is empty.")]
    Empty,
}
