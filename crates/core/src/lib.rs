//! Core shared types and errors (math-agnostic).

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid number '{input}'")]
    InvalidNumber { input: String },
    #[error("Invalid vector '{input}': expected {expected} comma-separated components or one scalar")]
    InvalidVector { input: String, expected: usize },
}

pub type CoreResult<T> = Result<T, CoreError>;
