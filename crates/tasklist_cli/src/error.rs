//! CLI error type.

use std::error::Error;
use std::fmt::{Display, Formatter};
use tasklist_core::{StorageError, TaskValidationError};

#[derive(Debug)]
pub enum CliError {
    Config(String),
    Storage(StorageError),
    /// No task id starts with the given reference.
    UnknownTask(String),
    /// More than one task id starts with the given reference.
    AmbiguousTask(String),
    Rejected(TaskValidationError),
    Output(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(message) => write!(f, "configuration error: {message}"),
            Self::Storage(err) => write!(f, "storage error: {err}"),
            Self::UnknownTask(reference) => write!(f, "no task matches `{reference}`"),
            Self::AmbiguousTask(reference) => {
                write!(f, "`{reference}` matches several tasks; use a longer id")
            }
            Self::Rejected(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Rejected(err) => Some(err),
            Self::Output(err) => Some(err),
            Self::Config(_) | Self::UnknownTask(_) | Self::AmbiguousTask(_) => None,
        }
    }
}

impl From<StorageError> for CliError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<TaskValidationError> for CliError {
    fn from(value: TaskValidationError) -> Self {
        Self::Rejected(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}
