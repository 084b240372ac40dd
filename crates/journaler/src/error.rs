//! Journal error types

use thiserror::Error;

/// Errors that can occur while configuring a journal
///
/// Emitting a message never fails; these only come out of label
/// customization, configuration loading and default installation.
#[derive(Error, Debug)]
pub enum JournalError {
    /// Label key is not one of the built-in severities
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),

    /// The process-wide journal was already created
    #[error("Default journal is already initialized")]
    AlreadyInitialized,

    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid YAML for a `JournalConfig`
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Other configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

impl JournalError {
    /// Create an unknown severity error
    pub fn unknown_severity(key: impl Into<String>) -> Self {
        Self::UnknownSeverity(key.into())
    }
}

pub type JournalResult<T> = Result<T, JournalError>;
