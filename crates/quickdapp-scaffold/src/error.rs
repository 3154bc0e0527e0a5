//! Error types for quickdapp-scaffold

use thiserror::Error;

/// Result type alias using quickdapp-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid project name
    #[error("Invalid project name: {name}. Use only letters, numbers, hyphens, and underscores")]
    InvalidProjectName { name: String },

    /// Unsupported package manager identifier
    #[error("Unsupported package manager: {name}. Supported: pnpm, npm, yarn")]
    UnsupportedPackageManager { name: String },

    /// Package manager binary not found or not executable
    #[error("{name} is not installed. Please install it first")]
    PackageManagerUnavailable { name: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// External command failed
    #[error("Failed to run {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// Pipeline stage failed
    #[error("{stage} failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create an unsupported package manager error
    pub fn unsupported_package_manager(name: impl Into<String>) -> Self {
        Self::UnsupportedPackageManager { name: name.into() }
    }

    /// Create a package manager unavailable error
    pub fn package_manager_unavailable(name: impl Into<String>) -> Self {
        Self::PackageManagerUnavailable { name: name.into() }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Wrap an error with the pipeline stage it occurred in
    pub fn stage(stage: &'static str, source: Error) -> Self {
        Self::Stage {
            stage,
            source: Box::new(source),
        }
    }
}
