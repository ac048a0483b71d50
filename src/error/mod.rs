// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the gitgrade application.
//!
//! Every failure that can abort an analysis is reported through
//! [`GradeError`]. Secondary fetches (root listing, README) never produce
//! one of these; they degrade to empty values instead.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gitgrade operations.
#[derive(Error, Debug)]
pub enum GradeError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // GitHub errors
    #[error("Failed to analyze repository: {0}")]
    GitHub(#[from] GitHubError),

    // Report rendering errors
    #[error("Render error: {0}")]
    Render(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for GradeError {
    fn from(err: dialoguer::Error) -> Self {
        GradeError::Ui(err.to_string())
    }
}

impl From<handlebars::RenderError> for GradeError {
    fn from(err: handlebars::RenderError) -> Self {
        GradeError::Render(err.to_string())
    }
}

impl From<serde_json::Error> for GradeError {
    fn from(err: serde_json::Error) -> Self {
        GradeError::Render(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}. Use --force to overwrite.")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised while talking to the GitHub REST API.
#[derive(Error, Debug, Clone)]
pub enum GitHubError {
    #[error("Invalid GitHub URL format: '{url}'. Please use: https://github.com/owner/repository")]
    InvalidUrl { url: String },

    #[error("Repository not found. Please check the URL and ensure the repository is public.")]
    NotFound,

    #[error("GitHub API rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("GitHub API error: {status} - {reason}")]
    Api { status: u16, reason: String },

    #[error("Failed to fetch data from GitHub API: {message}")]
    Transport { message: String },

    #[error("Failed to decode GitHub response: {message}")]
    Decode { message: String },
}

impl GitHubError {
    /// Map a non-success HTTP status onto the matching error kind.
    pub fn from_status(status: u16, reason: impl Into<String>) -> Self {
        match status {
            404 => GitHubError::NotFound,
            403 => GitHubError::RateLimited,
            _ => GitHubError::Api {
                status,
                reason: reason.into(),
            },
        }
    }
}

impl From<reqwest::Error> for GitHubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GitHubError::Decode {
                message: err.to_string(),
            }
        } else {
            GitHubError::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Result type alias for gitgrade operations.
pub type Result<T> = std::result::Result<T, GradeError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GradeError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
