//! Structured error types for the rental-scout library.
//!
//! The binary wraps these in `anyhow` with added context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    #[error("HTTP error from {url}: {reason}")]
    Http { url: String, reason: String },

    #[error("Invalid listing {id}: {reason}")]
    InvalidListing { id: u32, reason: String },

    #[error("Duplicate listing id {id}")]
    DuplicateId { id: u32 },

    #[error("Invalid contract {id}: {reason}")]
    InvalidContract { id: u32, reason: String },

    #[error("Contract {id} cannot go from '{from}' to '{to}'")]
    InvalidTransition { id: u32, from: String, to: String },

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u32 },

    #[error("Invalid coordinates '{value}': {reason}")]
    InvalidCoordinates { value: String, reason: String },

    #[error("Configuration error in {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, ScoutError>;

impl ScoutError {
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    pub fn http(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Http {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_listing(id: u32, reason: impl Into<String>) -> Self {
        Self::InvalidListing {
            id,
            reason: reason.into(),
        }
    }

    pub fn invalid_contract(id: u32, reason: impl Into<String>) -> Self {
        Self::InvalidContract {
            id,
            reason: reason.into(),
        }
    }

    pub fn invalid_transition(id: u32, from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidTransition {
            id,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn not_found(kind: &'static str, id: u32) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn invalid_coordinates(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinates {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
