// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the capture pipeline
//!
//! Validation failures are the only errors the core itself produces.
//! The remaining variants belong to the ambient layers around it
//! (JSON input, replay files, downstream sinks).

use std::fmt;

use thiserror::Error;

/// Result type alias for capture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for traffic capture
#[derive(Error, Debug)]
pub enum Error {
    /// Captured data violated a model invariant
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Input could not be decoded into the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A downstream sink rejected an event
    #[error("Sink error for {correlation_id}: {reason}")]
    Sink {
        correlation_id: String,
        reason: String,
    },

    /// Replay input was malformed
    #[error("Replay error at line {line}: {reason}")]
    Replay { line: usize, reason: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Which rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A required string was empty
    Empty,
    /// A number had to be strictly positive
    NotPositive,
    /// A value was outside a closed set
    NotAllowed,
    /// A number was outside its inclusive range
    OutOfRange,
}

impl ViolationKind {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::Empty => "empty",
            ViolationKind::NotPositive => "not_positive",
            ViolationKind::NotAllowed => "not_allowed",
            ViolationKind::OutOfRange => "out_of_range",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A model field that failed validation.
///
/// The message is meant for humans; branch on [`ValidationError::field`]
/// and [`ValidationError::kind`] instead of matching on text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    field: &'static str,
    kind: ViolationKind,
    message: &'static str,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, kind: ViolationKind, message: &'static str) -> Self {
        Self {
            field,
            kind,
            message,
        }
    }

    /// Name of the offending field, as it appears on the wire
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The rule that was broken
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Human-readable description
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl Error {
    /// Create a sink error
    pub fn sink(correlation_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Sink {
            correlation_id: correlation_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a replay error
    pub fn replay(line: usize, reason: impl Into<String>) -> Self {
        Error::Replay {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Get the validation failure, if that is what this is
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Attach a replay line number to the error
    fn at_line(self, line: usize) -> Result<T>;

    /// Add operation context to error
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn at_line(self, line: usize) -> Result<T> {
        self.map_err(|e| match e.into() {
            err @ Error::Replay { .. } => err,
            other => Error::replay(line, other.to_string()),
        })
    }

    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            Error::Other(format!("{}: {}", msg, err))
        })
    }
}
