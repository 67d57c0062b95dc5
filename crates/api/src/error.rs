// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors surfaced by the REST client and the controllers.
//!
//! Slices store `to_string()` of these; for HTTP failures that is the
//! server's own message.

use padel_book::CoreError;
use padel_book_domain::{DomainError, FieldErrors};
use padel_book_persistence::PersistenceError;

/// Errors from the effect boundary.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (network, DNS, TLS, timeout).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message taken from the error body, or a generic one.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// Reading or writing the persisted session failed.
    #[error("Client storage error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Local field validation failed; nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Local input was rejected before any request.
    #[error("{0}")]
    Domain(DomainError),

    /// The same operation is already in flight.
    #[error("{operation} is already in progress")]
    Busy {
        /// The operation that was triggered twice.
        operation: &'static str,
    },

    /// The command does not fit the current state.
    #[error("Cannot {command} while {state}")]
    InvalidState {
        /// The rejected command.
        command: &'static str,
        /// Description of the current state.
        state: String,
    },

    /// The request was cancelled or superseded.
    #[error("Request was cancelled")]
    Cancelled,

    /// The external payment capture failed or was abandoned.
    #[error("Payment was not captured: {0}")]
    Capture(String),

    /// `retry` was called before any query was issued.
    #[error("There is no previous request to retry")]
    NothingToRetry,
}

impl ClientError {
    /// Returns the HTTP status, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the server rejected the credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DomainViolation(err) => Self::Domain(err),
            CoreError::Validation(errors) => Self::Validation(errors),
            CoreError::Busy { operation } => Self::Busy { operation },
            CoreError::InvalidTransition {
                slice,
                state,
                command,
            } => Self::InvalidState {
                command,
                state: format!("{slice} is {state}"),
            },
            CoreError::WizardComplete => Self::InvalidState {
                command: "submit",
                state: String::from("the form is already submitted"),
            },
        }
    }
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<FieldErrors> for ClientError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
