// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use padel_book_domain::{DomainError, FieldErrors};

/// Errors that can occur during slice transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The current step's fields failed validation.
    Validation(FieldErrors),
    /// The operation is already in flight.
    Busy {
        /// The operation that was triggered twice.
        operation: &'static str,
    },
    /// A command arrived in a state that cannot accept it.
    InvalidTransition {
        /// The slice receiving the command.
        slice: &'static str,
        /// The state the slice was in.
        state: String,
        /// The rejected command.
        command: &'static str,
    },
    /// The wizard has already been submitted and must be reset first.
    WizardComplete,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Validation(errors) => write!(f, "Validation failed: {errors}"),
            Self::Busy { operation } => write!(f, "{operation} is already in progress"),
            Self::InvalidTransition {
                slice,
                state,
                command,
            } => write!(f, "Cannot apply {command} to {slice} while {state}"),
            Self::WizardComplete => write!(f, "The wizard has already been submitted"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<FieldErrors> for CoreError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
