// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::validation::FieldErrors;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more form fields failed validation.
    InvalidFields(FieldErrors),
    /// Court type string is not recognized.
    InvalidCourtType(String),
    /// Court surface string is not recognized.
    InvalidSurface(String),
    /// Currency code is not recognized.
    InvalidCurrency(String),
    /// Admin role string is not recognized.
    InvalidAdminRole(String),
    /// Checkout kind string is not recognized.
    InvalidCheckoutKind(String),
    /// A time of day could not be parsed as `HH:MM`.
    InvalidTimeOfDay(String),
    /// A date could not be parsed or formatted as `YYYY-MM-DD`.
    InvalidDate {
        /// The offending input.
        input: String,
        /// The underlying parse or format error.
        error: String,
    },
    /// The availability window ends before it starts.
    InvalidDateRange {
        /// Inclusive start date.
        start: time::Date,
        /// Inclusive end date.
        end: time::Date,
    },
    /// Email address is not well formed.
    InvalidEmail(String),
    /// One-time code is not exactly six digits.
    InvalidOtpCode,
    /// Step number is outside the wizard's range.
    StepOutOfRange {
        /// The requested step.
        step: u8,
        /// The number of steps in the wizard.
        total: u8,
    },
    /// No court exists at the given draft position.
    CourtIndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of courts in the draft.
        len: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFields(errors) => write!(f, "Invalid fields: {errors}"),
            Self::InvalidCourtType(value) => write!(f, "Invalid court type: {value}"),
            Self::InvalidSurface(value) => write!(f, "Invalid court surface: {value}"),
            Self::InvalidCurrency(value) => write!(f, "Invalid currency: {value}"),
            Self::InvalidAdminRole(value) => write!(f, "Invalid admin role: {value}"),
            Self::InvalidCheckoutKind(value) => write!(f, "Invalid checkout kind: {value}"),
            Self::InvalidTimeOfDay(value) => {
                write!(f, "Invalid time of day '{value}'. Expected HH:MM")
            }
            Self::InvalidDate { input, error } => {
                write!(f, "Invalid date '{input}': {error}")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: {end} is before {start}")
            }
            Self::InvalidEmail(value) => write!(f, "Invalid email address: {value}"),
            Self::InvalidOtpCode => write!(f, "Verification code must be exactly 6 digits"),
            Self::StepOutOfRange { step, total } => {
                write!(f, "Step {step} is outside the range 1..={total}")
            }
            Self::CourtIndexOutOfRange { index, len } => {
                write!(f, "No court at position {index} (draft has {len} courts)")
            }
        }
    }
}

impl std::error::Error for DomainError {}

impl From<FieldErrors> for DomainError {
    fn from(errors: FieldErrors) -> Self {
        Self::InvalidFields(errors)
    }
}
