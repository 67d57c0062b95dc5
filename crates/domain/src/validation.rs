// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::parse_time_of_day;
use validator::{Validate, ValidateEmail, ValidationErrors};

/// Number of digits in a one-time login code.
pub const OTP_CODE_LENGTH: usize = 6;

/// A single field-level validation failure, rendered inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path of the field, e.g. `contact.email` or `courts[1].name`.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All validation failures for one step, ordered by field path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records a failure.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// Appends every error from `other`.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns `true` if no field failed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of recorded failures.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the recorded failures.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns `true` if the given field path has at least one failure.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Returns the first message recorded for a field.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Converts the set into a `Result`, `Ok(())` when empty.
    ///
    /// # Errors
    ///
    /// Returns the set itself when it holds at least one failure.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Runs derived `validator` rules on a form section and records failures
    /// under `section.<field>`.
    pub fn check_section<T: Validate>(&mut self, section: &str, form: &T) {
        if let Err(errors) = form.validate() {
            for mut error in Self::from(errors).0 {
                error.field = format!("{section}.{}", error.field);
                self.0.push(error);
            }
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut collected: Vec<FieldError> = Vec::new();
        for (field, failures) in errors.field_errors() {
            for failure in failures {
                let message: String = failure.message.as_ref().map_or_else(
                    || format!("{field} is invalid ({})", failure.code),
                    ToString::to_string,
                );
                collected.push(FieldError::new(field.to_string(), message));
            }
        }
        // field_errors() iterates a HashMap; sort for stable rendering
        collected.sort_by(|a, b| a.field.cmp(&b.field));
        Self(collected)
    }
}

/// Validates an email address before any network call is made.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address is empty or malformed.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let trimmed: &str = email.trim();
    if trimmed.is_empty() || !trimmed.validate_email() {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Normalizes raw code input: non-digits are stripped and the result is
/// truncated to six digits.
///
/// `"12a3456"` becomes `"123456"`.
#[must_use]
pub fn sanitize_otp_code(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(OTP_CODE_LENGTH)
        .collect()
}

/// Validates that a sanitized code is exactly six digits.
///
/// # Errors
///
/// Returns `DomainError::InvalidOtpCode` otherwise.
pub fn validate_otp_code(code: &str) -> Result<(), DomainError> {
    if code.len() == OTP_CODE_LENGTH && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(DomainError::InvalidOtpCode)
    }
}

/// Checks that `open` and `close` are both `HH:MM` and that the interval is
/// not empty. Failures are recorded under `field`.
pub(crate) fn check_time_window(
    errors: &mut FieldErrors,
    field: &str,
    open: Option<&str>,
    close: Option<&str>,
) {
    let (Some(open), Some(close)) = (open, close) else {
        errors.push(field, "Opening and closing times are required");
        return;
    };
    match (parse_time_of_day(open), parse_time_of_day(close)) {
        (Ok(open_at), Ok(close_at)) => {
            if close_at <= open_at {
                errors.push(field, "Closing time must be after opening time");
            }
        }
        (Err(_), _) => errors.push(field, format!("Invalid opening time '{open}'")),
        (_, Err(_)) => errors.push(field, format!("Invalid closing time '{close}'")),
    }
}
