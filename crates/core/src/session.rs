// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-time-code login state, shared by the admin and customer sessions.

use crate::error::CoreError;
use padel_book_domain::{sanitize_otp_code, validate_email, validate_otp_code};

/// Where the user is in the login flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginStep {
    /// Entering an email address.
    #[default]
    Email,
    /// Entering the emailed code.
    Code,
    /// Logged in.
    Authenticated,
}

impl LoginStep {
    /// Converts this step to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Code => "code",
            Self::Authenticated => "authenticated",
        }
    }
}

impl std::fmt::Display for LoginStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Commands accepted by a [`SessionState`].
///
/// `*Pending` commands are applied before a request, `*Fulfilled` and
/// `*Rejected` after it.
#[derive(Clone, PartialEq, Eq)]
pub enum SessionCommand<P> {
    /// A code is about to be requested for `email`.
    SendCodePending {
        /// Address the code is sent to.
        email: String,
    },
    /// The code was sent.
    SendCodeFulfilled,
    /// Sending the code failed.
    SendCodeRejected {
        /// Error shown to the user.
        error: String,
    },
    /// The user typed into the code field.
    CodeEntered {
        /// Raw input, sanitized on apply.
        raw: String,
    },
    /// The current code is about to be verified.
    VerifyPending,
    /// The code was accepted.
    VerifyFulfilled {
        /// Bearer token.
        token: String,
        /// The logged-in profile.
        profile: P,
    },
    /// The code was refused.
    VerifyRejected {
        /// Error shown to the user.
        error: String,
    },
    /// A stored token is about to be validated.
    ValidatePending,
    /// The stored token is still valid.
    ValidateFulfilled {
        /// Bearer token that was validated.
        token: String,
        /// The profile it belongs to.
        profile: P,
    },
    /// A session was loaded from storage without a server call.
    Restored {
        /// Stored bearer token.
        token: String,
        /// Stored profile.
        profile: P,
    },
    /// Return from the code step to the email step.
    BackToEmail,
    /// Drop the session. Used for logout, missing tokens and failed
    /// validation alike.
    Cleared,
}

impl<P> SessionCommand<P> {
    /// Returns the command name used in transition errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SendCodePending { .. } => "SendCodePending",
            Self::SendCodeFulfilled => "SendCodeFulfilled",
            Self::SendCodeRejected { .. } => "SendCodeRejected",
            Self::CodeEntered { .. } => "CodeEntered",
            Self::VerifyPending => "VerifyPending",
            Self::VerifyFulfilled { .. } => "VerifyFulfilled",
            Self::VerifyRejected { .. } => "VerifyRejected",
            Self::ValidatePending => "ValidatePending",
            Self::ValidateFulfilled { .. } => "ValidateFulfilled",
            Self::Restored { .. } => "Restored",
            Self::BackToEmail => "BackToEmail",
            Self::Cleared => "Cleared",
        }
    }
}

impl<P> std::fmt::Debug for SessionCommand<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // tokens and codes stay out of debug output
        f.write_str(self.name())
    }
}

/// Login progress and the authenticated identity.
///
/// The token and the profile are set and cleared together.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionState<P> {
    step: LoginStep,
    email: String,
    code: String,
    token: Option<String>,
    profile: Option<P>,
    loading: bool,
    error: Option<String>,
}

impl<P: Clone> SessionState<P> {
    /// Creates a logged-out session at the email step.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: LoginStep::Email,
            email: String::new(),
            code: String::new(),
            token: None,
            profile: None,
            loading: false,
            error: None,
        }
    }

    /// Returns the login step.
    #[must_use]
    pub const fn step(&self) -> LoginStep {
        self.step
    }

    /// Returns the email the code was sent to.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the sanitized code entered so far.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the bearer token, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the logged-in profile.
    #[must_use]
    pub const fn profile(&self) -> Option<&P> {
        self.profile.as_ref()
    }

    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the last request error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` if a token and a profile are held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.profile.is_some()
    }

    /// Returns `true` if the entered code can be submitted.
    #[must_use]
    pub fn can_submit_code(&self) -> bool {
        validate_otp_code(&self.code).is_ok()
    }

    /// Applies a command.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Busy` if a request is already in flight,
    /// `CoreError::DomainViolation` if the email or code is malformed, and
    /// `CoreError::InvalidTransition` for commands that do not fit the
    /// current step. The state is unchanged on error.
    pub fn apply(&mut self, command: SessionCommand<P>) -> Result<(), CoreError> {
        match command {
            SessionCommand::SendCodePending { email } => {
                self.guard_idle("Sending a code")?;
                validate_email(&email)?;
                self.email = email.trim().to_string();
                self.loading = true;
                self.error = None;
            }
            SessionCommand::SendCodeFulfilled => {
                self.loading = false;
                self.code.clear();
                self.step = LoginStep::Code;
            }
            SessionCommand::SendCodeRejected { error } => {
                self.loading = false;
                self.error = Some(error);
                self.step = LoginStep::Email;
            }
            SessionCommand::CodeEntered { raw } => {
                self.code = sanitize_otp_code(&raw);
            }
            SessionCommand::VerifyPending => {
                self.guard_idle("Verifying a code")?;
                if self.step != LoginStep::Code {
                    return Err(self.invalid("VerifyPending"));
                }
                validate_otp_code(&self.code)?;
                self.loading = true;
                self.error = None;
            }
            SessionCommand::VerifyFulfilled { token, profile }
            | SessionCommand::ValidateFulfilled { token, profile }
            | SessionCommand::Restored { token, profile } => {
                self.loading = false;
                self.error = None;
                self.code.clear();
                self.token = Some(token);
                self.profile = Some(profile);
                self.step = LoginStep::Authenticated;
            }
            SessionCommand::VerifyRejected { error } => {
                // the code is kept so the user can correct it
                self.loading = false;
                self.error = Some(error);
                self.step = LoginStep::Code;
            }
            SessionCommand::ValidatePending => {
                self.guard_idle("Validating the session")?;
                self.loading = true;
                self.error = None;
            }
            SessionCommand::BackToEmail => {
                if self.step != LoginStep::Code {
                    return Err(self.invalid("BackToEmail"));
                }
                self.code.clear();
                self.error = None;
                self.step = LoginStep::Email;
            }
            SessionCommand::Cleared => {
                *self = Self::new();
            }
        }
        Ok(())
    }

    const fn guard_idle(&self, operation: &'static str) -> Result<(), CoreError> {
        if self.loading {
            return Err(CoreError::Busy { operation });
        }
        Ok(())
    }

    fn invalid(&self, command: &'static str) -> CoreError {
        CoreError::InvalidTransition {
            slice: "session",
            state: self.step.to_string(),
            command,
        }
    }
}

impl<P: Clone> Default for SessionState<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: std::fmt::Debug> std::fmt::Debug for SessionState<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("step", &self.step)
            .field("email", &self.email)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("profile", &self.profile)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
