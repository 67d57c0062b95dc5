// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The checkout saga: create an intent, capture externally, confirm.
//!
//! The phases only move forward. A confirm can only start from
//! `AwaitingCapture`, so a failed intent is never confirmed; a new checkout
//! creates a new intent.

use crate::error::CoreError;
use padel_book_domain::{CheckoutKind, PaymentIntent};

/// Where a checkout is in the saga.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    /// Nothing started.
    #[default]
    Idle,
    /// Waiting for the server to create the intent.
    CreatingIntent,
    /// The intent exists; the external widget is capturing the payment.
    AwaitingCapture,
    /// Waiting for the server to confirm the captured payment.
    Confirming,
    /// Confirmed; the confirmation number is available.
    Succeeded,
    /// A step failed. See `needs_reconciliation` for failures after capture.
    Failed,
}

impl CheckoutPhase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CreatingIntent => "creating_intent",
            Self::AwaitingCapture => "awaiting_capture",
            Self::Confirming => "confirming",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    /// Returns `true` while a checkout is between start and outcome.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(
            self,
            Self::CreatingIntent | Self::AwaitingCapture | Self::Confirming
        )
    }
}

impl std::fmt::Display for CheckoutPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Commands accepted by [`CheckoutState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutCommand {
    /// Start a checkout; the intent request is about to be sent.
    Begin {
        /// What is being paid for.
        kind: CheckoutKind,
    },
    /// The server created the intent.
    IntentCreated {
        /// The new intent.
        intent: PaymentIntent,
    },
    /// Creating the intent failed; no intent is kept.
    IntentFailed {
        /// Error shown to the user.
        error: String,
    },
    /// The external capture failed or was abandoned.
    CaptureFailed {
        /// Error shown to the user.
        error: String,
    },
    /// The capture succeeded; the confirm request is about to be sent.
    ConfirmStarted,
    /// The server confirmed the payment.
    Confirmed {
        /// Booking or registration number.
        confirmation_number: String,
    },
    /// Confirming failed after the payment was captured.
    ConfirmFailed {
        /// Error shown to the user.
        error: String,
    },
    /// Return to idle.
    Reset,
}

impl CheckoutCommand {
    /// Returns the command name used in transition errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Begin { .. } => "Begin",
            Self::IntentCreated { .. } => "IntentCreated",
            Self::IntentFailed { .. } => "IntentFailed",
            Self::CaptureFailed { .. } => "CaptureFailed",
            Self::ConfirmStarted => "ConfirmStarted",
            Self::Confirmed { .. } => "Confirmed",
            Self::ConfirmFailed { .. } => "ConfirmFailed",
            Self::Reset => "Reset",
        }
    }
}

/// State of the current checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutState {
    phase: CheckoutPhase,
    kind: Option<CheckoutKind>,
    intent: Option<PaymentIntent>,
    confirmation_number: Option<String>,
    error: Option<String>,
    needs_reconciliation: bool,
}

impl CheckoutState {
    /// Creates an idle checkout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: CheckoutPhase::Idle,
            kind: None,
            intent: None,
            confirmation_number: None,
            error: None,
            needs_reconciliation: false,
        }
    }

    /// Returns the phase.
    #[must_use]
    pub const fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// Returns what the checkout pays for.
    #[must_use]
    pub const fn kind(&self) -> Option<CheckoutKind> {
        self.kind
    }

    /// Returns the current intent.
    #[must_use]
    pub const fn intent(&self) -> Option<&PaymentIntent> {
        self.intent.as_ref()
    }

    /// Returns the confirmation number after success.
    #[must_use]
    pub fn confirmation_number(&self) -> Option<&str> {
        self.confirmation_number.as_deref()
    }

    /// Returns the last error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` once the payment is confirmed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.phase, CheckoutPhase::Succeeded)
    }

    /// Returns `true` if a payment was captured but never confirmed.
    ///
    /// The charge and the booking may disagree until someone reconciles
    /// them by hand.
    #[must_use]
    pub const fn needs_reconciliation(&self) -> bool {
        self.needs_reconciliation
    }

    /// Applies a command.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Busy` if `Begin` or `Reset` arrives while a
    /// checkout is in flight, and `CoreError::InvalidTransition` for any command the
    /// current phase does not accept. The state is unchanged on error.
    pub fn apply(&mut self, command: CheckoutCommand) -> Result<(), CoreError> {
        let name: &'static str = command.name();
        match (self.phase, command) {
            (phase, CheckoutCommand::Begin { .. } | CheckoutCommand::Reset)
                if phase.is_in_flight() =>
            {
                return Err(CoreError::Busy {
                    operation: "Checkout",
                });
            }
            (
                CheckoutPhase::Idle | CheckoutPhase::Failed,
                CheckoutCommand::Begin { kind },
            ) => {
                *self = Self::new();
                self.kind = Some(kind);
                self.phase = CheckoutPhase::CreatingIntent;
            }
            (CheckoutPhase::CreatingIntent, CheckoutCommand::IntentCreated { intent }) => {
                self.intent = Some(intent);
                self.phase = CheckoutPhase::AwaitingCapture;
            }
            (CheckoutPhase::CreatingIntent, CheckoutCommand::IntentFailed { error }) => {
                self.intent = None;
                self.error = Some(error);
                self.phase = CheckoutPhase::Failed;
            }
            (CheckoutPhase::AwaitingCapture, CheckoutCommand::CaptureFailed { error }) => {
                self.intent = None;
                self.error = Some(error);
                self.phase = CheckoutPhase::Failed;
            }
            (CheckoutPhase::AwaitingCapture, CheckoutCommand::ConfirmStarted) => {
                self.phase = CheckoutPhase::Confirming;
            }
            (
                CheckoutPhase::Confirming,
                CheckoutCommand::Confirmed {
                    confirmation_number,
                },
            ) => {
                self.confirmation_number = Some(confirmation_number);
                self.phase = CheckoutPhase::Succeeded;
            }
            (CheckoutPhase::Confirming, CheckoutCommand::ConfirmFailed { error }) => {
                // the intent is kept for reconciliation
                self.error = Some(error);
                self.needs_reconciliation = true;
                self.phase = CheckoutPhase::Failed;
            }
            (_, CheckoutCommand::Reset) => *self = Self::new(),
            (phase, _) => {
                return Err(CoreError::InvalidTransition {
                    slice: "checkout",
                    state: phase.to_string(),
                    command: name,
                });
            }
        }
        Ok(())
    }
}
