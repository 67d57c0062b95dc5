// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a checkout pays for. Each kind has its own pair of payment
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutKind {
    /// A court reservation.
    CourtBooking,
    /// Registration for a club event.
    EventRegistration,
    /// A private class with an instructor.
    PrivateClass,
}

impl CheckoutKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CourtBooking => "court_booking",
            Self::EventRegistration => "event_registration",
            Self::PrivateClass => "private_class",
        }
    }
}

impl FromStr for CheckoutKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "court_booking" => Ok(Self::CourtBooking),
            "event_registration" => Ok(Self::EventRegistration),
            "private_class" => Ok(Self::PrivateClass),
            _ => Err(DomainError::InvalidCheckoutKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for CheckoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A server-issued payment intent.
///
/// The client secret is handed to the external payment widget; the intent id
/// is used to confirm. An intent is never confirmed twice.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    /// Secret for the payment widget.
    pub client_secret: String,
    /// Processor intent id.
    pub payment_intent_id: String,
    /// Internal transaction id.
    pub transaction_id: i64,
}

// The client secret stays out of logs.
impl std::fmt::Debug for PaymentIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentIntent")
            .field("client_secret", &"<redacted>")
            .field("payment_intent_id", &self.payment_intent_id)
            .field("transaction_id", &self.transaction_id)
            .finish()
    }
}
