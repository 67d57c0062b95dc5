// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request bodies and response shapes of the REST API.

use crate::error::ClientError;
use padel_book_domain::{
    AdminProfile, BookingDraft, BookingStep, CheckoutKind, CustomerProfile, PlayerDetails,
    format_date, validate_booking_step,
};
use serde::{Deserialize, Serialize};

/// A response body that is either the payload itself or `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// `{ "data": payload }`.
    Wrapped {
        /// The payload.
        data: T,
    },
    /// The bare payload.
    Bare(T),
}

impl<T> Envelope<T> {
    /// Returns the payload, whichever shape it arrived in.
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    /// Preferred error text.
    pub message: Option<String>,
    /// Alternative error text.
    pub error: Option<String>,
}

impl ErrorBody {
    /// Returns the first non-empty message.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.filter(|e| !e.trim().is_empty()))
    }
}

/// Body of the send-code endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendCodeRequest<'a> {
    /// Address the code is sent to.
    pub email: &'a str,
}

/// Body of the verify-code endpoints.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct VerifyCodeRequest<'a> {
    /// Address the code was sent to.
    pub email: &'a str,
    /// Six-digit code.
    pub code: &'a str,
}

/// A successful admin login.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AdminLogin {
    /// Bearer token.
    pub token: String,
    /// The logged-in admin.
    #[serde(alias = "user")]
    pub admin: AdminProfile,
}

impl std::fmt::Debug for AdminLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminLogin")
            .field("token", &"<redacted>")
            .field("admin", &self.admin)
            .finish()
    }
}

/// A successful customer login.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CustomerLogin {
    /// Bearer token.
    pub token: String,
    /// The logged-in customer.
    #[serde(alias = "user")]
    pub customer: CustomerProfile,
}

impl std::fmt::Debug for CustomerLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerLogin")
            .field("token", &"<redacted>")
            .field("customer", &self.customer)
            .finish()
    }
}

/// Response of the admin session validation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminValidation {
    /// The admin the token belongs to.
    #[serde(alias = "user")]
    pub admin: AdminProfile,
}

/// A court booking, as sent to the court payment endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Club.
    pub club_id: i64,
    /// Court.
    pub court_id: i64,
    /// Date, `YYYY-MM-DD`.
    pub date: String,
    /// Start, `HH:MM`.
    pub start_time: String,
    /// Length in minutes.
    pub duration_minutes: u16,
    /// Player name.
    pub player_name: String,
    /// Player email.
    pub player_email: String,
    /// Player phone.
    pub player_phone: String,
    /// Note for the club.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Pay with the player's subscription.
    pub use_subscription: bool,
}

impl BookingRequest {
    /// Builds the request from a complete booking draft.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if any booking step is incomplete.
    pub fn from_draft(draft: &BookingDraft) -> Result<Self, ClientError> {
        validate_booking_step(BookingStep::Payment, draft)?;
        let (Some(club_id), Some(date), Some(court_id), Some(start_time), Some(duration)) = (
            draft.club_id,
            draft.date,
            draft.court_id,
            draft.start_time.as_ref(),
            draft.duration_minutes,
        ) else {
            return Err(ClientError::InvalidState {
                command: "check out",
                state: String::from("the booking is incomplete"),
            });
        };
        Ok(Self {
            club_id,
            court_id,
            date: format_date(date)?,
            start_time: start_time.clone(),
            duration_minutes: duration,
            player_name: draft.player.name.clone(),
            player_email: draft.player.email.clone(),
            player_phone: draft.player.phone.clone(),
            notes: draft.notes.clone().filter(|n| !n.trim().is_empty()),
            use_subscription: draft.use_subscription,
        })
    }
}

/// Registration for a club event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistrationRequest {
    /// Event.
    pub event_id: i64,
    /// Registering player.
    #[serde(flatten)]
    pub player: PlayerDetails,
}

/// A private class with an instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBookingRequest {
    /// Instructor.
    pub instructor_id: i64,
    /// Club.
    pub club_id: i64,
    /// Date, `YYYY-MM-DD`.
    pub date: String,
    /// Start, `HH:MM`.
    pub start_time: String,
    /// Length in minutes.
    pub duration_minutes: u16,
    /// Booking player.
    #[serde(flatten)]
    pub player: PlayerDetails,
}

/// What a checkout pays for, with the details the server needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckoutDetails {
    /// A court reservation.
    CourtBooking(BookingRequest),
    /// An event registration.
    EventRegistration(EventRegistrationRequest),
    /// A private class.
    PrivateClass(ClassBookingRequest),
}

impl CheckoutDetails {
    /// Returns the checkout kind.
    #[must_use]
    pub const fn kind(&self) -> CheckoutKind {
        match self {
            Self::CourtBooking(_) => CheckoutKind::CourtBooking,
            Self::EventRegistration(_) => CheckoutKind::EventRegistration,
            Self::PrivateClass(_) => CheckoutKind::PrivateClass,
        }
    }
}

/// Body of the confirm endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest<'a> {
    /// Intent being confirmed.
    pub payment_intent_id: &'a str,
    /// Server transaction created with the intent.
    pub transaction_id: i64,
    /// The original checkout details.
    #[serde(flatten)]
    pub details: &'a CheckoutDetails,
}

/// Response of the confirm endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfirmationResponse {
    /// Set for event registrations and classes.
    pub registration_number: Option<String>,
    /// Set for court bookings.
    pub booking_number: Option<String>,
}

impl ConfirmationResponse {
    /// Returns whichever confirmation number the server sent.
    #[must_use]
    pub fn into_number(self) -> Option<String> {
        self.registration_number.or(self.booking_number)
    }
}

/// Response of the club onboarding endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OnboardingResponse {
    /// The created club.
    #[serde(alias = "clubId")]
    pub id: i64,
}

/// Response of the instructor availability count endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AvailabilityCountResponse {
    /// Number of bookable slots.
    #[serde(alias = "availableSlots")]
    pub count: u32,
}
