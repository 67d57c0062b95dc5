// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod booking;
mod error;
mod onboarding;
mod payment;
mod resources;
mod session;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{
    AvailabilityBundle, AvailabilityQuery, ClassBooking, CourtView, EventCourtSchedule,
    ReservedSlot, ScheduledEvent,
};
pub use booking::{BookingDraft, BookingPatch, BookingStep, PlayerDetails, validate_booking_step};
pub use error::DomainError;
pub use onboarding::{
    Address, ClubIdentity, Contact, CourtDraft, DayHours, FeatureFlags, OnboardingDraft,
    OnboardingPatch, OnboardingStep, Policies, Pricing, WeeklyHours, validate_onboarding_step,
};
pub use payment::{CheckoutKind, PaymentIntent};
pub use resources::{
    AdminUser, AdminUserInput, BlockScope, BlockSpan, BlockedSlot, BlockedSlotInput, ClubPolicy,
    ClubPolicyInput, CourtInput, CourtRecord, Event, EventInput, Instructor, InstructorInput,
    Player, PlayerInput, Resource,
};
pub use session::{AdminProfile, CustomerProfile};
pub use types::{
    AdminRole, CourtType, Currency, Surface, format_date, parse_date, parse_time_of_day,
};
pub use validation::{
    FieldError, FieldErrors, OTP_CODE_LENGTH, sanitize_otp_code, validate_email,
    validate_otp_code,
};
