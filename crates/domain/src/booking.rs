// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Court booking draft and its per-step validation.

use crate::error::DomainError;
use crate::types::parse_time_of_day;
use crate::validation::FieldErrors;
use serde::{Deserialize, Serialize};
use time::Date;
use validator::Validate;

/// Steps of the guided booking wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStep {
    /// Pick a club and a date.
    ClubAndDate = 1,
    /// Pick a court, start time and duration.
    Slot = 2,
    /// Enter the player's details.
    Player = 3,
    /// Review and pay.
    Payment = 4,
}

impl BookingStep {
    /// Number of steps in the wizard.
    pub const TOTAL: u8 = 4;

    /// Maps a 1-based step number to its step.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StepOutOfRange` for numbers outside `1..=4`.
    pub const fn from_number(step: u8) -> Result<Self, DomainError> {
        match step {
            1 => Ok(Self::ClubAndDate),
            2 => Ok(Self::Slot),
            3 => Ok(Self::Player),
            4 => Ok(Self::Payment),
            _ => Err(DomainError::StepOutOfRange {
                step,
                total: Self::TOTAL,
            }),
        }
    }

    /// Returns the step's 1-based number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// Contact details of the player making the booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    /// Full name.
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    /// Email for the confirmation.
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    /// Phone number.
    #[validate(length(min = 6, max = 20, message = "Phone must be 6-20 characters"))]
    pub phone: String,
}

/// Accumulated input of the booking wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    /// Selected club.
    pub club_id: Option<i64>,
    /// Selected date.
    pub date: Option<Date>,
    /// Selected court.
    pub court_id: Option<i64>,
    /// Selected start time, `HH:MM`.
    pub start_time: Option<String>,
    /// Booking length in minutes.
    pub duration_minutes: Option<u16>,
    /// Player details.
    pub player: PlayerDetails,
    /// Optional note for the club.
    pub notes: Option<String>,
    /// Book against the player's subscription instead of paying per slot.
    pub use_subscription: bool,
}

/// A partial update to a [`BookingDraft`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPatch {
    /// Replacement club.
    pub club_id: Option<i64>,
    /// Replacement date.
    pub date: Option<Date>,
    /// Replacement court.
    pub court_id: Option<i64>,
    /// Replacement start time.
    pub start_time: Option<String>,
    /// Replacement duration.
    pub duration_minutes: Option<u16>,
    /// Replacement player details.
    pub player: Option<PlayerDetails>,
    /// Replacement note.
    pub notes: Option<String>,
    /// Replacement subscription flag.
    pub use_subscription: Option<bool>,
}

impl BookingDraft {
    /// Shallow-merges a patch into the draft.
    pub fn merge(&mut self, patch: BookingPatch) {
        if patch.club_id.is_some() {
            self.club_id = patch.club_id;
        }
        if patch.date.is_some() {
            self.date = patch.date;
        }
        if patch.court_id.is_some() {
            self.court_id = patch.court_id;
        }
        if patch.start_time.is_some() {
            self.start_time = patch.start_time;
        }
        if patch.duration_minutes.is_some() {
            self.duration_minutes = patch.duration_minutes;
        }
        if let Some(player) = patch.player {
            self.player = player;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
        if let Some(use_subscription) = patch.use_subscription {
            self.use_subscription = use_subscription;
        }
    }
}

/// Validates the draft slice owned by one booking step.
///
/// The payment step validates every slice.
///
/// # Errors
///
/// Returns the field errors found in the step's slice.
pub fn validate_booking_step(step: BookingStep, draft: &BookingDraft) -> Result<(), FieldErrors> {
    let mut errors: FieldErrors = FieldErrors::new();
    match step {
        BookingStep::ClubAndDate => check_club_and_date(&mut errors, draft),
        BookingStep::Slot => check_slot(&mut errors, draft),
        BookingStep::Player => errors.check_section("player", &draft.player),
        BookingStep::Payment => {
            check_club_and_date(&mut errors, draft);
            check_slot(&mut errors, draft);
            errors.check_section("player", &draft.player);
        }
    }
    errors.into_result()
}

fn check_club_and_date(errors: &mut FieldErrors, draft: &BookingDraft) {
    if draft.club_id.is_none() {
        errors.push("club_id", "Select a club");
    }
    if draft.date.is_none() {
        errors.push("date", "Select a date");
    }
}

fn check_slot(errors: &mut FieldErrors, draft: &BookingDraft) {
    if draft.court_id.is_none() {
        errors.push("court_id", "Select a court");
    }
    match draft.start_time.as_deref() {
        None => errors.push("start_time", "Select a start time"),
        Some(start) => {
            if parse_time_of_day(start).is_err() {
                errors.push("start_time", format!("Invalid start time '{start}'"));
            }
        }
    }
    match draft.duration_minutes {
        None => errors.push("duration_minutes", "Select a duration"),
        Some(minutes) if !(30..=240).contains(&minutes) => {
            errors.push("duration_minutes", "Duration must be 30-240 minutes");
        }
        Some(_) => {}
    }
}
