// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The server's availability read-model for one club and date window.
//!
//! Nothing here decides whether a slot is free. The bundle is rendered
//! exactly as the server computed it; the helpers only select rows.

use crate::error::DomainError;
use crate::resources::{BlockedSlot, CourtRecord};
use crate::types::format_date;
use serde::{Deserialize, Serialize};
use time::Date;

/// Parameters of one availability fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityQuery {
    /// Club to query.
    pub club_id: i64,
    /// Inclusive first date.
    pub start_date: Date,
    /// Inclusive last date.
    pub end_date: Date,
    /// Restrict the bundle to one court.
    pub court_id: Option<i64>,
}

impl AvailabilityQuery {
    /// Creates a query for an inclusive date window.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `end_date` is before
    /// `start_date`.
    pub fn new(
        club_id: i64,
        start_date: Date,
        end_date: Date,
        court_id: Option<i64>,
    ) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            club_id,
            start_date,
            end_date,
            court_id,
        })
    }

    /// Renders the query string parameters in request order.
    ///
    /// # Errors
    ///
    /// Returns an error if a date cannot be formatted.
    pub fn to_params(&self) -> Result<Vec<(&'static str, String)>, DomainError> {
        let mut params: Vec<(&'static str, String)> = vec![
            ("clubId", self.club_id.to_string()),
            ("startDate", format_date(self.start_date)?),
            ("endDate", format_date(self.end_date)?),
        ];
        if let Some(court_id) = self.court_id {
            params.push(("courtId", court_id.to_string()));
        }
        Ok(params)
    }
}

/// An existing court reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedSlot {
    /// Server id.
    pub id: i64,
    /// Reserved court.
    pub court_id: i64,
    /// Date, `YYYY-MM-DD`.
    pub date: String,
    /// Start, `HH:MM`.
    pub start_time: String,
    /// End, `HH:MM`.
    pub end_time: String,
    /// Server-side status, e.g. `confirmed`.
    #[serde(default)]
    pub status: Option<String>,
}

/// The part of an event held on one court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCourtSchedule {
    /// Court used.
    pub court_id: i64,
    /// Start, `HH:MM`.
    pub start_time: String,
    /// End, `HH:MM`.
    pub end_time: String,
}

/// An event occupying courts during the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    /// Server id.
    pub id: i64,
    /// Title.
    pub name: String,
    /// Date, `YYYY-MM-DD`.
    pub date: String,
    /// Overall start, `HH:MM`.
    pub start_time: String,
    /// Overall end, `HH:MM`.
    pub end_time: String,
    /// Per-court sub-schedules.
    #[serde(default)]
    pub court_schedules: Vec<EventCourtSchedule>,
}

/// A private class held with an instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBooking {
    /// Server id.
    pub id: i64,
    /// Instructor teaching the class.
    pub instructor_id: i64,
    /// Court used, if assigned.
    #[serde(default)]
    pub court_id: Option<i64>,
    /// Date, `YYYY-MM-DD`.
    pub date: String,
    /// Start, `HH:MM`.
    pub start_time: String,
    /// End, `HH:MM`.
    pub end_time: String,
}

/// Snapshot of everything the server returned for one query.
///
/// Absent arrays decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityBundle {
    /// Courts of the club.
    pub courts: Vec<CourtRecord>,
    /// Existing reservations.
    pub bookings: Vec<ReservedSlot>,
    /// Blocked dates and hours.
    pub blocked_slots: Vec<BlockedSlot>,
    /// Events occupying courts.
    pub events: Vec<ScheduledEvent>,
    /// Private classes.
    #[serde(alias = "privateClasses")]
    pub classes: Vec<ClassBooking>,
}

/// Server rows relevant to one court, borrowed from a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtView<'a> {
    /// The court.
    pub court: &'a CourtRecord,
    /// Reservations on the court.
    pub bookings: Vec<&'a ReservedSlot>,
    /// Court-specific and club-wide blocks.
    pub blocks: Vec<&'a BlockedSlot>,
    /// Event sub-schedules on the court, with their event.
    pub events: Vec<(&'a ScheduledEvent, &'a EventCourtSchedule)>,
    /// Classes assigned to the court.
    pub classes: Vec<&'a ClassBooking>,
}

impl AvailabilityBundle {
    /// Returns `true` if the server returned no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courts.is_empty()
            && self.bookings.is_empty()
            && self.blocked_slots.is_empty()
            && self.events.is_empty()
            && self.classes.is_empty()
    }

    /// Returns the rows for one court, or `None` if the court is not part of
    /// the bundle.
    #[must_use]
    pub fn court_view(&self, court_id: i64) -> Option<CourtView<'_>> {
        let court: &CourtRecord = self.courts.iter().find(|c| c.id == court_id)?;
        Some(CourtView {
            court,
            bookings: self
                .bookings
                .iter()
                .filter(|b| b.court_id == court_id)
                .collect(),
            blocks: self
                .blocked_slots
                .iter()
                .filter(|b| b.applies_to(court_id))
                .collect(),
            events: self
                .events
                .iter()
                .flat_map(|event| {
                    event
                        .court_schedules
                        .iter()
                        .filter(move |s| s.court_id == court_id)
                        .map(move |s| (event, s))
                })
                .collect(),
            classes: self
                .classes
                .iter()
                .filter(|c| c.court_id == Some(court_id))
                .collect(),
        })
    }

    /// Returns every court view in display order.
    #[must_use]
    pub fn court_views(&self) -> Vec<CourtView<'_>> {
        let mut courts: Vec<&CourtRecord> = self.courts.iter().collect();
        courts.sort_by_key(|c| (c.display_order, c.id));
        courts
            .into_iter()
            .filter_map(|c| self.court_view(c.id))
            .collect()
    }

    /// Returns the club-wide blocks.
    #[must_use]
    pub fn club_wide_blocks(&self) -> Vec<&BlockedSlot> {
        self.blocked_slots
            .iter()
            .filter(|b| b.court_id.is_none())
            .collect()
    }
}
