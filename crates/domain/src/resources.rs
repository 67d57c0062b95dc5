// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Records managed through the admin CRUD endpoints.

use crate::types::{AdminRole, CourtType, Surface};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// An admin-managed record type.
///
/// Every resource lives under `/admin/<NAME>` and carries a
/// server-assigned integer id.
pub trait Resource:
    Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Payload sent to create a record (everything except the id).
    type Input: Clone + std::fmt::Debug + Serialize + Send + Sync + 'static;

    /// Path segment under `/admin/`, e.g. `instructors`.
    const NAME: &'static str;

    /// Server-assigned id.
    fn id(&self) -> i64;
}

/// A private-class instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    /// Server id.
    pub id: i64,
    /// Owning club.
    #[serde(default)]
    pub club_id: Option<i64>,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Short biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Hourly rate in minor currency units.
    #[serde(default)]
    pub hourly_rate: Option<u32>,
    /// Whether the instructor currently takes bookings.
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Creation payload for an [`Instructor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorInput {
    /// Owning club.
    pub club_id: Option<i64>,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Short biography.
    pub bio: Option<String>,
    /// Hourly rate in minor currency units.
    pub hourly_rate: Option<u32>,
}

impl Resource for Instructor {
    type Input = InstructorInput;
    const NAME: &'static str = "instructors";

    fn id(&self) -> i64 {
        self.id
    }
}

/// A court as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtRecord {
    /// Server id.
    pub id: i64,
    /// Owning club.
    #[serde(default)]
    pub club_id: Option<i64>,
    /// Court name.
    pub name: String,
    /// Enclosure.
    #[serde(default)]
    pub court_type: CourtType,
    /// Playing surface.
    #[serde(default)]
    pub surface: Surface,
    /// Lighting available.
    #[serde(default)]
    pub has_lighting: bool,
    /// Display position.
    #[serde(default)]
    pub display_order: u32,
    /// Whether the court is bookable.
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Creation payload for a [`CourtRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtInput {
    /// Owning club.
    pub club_id: Option<i64>,
    /// Court name.
    pub name: String,
    /// Enclosure.
    pub court_type: CourtType,
    /// Playing surface.
    pub surface: Surface,
    /// Lighting available.
    pub has_lighting: bool,
    /// Display position.
    pub display_order: u32,
}

impl Resource for CourtRecord {
    type Input = CourtInput;
    const NAME: &'static str = "courts";

    fn id(&self) -> i64 {
        self.id
    }
}

/// A club event open for registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Server id.
    pub id: i64,
    /// Owning club.
    #[serde(default)]
    pub club_id: Option<i64>,
    /// Event title.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Event date, `YYYY-MM-DD`.
    pub date: String,
    /// Start, `HH:MM`.
    pub start_time: String,
    /// End, `HH:MM`.
    pub end_time: String,
    /// Registration price in minor currency units.
    #[serde(default)]
    pub price: u32,
    /// Maximum registrations.
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Courts the event occupies.
    #[serde(default)]
    pub court_ids: Vec<i64>,
}

/// Creation payload for an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    /// Owning club.
    pub club_id: Option<i64>,
    /// Event title.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Event date, `YYYY-MM-DD`.
    pub date: String,
    /// Start, `HH:MM`.
    pub start_time: String,
    /// End, `HH:MM`.
    pub end_time: String,
    /// Registration price in minor currency units.
    pub price: u32,
    /// Maximum registrations.
    pub capacity: Option<u32>,
    /// Courts the event occupies.
    pub court_ids: Vec<i64>,
}

impl Resource for Event {
    type Input = EventInput;
    const NAME: &'static str = "events";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Whether a block applies to one court or the whole club.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockScope {
    /// Every court of the club.
    ClubWide,
    /// A single court.
    Court(i64),
}

/// Which part of the day a block covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSpan<'a> {
    /// The entire day.
    WholeDay,
    /// `start..end`, both `HH:MM`.
    Partial {
        /// Start, `HH:MM`.
        start: &'a str,
        /// End, `HH:MM`.
        end: &'a str,
    },
}

/// A date (or part of one) on which courts cannot be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedSlot {
    /// Server id.
    pub id: i64,
    /// Owning club.
    #[serde(default)]
    pub club_id: Option<i64>,
    /// Blocked court; absent for club-wide blocks.
    #[serde(default)]
    pub court_id: Option<i64>,
    /// Blocked date, `YYYY-MM-DD`.
    pub date: String,
    /// Start of a partial block, `HH:MM`.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End of a partial block, `HH:MM`.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Reason shown to admins.
    #[serde(default)]
    pub reason: Option<String>,
}

impl BlockedSlot {
    /// Returns which courts the block applies to.
    #[must_use]
    pub const fn scope(&self) -> BlockScope {
        match self.court_id {
            Some(court_id) => BlockScope::Court(court_id),
            None => BlockScope::ClubWide,
        }
    }

    /// Returns which part of the day the block covers.
    ///
    /// A block missing either bound covers the whole day.
    #[must_use]
    pub fn span(&self) -> BlockSpan<'_> {
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) => BlockSpan::Partial { start, end },
            _ => BlockSpan::WholeDay,
        }
    }

    /// Returns `true` if the block applies to the given court.
    #[must_use]
    pub fn applies_to(&self, court_id: i64) -> bool {
        match self.scope() {
            BlockScope::ClubWide => true,
            BlockScope::Court(id) => id == court_id,
        }
    }
}

/// Creation payload for a [`BlockedSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedSlotInput {
    /// Owning club.
    pub club_id: Option<i64>,
    /// Blocked court; `None` blocks the whole club.
    pub court_id: Option<i64>,
    /// Blocked date, `YYYY-MM-DD`.
    pub date: String,
    /// Start of a partial block.
    pub start_time: Option<String>,
    /// End of a partial block.
    pub end_time: Option<String>,
    /// Reason shown to admins.
    pub reason: Option<String>,
}

impl Resource for BlockedSlot {
    type Input = BlockedSlotInput;
    const NAME: &'static str = "blocked-slots";

    fn id(&self) -> i64 {
        self.id
    }
}

/// An administrative account. Accounts are only provisioned here by other
/// admins; there is no self-registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    /// Server id.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Role.
    pub role: AdminRole,
    /// Club scope for club admins.
    #[serde(default)]
    pub club_id: Option<i64>,
}

/// Creation payload for an [`AdminUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserInput {
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: Option<String>,
    /// Role.
    pub role: AdminRole,
    /// Club scope for club admins.
    pub club_id: Option<i64>,
}

impl Resource for AdminUser {
    type Input = AdminUserInput;
    const NAME: &'static str = "admins";

    fn id(&self) -> i64 {
        self.id
    }
}

/// A published club policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubPolicy {
    /// Server id.
    pub id: i64,
    /// Owning club.
    #[serde(default)]
    pub club_id: Option<i64>,
    /// Policy title.
    pub title: String,
    /// Policy body.
    pub content: String,
}

/// Creation payload for a [`ClubPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubPolicyInput {
    /// Owning club.
    pub club_id: Option<i64>,
    /// Policy title.
    pub title: String,
    /// Policy body.
    pub content: String,
}

impl Resource for ClubPolicy {
    type Input = ClubPolicyInput;
    const NAME: &'static str = "policies";

    fn id(&self) -> i64 {
        self.id
    }
}

/// A registered player, as seen by admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Server id.
    pub id: i64,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email.
    pub email: String,
    /// Phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Self-reported level.
    #[serde(default)]
    pub level: Option<String>,
}

/// Creation payload for a [`Player`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInput {
    /// Full name.
    pub name: Option<String>,
    /// Email.
    pub email: String,
    /// Phone.
    pub phone: Option<String>,
    /// Self-reported level.
    pub level: Option<String>,
}

impl Resource for Player {
    type Input = PlayerInput;
    const NAME: &'static str = "players";

    fn id(&self) -> i64 {
        self.id
    }
}

const fn default_true() -> bool {
    true
}
