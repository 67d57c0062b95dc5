// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Club onboarding draft and its per-step validation.

use crate::error::DomainError;
use crate::types::{CourtType, Currency, Surface};
use crate::validation::{FieldErrors, check_time_window};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Steps of the club onboarding wizard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    /// Club name and description.
    Identity = 1,
    /// Street address.
    Address = 2,
    /// Contact details.
    Contact = 3,
    /// Court list.
    Courts = 4,
    /// Hourly rate, slot duration, currency.
    Pricing = 5,
    /// Weekly operating hours.
    Hours = 6,
    /// Optional features and free-text policies.
    Features = 7,
    /// Read-only summary of everything above.
    Review = 8,
}

impl OnboardingStep {
    /// Number of steps in the wizard.
    pub const TOTAL: u8 = 8;

    /// Maps a 1-based step number to its step.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StepOutOfRange` for numbers outside `1..=8`.
    pub const fn from_number(step: u8) -> Result<Self, DomainError> {
        match step {
            1 => Ok(Self::Identity),
            2 => Ok(Self::Address),
            3 => Ok(Self::Contact),
            4 => Ok(Self::Courts),
            5 => Ok(Self::Pricing),
            6 => Ok(Self::Hours),
            7 => Ok(Self::Features),
            8 => Ok(Self::Review),
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

    /// Short title shown in the step indicator.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Identity => "Club",
            Self::Address => "Location",
            Self::Contact => "Contact",
            Self::Courts => "Courts",
            Self::Pricing => "Pricing",
            Self::Hours => "Opening hours",
            Self::Features => "Features & policies",
            Self::Review => "Review",
        }
    }
}

/// Club name and description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClubIdentity {
    /// Public club name.
    #[validate(length(min = 2, max = 120, message = "Club name must be 2-120 characters"))]
    pub name: String,
    /// Free-text description.
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: String,
}

/// Club street address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Address {
    /// Street and number.
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    /// City.
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    /// Postal code.
    #[validate(length(min = 3, max = 12, message = "Postal code must be 3-12 characters"))]
    pub postal_code: String,
    /// Country.
    #[validate(length(min = 2, message = "Country is required"))]
    pub country: String,
}

/// Club contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Contact {
    /// Contact email.
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 6, max = 20, message = "Phone must be 6-20 characters"))]
    pub phone: String,
    /// Optional website.
    #[validate(length(max = 200, message = "Website must be at most 200 characters"))]
    pub website: Option<String>,
}

/// A court as entered during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtDraft {
    /// Court name, e.g. "Court 1".
    pub name: String,
    /// Enclosure.
    pub court_type: CourtType,
    /// Playing surface.
    pub surface: Surface,
    /// Whether the court has lighting for evening play.
    pub has_lighting: bool,
    /// 1-based position assigned when the court was appended.
    pub display_order: u32,
}

/// Court pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Pricing {
    /// Hourly rate in minor currency units (cents).
    #[validate(range(min = 100, max = 100000, message = "Hourly rate must be between 1.00 and 1000.00"))]
    pub hourly_rate: u32,
    /// Length of one bookable slot in minutes.
    #[validate(range(min = 30, max = 240, message = "Slot duration must be 30-240 minutes"))]
    pub slot_duration_minutes: u16,
    /// Pricing currency.
    pub currency: Currency,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            hourly_rate: 0,
            slot_duration_minutes: 90,
            currency: Currency::default(),
        }
    }
}

/// Opening hours for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Opening time, `HH:MM`.
    pub open: Option<String>,
    /// Closing time, `HH:MM`.
    pub close: Option<String>,
    /// The club is closed all day.
    pub closed: bool,
}

impl DayHours {
    /// An open day between two `HH:MM` times.
    #[must_use]
    pub fn open_between(open: &str, close: &str) -> Self {
        Self {
            open: Some(open.to_string()),
            close: Some(close.to_string()),
            closed: false,
        }
    }

    /// A day on which the club is closed.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            open: None,
            close: None,
            closed: true,
        }
    }
}

/// Operating hours for the seven days of the week, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours([DayHours; 7]);

impl WeeklyHours {
    /// Builds weekly hours from seven entries, Monday first.
    #[must_use]
    pub const fn new(days: [DayHours; 7]) -> Self {
        Self(days)
    }

    /// Returns the entry for a weekday.
    #[must_use]
    pub fn day(&self, weekday: time::Weekday) -> &DayHours {
        &self.0[usize::from(weekday.number_days_from_monday())]
    }

    /// Replaces the entry for a weekday.
    pub fn set_day(&mut self, weekday: time::Weekday, hours: DayHours) {
        self.0[usize::from(weekday.number_days_from_monday())] = hours;
    }

    /// Iterates the entries with their weekdays, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (time::Weekday, &DayHours)> {
        let mut weekday: time::Weekday = time::Weekday::Monday;
        self.0.iter().map(move |hours| {
            let current: time::Weekday = weekday;
            weekday = weekday.next();
            (current, hours)
        })
    }
}

impl Default for WeeklyHours {
    fn default() -> Self {
        Self(std::array::from_fn(|_| DayHours::open_between("08:00", "22:00")))
    }
}

/// Optional product features the club offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Club runs events (tournaments, socials).
    pub events: bool,
    /// Club offers private classes with instructors.
    pub classes: bool,
    /// Club sells subscriptions.
    pub subscriptions: bool,
}

/// Free-text club policies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Policies {
    /// Cancellation policy.
    #[validate(length(max = 5000, message = "Cancellation policy must be at most 5000 characters"))]
    pub cancellation: String,
    /// Booking rules.
    #[validate(length(max = 5000, message = "Booking policy must be at most 5000 characters"))]
    pub booking: String,
}

/// Accumulated input of the club onboarding wizard.
///
/// Submitted as-is (snake case) once the review step passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingDraft {
    /// Club name and description.
    pub identity: ClubIdentity,
    /// Street address.
    pub address: Address,
    /// Contact details.
    pub contact: Contact,
    /// Courts in append order.
    pub courts: Vec<CourtDraft>,
    /// Pricing.
    pub pricing: Pricing,
    /// Weekly operating hours.
    pub hours: WeeklyHours,
    /// Optional features.
    pub features: FeatureFlags,
    /// Free-text policies.
    pub policies: Policies,
}

/// A partial update to an [`OnboardingDraft`].
///
/// Present fields replace the draft's field wholesale; lists are not merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingPatch {
    /// Replacement identity.
    pub identity: Option<ClubIdentity>,
    /// Replacement address.
    pub address: Option<Address>,
    /// Replacement contact.
    pub contact: Option<Contact>,
    /// Replacement court list.
    pub courts: Option<Vec<CourtDraft>>,
    /// Replacement pricing.
    pub pricing: Option<Pricing>,
    /// Replacement hours.
    pub hours: Option<WeeklyHours>,
    /// Replacement feature flags.
    pub features: Option<FeatureFlags>,
    /// Replacement policies.
    pub policies: Option<Policies>,
}

impl OnboardingDraft {
    /// Shallow-merges a patch into the draft.
    pub fn merge(&mut self, patch: OnboardingPatch) {
        if let Some(identity) = patch.identity {
            self.identity = identity;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(courts) = patch.courts {
            self.courts = courts;
        }
        if let Some(pricing) = patch.pricing {
            self.pricing = pricing;
        }
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(policies) = patch.policies {
            self.policies = policies;
        }
    }

    /// Returns the court list with a new court appended.
    ///
    /// The new court's display order is its 1-based append position. Existing
    /// courts keep their order values, so removals leave gaps or repeats.
    #[must_use]
    pub fn with_court_appended(
        &self,
        name: &str,
        court_type: CourtType,
        surface: Surface,
        has_lighting: bool,
    ) -> Vec<CourtDraft> {
        let mut courts: Vec<CourtDraft> = self.courts.clone();
        let display_order: u32 = u32::try_from(courts.len()).unwrap_or(u32::MAX - 1) + 1;
        courts.push(CourtDraft {
            name: name.to_string(),
            court_type,
            surface,
            has_lighting,
            display_order,
        });
        courts
    }

    /// Returns the court list without the court at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CourtIndexOutOfRange` if there is no such court.
    pub fn without_court(&self, index: usize) -> Result<Vec<CourtDraft>, DomainError> {
        if index >= self.courts.len() {
            return Err(DomainError::CourtIndexOutOfRange {
                index,
                len: self.courts.len(),
            });
        }
        let mut courts: Vec<CourtDraft> = self.courts.clone();
        courts.remove(index);
        Ok(courts)
    }
}

/// Validates the draft slice owned by one onboarding step.
///
/// The review step validates every slice.
///
/// # Errors
///
/// Returns the field errors found in the step's slice.
pub fn validate_onboarding_step(
    step: OnboardingStep,
    draft: &OnboardingDraft,
) -> Result<(), FieldErrors> {
    let mut errors: FieldErrors = FieldErrors::new();
    match step {
        OnboardingStep::Identity => errors.check_section("identity", &draft.identity),
        OnboardingStep::Address => errors.check_section("address", &draft.address),
        OnboardingStep::Contact => errors.check_section("contact", &draft.contact),
        OnboardingStep::Courts => check_courts(&mut errors, &draft.courts),
        OnboardingStep::Pricing => errors.check_section("pricing", &draft.pricing),
        OnboardingStep::Hours => check_hours(&mut errors, &draft.hours),
        OnboardingStep::Features => errors.check_section("policies", &draft.policies),
        OnboardingStep::Review => {
            let slices: [OnboardingStep; 7] = [
                OnboardingStep::Identity,
                OnboardingStep::Address,
                OnboardingStep::Contact,
                OnboardingStep::Courts,
                OnboardingStep::Pricing,
                OnboardingStep::Hours,
                OnboardingStep::Features,
            ];
            for slice in slices {
                if let Err(step_errors) = validate_onboarding_step(slice, draft) {
                    errors.extend(step_errors);
                }
            }
        }
    }
    errors.into_result()
}

fn check_courts(errors: &mut FieldErrors, courts: &[CourtDraft]) {
    if courts.is_empty() {
        errors.push("courts", "Add at least one court");
        return;
    }
    for (index, court) in courts.iter().enumerate() {
        if court.name.trim().is_empty() {
            errors.push(format!("courts[{index}].name"), "Court name is required");
        }
    }
}

fn check_hours(errors: &mut FieldErrors, hours: &WeeklyHours) {
    let mut any_open: bool = false;
    for (weekday, day) in hours.iter() {
        if day.closed {
            continue;
        }
        any_open = true;
        check_time_window(
            errors,
            &format!("hours.{}", weekday.to_string().to_lowercase()),
            day.open.as_deref(),
            day.close.as_deref(),
        );
    }
    if !any_open {
        errors.push("hours", "The club must be open at least one day");
    }
}
