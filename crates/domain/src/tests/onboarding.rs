// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Address, ClubIdentity, Contact, CourtDraft, CourtType, DayHours, DomainError, FieldErrors,
    OnboardingDraft, OnboardingPatch, OnboardingStep, Pricing, Surface, WeeklyHours,
    validate_onboarding_step,
};
use time::Weekday;

fn create_complete_draft() -> OnboardingDraft {
    let mut draft: OnboardingDraft = OnboardingDraft {
        identity: ClubIdentity {
            name: String::from("Padel Norte"),
            description: String::from("Six glass courts by the river"),
        },
        address: Address {
            street: String::from("Calle Mayor 1"),
            city: String::from("Madrid"),
            postal_code: String::from("28013"),
            country: String::from("Spain"),
        },
        contact: Contact {
            email: String::from("hola@padelnorte.es"),
            phone: String::from("+34 600 000 000"),
            website: None,
        },
        pricing: Pricing {
            hourly_rate: 2400,
            slot_duration_minutes: 90,
            ..Pricing::default()
        },
        ..OnboardingDraft::default()
    };
    draft.courts = draft.with_court_appended("Court A", CourtType::Indoor, Surface::Glass, true);
    draft
}

#[test]
fn test_step_numbers_map_both_ways() {
    for number in 1..=OnboardingStep::TOTAL {
        let step: OnboardingStep = OnboardingStep::from_number(number).unwrap();
        assert_eq!(step.number(), number);
    }
    assert!(matches!(
        OnboardingStep::from_number(0),
        Err(DomainError::StepOutOfRange { step: 0, total: 8 })
    ));
    assert!(OnboardingStep::from_number(9).is_err());
}

#[test]
fn test_courts_get_display_order_at_append_time() {
    let mut draft: OnboardingDraft = OnboardingDraft::default();
    draft.courts = draft.with_court_appended("Court A", CourtType::Indoor, Surface::Glass, true);
    draft.courts = draft.with_court_appended("Court B", CourtType::Outdoor, Surface::Concrete, false);

    assert_eq!(draft.courts[0].name, "Court A");
    assert_eq!(draft.courts[0].display_order, 1);
    assert_eq!(draft.courts[1].name, "Court B");
    assert_eq!(draft.courts[1].display_order, 2);
}

#[test]
fn test_removing_a_court_does_not_renumber() {
    let mut draft: OnboardingDraft = OnboardingDraft::default();
    draft.courts = draft.with_court_appended("Court A", CourtType::Indoor, Surface::Glass, true);
    draft.courts = draft.with_court_appended("Court B", CourtType::Covered, Surface::Glass, true);

    draft.courts = draft.without_court(0).unwrap();

    assert_eq!(draft.courts.len(), 1);
    let remaining: &CourtDraft = &draft.courts[0];
    assert_eq!(remaining.name, "Court B");
    assert_eq!(remaining.display_order, 2);
}

#[test]
fn test_removing_a_missing_court_fails() {
    let draft: OnboardingDraft = OnboardingDraft::default();
    assert!(matches!(
        draft.without_court(0),
        Err(DomainError::CourtIndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn test_merge_replaces_only_present_fields() {
    let mut draft: OnboardingDraft = create_complete_draft();
    let original_contact: Contact = draft.contact.clone();

    draft.merge(OnboardingPatch {
        identity: Some(ClubIdentity {
            name: String::from("Padel Sur"),
            description: String::new(),
        }),
        ..OnboardingPatch::default()
    });

    assert_eq!(draft.identity.name, "Padel Sur");
    assert_eq!(draft.contact, original_contact);
    assert_eq!(draft.courts.len(), 1);
}

#[test]
fn test_disjoint_merges_equal_a_combined_merge() {
    let identity: ClubIdentity = ClubIdentity {
        name: String::from("Padel Este"),
        description: String::from("Rooftop courts"),
    };
    let pricing: Pricing = Pricing {
        hourly_rate: 3000,
        slot_duration_minutes: 60,
        ..Pricing::default()
    };

    let mut stepwise: OnboardingDraft = OnboardingDraft::default();
    stepwise.merge(OnboardingPatch {
        identity: Some(identity.clone()),
        ..OnboardingPatch::default()
    });
    stepwise.merge(OnboardingPatch {
        pricing: Some(pricing.clone()),
        ..OnboardingPatch::default()
    });

    let mut combined: OnboardingDraft = OnboardingDraft::default();
    combined.merge(OnboardingPatch {
        identity: Some(identity),
        pricing: Some(pricing),
        ..OnboardingPatch::default()
    });

    assert_eq!(stepwise, combined);
}

#[test]
fn test_identity_step_rejects_short_name() {
    let mut draft: OnboardingDraft = OnboardingDraft::default();
    draft.identity.name = String::from("P");

    let errors: FieldErrors =
        validate_onboarding_step(OnboardingStep::Identity, &draft).unwrap_err();
    assert!(errors.has_field("identity.name"));
}

#[test]
fn test_step_validation_ignores_other_slices() {
    let mut draft: OnboardingDraft = OnboardingDraft::default();
    draft.identity.name = String::from("Padel Norte");

    // contact, courts and pricing are still empty
    assert!(validate_onboarding_step(OnboardingStep::Identity, &draft).is_ok());
}

#[test]
fn test_contact_step_rejects_bad_email() {
    let mut draft: OnboardingDraft = create_complete_draft();
    draft.contact.email = String::from("nope");

    let errors: FieldErrors =
        validate_onboarding_step(OnboardingStep::Contact, &draft).unwrap_err();
    assert_eq!(
        errors.message_for("contact.email"),
        Some("Enter a valid email address")
    );
}

#[test]
fn test_courts_step_requires_a_named_court() {
    let mut draft: OnboardingDraft = OnboardingDraft::default();
    let errors: FieldErrors = validate_onboarding_step(OnboardingStep::Courts, &draft).unwrap_err();
    assert!(errors.has_field("courts"));

    draft.courts = draft.with_court_appended("  ", CourtType::Indoor, Surface::Glass, false);
    let errors: FieldErrors = validate_onboarding_step(OnboardingStep::Courts, &draft).unwrap_err();
    assert!(errors.has_field("courts[0].name"));
}

#[test]
fn test_pricing_step_enforces_ranges() {
    let mut draft: OnboardingDraft = create_complete_draft();
    draft.pricing.hourly_rate = 50;
    draft.pricing.slot_duration_minutes = 15;

    let errors: FieldErrors =
        validate_onboarding_step(OnboardingStep::Pricing, &draft).unwrap_err();
    assert!(errors.has_field("pricing.hourly_rate"));
    assert!(errors.has_field("pricing.slot_duration_minutes"));
}

#[test]
fn test_hours_step_requires_close_after_open() {
    let mut draft: OnboardingDraft = create_complete_draft();
    draft
        .hours
        .set_day(Weekday::Tuesday, DayHours::open_between("22:00", "09:00"));

    let errors: FieldErrors = validate_onboarding_step(OnboardingStep::Hours, &draft).unwrap_err();
    assert_eq!(
        errors.message_for("hours.tuesday"),
        Some("Closing time must be after opening time")
    );
}

#[test]
fn test_hours_step_skips_closed_days_but_needs_one_open_day() {
    let mut draft: OnboardingDraft = create_complete_draft();
    draft.hours.set_day(Weekday::Sunday, DayHours::closed());
    assert!(validate_onboarding_step(OnboardingStep::Hours, &draft).is_ok());

    draft.hours = WeeklyHours::new(std::array::from_fn(|_| DayHours::closed()));
    let errors: FieldErrors = validate_onboarding_step(OnboardingStep::Hours, &draft).unwrap_err();
    assert!(errors.has_field("hours"));
}

#[test]
fn test_weekly_hours_iterate_monday_first() {
    let hours: WeeklyHours = WeeklyHours::default();
    let days: Vec<Weekday> = hours.iter().map(|(day, _)| day).collect();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0], Weekday::Monday);
    assert_eq!(days[6], Weekday::Sunday);
}

#[test]
fn test_review_step_validates_every_slice() {
    let draft: OnboardingDraft = create_complete_draft();
    assert!(validate_onboarding_step(OnboardingStep::Review, &draft).is_ok());

    let mut broken: OnboardingDraft = draft;
    broken.address.city = String::new();
    broken.courts.clear();
    let errors: FieldErrors =
        validate_onboarding_step(OnboardingStep::Review, &broken).unwrap_err();
    assert!(errors.has_field("address.city"));
    assert!(errors.has_field("courts"));
}

#[test]
fn test_draft_serializes_display_order_in_snake_case() {
    let draft: OnboardingDraft = create_complete_draft();
    let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["courts"][0]["display_order"], 1);
    assert_eq!(json["courts"][0]["court_type"], "indoor");
    assert_eq!(json["pricing"]["currency"], "EUR");
}
