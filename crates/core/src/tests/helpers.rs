// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, WizardDraft};
use padel_book_domain::{AdminProfile, AdminRole, FieldErrors, Instructor, PaymentIntent};

/// A five-step draft whose steps only require `name` to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiveStepDraft {
    pub name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiveStepPatch {
    pub name: Option<String>,
    pub notes: Option<String>,
}

impl WizardDraft for FiveStepDraft {
    type Patch = FiveStepPatch;
    const TOTAL_STEPS: u8 = 5;

    fn merge_patch(&mut self, patch: FiveStepPatch) {
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
    }

    fn validate_step(&self, _step: u8) -> Result<(), CoreError> {
        let mut errors: FieldErrors = FieldErrors::new();
        if self.name.is_none() {
            errors.push("name", "Name is required");
        }
        errors.into_result()?;
        Ok(())
    }
}

pub fn create_test_admin() -> AdminProfile {
    AdminProfile {
        id: 1,
        email: String::from("a@b.com"),
        name: Some(String::from("Club Admin")),
        role: AdminRole::ClubAdmin,
        club_id: Some(3),
    }
}

pub fn create_test_intent() -> PaymentIntent {
    PaymentIntent {
        client_secret: String::from("cs_test_1"),
        payment_intent_id: String::from("pi_1"),
        transaction_id: 42,
    }
}

pub fn create_test_instructor(id: i64, name: &str) -> Instructor {
    Instructor {
        id,
        club_id: Some(3),
        name: name.to_string(),
        email: format!("{}@club.test", name.to_lowercase()),
        phone: None,
        bio: None,
        hourly_rate: Some(4000),
        active: true,
    }
}
