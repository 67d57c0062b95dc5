// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The multi-step wizard shared by club onboarding and court booking.
//!
//! The cursor only moves forward through `NextStep` (or `submit_step`,
//! which validates first). `GoToStep` can only move to a step at or before
//! the live cursor.

use crate::error::CoreError;
use padel_book_domain::{
    BookingDraft, BookingPatch, BookingStep, CourtDraft, CourtType, OnboardingDraft,
    OnboardingPatch, OnboardingStep, Surface, validate_booking_step, validate_onboarding_step,
};

/// A draft that can be accumulated by a [`Wizard`].
pub trait WizardDraft: Clone + Default + std::fmt::Debug + PartialEq {
    /// A partial update merged with `merge`.
    type Patch: Clone + std::fmt::Debug;

    /// Number of steps in the wizard.
    const TOTAL_STEPS: u8;

    /// Shallow-merges a patch; present fields replace the draft's fields.
    fn merge_patch(&mut self, patch: Self::Patch);

    /// Validates the slice owned by a 1-based step.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` with the failing fields, or
    /// `CoreError::DomainViolation` if the step number is out of range.
    fn validate_step(&self, step: u8) -> Result<(), CoreError>;
}

impl WizardDraft for OnboardingDraft {
    type Patch = OnboardingPatch;
    const TOTAL_STEPS: u8 = OnboardingStep::TOTAL;

    fn merge_patch(&mut self, patch: OnboardingPatch) {
        self.merge(patch);
    }

    fn validate_step(&self, step: u8) -> Result<(), CoreError> {
        let step: OnboardingStep = OnboardingStep::from_number(step)?;
        validate_onboarding_step(step, self)?;
        Ok(())
    }
}

impl WizardDraft for BookingDraft {
    type Patch = BookingPatch;
    const TOTAL_STEPS: u8 = BookingStep::TOTAL;

    fn merge_patch(&mut self, patch: BookingPatch) {
        self.merge(patch);
    }

    fn validate_step(&self, step: u8) -> Result<(), CoreError> {
        let step: BookingStep = BookingStep::from_number(step)?;
        validate_booking_step(step, self)?;
        Ok(())
    }
}

/// Commands accepted by a [`Wizard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand<P> {
    /// Jump to a step at or before the current one.
    GoToStep(u8),
    /// Advance one step, clamped to the last step.
    NextStep,
    /// Go back one step, floored at the first step.
    PreviousStep,
    /// Merge a partial update into the draft.
    UpdateDraft(P),
    /// Clear the draft and return to the first step.
    Reset,
    /// The final submission failed; the draft is kept.
    SubmitFailed(String),
    /// Record that the final submission succeeded.
    MarkSucceeded,
}

/// Cursor, draft and completion flag of a multi-step form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard<D: WizardDraft> {
    current_step: u8,
    draft: D,
    is_success: bool,
    submitting: bool,
    error: Option<String>,
}

impl<D: WizardDraft> Wizard<D> {
    /// Creates a wizard at step 1 with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_step: 1,
            draft: D::default(),
            is_success: false,
            submitting: false,
            error: None,
        }
    }

    /// Returns the 1-based current step.
    #[must_use]
    pub const fn current_step(&self) -> u8 {
        self.current_step
    }

    /// Returns the number of steps.
    #[must_use]
    pub const fn total_steps(&self) -> u8 {
        D::TOTAL_STEPS
    }

    /// Returns the accumulated draft.
    #[must_use]
    pub const fn draft(&self) -> &D {
        &self.draft
    }

    /// Returns `true` once the final submission has succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.is_success
    }

    /// Returns `true` while the final submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns the error of the last failed submission.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` on the last (review) step.
    #[must_use]
    pub const fn is_final_step(&self) -> bool {
        self.current_step == D::TOTAL_STEPS
    }

    /// Applies a command.
    ///
    /// Invalid jumps are silently ignored. Once the wizard has succeeded,
    /// only `Reset` has any effect. While a submission is in flight the
    /// draft and cursor are frozen until its outcome arrives.
    pub fn apply(&mut self, command: WizardCommand<D::Patch>) {
        if self.is_success && !matches!(command, WizardCommand::Reset) {
            return;
        }
        if self.submitting
            && !matches!(
                command,
                WizardCommand::Reset | WizardCommand::SubmitFailed(_) | WizardCommand::MarkSucceeded
            )
        {
            return;
        }
        match command {
            WizardCommand::GoToStep(step) => {
                if (1..=self.current_step).contains(&step) {
                    self.current_step = step;
                }
            }
            WizardCommand::NextStep => {
                self.current_step = self.current_step.saturating_add(1).min(D::TOTAL_STEPS);
            }
            WizardCommand::PreviousStep => {
                self.current_step = self.current_step.saturating_sub(1).max(1);
            }
            WizardCommand::UpdateDraft(patch) => self.draft.merge_patch(patch),
            WizardCommand::Reset => *self = Self::new(),
            WizardCommand::SubmitFailed(error) => {
                self.submitting = false;
                self.error = Some(error);
            }
            WizardCommand::MarkSucceeded => {
                self.submitting = false;
                self.error = None;
                self.is_success = true;
            }
        }
    }

    /// Validates the current step against the draft with `patch` merged in,
    /// then commits the merge and advances.
    ///
    /// Nothing changes if validation fails.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` with the failing fields,
    /// `CoreError::WizardComplete` if the wizard has already succeeded, or
    /// `CoreError::Busy` while the final submission is in flight.
    pub fn submit_step(&mut self, patch: D::Patch) -> Result<(), CoreError> {
        if self.is_success {
            return Err(CoreError::WizardComplete);
        }
        if self.submitting {
            return Err(CoreError::Busy {
                operation: "Submission",
            });
        }
        let mut candidate: D = self.draft.clone();
        candidate.merge_patch(patch);
        candidate.validate_step(self.current_step)?;
        self.draft = candidate;
        self.apply(WizardCommand::NextStep);
        Ok(())
    }

    /// Marks the final submission as started and returns the draft to send.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::WizardComplete` after success, `CoreError::Busy`
    /// while a submission is in flight, `CoreError::InvalidTransition` before
    /// the last step, and `CoreError::Validation` if any slice is invalid.
    /// The state is unchanged on error.
    pub fn begin_submit(&mut self) -> Result<D, CoreError> {
        if self.is_success {
            return Err(CoreError::WizardComplete);
        }
        if self.submitting {
            return Err(CoreError::Busy {
                operation: "Submission",
            });
        }
        if !self.is_final_step() {
            return Err(CoreError::InvalidTransition {
                slice: "wizard",
                state: format!("on step {} of {}", self.current_step, D::TOTAL_STEPS),
                command: "Submit",
            });
        }
        self.validate_for_submission()?;
        self.submitting = true;
        self.error = None;
        Ok(self.draft.clone())
    }

    /// Validates the whole draft as the final step does.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` with every failing field.
    pub fn validate_for_submission(&self) -> Result<(), CoreError> {
        self.draft.validate_step(D::TOTAL_STEPS)
    }
}

impl<D: WizardDraft> Default for Wizard<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard<OnboardingDraft> {
    /// Appends a court to the draft. Its display order is the new list
    /// length.
    pub fn append_court(
        &mut self,
        name: &str,
        court_type: CourtType,
        surface: Surface,
        has_lighting: bool,
    ) {
        let courts: Vec<CourtDraft> =
            self.draft
                .with_court_appended(name, court_type, surface, has_lighting);
        self.apply(WizardCommand::UpdateDraft(OnboardingPatch {
            courts: Some(courts),
            ..OnboardingPatch::default()
        }));
    }

    /// Removes the court at `index`. Remaining courts keep their display
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if `index` is out of range.
    pub fn remove_court(&mut self, index: usize) -> Result<(), CoreError> {
        let courts: Vec<CourtDraft> = self.draft.without_court(index)?;
        self.apply(WizardCommand::UpdateDraft(OnboardingPatch {
            courts: Some(courts),
            ..OnboardingPatch::default()
        }));
        Ok(())
    }
}

/// The club onboarding wizard.
pub type OnboardingWizard = Wizard<OnboardingDraft>;

/// The court booking wizard.
pub type BookingWizard = Wizard<BookingDraft>;
