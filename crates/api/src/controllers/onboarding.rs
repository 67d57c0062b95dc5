// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::OnboardingBackend;
use crate::error::ClientError;
use padel_book::{OnboardingWizard, WizardCommand};
use padel_book_domain::{CourtType, OnboardingDraft, OnboardingPatch, Surface};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// The club onboarding wizard plus its final submission.
pub struct OnboardingController<B> {
    backend: Arc<B>,
    wizard: Arc<Mutex<OnboardingWizard>>,
    club_id: Arc<Mutex<Option<i64>>>,
}

impl<B: OnboardingBackend> OnboardingController<B> {
    /// Creates a wizard at step 1.
    #[must_use]
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            wizard: Arc::new(Mutex::new(OnboardingWizard::new())),
            club_id: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns a copy of the wizard.
    pub async fn snapshot(&self) -> OnboardingWizard {
        self.wizard.lock().await.clone()
    }

    /// Returns the id of the club created by the last successful submit.
    pub async fn club_id(&self) -> Option<i64> {
        *self.club_id.lock().await
    }

    /// Applies a navigation or draft command.
    pub async fn apply(&self, command: WizardCommand<OnboardingPatch>) {
        let reset: bool = matches!(command, WizardCommand::Reset);
        self.wizard.lock().await.apply(command);
        if reset {
            *self.club_id.lock().await = None;
        }
    }

    /// Validates the current step with `patch` merged in, then advances.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` with the failing fields.
    pub async fn submit_step(&self, patch: OnboardingPatch) -> Result<(), ClientError> {
        self.wizard.lock().await.submit_step(patch)?;
        Ok(())
    }

    /// Adds a court to the draft.
    pub async fn append_court(
        &self,
        name: &str,
        court_type: CourtType,
        surface: Surface,
        has_lighting: bool,
    ) {
        self.wizard
            .lock()
            .await
            .append_court(name, court_type, surface, has_lighting);
    }

    /// Removes the court at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Domain` if `index` is out of range.
    pub async fn remove_court(&self, index: usize) -> Result<(), ClientError> {
        self.wizard.lock().await.remove_court(index)?;
        Ok(())
    }

    /// Submits the whole draft from the final step.
    ///
    /// On failure the draft is kept and the error recorded so the user can
    /// retry.
    ///
    /// # Errors
    ///
    /// Returns an error if the wizard is not on its final step, any step is
    /// invalid, a submission is in flight, or the server rejects the club.
    pub async fn submit(&self) -> Result<i64, ClientError> {
        let draft: OnboardingDraft = self.wizard.lock().await.begin_submit()?;
        info!(club = %draft.identity.name, courts = draft.courts.len(), "Submitting club");

        match self.backend.onboard_club(&draft).await {
            Ok(club_id) => {
                info!(club_id, "Club onboarded");
                self.wizard.lock().await.apply(WizardCommand::MarkSucceeded);
                *self.club_id.lock().await = Some(club_id);
                Ok(club_id)
            }
            Err(err) => {
                warn!(error = %err, "Club onboarding failed");
                self.wizard
                    .lock()
                    .await
                    .apply(WizardCommand::SubmitFailed(err.to_string()));
                Err(err)
            }
        }
    }
}
