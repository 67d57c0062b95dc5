// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::checkout::{CheckoutOrchestrator, PaymentCapture};
use crate::backend::PaymentBackend;
use crate::error::ClientError;
use crate::request_response::{BookingRequest, CheckoutDetails};
use padel_book::{BookingWizard, WizardCommand};
use padel_book_domain::{BookingDraft, BookingPatch};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// The court booking wizard. Its final step pays through the shared
/// checkout.
pub struct BookingController<B> {
    wizard: Arc<Mutex<BookingWizard>>,
    checkout: Arc<CheckoutOrchestrator<B>>,
}

impl<B: PaymentBackend> BookingController<B> {
    /// Creates a wizard at step 1.
    #[must_use]
    pub fn new(checkout: Arc<CheckoutOrchestrator<B>>) -> Self {
        Self {
            wizard: Arc::new(Mutex::new(BookingWizard::new())),
            checkout,
        }
    }

    /// Returns a copy of the wizard.
    pub async fn snapshot(&self) -> BookingWizard {
        self.wizard.lock().await.clone()
    }

    /// Applies a navigation or draft command.
    ///
    /// `Reset` also returns the checkout to idle so the next booking can be
    /// paid for. A checkout still in flight is left alone.
    pub async fn apply(&self, command: WizardCommand<BookingPatch>) {
        let reset: bool = matches!(command, WizardCommand::Reset);
        self.wizard.lock().await.apply(command);
        if !reset {
            return;
        }
        if let Err(err) = self.checkout.reset().await {
            debug!(error = %err, "Checkout not reset with the booking wizard");
        }
    }

    /// Validates the current step with `patch` merged in, then advances.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` with the failing fields.
    pub async fn submit_step(&self, patch: BookingPatch) -> Result<(), ClientError> {
        self.wizard.lock().await.submit_step(patch)?;
        Ok(())
    }

    /// Pays for the booking and returns its booking number.
    ///
    /// # Errors
    ///
    /// Returns an error if the wizard is not ready to submit or any step of
    /// the checkout fails. The draft is kept on failure.
    pub async fn checkout(&self, capture: &dyn PaymentCapture) -> Result<String, ClientError> {
        let draft: BookingDraft = self.wizard.lock().await.begin_submit()?;

        let outcome: Result<String, ClientError> = match BookingRequest::from_draft(&draft) {
            Ok(request) => {
                self.checkout
                    .run(CheckoutDetails::CourtBooking(request), capture)
                    .await
            }
            Err(err) => Err(err),
        };

        let mut wizard = self.wizard.lock().await;
        match outcome {
            Ok(booking_number) => {
                wizard.apply(WizardCommand::MarkSucceeded);
                Ok(booking_number)
            }
            Err(err) => {
                wizard.apply(WizardCommand::SubmitFailed(err.to_string()));
                Err(err)
            }
        }
    }
}
