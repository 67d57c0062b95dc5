// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::PaymentBackend;
use crate::error::ClientError;
use crate::request_response::CheckoutDetails;
use async_trait::async_trait;
use padel_book::{CheckoutCommand, CheckoutState};
use padel_book_domain::{CheckoutKind, PaymentIntent};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// The external step that collects the payment for an intent.
///
/// Implementations hand the intent's client secret to the payment provider
/// and resolve once the provider reports success or failure.
#[async_trait]
pub trait PaymentCapture: Send + Sync {
    /// Captures the payment for `intent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment was declined or abandoned.
    async fn capture(&self, intent: &PaymentIntent) -> Result<(), ClientError>;
}

/// Runs the create, capture, confirm sequence for one checkout at a time.
pub struct CheckoutOrchestrator<B> {
    backend: Arc<B>,
    state: Arc<Mutex<CheckoutState>>,
}

impl<B: PaymentBackend> CheckoutOrchestrator<B> {
    /// Creates an idle orchestrator.
    #[must_use]
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(CheckoutState::new())),
        }
    }

    /// Returns a copy of the checkout state.
    pub async fn snapshot(&self) -> CheckoutState {
        self.state.lock().await.clone()
    }

    /// Pays for `details` and returns the confirmation number.
    ///
    /// A payment that is captured but never confirmed is logged at error
    /// level with its intent and transaction ids, and the state is flagged
    /// for reconciliation.
    ///
    /// # Arguments
    ///
    /// * `details` - What is being paid for
    /// * `capture` - The payment provider step
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Busy` if a checkout is already in flight, or
    /// the error of whichever step failed.
    pub async fn run(
        &self,
        details: CheckoutDetails,
        capture: &dyn PaymentCapture,
    ) -> Result<String, ClientError> {
        let kind: CheckoutKind = details.kind();
        self.apply(CheckoutCommand::Begin { kind }).await?;
        info!(kind = %kind, "Checkout started");

        let intent: PaymentIntent = match self.backend.create_intent(&details).await {
            Ok(intent) => intent,
            Err(err) => {
                warn!(kind = %kind, error = %err, "Creating payment intent failed");
                self.apply(CheckoutCommand::IntentFailed {
                    error: err.to_string(),
                })
                .await?;
                return Err(err);
            }
        };
        self.apply(CheckoutCommand::IntentCreated {
            intent: intent.clone(),
        })
        .await?;

        if let Err(err) = capture.capture(&intent).await {
            warn!(
                kind = %kind,
                payment_intent_id = %intent.payment_intent_id,
                error = %err,
                "Payment capture failed"
            );
            self.apply(CheckoutCommand::CaptureFailed {
                error: err.to_string(),
            })
            .await?;
            return Err(err);
        }
        self.apply(CheckoutCommand::ConfirmStarted).await?;

        match self.backend.confirm_payment(&intent, &details).await {
            Ok(confirmation_number) => {
                info!(
                    kind = %kind,
                    confirmation_number = %confirmation_number,
                    "Checkout confirmed"
                );
                self.apply(CheckoutCommand::Confirmed {
                    confirmation_number: confirmation_number.clone(),
                })
                .await?;
                Ok(confirmation_number)
            }
            Err(err) => {
                error!(
                    kind = %kind,
                    payment_intent_id = %intent.payment_intent_id,
                    transaction_id = intent.transaction_id,
                    error = %err,
                    "Payment captured but confirmation failed; needs reconciliation"
                );
                self.apply(CheckoutCommand::ConfirmFailed {
                    error: err.to_string(),
                })
                .await?;
                Err(err)
            }
        }
    }

    /// Returns to idle.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Busy` while a checkout is in flight.
    pub async fn reset(&self) -> Result<(), ClientError> {
        self.apply(CheckoutCommand::Reset).await
    }

    async fn apply(&self, command: CheckoutCommand) -> Result<(), ClientError> {
        self.state.lock().await.apply(command)?;
        Ok(())
    }
}
