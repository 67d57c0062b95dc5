// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{FakeBackend, FakeCapture, create_test_intent, create_test_player};
use crate::controllers::CheckoutOrchestrator;
use crate::error::ClientError;
use crate::request_response::{CheckoutDetails, EventRegistrationRequest};
use padel_book::{CheckoutPhase, CheckoutState};
use std::sync::Arc;
use std::sync::atomic::Ordering;

fn event_details() -> CheckoutDetails {
    CheckoutDetails::EventRegistration(EventRegistrationRequest {
        event_id: 12,
        player: create_test_player(),
    })
}

fn setup(decline: bool) -> (Arc<FakeBackend>, CheckoutOrchestrator<FakeBackend>, FakeCapture) {
    let backend: Arc<FakeBackend> = Arc::new(FakeBackend::new());
    let orchestrator: CheckoutOrchestrator<FakeBackend> =
        CheckoutOrchestrator::new(Arc::clone(&backend));
    let capture: FakeCapture = FakeCapture {
        backend: Arc::clone(&backend),
        decline,
    };
    (backend, orchestrator, capture)
}

#[tokio::test]
async fn test_checkout_runs_create_capture_confirm_in_order() {
    let (backend, orchestrator, capture) = setup(false);

    let number: String = orchestrator.run(event_details(), &capture).await.unwrap();

    assert_eq!(number, "BK-1001");
    assert_eq!(
        backend.calls(),
        vec![
            "create_intent:event_registration",
            "capture:cs_test_1",
            "confirm_payment:pi_1",
        ]
    );
    let state: CheckoutState = orchestrator.snapshot().await;
    assert_eq!(state.phase(), CheckoutPhase::Succeeded);
    assert_eq!(state.confirmation_number(), Some("BK-1001"));
}

#[tokio::test]
async fn test_intent_failure_skips_capture() {
    let (backend, orchestrator, capture) = setup(false);
    backend.fail_create_intent.store(true, Ordering::SeqCst);

    let result: Result<String, ClientError> = orchestrator.run(event_details(), &capture).await;

    assert!(result.is_err());
    assert_eq!(backend.calls(), vec!["create_intent:event_registration"]);
    let state: CheckoutState = orchestrator.snapshot().await;
    assert_eq!(state.phase(), CheckoutPhase::Failed);
    assert!(state.intent().is_none());
    assert!(!state.needs_reconciliation());
}

#[tokio::test]
async fn test_declined_capture_never_confirms() {
    let (backend, orchestrator, capture) = setup(true);

    let result: Result<String, ClientError> = orchestrator.run(event_details(), &capture).await;

    assert!(matches!(result, Err(ClientError::Capture(_))));
    assert!(!backend.calls().iter().any(|c| c.starts_with("confirm_payment")));
    let state: CheckoutState = orchestrator.snapshot().await;
    assert_eq!(state.phase(), CheckoutPhase::Failed);
    assert!(!state.needs_reconciliation());
}

#[tokio::test]
async fn test_confirm_failure_keeps_intent_for_reconciliation() {
    let (backend, orchestrator, capture) = setup(false);
    backend.fail_confirm.store(true, Ordering::SeqCst);

    let result: Result<String, ClientError> = orchestrator.run(event_details(), &capture).await;

    assert!(result.is_err());
    let state: CheckoutState = orchestrator.snapshot().await;
    assert_eq!(state.phase(), CheckoutPhase::Failed);
    assert!(state.needs_reconciliation());
    assert_eq!(state.intent(), Some(&create_test_intent()));
    assert_eq!(state.error(), Some("Confirmation failed"));
}

#[tokio::test]
async fn test_new_checkout_after_failure_starts_clean() {
    let (backend, orchestrator, capture) = setup(false);
    backend.fail_confirm.store(true, Ordering::SeqCst);
    let _ = orchestrator.run(event_details(), &capture).await;
    backend.fail_confirm.store(false, Ordering::SeqCst);

    let number: String = orchestrator.run(event_details(), &capture).await.unwrap();

    assert_eq!(number, "BK-1001");
    assert!(!orchestrator.snapshot().await.needs_reconciliation());
}

#[tokio::test]
async fn test_reset_returns_to_idle() {
    let (_backend, orchestrator, capture) = setup(false);
    orchestrator.run(event_details(), &capture).await.unwrap();

    orchestrator.reset().await.unwrap();

    assert_eq!(orchestrator.snapshot().await.phase(), CheckoutPhase::Idle);
}
