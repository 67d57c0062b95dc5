// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_admin;
use crate::{CoreError, LoginStep, SessionCommand, SessionState};
use padel_book_domain::{AdminProfile, DomainError};

type AdminSession = SessionState<AdminProfile>;

fn create_session_at_code_step() -> AdminSession {
    let mut session: AdminSession = SessionState::new();
    session
        .apply(SessionCommand::SendCodePending {
            email: String::from("a@b.com"),
        })
        .unwrap();
    session.apply(SessionCommand::SendCodeFulfilled).unwrap();
    session
}

#[test]
fn test_send_code_moves_to_code_step() {
    let session: AdminSession = create_session_at_code_step();
    assert_eq!(session.step(), LoginStep::Code);
    assert_eq!(session.email(), "a@b.com");
    assert!(!session.is_loading());
    assert!(session.error().is_none());
}

#[test]
fn test_send_code_rejects_malformed_email_locally() {
    let mut session: AdminSession = SessionState::new();
    let result: Result<(), CoreError> = session.apply(SessionCommand::SendCodePending {
        email: String::from("not-an-email"),
    });
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidEmail(_)))
    ));
    assert!(!session.is_loading());
}

#[test]
fn test_send_code_failure_stays_at_email() {
    let mut session: AdminSession = SessionState::new();
    session
        .apply(SessionCommand::SendCodePending {
            email: String::from("a@b.com"),
        })
        .unwrap();
    session
        .apply(SessionCommand::SendCodeRejected {
            error: String::from("Unknown admin"),
        })
        .unwrap();

    assert_eq!(session.step(), LoginStep::Email);
    assert_eq!(session.error(), Some("Unknown admin"));
}

#[test]
fn test_second_request_while_loading_is_busy() {
    let mut session: AdminSession = SessionState::new();
    session
        .apply(SessionCommand::SendCodePending {
            email: String::from("a@b.com"),
        })
        .unwrap();
    let result: Result<(), CoreError> = session.apply(SessionCommand::SendCodePending {
        email: String::from("a@b.com"),
    });
    assert!(matches!(result, Err(CoreError::Busy { .. })));
}

#[test]
fn test_code_is_sanitized_on_entry() {
    let mut session: AdminSession = create_session_at_code_step();
    session
        .apply(SessionCommand::CodeEntered {
            raw: String::from("12a3456"),
        })
        .unwrap();
    assert_eq!(session.code(), "123456");
    assert!(session.can_submit_code());
}

#[test]
fn test_short_code_cannot_be_verified() {
    let mut session: AdminSession = create_session_at_code_step();
    session
        .apply(SessionCommand::CodeEntered {
            raw: String::from("12 34"),
        })
        .unwrap();
    assert!(!session.can_submit_code());

    let result: Result<(), CoreError> = session.apply(SessionCommand::VerifyPending);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidOtpCode))
    ));
    assert!(!session.is_loading());
}

#[test]
fn test_verify_from_email_step_is_invalid() {
    let mut session: AdminSession = SessionState::new();
    let result: Result<(), CoreError> = session.apply(SessionCommand::VerifyPending);
    assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));
}

#[test]
fn test_verify_success_authenticates() {
    let mut session: AdminSession = create_session_at_code_step();
    session
        .apply(SessionCommand::CodeEntered {
            raw: String::from("123456"),
        })
        .unwrap();
    session.apply(SessionCommand::VerifyPending).unwrap();
    session
        .apply(SessionCommand::VerifyFulfilled {
            token: String::from("tok-1"),
            profile: create_test_admin(),
        })
        .unwrap();

    assert_eq!(session.step(), LoginStep::Authenticated);
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok-1"));
    assert_eq!(session.code(), "");
}

#[test]
fn test_verify_failure_keeps_code() {
    let mut session: AdminSession = create_session_at_code_step();
    session
        .apply(SessionCommand::CodeEntered {
            raw: String::from("654321"),
        })
        .unwrap();
    session.apply(SessionCommand::VerifyPending).unwrap();
    session
        .apply(SessionCommand::VerifyRejected {
            error: String::from("Invalid code"),
        })
        .unwrap();

    assert_eq!(session.step(), LoginStep::Code);
    assert_eq!(session.code(), "654321");
    assert_eq!(session.error(), Some("Invalid code"));
    assert!(!session.is_authenticated());
}

#[test]
fn test_back_to_email_clears_code() {
    let mut session: AdminSession = create_session_at_code_step();
    session
        .apply(SessionCommand::CodeEntered {
            raw: String::from("123"),
        })
        .unwrap();
    session.apply(SessionCommand::BackToEmail).unwrap();

    assert_eq!(session.step(), LoginStep::Email);
    assert_eq!(session.code(), "");
    assert!(session.apply(SessionCommand::BackToEmail).is_err());
}

#[test]
fn test_clearing_drops_token_and_profile_together() {
    let mut session: AdminSession = SessionState::new();
    session
        .apply(SessionCommand::Restored {
            token: String::from("tok-1"),
            profile: create_test_admin(),
        })
        .unwrap();
    session.apply(SessionCommand::ValidatePending).unwrap();
    session.apply(SessionCommand::Cleared).unwrap();

    assert_eq!(session.token(), None);
    assert_eq!(session.profile(), None);
    assert_eq!(session.step(), LoginStep::Email);
    assert!(!session.is_loading());
}

#[test]
fn test_debug_output_redacts_token() {
    let mut session: AdminSession = SessionState::new();
    session
        .apply(SessionCommand::Restored {
            token: String::from("secret-token"),
            profile: create_test_admin(),
        })
        .unwrap();

    let rendered: String = format!("{session:?}");
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("<redacted>"));

    let command: SessionCommand<AdminProfile> = SessionCommand::VerifyFulfilled {
        token: String::from("secret-token"),
        profile: create_test_admin(),
    };
    assert_eq!(format!("{command:?}"), "VerifyFulfilled");
}
