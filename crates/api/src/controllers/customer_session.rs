// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::AuthBackend;
use crate::error::ClientError;
use crate::request_response::CustomerLogin;
use padel_book::{SessionCommand, SessionState};
use padel_book_domain::CustomerProfile;
use padel_book_persistence::{SessionStorage, StoredCustomerSession};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Drives the customer login flow.
///
/// Customer sessions are restored from storage without asking the server,
/// and logout is local only.
pub struct CustomerSessionController<B> {
    backend: Arc<B>,
    storage: SessionStorage,
    state: Arc<Mutex<SessionState<CustomerProfile>>>,
}

impl<B: AuthBackend> CustomerSessionController<B> {
    /// Creates a logged-out controller.
    #[must_use]
    pub fn new(backend: Arc<B>, storage: SessionStorage) -> Self {
        Self {
            backend,
            storage,
            state: Arc::new(Mutex::new(SessionState::new())),
        }
    }

    /// Returns a copy of the current session state.
    pub async fn snapshot(&self) -> SessionState<CustomerProfile> {
        self.state.lock().await.clone()
    }

    /// Requests a login code for `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is malformed, a request is already in
    /// flight, or the server rejects the request.
    pub async fn send_code(&self, email: &str) -> Result<(), ClientError> {
        let email: String = {
            let mut state = self.state.lock().await;
            state.apply(SessionCommand::SendCodePending {
                email: email.to_string(),
            })?;
            state.email().to_string()
        };

        let result: Result<(), ClientError> = self.backend.customer_send_code(&email).await;
        let mut state = self.state.lock().await;
        match result {
            Ok(()) => {
                state.apply(SessionCommand::SendCodeFulfilled)?;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Sending customer login code failed");
                state.apply(SessionCommand::SendCodeRejected {
                    error: err.to_string(),
                })?;
                Err(err)
            }
        }
    }

    /// Verifies the code and persists the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the sanitized code is not six digits, the flow is
    /// not at the code step, or the server rejects the code.
    pub async fn verify_code(&self, raw: &str) -> Result<CustomerProfile, ClientError> {
        let (email, code): (String, String) = {
            let mut state = self.state.lock().await;
            state.apply(SessionCommand::CodeEntered {
                raw: raw.to_string(),
            })?;
            state.apply(SessionCommand::VerifyPending)?;
            (state.email().to_string(), state.code().to_string())
        };

        let result: Result<CustomerLogin, ClientError> =
            match self.backend.customer_verify_code(&email, &code).await {
                Ok(login) => {
                    let stored: StoredCustomerSession = StoredCustomerSession {
                        token: login.token.clone(),
                        customer: login.customer.clone(),
                    };
                    self.storage
                        .set_customer_session(&stored)
                        .map(|()| login)
                        .map_err(ClientError::from)
                }
                Err(err) => Err(err),
            };

        let mut state = self.state.lock().await;
        match result {
            Ok(login) => {
                info!(customer_id = login.customer.id, "Customer logged in");
                let profile: CustomerProfile = login.customer.clone();
                state.apply(SessionCommand::VerifyFulfilled {
                    token: login.token,
                    profile: login.customer,
                })?;
                Ok(profile)
            }
            Err(err) => {
                warn!(error = %err, "Customer code verification failed");
                state.apply(SessionCommand::VerifyRejected {
                    error: err.to_string(),
                })?;
                Err(err)
            }
        }
    }

    /// Returns from the code step to the email step.
    ///
    /// # Errors
    ///
    /// Returns an error if the flow is not at the code step.
    pub async fn back_to_email(&self) -> Result<(), ClientError> {
        self.state
            .lock()
            .await
            .apply(SessionCommand::BackToEmail)?;
        Ok(())
    }

    /// Loads a stored session, if any. No request is made.
    ///
    /// Returns `true` if a session was restored.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub async fn restore(&self) -> Result<bool, ClientError> {
        let Some(stored) = self.storage.customer_session()? else {
            debug!("No stored customer session");
            return Ok(false);
        };
        self.state.lock().await.apply(SessionCommand::Restored {
            token: stored.token,
            profile: stored.customer,
        })?;
        debug!("Customer session restored");
        Ok(true)
    }

    /// Drops the session locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored session cannot be removed. The
    /// in-memory session is cleared regardless.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let stored: Result<(), ClientError> = self
            .storage
            .clear_customer_session()
            .map_err(ClientError::from);
        self.state.lock().await.apply(SessionCommand::Cleared)?;
        info!("Customer logged out");
        stored
    }
}
