// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::AuthBackend;
use crate::error::ClientError;
use crate::request_response::AdminLogin;
use padel_book::{SessionCommand, SessionState};
use padel_book_domain::AdminProfile;
use padel_book_persistence::SessionStorage;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Drives the admin login flow: email, then code, then authenticated.
///
/// The token is persisted on login and removed together with the in-memory
/// profile on logout or failed validation.
pub struct AdminSessionController<B> {
    backend: Arc<B>,
    storage: SessionStorage,
    state: Arc<Mutex<SessionState<AdminProfile>>>,
}

impl<B: AuthBackend> AdminSessionController<B> {
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
    pub async fn snapshot(&self) -> SessionState<AdminProfile> {
        self.state.lock().await.clone()
    }

    /// Returns the logged-in admin.
    pub async fn profile(&self) -> Option<AdminProfile> {
        self.state.lock().await.profile().cloned()
    }

    /// Requests a login code for `email`.
    ///
    /// On failure the flow stays at the email step with the error set.
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

        match self.backend.admin_send_code(&email).await {
            Ok(()) => {
                self.state
                    .lock()
                    .await
                    .apply(SessionCommand::SendCodeFulfilled)?;
                info!("Admin login code sent");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Sending admin login code failed");
                self.state
                    .lock()
                    .await
                    .apply(SessionCommand::SendCodeRejected {
                        error: err.to_string(),
                    })?;
                Err(err)
            }
        }
    }

    /// Records raw code input and returns the sanitized code.
    pub async fn enter_code(&self, raw: &str) -> String {
        let mut state = self.state.lock().await;
        // CodeEntered is accepted in every state
        let _ = state.apply(SessionCommand::CodeEntered {
            raw: raw.to_string(),
        });
        state.code().to_string()
    }

    /// Verifies the code typed by the user.
    ///
    /// Non-digits are stripped and the input is truncated to six digits
    /// before it is sent. On success the token is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the sanitized code is not six digits, the flow is
    /// not at the code step, or the server rejects the code. On rejection
    /// the flow stays at the code step with the code kept.
    pub async fn verify_code(&self, raw: &str) -> Result<AdminProfile, ClientError> {
        let (email, code): (String, String) = {
            let mut state = self.state.lock().await;
            state.apply(SessionCommand::CodeEntered {
                raw: raw.to_string(),
            })?;
            state.apply(SessionCommand::VerifyPending)?;
            (state.email().to_string(), state.code().to_string())
        };

        let result: Result<AdminLogin, ClientError> =
            match self.backend.admin_verify_code(&email, &code).await {
                Ok(login) => self
                    .storage
                    .set_admin_token(&login.token)
                    .map(|()| login)
                    .map_err(ClientError::from),
                Err(err) => Err(err),
            };

        let mut state = self.state.lock().await;
        match result {
            Ok(login) => {
                info!(admin_id = login.admin.id, role = %login.admin.role, "Admin logged in");
                let profile: AdminProfile = login.admin.clone();
                state.apply(SessionCommand::VerifyFulfilled {
                    token: login.token,
                    profile: login.admin,
                })?;
                Ok(profile)
            }
            Err(err) => {
                warn!(error = %err, "Admin code verification failed");
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

    /// Checks the stored token with the server.
    ///
    /// Returns `true` if the session is valid. With no stored token, or on
    /// any failure, the stored token and the in-memory profile are both
    /// cleared and `false` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if storage fails or validation is already in
    /// flight. A storage read failure still clears the in-memory session.
    pub async fn validate_session(&self) -> Result<bool, ClientError> {
        let token: String = match self.storage.admin_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!("No stored admin session");
                self.clear().await?;
                return Ok(false);
            }
            Err(err) => {
                warn!(error = %err, "Reading stored admin session failed");
                if let Err(clear_err) = self.clear().await {
                    debug!(error = %clear_err, "Clearing admin session failed");
                }
                return Err(err.into());
            }
        };

        self.state
            .lock()
            .await
            .apply(SessionCommand::ValidatePending)?;

        match self.backend.admin_validate().await {
            Ok(profile) => {
                debug!(admin_id = profile.id, "Stored admin session is valid");
                self.state
                    .lock()
                    .await
                    .apply(SessionCommand::ValidateFulfilled { token, profile })?;
                Ok(true)
            }
            Err(err) => {
                warn!(error = %err, "Stored admin session is no longer valid");
                self.clear().await?;
                Ok(false)
            }
        }
    }

    /// Logs out.
    ///
    /// The server is told first, but its answer is ignored; the local
    /// session is always cleared.
    ///
    /// # Errors
    ///
    /// Returns an error only if the stored token cannot be removed. The
    /// in-memory session is cleared regardless.
    pub async fn logout(&self) -> Result<(), ClientError> {
        if let Err(err) = self.backend.admin_logout().await {
            debug!(error = %err, "Ignoring logout failure");
        }
        self.clear().await?;
        info!("Admin logged out");
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        let stored: Result<(), ClientError> =
            self.storage.clear_admin_token().map_err(ClientError::from);
        self.state.lock().await.apply(SessionCommand::Cleared)?;
        stored
    }
}
