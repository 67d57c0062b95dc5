// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::store::{FileStore, KeyValueStore, MemoryStore};
use padel_book_domain::CustomerProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Key under which the admin bearer token is stored.
pub const ADMIN_TOKEN_KEY: &str = "adminSessionToken";

/// Key under which the customer session payload is stored.
pub const CUSTOMER_SESSION_KEY: &str = "customerSession";

/// The customer session as persisted between runs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCustomerSession {
    /// Bearer token.
    pub token: String,
    /// The logged-in customer.
    pub customer: CustomerProfile,
}

impl std::fmt::Debug for StoredCustomerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCustomerSession")
            .field("token", &"<redacted>")
            .field("customer", &self.customer)
            .finish()
    }
}

/// Typed access to the persisted session state.
///
/// Cloning is cheap; clones share the same underlying store.
#[derive(Clone)]
pub struct SessionStorage {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStorage {
    /// Wraps an existing store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Creates storage that is lost when the process exits.
    #[must_use]
    pub fn new_in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Creates storage backed by a JSON state file.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the state file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        Ok(Self::new(Arc::new(FileStore::open(path)?)))
    }

    /// Returns the stored admin bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn admin_token(&self) -> Result<Option<String>, PersistenceError> {
        self.store.get(ADMIN_TOKEN_KEY)
    }

    /// Stores the admin bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn set_admin_token(&self, token: &str) -> Result<(), PersistenceError> {
        debug!("Persisting admin session token");
        self.store.set(ADMIN_TOKEN_KEY, token)
    }

    /// Removes the admin bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear_admin_token(&self) -> Result<(), PersistenceError> {
        debug!("Clearing admin session token");
        self.store.remove(ADMIN_TOKEN_KEY)
    }

    /// Returns the stored customer session.
    ///
    /// A payload that no longer decodes is treated as absent and removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn customer_session(&self) -> Result<Option<StoredCustomerSession>, PersistenceError> {
        let Some(raw) = self.store.get(CUSTOMER_SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<StoredCustomerSession>(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                warn!(error = %err, "Discarding unreadable customer session");
                self.store.remove(CUSTOMER_SESSION_KEY)?;
                Ok(None)
            }
        }
    }

    /// Stores the customer session.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded or the store
    /// cannot be written.
    pub fn set_customer_session(
        &self,
        session: &StoredCustomerSession,
    ) -> Result<(), PersistenceError> {
        let raw: String = serde_json::to_string(session)?;
        debug!(customer_id = session.customer.id, "Persisting customer session");
        self.store.set(CUSTOMER_SESSION_KEY, &raw)
    }

    /// Removes the customer session.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear_customer_session(&self) -> Result<(), PersistenceError> {
        debug!("Clearing customer session");
        self.store.remove(CUSTOMER_SESSION_KEY)
    }
}

impl std::fmt::Debug for SessionStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStorage").finish_non_exhaustive()
    }
}
