// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The application state: one controller per slice over a shared backend.

use crate::backend::Backend;
use crate::config::ClientConfig;
use crate::controllers::{
    AdminSessionController, AvailabilityController, BookingController, CheckoutOrchestrator,
    CrudService, CustomerSessionController, OnboardingController,
};
use crate::error::ClientError;
use crate::http::HttpBackend;
use padel_book_domain::{
    AdminUser, BlockedSlot, ClubPolicy, CourtRecord, Event, Instructor, Player,
};
use padel_book_persistence::SessionStorage;
use std::sync::Arc;

/// Every slice of the client, wired to one backend and one storage.
pub struct AppState<B> {
    /// Admin login.
    pub admin_session: AdminSessionController<B>,
    /// Customer login.
    pub customer_session: CustomerSessionController<B>,
    /// The availability bundle.
    pub availability: AvailabilityController<B>,
    /// Payment checkout, shared with the booking wizard.
    pub checkout: Arc<CheckoutOrchestrator<B>>,
    /// Club onboarding wizard.
    pub onboarding: OnboardingController<B>,
    /// Court booking wizard.
    pub booking: BookingController<B>,
    /// Instructors.
    pub instructors: CrudService<Instructor, B>,
    /// Courts.
    pub courts: CrudService<CourtRecord, B>,
    /// Events.
    pub events: CrudService<Event, B>,
    /// Blocked slots.
    pub blocked_slots: CrudService<BlockedSlot, B>,
    /// Admin accounts.
    pub admins: CrudService<AdminUser, B>,
    /// Club policies.
    pub policies: CrudService<ClubPolicy, B>,
    /// Players.
    pub players: CrudService<Player, B>,
}

impl<B: Backend> AppState<B> {
    /// Wires every controller to `backend` and `storage`.
    #[must_use]
    pub fn new(backend: Arc<B>, storage: SessionStorage) -> Self {
        let checkout: Arc<CheckoutOrchestrator<B>> =
            Arc::new(CheckoutOrchestrator::new(Arc::clone(&backend)));
        Self {
            admin_session: AdminSessionController::new(Arc::clone(&backend), storage.clone()),
            customer_session: CustomerSessionController::new(Arc::clone(&backend), storage),
            availability: AvailabilityController::new(Arc::clone(&backend)),
            booking: BookingController::new(Arc::clone(&checkout)),
            checkout,
            onboarding: OnboardingController::new(Arc::clone(&backend)),
            instructors: CrudService::new(Arc::clone(&backend)),
            courts: CrudService::new(Arc::clone(&backend)),
            events: CrudService::new(Arc::clone(&backend)),
            blocked_slots: CrudService::new(Arc::clone(&backend)),
            admins: CrudService::new(Arc::clone(&backend)),
            policies: CrudService::new(Arc::clone(&backend)),
            players: CrudService::new(backend),
        }
    }
}

impl AppState<HttpBackend> {
    /// Builds the state over the live API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn connect(config: ClientConfig, storage: SessionStorage) -> Result<Self, ClientError> {
        let backend: HttpBackend = HttpBackend::new(config, storage.clone())?;
        Ok(Self::new(Arc::new(backend), storage))
    }
}
