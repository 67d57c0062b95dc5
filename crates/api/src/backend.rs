// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The REST operations the controllers depend on.
//!
//! [`crate::HttpBackend`] implements all of them against the live API;
//! tests substitute in-memory fakes.

use crate::error::ClientError;
use crate::request_response::{AdminLogin, CheckoutDetails, CustomerLogin};
use async_trait::async_trait;
use padel_book_domain::{
    AdminProfile, AvailabilityBundle, AvailabilityQuery, OnboardingDraft, PaymentIntent, Resource,
};

/// One-time-code login for admins and customers.
#[async_trait]
pub trait AuthBackend: Send + Sync + 'static {
    /// `POST /admin/auth/send-code`.
    async fn admin_send_code(&self, email: &str) -> Result<(), ClientError>;

    /// `POST /admin/auth/verify-code`.
    async fn admin_verify_code(&self, email: &str, code: &str) -> Result<AdminLogin, ClientError>;

    /// `GET /admin/auth/validate` with the stored token.
    async fn admin_validate(&self) -> Result<AdminProfile, ClientError>;

    /// `POST /admin/auth/logout` with the stored token.
    async fn admin_logout(&self) -> Result<(), ClientError>;

    /// `POST /auth/send-code`.
    async fn customer_send_code(&self, email: &str) -> Result<(), ClientError>;

    /// `POST /auth/verify-code`.
    async fn customer_verify_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<CustomerLogin, ClientError>;
}

/// Read access to the server's availability computation.
#[async_trait]
pub trait AvailabilityBackend: Send + Sync + 'static {
    /// `GET /availability`.
    async fn fetch_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<AvailabilityBundle, ClientError>;
}

/// The payment endpoints of every checkout kind.
#[async_trait]
pub trait PaymentBackend: Send + Sync + 'static {
    /// `POST /<kind>/create-intent`.
    async fn create_intent(&self, details: &CheckoutDetails)
    -> Result<PaymentIntent, ClientError>;

    /// `POST /<kind>/confirm`; returns the confirmation number.
    async fn confirm_payment(
        &self,
        intent: &PaymentIntent,
        details: &CheckoutDetails,
    ) -> Result<String, ClientError>;
}

/// Admin CRUD under `/admin/<resource>`.
#[async_trait]
pub trait ResourceBackend: Send + Sync + 'static {
    /// `GET /admin/<resource>`.
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ClientError>;

    /// `POST /admin/<resource>`.
    async fn create<R: Resource>(&self, input: &R::Input) -> Result<R, ClientError>;

    /// `PUT /admin/<resource>/{id}`.
    async fn update<R: Resource>(&self, id: i64, input: &R::Input) -> Result<R, ClientError>;

    /// `DELETE /admin/<resource>/{id}`.
    async fn delete<R: Resource>(&self, id: i64) -> Result<(), ClientError>;

    /// `GET /admin/instructors/{id}/availability-count`.
    async fn instructor_availability_count(&self, instructor_id: i64)
    -> Result<u32, ClientError>;
}

/// Club self-onboarding.
#[async_trait]
pub trait OnboardingBackend: Send + Sync + 'static {
    /// `POST /clubs/onboard`; returns the new club's id.
    async fn onboard_club(&self, draft: &OnboardingDraft) -> Result<i64, ClientError>;
}

/// Everything the application state needs from one backend.
pub trait Backend:
    AuthBackend + AvailabilityBackend + PaymentBackend + ResourceBackend + OnboardingBackend
{
}

impl<T> Backend for T where
    T: AuthBackend + AvailabilityBackend + PaymentBackend + ResourceBackend + OnboardingBackend
{
}
