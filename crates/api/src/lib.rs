// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! REST client and async controllers for the Padel Book client.
//!
//! The backend traits ([`AuthBackend`] and friends) describe the API and
//! [`HttpBackend`] talks to it over `reqwest`. Controllers wrap the pure
//! slices from `padel-book` and are the only place requests are made.

mod app;
mod backend;
mod config;
mod controllers;
mod error;
mod http;
mod request_response;

#[cfg(test)]
mod tests;

pub use app::AppState;
pub use backend::{
    AuthBackend, AvailabilityBackend, Backend, OnboardingBackend, PaymentBackend,
    ResourceBackend,
};
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use controllers::{
    AdminSessionController, AvailabilityController, BookingController, CheckoutOrchestrator,
    CrudService, CustomerSessionController, OnboardingController, PaymentCapture,
};
pub use error::ClientError;
pub use http::HttpBackend;
pub use request_response::{
    AdminLogin, AdminValidation, AvailabilityCountResponse, BookingRequest, CheckoutDetails,
    ClassBookingRequest, ConfirmPaymentRequest, ConfirmationResponse, CustomerLogin, Envelope,
    ErrorBody, EventRegistrationRequest, OnboardingResponse, SendCodeRequest, VerifyCodeRequest,
};
