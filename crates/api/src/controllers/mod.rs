// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Async controllers: the effect boundary around each slice.
//!
//! A controller applies a pending command, releases the slice lock, awaits
//! the request, then applies the outcome. The lock is never held across a
//! network call.

mod admin_session;
mod availability;
mod booking;
mod checkout;
mod crud;
mod customer_session;
mod onboarding;

pub use admin_session::AdminSessionController;
pub use availability::AvailabilityController;
pub use booking::BookingController;
pub use checkout::{CheckoutOrchestrator, PaymentCapture};
pub use crud::CrudService;
pub use customer_session::CustomerSessionController;
pub use onboarding::OnboardingController;
