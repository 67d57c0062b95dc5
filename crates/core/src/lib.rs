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

//! Pure state for the Padel Book client.
//!
//! Each slice is a plain struct with a closed command enum and an `apply`
//! method. Slices never perform I/O; the controllers in `padel-book-api`
//! apply a pending command, make the request, then apply the outcome.

mod availability;
mod checkout;
mod crud;
mod error;
mod session;
mod wizard;

#[cfg(test)]
mod tests;

pub use availability::{AvailabilityCommand, AvailabilityState};
pub use checkout::{CheckoutCommand, CheckoutPhase, CheckoutState};
pub use crud::{AvailabilityCounts, CrudCommand, CrudSlice};
pub use error::CoreError;
pub use session::{LoginStep, SessionCommand, SessionState};
pub use wizard::{BookingWizard, OnboardingWizard, Wizard, WizardCommand, WizardDraft};
