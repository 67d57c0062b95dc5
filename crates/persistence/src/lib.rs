// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client-side persistence for the Padel Book client.
//!
//! Only two things survive a restart: the admin bearer token and the
//! customer session. Both live in a small key/value store, either a JSON
//! file on disk or an in-process map for tests.

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

mod error;
mod session_storage;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use session_storage::{
    ADMIN_TOKEN_KEY, CUSTOMER_SESSION_KEY, SessionStorage, StoredCustomerSession,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
