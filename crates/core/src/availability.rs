// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use padel_book_domain::{AvailabilityBundle, AvailabilityQuery};

/// Commands accepted by [`AvailabilityState`].
///
/// Every fetch carries the request number handed out by
/// [`AvailabilityState::next_request`]; completions for any other number
/// are stale and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityCommand {
    /// A fetch was issued.
    FetchStarted {
        /// Request number.
        request: u64,
        /// The query sent.
        query: AvailabilityQuery,
    },
    /// The server answered.
    FetchSucceeded {
        /// Request number.
        request: u64,
        /// The complete answer.
        bundle: AvailabilityBundle,
    },
    /// The fetch failed.
    FetchFailed {
        /// Request number.
        request: u64,
        /// Error shown to the user.
        error: String,
    },
    /// The fetch was cancelled before it completed.
    FetchCancelled {
        /// Request number.
        request: u64,
    },
    /// Drop the current bundle and query.
    Clear,
}

/// The single current availability bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityState {
    bundle: Option<AvailabilityBundle>,
    query: Option<AvailabilityQuery>,
    loading: bool,
    error: Option<String>,
    latest_request: u64,
}

impl AvailabilityState {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bundle: None,
            query: None,
            loading: false,
            error: None,
            latest_request: 0,
        }
    }

    /// Returns the current bundle.
    #[must_use]
    pub const fn bundle(&self) -> Option<&AvailabilityBundle> {
        self.bundle.as_ref()
    }

    /// Returns the most recently issued query, used by retry.
    #[must_use]
    pub const fn last_query(&self) -> Option<&AvailabilityQuery> {
        self.query.as_ref()
    }

    /// Returns `true` while the latest fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the error of the latest fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the number to use for the next fetch.
    #[must_use]
    pub const fn next_request(&self) -> u64 {
        self.latest_request.wrapping_add(1)
    }

    /// Returns `true` if `request` is the latest issued fetch.
    #[must_use]
    pub const fn is_current(&self, request: u64) -> bool {
        request == self.latest_request
    }

    /// Applies a command. Completions of superseded fetches are dropped.
    pub fn apply(&mut self, command: AvailabilityCommand) {
        match command {
            AvailabilityCommand::FetchStarted { request, query } => {
                self.latest_request = request;
                self.query = Some(query);
                self.loading = true;
                self.error = None;
            }
            AvailabilityCommand::FetchSucceeded { request, bundle } => {
                if self.is_current(request) {
                    self.bundle = Some(bundle);
                    self.loading = false;
                    self.error = None;
                }
            }
            AvailabilityCommand::FetchFailed { request, error } => {
                if self.is_current(request) {
                    self.loading = false;
                    self.error = Some(error);
                }
            }
            AvailabilityCommand::FetchCancelled { request } => {
                if self.is_current(request) {
                    self.loading = false;
                }
            }
            AvailabilityCommand::Clear => {
                // anything still in flight becomes stale
                self.latest_request = self.latest_request.wrapping_add(1);
                self.bundle = None;
                self.query = None;
                self.loading = false;
                self.error = None;
            }
        }
    }
}
