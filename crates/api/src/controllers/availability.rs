// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::AvailabilityBackend;
use crate::error::ClientError;
use padel_book::{AvailabilityCommand, AvailabilityState};
use padel_book_domain::{AvailabilityBundle, AvailabilityQuery};
use std::sync::Arc;
use time::Date;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

struct Inner {
    state: AvailabilityState,
    in_flight: Option<CancellationToken>,
}

/// Fetches the availability bundle. Only the latest fetch wins.
///
/// Starting a fetch cancels the one before it. A fetch that completes after
/// being superseded leaves the state untouched.
pub struct AvailabilityController<B> {
    backend: Arc<B>,
    inner: Arc<Mutex<Inner>>,
}

impl<B: AvailabilityBackend> AvailabilityController<B> {
    /// Creates a controller with no bundle.
    #[must_use]
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            inner: Arc::new(Mutex::new(Inner {
                state: AvailabilityState::new(),
                in_flight: None,
            })),
        }
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> AvailabilityState {
        self.inner.lock().await.state.clone()
    }

    /// Fetches availability for `club_id` between two dates, inclusive.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Domain` if `end` is before `start`; otherwise
    /// as [`Self::fetch`].
    pub async fn fetch_range(
        &self,
        club_id: i64,
        start: Date,
        end: Date,
        court_id: Option<i64>,
    ) -> Result<AvailabilityBundle, ClientError> {
        let query: AvailabilityQuery = AvailabilityQuery::new(club_id, start, end, court_id)?;
        self.fetch(query).await
    }

    /// Fetches availability for `query`, superseding any fetch in flight.
    ///
    /// On failure the previous bundle is kept and the error is recorded.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Cancelled` if the fetch was cancelled or
    /// superseded, or the request error.
    pub async fn fetch(&self, query: AvailabilityQuery) -> Result<AvailabilityBundle, ClientError> {
        let (request, token): (u64, CancellationToken) = {
            let mut inner = self.inner.lock().await;
            if let Some(previous) = inner.in_flight.take() {
                previous.cancel();
            }
            let request: u64 = inner.state.next_request();
            inner
                .state
                .apply(AvailabilityCommand::FetchStarted { request, query });
            let token: CancellationToken = CancellationToken::new();
            inner.in_flight = Some(token.clone());
            (request, token)
        };
        debug!(request, club_id = query.club_id, "Fetching availability");

        let outcome: Option<Result<AvailabilityBundle, ClientError>> = tokio::select! {
            biased;
            () = token.cancelled() => None,
            result = self.backend.fetch_availability(&query) => Some(result),
        };

        let mut inner = self.inner.lock().await;
        if !inner.state.is_current(request) {
            debug!(request, "Dropping superseded availability response");
            return Err(ClientError::Cancelled);
        }
        inner.in_flight = None;

        match outcome {
            None => {
                inner
                    .state
                    .apply(AvailabilityCommand::FetchCancelled { request });
                Err(ClientError::Cancelled)
            }
            Some(Ok(bundle)) => {
                inner.state.apply(AvailabilityCommand::FetchSucceeded {
                    request,
                    bundle: bundle.clone(),
                });
                Ok(bundle)
            }
            Some(Err(err)) => {
                warn!(request, error = %err, "Availability fetch failed");
                inner.state.apply(AvailabilityCommand::FetchFailed {
                    request,
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Repeats the last query.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NothingToRetry` if no query was ever issued;
    /// otherwise as [`Self::fetch`].
    pub async fn retry(&self) -> Result<AvailabilityBundle, ClientError> {
        let query: Option<AvailabilityQuery> = self.inner.lock().await.state.last_query().copied();
        match query {
            Some(query) => self.fetch(query).await,
            None => Err(ClientError::NothingToRetry),
        }
    }

    /// Cancels the fetch in flight, if any.
    pub async fn cancel(&self) {
        if let Some(token) = self.inner.lock().await.in_flight.take() {
            token.cancel();
        }
    }

    /// Cancels any fetch and drops the bundle.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(token) = inner.in_flight.take() {
            token.cancel();
        }
        inner.state.apply(AvailabilityCommand::Clear);
    }
}
