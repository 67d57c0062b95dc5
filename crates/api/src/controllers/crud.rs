// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::ResourceBackend;
use crate::error::ClientError;
use futures::future::join_all;
use padel_book::{AvailabilityCounts, CrudCommand, CrudSlice};
use padel_book_domain::{Instructor, Resource};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// List and mutate one admin collection.
///
/// The local list converges on the server's records: nothing is inserted or
/// changed until the server answers.
pub struct CrudService<R, B> {
    backend: Arc<B>,
    slice: Arc<Mutex<CrudSlice<R>>>,
    list_in_flight: Arc<Mutex<Option<CancellationToken>>>,
    counts: Arc<Mutex<AvailabilityCounts>>,
}

impl<R: Resource, B: ResourceBackend> CrudService<R, B> {
    /// Creates a service with an empty list.
    #[must_use]
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            slice: Arc::new(Mutex::new(CrudSlice::new())),
            list_in_flight: Arc::new(Mutex::new(None)),
            counts: Arc::new(Mutex::new(AvailabilityCounts::new())),
        }
    }

    /// Returns a copy of the collection state.
    pub async fn snapshot(&self) -> CrudSlice<R> {
        self.slice.lock().await.clone()
    }

    /// Replaces the local list with the server's, superseding any list in
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Cancelled` if the list was cancelled or
    /// superseded, or the request error. The error is also recorded in the
    /// slice.
    pub async fn list(&self) -> Result<Vec<R>, ClientError> {
        let (request, token): (u64, CancellationToken) = {
            let mut in_flight = self.list_in_flight.lock().await;
            if let Some(previous) = in_flight.take() {
                previous.cancel();
            }
            let mut slice = self.slice.lock().await;
            let request: u64 = slice.next_list_request();
            slice.apply(CrudCommand::ListPending { request })?;
            let token: CancellationToken = CancellationToken::new();
            *in_flight = Some(token.clone());
            (request, token)
        };
        debug!(resource = R::NAME, request, "Listing");

        let outcome: Option<Result<Vec<R>, ClientError>> = tokio::select! {
            biased;
            () = token.cancelled() => None,
            result = self.backend.list::<R>() => Some(result),
        };

        let mut in_flight = self.list_in_flight.lock().await;
        let mut slice = self.slice.lock().await;
        if !slice.is_current_list(request) {
            debug!(resource = R::NAME, request, "Dropping superseded list response");
            return Err(ClientError::Cancelled);
        }
        *in_flight = None;
        drop(in_flight);

        match outcome {
            None => {
                slice.apply(CrudCommand::ListCancelled { request })?;
                Err(ClientError::Cancelled)
            }
            Some(Ok(items)) => {
                debug!(resource = R::NAME, count = items.len(), "Listed");
                slice.apply(CrudCommand::ListFulfilled {
                    request,
                    items: items.clone(),
                })?;
                Ok(items)
            }
            Some(Err(err)) => {
                warn!(resource = R::NAME, error = %err, "Listing failed");
                slice.apply(CrudCommand::ListRejected {
                    request,
                    error: err.to_string(),
                })?;
                Err(err)
            }
        }
    }

    /// Cancels the list request in flight, if any.
    pub async fn cancel_list(&self) {
        if let Some(token) = self.list_in_flight.lock().await.take() {
            token.cancel();
        }
    }

    /// Creates a record and adds the server's copy to the list.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Busy` if another mutation is in flight, or the
    /// request error.
    pub async fn create(&self, input: &R::Input) -> Result<R, ClientError> {
        self.apply(CrudCommand::MutationPending).await?;
        match self.backend.create::<R>(input).await {
            Ok(record) => {
                info!(resource = R::NAME, id = record.id(), "Created");
                self.apply(CrudCommand::Created(record.clone())).await?;
                Ok(record)
            }
            Err(err) => self.rejected("create", err).await,
        }
    }

    /// Updates a record and replaces it with the server's copy.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Busy` if another mutation is in flight, or the
    /// request error.
    pub async fn update(&self, id: i64, input: &R::Input) -> Result<R, ClientError> {
        self.apply(CrudCommand::MutationPending).await?;
        match self.backend.update::<R>(id, input).await {
            Ok(record) => {
                info!(resource = R::NAME, id, "Updated");
                self.apply(CrudCommand::Updated(record.clone())).await?;
                Ok(record)
            }
            Err(err) => self.rejected("update", err).await,
        }
    }

    /// Deletes a record and removes it from the list.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Busy` if another mutation is in flight, or the
    /// request error.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.apply(CrudCommand::MutationPending).await?;
        match self.backend.delete::<R>(id).await {
            Ok(()) => {
                info!(resource = R::NAME, id, "Deleted");
                self.apply(CrudCommand::Deleted(id)).await?;
                Ok(())
            }
            Err(err) => self.rejected("delete", err).await,
        }
    }

    async fn rejected<T>(&self, operation: &str, err: ClientError) -> Result<T, ClientError> {
        warn!(resource = R::NAME, operation, error = %err, "Mutation failed");
        self.apply(CrudCommand::MutationRejected(err.to_string()))
            .await?;
        Err(err)
    }

    async fn apply(&self, command: CrudCommand<R>) -> Result<(), ClientError> {
        self.slice.lock().await.apply(command)?;
        Ok(())
    }
}

impl<B: ResourceBackend> CrudService<Instructor, B> {
    /// Returns the last fetched availability counts.
    pub async fn counts(&self) -> AvailabilityCounts {
        self.counts.lock().await.clone()
    }

    /// Fetches the available-slot count of every listed instructor.
    ///
    /// Requests run concurrently. A failed request counts as zero and does
    /// not fail the others.
    pub async fn availability_counts(&self) -> AvailabilityCounts {
        let ids: Vec<i64> = self
            .slice
            .lock()
            .await
            .items()
            .iter()
            .map(|instructor| instructor.id)
            .collect();

        let backend: &B = &self.backend;
        let results: Vec<(i64, u32)> = join_all(ids.into_iter().map(|id| async move {
            match backend.instructor_availability_count(id).await {
                Ok(count) => (id, count),
                Err(err) => {
                    warn!(instructor_id = id, error = %err, "Availability count failed");
                    (id, 0)
                }
            }
        }))
        .await;

        let mut counts = self.counts.lock().await;
        counts.replace_all(results);
        counts.clone()
    }
}
