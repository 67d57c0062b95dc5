// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One generic list/create/update/delete slice, instantiated per admin
//! resource.
//!
//! Nothing is applied optimistically: the collection only changes when the
//! server's record arrives.

use crate::error::CoreError;
use padel_book_domain::Resource;
use std::collections::BTreeMap;

/// Commands accepted by a [`CrudSlice`].
///
/// List commands carry the request number handed out by
/// [`CrudSlice::next_list_request`]; outcomes of superseded lists are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrudCommand<R> {
    /// A list request is about to be sent.
    ListPending {
        /// Request number.
        request: u64,
    },
    /// The server returned the full collection.
    ListFulfilled {
        /// Request number.
        request: u64,
        /// Records in server order.
        items: Vec<R>,
    },
    /// Listing failed.
    ListRejected {
        /// Request number.
        request: u64,
        /// Error shown to the user.
        error: String,
    },
    /// The list request was cancelled.
    ListCancelled {
        /// Request number.
        request: u64,
    },
    /// A create, update or delete is about to be sent.
    MutationPending,
    /// The server created a record.
    Created(R),
    /// The server updated a record.
    Updated(R),
    /// The server deleted the record with this id.
    Deleted(i64),
    /// The mutation failed.
    MutationRejected(String),
}

/// The local copy of one admin collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrudSlice<R> {
    items: Vec<R>,
    loading: bool,
    submitting: bool,
    error: Option<String>,
    latest_list: u64,
}

impl<R: Resource> CrudSlice<R> {
    /// Creates an empty slice.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            submitting: false,
            error: None,
            latest_list: 0,
        }
    }

    /// Returns the records in server order.
    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Returns the record with the given id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns `true` while a list request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` while a mutation is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns the last request error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the number to use for the next list request.
    #[must_use]
    pub const fn next_list_request(&self) -> u64 {
        self.latest_list.wrapping_add(1)
    }

    /// Returns `true` if `request` is the latest issued list.
    #[must_use]
    pub const fn is_current_list(&self, request: u64) -> bool {
        request == self.latest_list
    }

    /// Applies a command.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Busy` if a mutation is started while another one
    /// is in flight. The state is unchanged on error.
    pub fn apply(&mut self, command: CrudCommand<R>) -> Result<(), CoreError> {
        match command {
            CrudCommand::ListPending { request } => {
                self.latest_list = request;
                self.loading = true;
                self.error = None;
            }
            CrudCommand::ListFulfilled { request, items } => {
                if self.is_current_list(request) {
                    self.items = items;
                    self.loading = false;
                }
            }
            CrudCommand::ListRejected { request, error } => {
                if self.is_current_list(request) {
                    self.loading = false;
                    self.error = Some(error);
                }
            }
            CrudCommand::ListCancelled { request } => {
                if self.is_current_list(request) {
                    self.loading = false;
                }
            }
            CrudCommand::MutationPending => {
                if self.submitting {
                    return Err(CoreError::Busy { operation: R::NAME });
                }
                self.submitting = true;
                self.error = None;
            }
            CrudCommand::Created(record) => {
                self.submitting = false;
                let id: i64 = record.id();
                match self.items.iter_mut().find(|item| item.id() == id) {
                    Some(existing) => *existing = record,
                    None => self.items.push(record),
                }
            }
            CrudCommand::Updated(record) => {
                self.submitting = false;
                let id: i64 = record.id();
                if let Some(existing) = self.items.iter_mut().find(|item| item.id() == id) {
                    *existing = record;
                }
            }
            CrudCommand::Deleted(id) => {
                self.submitting = false;
                self.items.retain(|item| item.id() != id);
            }
            CrudCommand::MutationRejected(error) => {
                self.submitting = false;
                self.error = Some(error);
            }
        }
        Ok(())
    }
}

impl<R: Resource> Default for CrudSlice<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bookable-slot counts per instructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityCounts(BTreeMap<i64, u32>);

impl AvailabilityCounts {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Replaces every count.
    pub fn replace_all(&mut self, counts: impl IntoIterator<Item = (i64, u32)>) {
        self.0 = counts.into_iter().collect();
    }

    /// Returns the count for an instructor, zero if unknown.
    #[must_use]
    pub fn get(&self, instructor_id: i64) -> u32 {
        self.0.get(&instructor_id).copied().unwrap_or_default()
    }

    /// Iterates `(instructor_id, count)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.0.iter().map(|(id, count)| (*id, *count))
    }
}
