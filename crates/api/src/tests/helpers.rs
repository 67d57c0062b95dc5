// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::{
    AuthBackend, AvailabilityBackend, OnboardingBackend, PaymentBackend, ResourceBackend,
};
use crate::controllers::PaymentCapture;
use crate::error::ClientError;
use crate::request_response::{AdminLogin, CheckoutDetails, CustomerLogin};
use async_trait::async_trait;
use padel_book_domain::{
    AdminProfile, AdminRole, AvailabilityBundle, AvailabilityQuery, BookingDraft, CourtRecord,
    CourtType, CustomerProfile, Instructor, OnboardingDraft, PaymentIntent, PlayerDetails,
    Resource, Surface,
};
use padel_book_persistence::{KeyValueStore, MemoryStore, PersistenceError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use time::macros::date;

/// Club id whose availability requests never complete.
pub const HANGING_CLUB_ID: i64 = 99;

/// Instructor id whose availability count request fails.
pub const FAILING_INSTRUCTOR_ID: i64 = 2;

/// In-memory backend that records the order of calls.
///
/// Resources are kept as JSON so one map serves every resource type.
pub struct FakeBackend {
    pub calls: Mutex<Vec<String>>,
    pub reject_code: AtomicBool,
    pub reject_validate: AtomicBool,
    pub fail_logout: AtomicBool,
    pub fail_create_intent: AtomicBool,
    pub fail_confirm: AtomicBool,
    pub fail_onboarding: AtomicBool,
    pub fail_mutations: AtomicBool,
    pub hang_list: AtomicBool,
    collections: Mutex<BTreeMap<&'static str, Vec<Value>>>,
    next_id: AtomicI64,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject_code: AtomicBool::new(false),
            reject_validate: AtomicBool::new(false),
            fail_logout: AtomicBool::new(false),
            fail_create_intent: AtomicBool::new(false),
            fail_confirm: AtomicBool::new(false),
            fail_onboarding: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            hang_list: AtomicBool::new(false),
            collections: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(100),
        }
    }

    pub fn seed<R: Resource>(&self, records: &[R]) {
        let values: Vec<Value> = records
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect();
        self.collections.lock().unwrap().insert(R::NAME, values);
    }

    pub fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn flag(flag: &AtomicBool) -> bool {
        flag.load(Ordering::SeqCst)
    }

    fn server_error(status: u16, message: &str) -> ClientError {
        ClientError::Http {
            status,
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl AuthBackend for FakeBackend {
    async fn admin_send_code(&self, _email: &str) -> Result<(), ClientError> {
        self.record("admin_send_code");
        Ok(())
    }

    async fn admin_verify_code(&self, email: &str, code: &str) -> Result<AdminLogin, ClientError> {
        self.record(&format!("admin_verify_code:{email}:{code}"));
        if Self::flag(&self.reject_code) {
            return Err(Self::server_error(401, "Invalid or expired code"));
        }
        Ok(AdminLogin {
            token: String::from("admin-token"),
            admin: create_test_admin(),
        })
    }

    async fn admin_validate(&self) -> Result<AdminProfile, ClientError> {
        self.record("admin_validate");
        if Self::flag(&self.reject_validate) {
            return Err(Self::server_error(401, "Session expired"));
        }
        Ok(create_test_admin())
    }

    async fn admin_logout(&self) -> Result<(), ClientError> {
        self.record("admin_logout");
        if Self::flag(&self.fail_logout) {
            return Err(Self::server_error(500, "Logout failed"));
        }
        Ok(())
    }

    async fn customer_send_code(&self, _email: &str) -> Result<(), ClientError> {
        self.record("customer_send_code");
        Ok(())
    }

    async fn customer_verify_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<CustomerLogin, ClientError> {
        self.record(&format!("customer_verify_code:{email}:{code}"));
        if Self::flag(&self.reject_code) {
            return Err(Self::server_error(401, "Invalid or expired code"));
        }
        Ok(CustomerLogin {
            token: String::from("customer-token"),
            customer: create_test_customer(),
        })
    }
}

#[async_trait]
impl AvailabilityBackend for FakeBackend {
    async fn fetch_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<AvailabilityBundle, ClientError> {
        self.record(&format!("fetch_availability:{}", query.club_id));
        if query.club_id == HANGING_CLUB_ID {
            std::future::pending::<()>().await;
        }
        if query.club_id < 0 {
            return Err(Self::server_error(500, "Availability unavailable"));
        }
        Ok(AvailabilityBundle {
            courts: vec![create_test_court(query.club_id * 10, query.club_id)],
            ..AvailabilityBundle::default()
        })
    }
}

#[async_trait]
impl PaymentBackend for FakeBackend {
    async fn create_intent(
        &self,
        details: &CheckoutDetails,
    ) -> Result<PaymentIntent, ClientError> {
        self.record(&format!("create_intent:{}", details.kind()));
        if Self::flag(&self.fail_create_intent) {
            return Err(Self::server_error(400, "Slot no longer available"));
        }
        Ok(create_test_intent())
    }

    async fn confirm_payment(
        &self,
        intent: &PaymentIntent,
        _details: &CheckoutDetails,
    ) -> Result<String, ClientError> {
        self.record(&format!("confirm_payment:{}", intent.payment_intent_id));
        if Self::flag(&self.fail_confirm) {
            return Err(Self::server_error(500, "Confirmation failed"));
        }
        Ok(String::from("BK-1001"))
    }
}

#[async_trait]
impl ResourceBackend for FakeBackend {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ClientError> {
        self.record(&format!("list:{}", R::NAME));
        if Self::flag(&self.hang_list) {
            std::future::pending::<()>().await;
        }
        let values: Vec<Value> = self
            .collections
            .lock()
            .unwrap()
            .get(R::NAME)
            .cloned()
            .unwrap_or_default();
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(|e| ClientError::Decode(e.to_string())))
            .collect()
    }

    async fn create<R: Resource>(&self, input: &R::Input) -> Result<R, ClientError> {
        self.record(&format!("create:{}", R::NAME));
        if Self::flag(&self.fail_mutations) {
            return Err(Self::server_error(422, "Email already in use"));
        }
        let id: i64 = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut value: Value = serde_json::to_value(input).unwrap();
        value["id"] = Value::from(id);
        self.collections
            .lock()
            .unwrap()
            .entry(R::NAME)
            .or_default()
            .push(value.clone());
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn update<R: Resource>(&self, id: i64, input: &R::Input) -> Result<R, ClientError> {
        self.record(&format!("update:{}:{id}", R::NAME));
        if Self::flag(&self.fail_mutations) {
            return Err(Self::server_error(422, "Invalid update"));
        }
        let mut value: Value = serde_json::to_value(input).unwrap();
        value["id"] = Value::from(id);
        let mut collections = self.collections.lock().unwrap();
        let records: &mut Vec<Value> = collections.entry(R::NAME).or_default();
        match records.iter_mut().find(|r| r["id"] == Value::from(id)) {
            Some(existing) => *existing = value.clone(),
            None => return Err(Self::server_error(404, "Not found")),
        }
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn delete<R: Resource>(&self, id: i64) -> Result<(), ClientError> {
        self.record(&format!("delete:{}:{id}", R::NAME));
        if Self::flag(&self.fail_mutations) {
            return Err(Self::server_error(409, "Record is in use"));
        }
        self.collections
            .lock()
            .unwrap()
            .entry(R::NAME)
            .or_default()
            .retain(|r| r["id"] != Value::from(id));
        Ok(())
    }

    async fn instructor_availability_count(
        &self,
        instructor_id: i64,
    ) -> Result<u32, ClientError> {
        self.record(&format!("availability_count:{instructor_id}"));
        if instructor_id == FAILING_INSTRUCTOR_ID {
            return Err(Self::server_error(500, "Count failed"));
        }
        Ok(u32::try_from(instructor_id * 10).unwrap())
    }
}

#[async_trait]
impl OnboardingBackend for FakeBackend {
    async fn onboard_club(&self, draft: &OnboardingDraft) -> Result<i64, ClientError> {
        self.record(&format!("onboard_club:{}", draft.identity.name));
        if Self::flag(&self.fail_onboarding) {
            return Err(Self::server_error(409, "A club with this name already exists"));
        }
        Ok(77)
    }
}

/// Capture step that logs into the backend's call list.
pub struct FakeCapture {
    pub backend: Arc<FakeBackend>,
    pub decline: bool,
}

#[async_trait]
impl PaymentCapture for FakeCapture {
    async fn capture(&self, intent: &PaymentIntent) -> Result<(), ClientError> {
        self.backend
            .record(&format!("capture:{}", intent.client_secret));
        if self.decline {
            return Err(ClientError::Capture(String::from("Card declined")));
        }
        Ok(())
    }
}

pub fn create_test_admin() -> AdminProfile {
    AdminProfile {
        id: 1,
        email: String::from("a@b.com"),
        name: Some(String::from("Club Admin")),
        role: AdminRole::ClubAdmin,
        club_id: Some(3),
    }
}

pub fn create_test_customer() -> CustomerProfile {
    CustomerProfile {
        id: 9,
        email: String::from("player@club.test"),
        name: Some(String::from("Alex Player")),
        phone: None,
    }
}

pub fn create_test_intent() -> PaymentIntent {
    PaymentIntent {
        client_secret: String::from("cs_test_1"),
        payment_intent_id: String::from("pi_1"),
        transaction_id: 42,
    }
}

pub fn create_test_court(id: i64, club_id: i64) -> CourtRecord {
    CourtRecord {
        id,
        club_id: Some(club_id),
        name: format!("Court {id}"),
        court_type: CourtType::Indoor,
        surface: Surface::ArtificialGrass,
        has_lighting: true,
        display_order: 1,
        active: true,
    }
}

pub fn create_test_instructor(id: i64, name: &str) -> Instructor {
    Instructor {
        id,
        club_id: Some(3),
        name: name.to_string(),
        email: format!("{}@club.test", name.to_lowercase()),
        phone: None,
        bio: None,
        hourly_rate: Some(4000),
        active: true,
    }
}

pub fn create_test_player() -> PlayerDetails {
    PlayerDetails {
        name: String::from("Alex Player"),
        email: String::from("player@club.test"),
        phone: String::from("+34600111222"),
    }
}

/// A booking draft that passes every step.
pub fn create_complete_booking() -> BookingDraft {
    BookingDraft {
        club_id: Some(3),
        date: Some(date!(2026 - 11 - 02)),
        court_id: Some(30),
        start_time: Some(String::from("10:00")),
        duration_minutes: Some(90),
        player: create_test_player(),
        notes: None,
        use_subscription: false,
    }
}

/// Store whose reads can be switched to fail.
pub struct UnreadableStore {
    pub inner: MemoryStore,
    pub fail_reads: AtomicBool,
}

impl KeyValueStore for UnreadableStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PersistenceError::Io(String::from("disk unavailable")));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        self.inner.remove(key)
    }
}
