// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `reqwest` implementation of every backend trait.

use crate::backend::{
    AuthBackend, AvailabilityBackend, OnboardingBackend, PaymentBackend, ResourceBackend,
};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::request_response::{
    AdminLogin, AdminValidation, AvailabilityCountResponse, CheckoutDetails,
    ConfirmPaymentRequest, ConfirmationResponse, CustomerLogin, Envelope, ErrorBody,
    OnboardingResponse, SendCodeRequest, VerifyCodeRequest,
};
use async_trait::async_trait;
use padel_book_domain::{
    AdminProfile, AvailabilityBundle, AvailabilityQuery, CheckoutKind, OnboardingDraft,
    PaymentIntent, Resource,
};
use padel_book_persistence::SessionStorage;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// REST client for the booking API.
///
/// Admin requests read the token from storage on every call, so a login or
/// logout in one controller is seen by all of them.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ClientConfig,
    storage: SessionStorage,
}

/// Which bearer token a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Credentials {
    /// No `Authorization` header.
    Anonymous,
    /// The admin token; `Bearer null` when none is stored.
    Admin,
    /// The customer token, when a customer is logged in.
    Customer,
}

impl HttpBackend {
    /// Creates a backend for the configured API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig, storage: SessionStorage) -> Result<Self, ClientError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            config,
            storage,
        })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        credentials: Credentials,
    ) -> Result<RequestBuilder, ClientError> {
        let url: String = self.config.url(path);
        debug!(%method, %url, "Sending API request");
        let builder: RequestBuilder = self.client.request(method, url);
        let builder: RequestBuilder = match credentials {
            Credentials::Anonymous => builder,
            Credentials::Admin => {
                // a missing token is still sent; the server answers 401
                let token: String = self
                    .storage
                    .admin_token()?
                    .unwrap_or_else(|| String::from("null"));
                builder.header(AUTHORIZATION, format!("Bearer {token}"))
            }
            Credentials::Customer => match self.storage.customer_session()? {
                Some(session) => builder.header(AUTHORIZATION, format!("Bearer {}", session.token)),
                None => builder,
            },
        };
        Ok(builder)
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ClientError> {
        let response: Response = Self::ensure_success(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&bytes)
            .map_err(|err| ClientError::Decode(err.to_string()))?;
        Ok(envelope.into_inner())
    }

    async fn send_expecting_no_body(builder: RequestBuilder) -> Result<(), ClientError> {
        Self::ensure_success(builder.send().await?).await?;
        Ok(())
    }

    async fn ensure_success(response: Response) -> Result<Response, ClientError> {
        let status: reqwest::StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: String = response.text().await.unwrap_or_default();
        let message: String = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| {
                format!(
                    "Request failed with status {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            });
        warn!(status = status.as_u16(), %message, "API request failed");
        Err(ClientError::Http {
            status: status.as_u16(),
            message,
        })
    }

    const fn payment_prefix(kind: CheckoutKind) -> &'static str {
        match kind {
            CheckoutKind::CourtBooking => "payment",
            CheckoutKind::EventRegistration => "events/payment",
            CheckoutKind::PrivateClass => "classes/payment",
        }
    }
}

#[async_trait]
impl AuthBackend for HttpBackend {
    async fn admin_send_code(&self, email: &str) -> Result<(), ClientError> {
        let builder: RequestBuilder = self
            .request(Method::POST, "admin/auth/send-code", Credentials::Anonymous)?
            .json(&SendCodeRequest { email });
        Self::send_expecting_no_body(builder).await
    }

    async fn admin_verify_code(&self, email: &str, code: &str) -> Result<AdminLogin, ClientError> {
        let builder: RequestBuilder = self
            .request(Method::POST, "admin/auth/verify-code", Credentials::Anonymous)?
            .json(&VerifyCodeRequest { email, code });
        Self::send(builder).await
    }

    async fn admin_validate(&self) -> Result<AdminProfile, ClientError> {
        let builder: RequestBuilder =
            self.request(Method::GET, "admin/auth/validate", Credentials::Admin)?;
        let validation: AdminValidation = Self::send(builder).await?;
        Ok(validation.admin)
    }

    async fn admin_logout(&self) -> Result<(), ClientError> {
        let builder: RequestBuilder =
            self.request(Method::POST, "admin/auth/logout", Credentials::Admin)?;
        Self::send_expecting_no_body(builder).await
    }

    async fn customer_send_code(&self, email: &str) -> Result<(), ClientError> {
        let builder: RequestBuilder = self
            .request(Method::POST, "auth/send-code", Credentials::Anonymous)?
            .json(&SendCodeRequest { email });
        Self::send_expecting_no_body(builder).await
    }

    async fn customer_verify_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<CustomerLogin, ClientError> {
        let builder: RequestBuilder = self
            .request(Method::POST, "auth/verify-code", Credentials::Anonymous)?
            .json(&VerifyCodeRequest { email, code });
        Self::send(builder).await
    }
}

#[async_trait]
impl AvailabilityBackend for HttpBackend {
    async fn fetch_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<AvailabilityBundle, ClientError> {
        let params: Vec<(&'static str, String)> = query.to_params()?;
        let builder: RequestBuilder = self
            .request(Method::GET, "availability", Credentials::Anonymous)?
            .query(&params);
        Self::send(builder).await
    }
}

#[async_trait]
impl PaymentBackend for HttpBackend {
    async fn create_intent(
        &self,
        details: &CheckoutDetails,
    ) -> Result<PaymentIntent, ClientError> {
        let path: String = format!("{}/create-intent", Self::payment_prefix(details.kind()));
        let builder: RequestBuilder = self
            .request(Method::POST, &path, Credentials::Customer)?
            .json(details);
        Self::send(builder).await
    }

    async fn confirm_payment(
        &self,
        intent: &PaymentIntent,
        details: &CheckoutDetails,
    ) -> Result<String, ClientError> {
        let path: String = format!("{}/confirm", Self::payment_prefix(details.kind()));
        let builder: RequestBuilder = self
            .request(Method::POST, &path, Credentials::Customer)?
            .json(&ConfirmPaymentRequest {
                payment_intent_id: &intent.payment_intent_id,
                transaction_id: intent.transaction_id,
                details,
            });
        let confirmation: ConfirmationResponse = Self::send(builder).await?;
        confirmation.into_number().ok_or_else(|| {
            ClientError::Decode(String::from(
                "confirmation carried neither a registration nor a booking number",
            ))
        })
    }
}

#[async_trait]
impl ResourceBackend for HttpBackend {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ClientError> {
        let path: String = format!("admin/{}", R::NAME);
        Self::send(self.request(Method::GET, &path, Credentials::Admin)?).await
    }

    async fn create<R: Resource>(&self, input: &R::Input) -> Result<R, ClientError> {
        let path: String = format!("admin/{}", R::NAME);
        let builder: RequestBuilder = self
            .request(Method::POST, &path, Credentials::Admin)?
            .json(input);
        Self::send(builder).await
    }

    async fn update<R: Resource>(&self, id: i64, input: &R::Input) -> Result<R, ClientError> {
        let path: String = format!("admin/{}/{id}", R::NAME);
        let builder: RequestBuilder = self
            .request(Method::PUT, &path, Credentials::Admin)?
            .json(input);
        Self::send(builder).await
    }

    async fn delete<R: Resource>(&self, id: i64) -> Result<(), ClientError> {
        let path: String = format!("admin/{}/{id}", R::NAME);
        Self::send_expecting_no_body(self.request(Method::DELETE, &path, Credentials::Admin)?)
            .await
    }

    async fn instructor_availability_count(
        &self,
        instructor_id: i64,
    ) -> Result<u32, ClientError> {
        let path: String = format!("admin/instructors/{instructor_id}/availability-count");
        let response: AvailabilityCountResponse =
            Self::send(self.request(Method::GET, &path, Credentials::Admin)?).await?;
        Ok(response.count)
    }
}

#[async_trait]
impl OnboardingBackend for HttpBackend {
    async fn onboard_club(&self, draft: &OnboardingDraft) -> Result<i64, ClientError> {
        let builder: RequestBuilder = self
            .request(Method::POST, "clubs/onboard", Credentials::Anonymous)?
            .json(draft);
        let response: OnboardingResponse = Self::send(builder).await?;
        Ok(response.id)
    }
}
