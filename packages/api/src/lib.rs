//! # API crate — typed REST client for the FleetOps backend
//!
//! One [`ApiClient`] method per backend operation; every frontend surface
//! goes through it. The client attaches the stored bearer credential to each
//! request (anonymous when none is stored) and converts non-2xx responses
//! into [`ApiError`] values carrying the status and parsed body.
//!
//! ## Endpoints
//!
//! | Method | Backend route |
//! |--------|---------------|
//! | [`ApiClient::login`], [`ApiClient::register`], [`ApiClient::me`] | `POST /auth/login/`, `POST /auth/register/`, `GET /auth/me/` |
//! | [`ApiClient::cars`], [`ApiClient::car`], [`ApiClient::create_car`], [`ApiClient::update_car`], [`ApiClient::delete_car`] | `/cars/` |
//! | [`ApiClient::rentals`], [`ApiClient::rental`], [`ApiClient::create_rental`], [`ApiClient::update_rental_dates`] | `/rentals/` |
//! | [`ApiClient::return_rental`] | `POST /rentals/:id/return/` — sole authoritative source for final penalty/invoice figures |
//! | [`ApiClient::customers`], [`ApiClient::customer`] | `/customers/` |
//! | [`ApiClient::occupancy_report`], [`ApiClient::financial_report`] | `/reports/` |
//!
//! The pure core (`store::access`, `store::lifecycle`) never suspends; these
//! boundary calls are the application's only await points. A view that
//! navigates away may abandon an in-flight call and discard its late result.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use store::{
    Car, CarStatus, CredentialStore, Customer, FinancialRow, FleetOpsConfig, OccupancyRow,
    Rental, RentalStatus, ReturnOutcome, UserInfo,
};

mod error;
pub use error::ApiError;

/// REST client handle. Cheap to clone; provided to views through context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    credentials: Arc<dyn CredentialStore>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access: String,
}

/// Registration payload for `POST /auth/register/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub address: String,
    pub phone: String,
}

/// Create/update payload for a car.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarPayload {
    pub brand: String,
    pub model: String,
    pub car_class: String,
    pub year: i32,
    pub base_daily_price: String,
    pub status: CarStatus,
}

/// Payload for `POST /rentals/`. The deposit is held by the backend until the
/// rental is closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalCreate {
    pub customer: i64,
    pub car: i64,
    pub issue_date: NaiveDate,
    pub expected_return_date: NaiveDate,
    pub deposit_amount: String,
}

/// Date-edit payload for `PATCH /rentals/:id/` (legal only while DRAFT).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalDatesPatch {
    pub issue_date: NaiveDate,
    pub expected_return_date: NaiveDate,
}

/// Payload for `POST /rentals/:id/return/`. An absent date means "today" on
/// the server as well.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_return_date: Option<NaiveDate>,
    pub bad_condition: bool,
}

/// Server-side filters for `GET /rentals/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentalFilters {
    pub status: Option<RentalStatus>,
    pub customer: Option<i64>,
    pub car: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl RentalFilters {
    /// Query pairs in the backend's parameter names; unset filters are
    /// omitted entirely.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(customer) = self.customer {
            pairs.push(("customer", customer.to_string()));
        }
        if let Some(car) = self.car {
            pairs.push(("car", car.to_string()));
        }
        if let Some(from) = self.date_from {
            pairs.push(("date_from", from.to_string()));
        }
        if let Some(to) = self.date_to {
            pairs.push(("date_to", to.to_string()));
        }
        pairs
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialStore>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
            credentials,
        }
    }

    /// Client wired to the platform-default credential store.
    pub fn from_config(config: &FleetOpsConfig) -> Self {
        Self::new(config.api.base_url.clone(), store::default_credential_store())
    }

    /// Whether a bearer credential is currently stored.
    pub fn has_credential(&self) -> bool {
        self.credentials.get().is_some()
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match self.credentials.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: serde::de::DeserializeOwned>(
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .ok()
                .and_then(|text| serde_json::from_str(&text).ok())
                .unwrap_or(Value::Null);
            tracing::warn!(status = status.as_u16(), "backend rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like [`Self::send`] but for endpoints that answer with an empty body
    /// (e.g. `DELETE` → 204).
    async fn send_no_content(builder: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .ok()
                .and_then(|text| serde_json::from_str(&text).ok())
                .unwrap_or(Value::Null);
            tracing::warn!(status = status.as_u16(), "backend rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    // --- auth ---

    /// Exchange credentials for a bearer token and store it. The profile is
    /// fetched separately via [`Self::me`].
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let response: LoginResponse = Self::send(
            self.request(reqwest::Method::POST, "/auth/login/")
                .json(&LoginRequest { email, password }),
        )
        .await?;
        self.credentials.set(&response.access);
        Ok(())
    }

    /// Drop the stored credential. Purely client-side; the bearer token is
    /// stateless on the backend.
    pub fn logout(&self) {
        self.credentials.clear();
    }

    /// Current profile for the stored credential. A 401/403 here means the
    /// credential is stale; callers clear it via [`Self::logout`].
    pub async fn me(&self) -> Result<UserInfo, ApiError> {
        Self::send(self.request(reqwest::Method::GET, "/auth/me/")).await
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<(), ApiError> {
        let _: Value =
            Self::send(self.request(reqwest::Method::POST, "/auth/register/").json(payload))
                .await?;
        Ok(())
    }

    // --- cars ---

    pub async fn cars(&self) -> Result<Vec<Car>, ApiError> {
        Self::send(self.request(reqwest::Method::GET, "/cars/")).await
    }

    pub async fn car(&self, id: i64) -> Result<Car, ApiError> {
        Self::send(self.request(reqwest::Method::GET, &format!("/cars/{id}/"))).await
    }

    pub async fn create_car(&self, payload: &CarPayload) -> Result<Car, ApiError> {
        Self::send(self.request(reqwest::Method::POST, "/cars/").json(payload)).await
    }

    pub async fn update_car(&self, id: i64, payload: &CarPayload) -> Result<Car, ApiError> {
        Self::send(
            self.request(reqwest::Method::PATCH, &format!("/cars/{id}/"))
                .json(payload),
        )
        .await
    }

    pub async fn delete_car(&self, id: i64) -> Result<(), ApiError> {
        Self::send_no_content(self.request(reqwest::Method::DELETE, &format!("/cars/{id}/"))).await
    }

    // --- rentals ---

    pub async fn rentals(&self, filters: &RentalFilters) -> Result<Vec<Rental>, ApiError> {
        Self::send(
            self.request(reqwest::Method::GET, "/rentals/")
                .query(&filters.to_query()),
        )
        .await
    }

    pub async fn rental(&self, id: i64) -> Result<Rental, ApiError> {
        Self::send(self.request(reqwest::Method::GET, &format!("/rentals/{id}/"))).await
    }

    pub async fn create_rental(&self, payload: &RentalCreate) -> Result<Rental, ApiError> {
        Self::send(self.request(reqwest::Method::POST, "/rentals/").json(payload)).await
    }

    pub async fn update_rental_dates(
        &self,
        id: i64,
        payload: &RentalDatesPatch,
    ) -> Result<Rental, ApiError> {
        Self::send(
            self.request(reqwest::Method::PATCH, &format!("/rentals/{id}/"))
                .json(payload),
        )
        .await
    }

    /// Close a rental. The response carries the authoritative closed rental
    /// and invoice total; callers replace their local record with it and
    /// discard any client-side estimate.
    pub async fn return_rental(
        &self,
        id: i64,
        payload: &ReturnRequest,
    ) -> Result<ReturnOutcome, ApiError> {
        Self::send(
            self.request(reqwest::Method::POST, &format!("/rentals/{id}/return/"))
                .json(payload),
        )
        .await
    }

    // --- customers ---

    pub async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
        Self::send(self.request(reqwest::Method::GET, "/customers/")).await
    }

    pub async fn customer(&self, id: i64) -> Result<Customer, ApiError> {
        Self::send(self.request(reqwest::Method::GET, &format!("/customers/{id}/"))).await
    }

    // --- reports ---

    pub async fn occupancy_report(&self, date: NaiveDate) -> Result<Vec<OccupancyRow>, ApiError> {
        Self::send(
            self.request(reqwest::Method::GET, "/reports/occupancy/")
                .query(&[("date", date.to_string())]),
        )
        .await
    }

    pub async fn financial_report(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<FinancialRow>, ApiError> {
        Self::send(
            self.request(reqwest::Method::GET, "/reports/financial/")
                .query(&[
                    ("date_from", date_from.to_string()),
                    ("date_to", date_to.to_string()),
                ]),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:8000/api/", Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = client();
        assert_eq!(client.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_has_credential_tracks_store() {
        let creds = Arc::new(MemoryStore::new());
        let client = ApiClient::new("http://x", creds.clone());
        assert!(!client.has_credential());
        creds.set("tok");
        assert!(client.has_credential());
        client.logout();
        assert!(!client.has_credential());
    }

    #[test]
    fn test_empty_filters_build_no_query() {
        assert!(RentalFilters::default().to_query().is_empty());
    }

    #[test]
    fn test_filters_serialize_backend_parameter_names() {
        let filters = RentalFilters {
            status: Some(RentalStatus::Active),
            customer: Some(3),
            car: Some(12),
            date_from: Some("2024-01-01".parse().unwrap()),
            date_to: Some("2024-02-01".parse().unwrap()),
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("status", "ACTIVE".to_string()),
                ("customer", "3".to_string()),
                ("car", "12".to_string()),
                ("date_from", "2024-01-01".to_string()),
                ("date_to", "2024-02-01".to_string()),
            ]
        );
    }

    #[test]
    fn test_return_request_omits_absent_date() {
        let body = serde_json::to_value(ReturnRequest {
            actual_return_date: None,
            bad_condition: true,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"bad_condition": true}));

        let dated = serde_json::to_value(ReturnRequest {
            actual_return_date: Some("2024-01-13".parse().unwrap()),
            bad_condition: false,
        })
        .unwrap();
        assert_eq!(
            dated,
            serde_json::json!({"actual_return_date": "2024-01-13", "bad_condition": false})
        );
    }
}
