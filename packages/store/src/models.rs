//! # Domain models shared across the workspace
//!
//! Every type here mirrors a JSON payload of the FleetOps backend and is
//! `Serialize + Deserialize + PartialEq` so it can cross the wire and live in
//! Dioxus signals. Monetary fields arrive as decimal strings (the backend's
//! canonical representation) and stay that way; parsing to `f64` happens only
//! at display/estimate boundaries via the `*_amount` and [`Car::daily_rate`]
//! helpers, because the client never does authoritative money math.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Role attached to an authenticated user. Immutable for the lifetime of a
/// session; changed only by re-authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Staff,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Staff => "STAFF",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user profile as served by `GET /auth/me/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl UserInfo {
    /// Display name, falling back to the email address when the name is empty.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
}

impl CarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarStatus::Available => "AVAILABLE",
            CarStatus::Rented => "RENTED",
            CarStatus::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for CarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fleet car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub car_class: String,
    pub year: i32,
    /// Decimal string, e.g. `"59.90"`.
    pub base_daily_price: String,
    pub status: CarStatus,
}

impl Car {
    /// `"Brand Model (Year)"`, the backend's display convention.
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.year)
    }

    /// Daily rate parsed for the advisory charge estimate. `None` when the
    /// backend sent something unparseable.
    pub fn daily_rate(&self) -> Option<f64> {
        self.base_daily_price.trim().parse().ok()
    }
}

/// Rental lifecycle status as observed by the client. Transitions only move
/// forward (DRAFT → ACTIVE → CLOSED); CLOSED is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    Draft,
    Active,
    Closed,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Draft => "DRAFT",
            RentalStatus::Active => "ACTIVE",
            RentalStatus::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rental agreement. `actual_return_date` is absent until the rental is
/// CLOSED; `expected_return_date >= issue_date` is enforced server-side, and
/// the estimate helpers clamp defensively rather than trusting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: i64,
    pub customer: i64,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub car: i64,
    #[serde(default)]
    pub car_display: Option<String>,
    pub issue_date: NaiveDate,
    pub expected_return_date: NaiveDate,
    #[serde(default)]
    pub actual_return_date: Option<NaiveDate>,
    pub status: RentalStatus,
}

impl Rental {
    /// Label shown in tables: the denormalized car display when the backend
    /// sent one, otherwise the raw id.
    pub fn car_label(&self) -> String {
        self.car_display
            .clone()
            .unwrap_or_else(|| format!("#{}", self.car))
    }

    pub fn customer_label(&self) -> String {
        self.customer_email
            .clone()
            .unwrap_or_else(|| format!("#{}", self.customer))
    }
}

/// Customer profile row from `GET /customers/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
}

/// Authoritative result of `POST /rentals/:id/return/`. The invoice total is
/// the server's figure; any local estimate is discarded once this arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnOutcome {
    pub rental: Rental,
    pub invoice_total: String,
}

/// One row of the occupancy report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyRow {
    pub car_id: i64,
    pub car: String,
    pub status: CarStatus,
    #[serde(default)]
    pub expected_return_date: Option<NaiveDate>,
}

/// One row of the financial report. Money fields are decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRow {
    pub car_id: i64,
    pub revenue: String,
    #[serde(default)]
    pub rentals_count: Option<i64>,
    pub penalties_total: String,
    pub net_amount: String,
}

impl FinancialRow {
    pub fn revenue_amount(&self) -> f64 {
        self.revenue.trim().parse().unwrap_or(0.0)
    }

    pub fn penalties_amount(&self) -> f64 {
        self.penalties_total.trim().parse().unwrap_or(0.0)
    }

    pub fn net(&self) -> f64 {
        self.net_amount.trim().parse().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::to_string(&Role::Staff).unwrap();
        assert_eq!(json, "\"STAFF\"");
        let role: Role = serde_json::from_str("\"CUSTOMER\"").unwrap();
        assert_eq!(role, Role::Customer);
    }

    #[test]
    fn test_user_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: 1,
            email: "ops@example.com".into(),
            full_name: "  ".into(),
            role: Role::Staff,
        };
        assert_eq!(user.display_name(), "ops@example.com");
    }

    #[test]
    fn test_car_daily_rate_parses_decimal_string() {
        let car = Car {
            id: 1,
            brand: "Toyota".into(),
            model: "Corolla".into(),
            car_class: "Economy".into(),
            year: 2021,
            base_daily_price: "59.90".into(),
            status: CarStatus::Available,
        };
        assert_eq!(car.daily_rate(), Some(59.90));
        assert_eq!(car.display_name(), "Toyota Corolla (2021)");

        let broken = Car {
            base_daily_price: "n/a".into(),
            ..car
        };
        assert_eq!(broken.daily_rate(), None);
    }

    #[test]
    fn test_rental_deserializes_without_optional_fields() {
        let json = r#"{
            "id": 7,
            "customer": 3,
            "car": 12,
            "issue_date": "2024-01-01",
            "expected_return_date": "2024-01-10",
            "status": "ACTIVE"
        }"#;
        let rental: Rental = serde_json::from_str(json).unwrap();
        assert_eq!(rental.status, RentalStatus::Active);
        assert!(rental.actual_return_date.is_none());
        assert_eq!(rental.car_label(), "#12");
        assert_eq!(rental.customer_label(), "#3");
    }

    #[test]
    fn test_financial_row_parse_helpers_tolerate_garbage() {
        let row = FinancialRow {
            car_id: 1,
            revenue: "1200.50".into(),
            rentals_count: Some(4),
            penalties_total: "".into(),
            net_amount: "1200.50".into(),
        };
        assert_eq!(row.revenue_amount(), 1200.50);
        assert_eq!(row.penalties_amount(), 0.0);
    }
}
