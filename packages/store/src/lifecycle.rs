//! # Rental lifecycle — mutation legality and advisory estimates
//!
//! Two responsibilities: decide which mutations are legal for a rental in its
//! current status, and produce the non-authoritative cost preview shown to the
//! operator before the backend call. Everything here is pure; the backend
//! recomputes all figures on `POST /rentals/:id/return/` and its
//! `invoice_total` is the only number that counts.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::access::can_manage_rentals;
use crate::models::{Rental, RentalStatus, Role};

/// Preview of the backend's late-return fee, per day. Mirrors the server-side
/// constant of the same name; the values are kept in sync by convention and
/// are advisory only, billing correctness never depends on them.
pub const LATE_FEE_PER_DAY: f64 = 50.0;

/// Preview of the backend's flat bad-condition penalty. Advisory, see
/// [`LATE_FEE_PER_DAY`].
pub const BAD_CONDITION_FEE: f64 = 100.0;

/// Dates may be edited only while the rental is still a draft; once ACTIVE
/// they anchor billing and must not silently change.
pub fn can_edit_dates(rental: &Rental, role: Role) -> bool {
    can_manage_rentals(Some(role)) && rental.status == RentalStatus::Draft
}

/// A rental may be returned from DRAFT or ACTIVE (early or administrative
/// closure). CLOSED is terminal.
pub fn can_return(rental: &Rental, role: Role) -> bool {
    can_manage_rentals(Some(role)) && rental.status != RentalStatus::Closed
}

/// Whole-day span between two dates, clamped to a minimum of one day.
/// Negative or zero spans (malformed input, clock skew) clamp rather than
/// error.
pub fn duration_days(issue_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - issue_date).num_days().max(1)
}

/// Estimated rental charge at current status: actual return date once closed,
/// expected date otherwise. Informational, shown on the detail view.
pub fn estimated_charge(rental: &Rental, daily_rate: f64) -> f64 {
    let end = rental
        .actual_return_date
        .unwrap_or(rental.expected_return_date);
    duration_days(rental.issue_date, end) as f64 * daily_rate
}

/// Advisory penalty breakdown recomputed on every keystroke of the return
/// form. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnEstimate {
    pub late_days: i64,
    pub late_fee: f64,
    pub bad_condition_fee: f64,
    pub total: f64,
}

/// Estimate the penalties for returning on `actual_return_date`. Returning on
/// or before the expected date never yields a negative late count.
pub fn estimate_return(
    expected_return_date: NaiveDate,
    actual_return_date: NaiveDate,
    bad_condition: bool,
) -> ReturnEstimate {
    let late_days = (actual_return_date - expected_return_date).num_days().max(0);
    let late_fee = if late_days > 0 {
        late_days as f64 * LATE_FEE_PER_DAY
    } else {
        0.0
    };
    let bad_condition_fee = if bad_condition { BAD_CONDITION_FEE } else { 0.0 };
    ReturnEstimate {
        late_days,
        late_fee,
        bad_condition_fee,
        total: late_fee + bad_condition_fee,
    }
}

/// [`estimate_return`] with the form's default: an empty date field means
/// "returned today" (local calendar date).
pub fn estimate_return_or_today(
    expected_return_date: NaiveDate,
    actual_return_date: Option<NaiveDate>,
    bad_condition: bool,
) -> ReturnEstimate {
    let actual = actual_return_date.unwrap_or_else(|| Local::now().date_naive());
    estimate_return(expected_return_date, actual, bad_condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn rental(status: RentalStatus) -> Rental {
        Rental {
            id: 1,
            customer: 3,
            customer_email: None,
            car: 12,
            car_display: None,
            issue_date: date("2024-01-01"),
            expected_return_date: date("2024-01-10"),
            actual_return_date: None,
            status,
        }
    }

    #[test]
    fn test_can_edit_dates_truth_table() {
        // 3 roles x 3 statuses; only STAFF/ADMIN on DRAFT pass.
        for role in [Role::Customer, Role::Staff, Role::Admin] {
            for status in [RentalStatus::Draft, RentalStatus::Active, RentalStatus::Closed] {
                let expected = role != Role::Customer && status == RentalStatus::Draft;
                assert_eq!(
                    can_edit_dates(&rental(status), role),
                    expected,
                    "role={role:?} status={status:?}"
                );
            }
        }
    }

    #[test]
    fn test_can_return_denied_when_closed_for_every_role() {
        for role in [Role::Customer, Role::Staff, Role::Admin] {
            assert!(!can_return(&rental(RentalStatus::Closed), role));
        }
    }

    #[test]
    fn test_can_return_draft_or_active_for_managers_only() {
        for status in [RentalStatus::Draft, RentalStatus::Active] {
            assert!(can_return(&rental(status), Role::Staff));
            assert!(can_return(&rental(status), Role::Admin));
            assert!(!can_return(&rental(status), Role::Customer));
        }
    }

    #[test]
    fn test_duration_same_day_clamps_to_one() {
        let d = date("2024-03-05");
        assert_eq!(duration_days(d, d), 1);
    }

    #[test]
    fn test_duration_clamps_inverted_spans() {
        assert_eq!(duration_days(date("2024-03-05"), date("2024-03-01")), 1);
    }

    #[test]
    fn test_duration_monotonic_in_end_date() {
        let issue = date("2024-01-01");
        let mut prev = 0;
        for offset in 0..30 {
            let end = issue + chrono::Duration::days(offset);
            let days = duration_days(issue, end);
            assert!(days >= prev, "duration regressed at offset {offset}");
            prev = days;
        }
    }

    #[test]
    fn test_estimated_charge_uses_expected_date_until_closed() {
        let r = rental(RentalStatus::Active);
        // 9 days at 50/day.
        assert_eq!(estimated_charge(&r, 50.0), 450.0);
    }

    #[test]
    fn test_estimated_charge_prefers_actual_date_once_present() {
        let mut r = rental(RentalStatus::Closed);
        r.actual_return_date = Some(date("2024-01-13"));
        assert_eq!(estimated_charge(&r, 50.0), 600.0);
    }

    #[test]
    fn test_on_time_return_has_no_late_fee() {
        let est = estimate_return(date("2024-01-10"), date("2024-01-10"), false);
        assert_eq!(est.late_days, 0);
        assert_eq!(est.late_fee, 0.0);
        assert_eq!(est.total, 0.0);
    }

    #[test]
    fn test_early_return_never_goes_negative() {
        let est = estimate_return(date("2024-01-10"), date("2024-01-05"), false);
        assert_eq!(est.late_days, 0);
        assert_eq!(est.late_fee, 0.0);
    }

    #[test]
    fn test_three_days_late() {
        let est = estimate_return(date("2024-01-10"), date("2024-01-13"), false);
        assert_eq!(est.late_days, 3);
        assert_eq!(est.late_fee, 150.0);
        assert_eq!(est.total, 150.0);
    }

    #[test]
    fn test_bad_condition_adds_flat_fee_regardless_of_lateness() {
        let on_time = estimate_return(date("2024-01-10"), date("2024-01-10"), true);
        assert_eq!(on_time.bad_condition_fee, 100.0);
        assert_eq!(on_time.total, 100.0);

        let late = estimate_return(date("2024-01-10"), date("2024-01-13"), true);
        assert_eq!(late.bad_condition_fee, 100.0);
        assert_eq!(late.total, late.late_fee + late.bad_condition_fee);
    }

    #[test]
    fn test_full_return_scenario_for_staff() {
        let r = rental(RentalStatus::Active);
        let est = estimate_return(r.expected_return_date, date("2024-01-13"), true);
        assert_eq!(est.late_days, 3);
        assert_eq!(est.late_fee, 150.0);
        assert_eq!(est.bad_condition_fee, 100.0);
        assert_eq!(est.total, 250.0);
        assert!(can_return(&r, Role::Staff));
        assert!(!can_edit_dates(&r, Role::Staff));
    }

    #[test]
    fn test_customer_gets_no_mutation_controls() {
        let r = rental(RentalStatus::Active);
        assert!(!can_return(&r, Role::Customer));
        assert!(!can_edit_dates(&r, Role::Customer));
    }

    #[test]
    fn test_draft_rental_for_admin_permits_both() {
        let r = rental(RentalStatus::Draft);
        assert!(can_edit_dates(&r, Role::Admin));
        assert!(can_return(&r, Role::Admin));
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let a = estimate_return(date("2024-01-10"), date("2024-01-13"), true);
        let b = estimate_return(date("2024-01-10"), date("2024-01-13"), true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fee_constants_match_documented_preview() {
        // These mirror backend business rules; a change here must be a
        // deliberate re-sync with the server, not a drive-by edit.
        assert_eq!(LATE_FEE_PER_DAY, 50.0);
        assert_eq!(BAD_CONDITION_FEE, 100.0);
    }
}
