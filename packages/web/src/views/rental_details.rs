use api::{ApiClient, RentalDatesPatch, ReturnRequest};
use chrono::NaiveDate;
use dioxus::prelude::*;

use store::lifecycle::{self, estimate_return_or_today};
use store::{Car, Rental};
use ui::components::{
    use_toast, Alert, BadgeTone, Badge, Button, ButtonVariant, FormField, Input, Modal,
    PageHeader, Spinner,
};
use ui::{use_session, validate, ActionState, RequireAuth};

use super::rentals::rental_status_tone;
use crate::Route;

#[component]
pub fn RentalDetailsPage(id: i64) -> Element {
    rsx! {
        RequireAuth {
            RentalDetailsView { id }
        }
    }
}

#[component]
fn RentalDetailsView(id: i64) -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let mut toast = use_toast();

    let mut rental = use_signal(|| Option::<Rental>::None);
    let mut car = use_signal(|| Option::<Car>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut return_open = use_signal(|| false);
    let mut return_date = use_signal(String::new);
    let mut bad_condition = use_signal(|| false);
    let mut return_action = use_signal(ActionState::default);

    let mut edit_issue = use_signal(String::new);
    let mut edit_expected = use_signal(String::new);
    let mut edit_action = use_signal(ActionState::default);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.rental(id).await {
                    Ok(data) => {
                        edit_issue.set(data.issue_date.to_string());
                        edit_expected.set(data.expected_return_date.to_string());
                        let car_id = data.car;
                        rental.set(Some(data));
                        error.set(None);
                        // Pricing summary needs the car's daily rate; a
                        // missing car only degrades the summary.
                        match client.car(car_id).await {
                            Ok(car_data) => car.set(Some(car_data)),
                            Err(err) => {
                                tracing::warn!("failed to load car {car_id}: {err}");
                            }
                        }
                    }
                    Err(err) => {
                        tracing::warn!("failed to load rental {id}: {err}");
                        error.set(Some("Unable to load rental details.".to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    if loading() {
        return rsx! {
            Spinner { label: "Loading rental details" }
        };
    }

    let Some(current) = rental() else {
        return rsx! {
            div {
                class: "card",
                p { class: "error", {error().unwrap_or_else(|| "Rental not found.".to_string())} }
                Link { class: "link", to: Route::RentalsPage {}, "← Back to rentals" }
            }
        };
    };

    let role = session.read().role();
    // The controls below are gated here once; a denied action is never
    // rendered, so the corresponding API call cannot be attempted.
    let can_return = role
        .map(|r| lifecycle::can_return(&current, r))
        .unwrap_or(false);
    let can_edit_dates = role
        .map(|r| lifecycle::can_edit_dates(&current, r))
        .unwrap_or(false);

    let pricing = car().and_then(|c| {
        let rate = c.daily_rate()?;
        let end = current
            .actual_return_date
            .unwrap_or(current.expected_return_date);
        let days = lifecycle::duration_days(current.issue_date, end);
        Some((days, lifecycle::estimated_charge(&current, rate)))
    });

    let candidate_date: Option<NaiveDate> = return_date().trim().parse().ok();
    let estimate = estimate_return_or_today(
        current.expected_return_date,
        candidate_date,
        bad_condition(),
    );

    let return_pending = return_action().is_pending();
    let return_error = return_action().error().map(str::to_string);
    let edit_pending = edit_action().is_pending();
    let edit_error = edit_action().error().map(str::to_string);

    let handle_return = {
        let client = client.clone();
        move |_| {
            if !return_action.write().begin() {
                return;
            }
            let payload = ReturnRequest {
                actual_return_date: return_date.peek().trim().parse().ok(),
                bad_condition: *bad_condition.peek(),
            };
            let client = client.clone();
            spawn(async move {
                match client.return_rental(id, &payload).await {
                    Ok(outcome) => {
                        // The server's figures replace the local estimate.
                        rental.set(Some(outcome.rental));
                        return_action.write().finish(Ok(()));
                        return_open.set(false);
                        return_date.set(String::new());
                        bad_condition.set(false);
                        toast.success(format!(
                            "Rental closed. Invoice total: ${}",
                            outcome.invoice_total
                        ));
                    }
                    Err(err) => {
                        tracing::warn!("return failed for rental {id}: {err}");
                        let message = err
                            .server_message()
                            .unwrap_or("Unable to return rental.")
                            .to_string();
                        return_action.write().finish(Err(message));
                        // The rental may have been closed by someone else;
                        // reconcile with the server instead of trusting the
                        // local copy.
                        if let Ok(fresh) = client.rental(id).await {
                            rental.set(Some(fresh));
                        }
                    }
                }
            });
        }
    };

    let issue_error = validate::iso_date(&edit_issue(), "Enter a valid issue date.");
    let expected_error =
        validate::iso_date(&edit_expected(), "Enter a valid expected return date.");

    let handle_edit_dates = {
        let client = client.clone();
        move |_| {
            let (Ok(issue), Ok(expected)) = (
                edit_issue.peek().trim().parse::<NaiveDate>(),
                edit_expected.peek().trim().parse::<NaiveDate>(),
            ) else {
                return;
            };
            if !edit_action.write().begin() {
                return;
            }
            let payload = RentalDatesPatch {
                issue_date: issue,
                expected_return_date: expected,
            };
            let client = client.clone();
            spawn(async move {
                match client.update_rental_dates(id, &payload).await {
                    Ok(updated) => {
                        edit_issue.set(updated.issue_date.to_string());
                        edit_expected.set(updated.expected_return_date.to_string());
                        rental.set(Some(updated));
                        edit_action.write().finish(Ok(()));
                        toast.success("Rental dates updated.");
                    }
                    Err(err) => {
                        tracing::warn!("date edit failed for rental {id}: {err}");
                        let message = err
                            .server_message()
                            .unwrap_or("Unable to update rental dates.")
                            .to_string();
                        edit_action.write().finish(Err(message));
                        if let Ok(fresh) = client.rental(id).await {
                            rental.set(Some(fresh));
                        }
                    }
                }
            });
        }
    };

    let actual_label = current
        .actual_return_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        section {
            PageHeader {
                title: "Rental #{current.id}",
                subtitle: "Status: {current.status}",
                actions: if can_return {
                    Some(rsx! {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| return_open.set(true),
                            "Return rental"
                        }
                    })
                } else {
                    None
                },
            }
            div {
                class: "card detail-grid",
                div {
                    h2 { class: "section-title", "Details" }
                    p { strong { "Customer: " } "{current.customer_label()}" }
                    p { strong { "Car: " } "{current.car_label()}" }
                    p { strong { "Issue date: " } "{current.issue_date}" }
                    p { strong { "Expected return: " } "{current.expected_return_date}" }
                    p { strong { "Actual return: " } "{actual_label}" }
                    p {
                        strong { "Status: " }
                        Badge { tone: rental_status_tone(current.status), "{current.status}" }
                    }
                }
                div {
                    h2 { class: "section-title", "Pricing summary" }
                    if let Some((days, amount)) = pricing {
                        p { "Estimated duration: {days} day(s)" }
                        p { "Estimated rental charge: ${amount:.2}" }
                    } else {
                        p { "Pricing data unavailable without car details." }
                    }
                    Alert {
                        tone: BadgeTone::Info,
                        title: "Deposits and penalties",
                        "Deposit, penalties, and ledger details are finalized by the backend when the rental is closed."
                    }
                }
            }
            div {
                class: "section",
                if can_edit_dates {
                    div {
                        class: "card form",
                        h2 { class: "section-title", "Edit rental dates" }
                        if let Some(message) = edit_error {
                            Alert { tone: BadgeTone::Danger, title: "Update failed", "{message}" }
                        }
                        FormField {
                            label: "Issue date",
                            html_for: "edit-issue",
                            error: issue_error.clone(),
                            Input {
                                id: "edit-issue",
                                r#type: "date",
                                value: edit_issue(),
                                oninput: move |evt: FormEvent| edit_issue.set(evt.value()),
                            }
                        }
                        FormField {
                            label: "Expected return date",
                            html_for: "edit-expected",
                            error: expected_error.clone(),
                            Input {
                                id: "edit-expected",
                                r#type: "date",
                                value: edit_expected(),
                                oninput: move |evt: FormEvent| edit_expected.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-actions",
                            Button {
                                disabled: edit_pending,
                                onclick: handle_edit_dates,
                                if edit_pending { "Saving..." } else { "Save dates" }
                            }
                        }
                    }
                } else {
                    Alert {
                        tone: BadgeTone::Warning,
                        title: "Date editing restricted",
                        "Rental dates can only be edited while the rental is in draft status."
                    }
                }
            }
            Modal {
                open: return_open(),
                title: "Return rental",
                description: "Confirm the return date and any condition issues.",
                on_close: move |_| {
                    if !return_pending {
                        return_open.set(false);
                    }
                },
                div {
                    class: "form",
                    if let Some(message) = return_error {
                        Alert { tone: BadgeTone::Danger, title: "Return failed", "{message}" }
                    }
                    FormField {
                        label: "Actual return date",
                        html_for: "return-date",
                        hint: "Leave empty to use today's date.",
                        Input {
                            id: "return-date",
                            r#type: "date",
                            value: return_date(),
                            oninput: move |evt: FormEvent| return_date.set(evt.value()),
                        }
                    }
                    label {
                        class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: bad_condition(),
                            onchange: move |evt: FormEvent| bad_condition.set(evt.checked()),
                        }
                        "Report bad condition (adds a penalty)"
                    }
                    Alert {
                        tone: BadgeTone::Info,
                        title: "Penalty estimate",
                        "Late days: {estimate.late_days} · Late fee: ${estimate.late_fee} · "
                        "Bad condition fee: ${estimate.bad_condition_fee} · "
                        "Estimated penalties total: ${estimate.total}"
                    }
                    Alert {
                        tone: BadgeTone::Warning,
                        title: "Final totals",
                        "The backend calculates final totals and deposit refunds when the rental is closed."
                    }
                    div {
                        class: "modal__actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            disabled: return_pending,
                            onclick: move |_| return_open.set(false),
                            "Cancel"
                        }
                        Button {
                            disabled: return_pending,
                            onclick: handle_return,
                            if return_pending { "Returning..." } else { "Confirm return" }
                        }
                    }
                }
            }
            div {
                class: "section",
                Link { class: "link", to: Route::RentalsPage {}, "← Back to rentals" }
            }
        }
    }
}
