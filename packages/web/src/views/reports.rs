use api::ApiClient;
use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use store::{CarStatus, FinancialRow, OccupancyRow, Role};
use ui::components::{
    use_toast, Alert, BadgeTone, Button, ButtonVariant, EmptyState, FormField, Input, PageHeader,
    Spinner,
};
use ui::{csv, RequireAuth};

#[component]
pub fn ReportsPage() -> Element {
    rsx! {
        RequireAuth {
            roles: vec![Role::Staff, Role::Admin],
            ReportsView {}
        }
    }
}

fn occupancy_csv(rows: &[OccupancyRow]) -> String {
    csv::to_csv(
        &["car_id", "car", "status", "expected_return_date"],
        &rows
            .iter()
            .map(|row| {
                vec![
                    row.car_id.to_string(),
                    row.car.clone(),
                    row.status.to_string(),
                    row.expected_return_date
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                ]
            })
            .collect::<Vec<_>>(),
    )
}

fn financial_csv(rows: &[FinancialRow]) -> String {
    csv::to_csv(
        &["car_id", "revenue", "penalties_total", "net_amount"],
        &rows
            .iter()
            .map(|row| {
                vec![
                    row.car_id.to_string(),
                    row.revenue.clone(),
                    row.penalties_total.clone(),
                    row.net_amount.clone(),
                ]
            })
            .collect::<Vec<_>>(),
    )
}

#[component]
fn ReportsView() -> Element {
    let client = use_context::<ApiClient>();
    let mut toast = use_toast();
    let today = Local::now().date_naive().to_string();

    let mut occupancy_date = use_signal(|| today.clone());
    let mut occupancy = use_signal(Vec::<OccupancyRow>::new);
    let mut loading_occupancy = use_signal(|| false);

    let mut financial_from = use_signal(|| today.clone());
    let mut financial_to = use_signal(|| today.clone());
    let mut financial = use_signal(Vec::<FinancialRow>::new);
    let mut loading_financial = use_signal(|| false);

    let load_occupancy = {
        let client = client.clone();
        move |_| {
            let Ok(date) = occupancy_date.peek().parse::<NaiveDate>() else {
                toast.warning("Enter a valid report date.");
                return;
            };
            if *loading_occupancy.peek() {
                return;
            }
            loading_occupancy.set(true);
            let client = client.clone();
            spawn(async move {
                match client.occupancy_report(date).await {
                    Ok(rows) => occupancy.set(rows),
                    Err(err) => {
                        tracing::warn!("occupancy report failed: {err}");
                        toast.danger("Unable to load occupancy report");
                    }
                }
                loading_occupancy.set(false);
            });
        }
    };

    let load_financial = {
        let client = client.clone();
        move |_| {
            let (Ok(from), Ok(to)) = (
                financial_from.peek().parse::<NaiveDate>(),
                financial_to.peek().parse::<NaiveDate>(),
            ) else {
                toast.warning("Enter a valid date range.");
                return;
            };
            if *loading_financial.peek() {
                return;
            }
            loading_financial.set(true);
            let client = client.clone();
            spawn(async move {
                match client.financial_report(from, to).await {
                    Ok(rows) => financial.set(rows),
                    Err(err) => {
                        tracing::warn!("financial report failed: {err}");
                        toast.danger("Unable to load financial report");
                    }
                }
                loading_financial.set(false);
            });
        }
    };

    let export_occupancy = move |_| {
        let rows = occupancy();
        if rows.is_empty() {
            return;
        }
        csv::download(
            &format!("occupancy-{}.csv", occupancy_date.peek()),
            &occupancy_csv(&rows),
        );
    };

    let export_financial = move |_| {
        let rows = financial();
        if rows.is_empty() {
            return;
        }
        csv::download(
            &format!(
                "financial-{}-{}.csv",
                financial_from.peek(),
                financial_to.peek()
            ),
            &financial_csv(&rows),
        );
    };

    let occ_rows = occupancy();
    let occ_total = occ_rows.len();
    let occ_available = occ_rows
        .iter()
        .filter(|r| r.status == CarStatus::Available)
        .count();
    let occ_rented = occ_rows
        .iter()
        .filter(|r| r.status == CarStatus::Rented)
        .count();
    let occ_maintenance = occ_rows
        .iter()
        .filter(|r| r.status == CarStatus::Maintenance)
        .count();

    let fin_rows = financial();
    let fin_revenue: f64 = fin_rows.iter().map(|r| r.revenue_amount()).sum();
    let fin_penalties: f64 = fin_rows.iter().map(|r| r.penalties_amount()).sum();
    let fin_net: f64 = fin_rows.iter().map(|r| r.net()).sum();

    rsx! {
        section {
            PageHeader {
                title: "Reports",
                subtitle: "Review occupancy and revenue performance.",
            }
            div {
                class: "grid-two",
                div {
                    class: "card form",
                    h2 { class: "section-title", "Occupancy report" }
                    FormField {
                        label: "Report date",
                        html_for: "occupancy-date",
                        Input {
                            id: "occupancy-date",
                            r#type: "date",
                            value: occupancy_date(),
                            oninput: move |evt: FormEvent| occupancy_date.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: load_occupancy,
                            "Load report"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: export_occupancy,
                            "Export CSV"
                        }
                    }
                    if loading_occupancy() {
                        Spinner { label: "Loading occupancy report" }
                    }
                    if !loading_occupancy() && occ_rows.is_empty() {
                        EmptyState {
                            title: "No data yet",
                            description: "Run the report to see occupancy status.",
                        }
                    }
                    if !occ_rows.is_empty() {
                        div {
                            class: "summary-grid",
                            div { strong { "Total cars" } p { "{occ_total}" } }
                            div { strong { "Available" } p { "{occ_available}" } }
                            div { strong { "Rented" } p { "{occ_rented}" } }
                            div { strong { "Maintenance" } p { "{occ_maintenance}" } }
                        }
                        table {
                            class: "table",
                            caption { "Occupancy table" }
                            thead {
                                tr {
                                    th { scope: "col", "Car" }
                                    th { scope: "col", "Status" }
                                    th { scope: "col", "Expected return" }
                                }
                            }
                            tbody {
                                for row in occ_rows {
                                    tr {
                                        key: "{row.car_id}",
                                        td { "{row.car}" }
                                        td { "{row.status}" }
                                        td {
                                            {row.expected_return_date.map(|d| d.to_string()).unwrap_or_else(|| "—".to_string())}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "card form",
                    h2 { class: "section-title", "Financial report" }
                    div {
                        class: "form-row",
                        FormField {
                            label: "From",
                            html_for: "financial-from",
                            Input {
                                id: "financial-from",
                                r#type: "date",
                                value: financial_from(),
                                oninput: move |evt: FormEvent| financial_from.set(evt.value()),
                            }
                        }
                        FormField {
                            label: "To",
                            html_for: "financial-to",
                            Input {
                                id: "financial-to",
                                r#type: "date",
                                value: financial_to(),
                                oninput: move |evt: FormEvent| financial_to.set(evt.value()),
                            }
                        }
                    }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: load_financial,
                            "Load report"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: export_financial,
                            "Export CSV"
                        }
                    }
                    if loading_financial() {
                        Spinner { label: "Loading financial report" }
                    }
                    if !loading_financial() && fin_rows.is_empty() {
                        EmptyState {
                            title: "No data yet",
                            description: "Run the report to view revenue totals.",
                        }
                    }
                    if !fin_rows.is_empty() {
                        Alert {
                            tone: BadgeTone::Info,
                            title: "Totals",
                            "Revenue ${fin_revenue:.2} · Penalties ${fin_penalties:.2} · Net ${fin_net:.2}"
                        }
                        table {
                            class: "table",
                            caption { "Financial table" }
                            thead {
                                tr {
                                    th { scope: "col", "Car ID" }
                                    th { scope: "col", "Revenue" }
                                    th { scope: "col", "Penalties" }
                                    th { scope: "col", "Net" }
                                }
                            }
                            tbody {
                                for row in fin_rows {
                                    tr {
                                        key: "{row.car_id}",
                                        td { "{row.car_id}" }
                                        td { "${row.revenue}" }
                                        td { "${row.penalties_total}" }
                                        td { "${row.net_amount}" }
                                    }
                                }
                                tr {
                                    td { strong { "Totals" } }
                                    td { "${fin_revenue:.2}" }
                                    td { "${fin_penalties:.2}" }
                                    td { "${fin_net:.2}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
