use super::status_variant;
use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_optional_date;
use crate::notify;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{Case, DocumentDetail};
use shared_ui::{use_toast, Badge, Card, CardContent, CardHeader, PageHeader, Skeleton};

/// Expiry rows of the documents card, in display order.
fn expiry_rows(docs: Option<&DocumentDetail>) -> Vec<(&'static str, String)> {
    let docs = docs.cloned().unwrap_or_default();
    vec![
        ("PUC", format_optional_date(docs.puc_expiry.as_deref())),
        ("Insurance", format_optional_date(docs.insurance_expiry.as_deref())),
        ("Fitness", format_optional_date(docs.fitness_expiry.as_deref())),
        ("Tax", format_optional_date(docs.tax_expiry.as_deref())),
        ("Permit", format_optional_date(docs.permit_expiry.as_deref())),
    ]
}

#[component]
pub fn CaseDetailPage(case_no: String, id: String, back: Route) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();

    let case_id = id.clone();
    let data = use_resource(move || {
        let api = api.clone();
        let cid = case_id.clone();
        async move {
            let result = api.get_case(&cid).await;
            if let Err(e) = &result {
                notify::api_error(toast, &mut auth, e);
            }
            result
        }
    });

    let body = match &*data.read() {
        None => rsx! { Skeleton { rows: 8 } },
        Some(Err(e)) => rsx! {
            div { class: "empty-state",
                p { "{e.friendly_message()}" }
            }
        },
        Some(Ok(case)) => rsx! { CaseSummary { case: case.clone() } },
    };

    rsx! {
        div { class: "container",
            PageHeader { title: "Case {case_no}",
                Link { to: back, class: "back-link", "Back to cases" }
            }
            {body}
        }
    }
}

#[component]
fn CaseSummary(case: Case) -> Element {
    let assignee = case.assignee_name().unwrap_or_else(|| "Not assigned".to_string());
    let employee_code = case.created_by.employee_code.clone();
    let application = format_optional_date(case.general_detail.application_date.as_deref());
    let appointment = format_optional_date(case.general_detail.appointment_date.as_deref());
    let expiries = expiry_rows(case.document_detail.as_ref());

    rsx! {
        div { class: "detail-columns",
            Card {
                CardHeader { title: case.vehicle_detail.vehicle_no.clone(), subtitle: "Vehicle" }
                CardContent {
                    dl { class: "detail-grid",
                        dt { "Status" }
                        dd { Badge { variant: status_variant(&case.status), "{case.status}" } }
                        dt { "Created by" }
                        dd { "{case.creator_name()} ({employee_code})" }
                        dt { "Assigned to" }
                        dd { "{assignee}" }
                        dt { "Application date" }
                        dd { "{application}" }
                        dt { "Appointment date" }
                        dd { "{appointment}" }
                    }
                }
            }
            Card {
                CardHeader { title: "Documents", subtitle: "Expiry dates" }
                CardContent {
                    dl { class: "detail-grid",
                        for (label, date) in expiries {
                            div { key: "{label}", class: "detail-row",
                                dt { "{label}" }
                                dd { "{date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
