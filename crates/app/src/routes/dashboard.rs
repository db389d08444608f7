use crate::auth::{use_api, use_auth};
use crate::notify;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppError, Case, CaseFilterType};
use shared_ui::{use_toast, Button, ButtonVariant, PageHeader, Skeleton, StatCard};

/// Tiles opening the case list with an expiry filter preselected.
const EXPIRY_TILES: [(&str, &str); 5] = [
    ("PUC", "PUC expiry"),
    ("INSURANCE", "Insurance expiry"),
    ("FITNESS", "Fitness expiry"),
    ("TAX", "Tax expiry"),
    ("PERMIT", "Permit expiry"),
];

#[component]
pub fn AdminDashboardPage() -> Element {
    let auth = use_auth();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.first_name.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "container",
            PageHeader { title: "Dashboard", subtitle: format!("Welcome back, {name}") }

            h2 { class: "section-title", "Cases" }
            div { class: "tile-grid",
                StatCard {
                    label: "All cases",
                    value: CaseFilterType::ApplicationDate.label(),
                    onclick: move |_| {
                        navigator().push(Route::AllCases { kind: String::new() });
                    },
                }
                for (hint, label) in EXPIRY_TILES {
                    StatCard {
                        key: "{hint}",
                        label: label,
                        value: CaseFilterType::from_hint(hint).label(),
                        onclick: move |_| {
                            navigator().push(Route::AllCases { kind: hint.to_string() });
                        },
                    }
                }
            }

            h2 { class: "section-title", "Administration" }
            div { class: "tile-grid",
                StatCard {
                    label: "Branches",
                    value: "Manage",
                    onclick: move |_| {
                        navigator().push(Route::Branches {});
                    },
                }
                StatCard {
                    label: "Clients",
                    value: "Verify",
                    onclick: move |_| {
                        navigator().push(Route::Clients {});
                    },
                }
            }
        }
    }
}

/// Tile value for the employee's case count; a failed load shows a dash.
fn case_count(loaded: Option<&Result<Vec<Case>, AppError>>) -> Option<String> {
    match loaded? {
        Ok(list) => Some(list.len().to_string()),
        Err(_) => Some("-".to_string()),
    }
}

#[component]
pub fn EmployeeDashboardPage() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();
    let cases = use_resource(move || {
        let api = api.clone();
        async move {
            let result = api.employee_cases().await;
            if let Err(e) = &result {
                notify::api_error(toast, &mut auth, e);
            }
            result
        }
    });

    let count = case_count((*cases.read()).as_ref());

    rsx! {
        div { class: "container",
            PageHeader { title: "Dashboard",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        navigator().push(Route::EmployeeCaseCreate {});
                    },
                    "New Case"
                }
            }
            div { class: "tile-grid",
                match count {
                    Some(value) => rsx! {
                        StatCard {
                            label: "My cases",
                            value: value,
                            onclick: move |_| {
                                navigator().push(Route::EmployeeCases {});
                            },
                        }
                    },
                    None => rsx! { Skeleton { rows: 2 } },
                }
            }
        }
    }
}
