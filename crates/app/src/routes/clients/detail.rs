use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_rupees;
use crate::notify;
use crate::routes::Route;
use api_client::ClientWorkflow;
use dioxus::prelude::*;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Card, CardContent, CardHeader, DataTable, DataTableCell,
    DataTableRow, PageHeader, Skeleton,
};

const USER_COLUMNS: [&str; 5] = ["Name", "Email", "Phone", "Role", "Employee Code"];

/// Full record of one dealer, including its user accounts.
#[component]
pub fn ClientDetailPage(id: String) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();
    let workflow = use_hook(|| ClientWorkflow::new(api));

    let client_id = id.clone();
    let client = use_resource(move || {
        let workflow = workflow.clone();
        let cid = client_id.clone();
        async move {
            let result = workflow.details(&cid).await;
            if let Err(e) = &result {
                notify::api_error(toast, &mut auth, e);
            }
            result
        }
    });

    let body = match &*client.read() {
        None => rsx! { Skeleton { rows: 6 } },
        Some(Err(e)) => rsx! {
            div { class: "empty-state",
                p { "{e.friendly_message()}" }
            }
        },
        Some(Ok(c)) => {
            let credit = c
                .credit_limit
                .map(format_rupees)
                .unwrap_or_else(|| c.credit_limit_label());
            rsx! {
                Card {
                    CardHeader { title: c.full_name(), subtitle: c.firm_name.clone() }
                    CardContent {
                        dl { class: "detail-grid",
                            dt { "Status" }
                            dd {
                                if c.is_verified {
                                    Badge { variant: BadgeVariant::Success, "Verified" }
                                } else {
                                    Badge { variant: BadgeVariant::Warning, "Unverified" }
                                }
                            }
                            dt { "Email" }
                            dd { "{c.email}" }
                            dt { "Mobile" }
                            dd { "{c.mobile_no}" }
                            dt { "Address" }
                            dd { "{c.full_address()}" }
                            dt { "Credit limit" }
                            dd { "{credit}" }
                        }
                    }
                }
                h2 { class: "section-title", "Users" }
                DataTable {
                    columns: USER_COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                    is_empty: c.users.is_empty(),
                    empty_message: "No users on this account",
                    for user in c.users.iter() {
                        DataTableRow { key: "{user.id}",
                            DataTableCell { "{user.first_name} {user.last_name}" }
                            DataTableCell { "{user.email}" }
                            DataTableCell { "{user.phone_no}" }
                            DataTableCell { "{user.role}" }
                            DataTableCell { {user.employee_code.as_deref().unwrap_or("-")} }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "container",
            PageHeader { title: "Client Details",
                Link { to: Route::Clients {}, class: "back-link", "Back to clients" }
            }
            {body}
        }
    }
}
