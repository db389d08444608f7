use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, PageHeader};

/// Identity of the signed-in user. Shared by every role's Profile route.
#[component]
pub fn ProfilePage() -> Element {
    let auth = use_auth();
    let Some(user) = auth.current_user.read().clone() else {
        return rsx! {};
    };
    let role = user.role().map(|r| r.label()).unwrap_or("Unknown");

    rsx! {
        div { class: "container",
            PageHeader { title: "Profile" }
            Card {
                CardHeader { title: user.display_name(), subtitle: user.email.clone() }
                CardContent {
                    dl { class: "detail-grid",
                        dt { "Role" }
                        dd { Badge { variant: BadgeVariant::Info, "{role}" } }
                        if let Some(code) = user.employee_code.as_ref() {
                            dt { "Employee code" }
                            dd { "{code}" }
                        }
                        if let Some(code) = user.branch_code.as_ref() {
                            dt { "Branch" }
                            dd { "{code}" }
                        }
                    }
                }
            }
        }
    }
}
