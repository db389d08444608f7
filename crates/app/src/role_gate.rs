use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{guard, GuardOutcome, UserRole};

/// Guard decision for the signed-in user against `allowed`.
pub fn use_role_check(allowed: &[UserRole]) -> GuardOutcome {
    let auth = use_auth();
    let role = auth.role();
    guard(role.as_ref(), allowed)
}

/// Render children only for members of `allowed`.
///
/// Signed-in users without the role go to `/unauthorized`; visitors without a
/// session go to the login page.
#[component]
pub fn RoleGate(allowed: Vec<UserRole>, children: Element) -> Element {
    match use_role_check(&allowed) {
        GuardOutcome::Render => rsx! { {children} },
        GuardOutcome::Unauthorized => {
            navigator().replace(Route::Unauthorized {});
            rsx! {
                div { class: "guard-redirect", p { "Redirecting..." } }
            }
        }
        GuardOutcome::Login => {
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "guard-redirect", p { "Redirecting to login..." } }
            }
        }
    }
}
