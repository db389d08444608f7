pub mod branches;
pub mod cases;
pub mod clients;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod signup;
pub mod unauthorized;

use crate::auth::{use_api, use_auth};
use crate::role_gate::RoleGate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdFileText, LdFolder, LdLayoutDashboard, LdSettings, LdUserCheck,
};
use dioxus_free_icons::Icon;
use shared_types::{guard, GuardOutcome, UserRole};
use shared_ui::{Button, ButtonVariant};

use cases::own::CaseScope;
use login::Login;
use not_found::NotFound;
use signup::SignUp;
use unauthorized::Unauthorized;

const SUPER_ADMIN: &[UserRole] = &[UserRole::SuperAdmin];
const EMPLOYEE: &[UserRole] = &[UserRole::Employee];
const CLIENT: &[UserRole] = &[UserRole::Client];

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[route("/signup")]
    SignUp {},

    #[nest("/superadmin")]
        #[layout(SuperAdminArea)]
            #[route("/")]
            AdminDashboard {},
            #[route("/Profile")]
            AdminProfile {},
            #[route("/AddBranch")]
            Branches {},
            #[route("/clients")]
            Clients {},
            #[route("/clients/clientDetails?:id")]
            ClientDetails { id: String },
            #[route("/cases/all?:kind")]
            AllCases { kind: String },
            #[route("/cases/new")]
            AdminCaseCreate {},
            #[route("/cases/:case_no?:id")]
            AdminCaseDetail { case_no: String, id: String },
        #[end_layout]
    #[end_nest]

    #[nest("/employee")]
        #[layout(EmployeeArea)]
            #[route("/")]
            EmployeeDashboard {},
            #[route("/cases")]
            EmployeeCases {},
            #[route("/cases/new")]
            EmployeeCaseCreate {},
            #[route("/cases/:case_no?:id")]
            EmployeeCaseDetail { case_no: String, id: String },
            #[route("/Profile")]
            EmployeeProfile {},
        #[end_layout]
    #[end_nest]

    #[nest("/client")]
        #[layout(ClientArea)]
            #[route("/cases")]
            ClientCases {},
            #[route("/cases/:case_no?:id")]
            ClientCaseDetail { case_no: String, id: String },
            #[route("/Profile")]
            ClientProfile {},
        #[end_layout]
    #[end_nest]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Roles allowed to open `route`. Public routes allow everyone.
pub fn route_roles(route: &Route) -> Option<&'static [UserRole]> {
    match route {
        Route::Login {} | Route::Unauthorized {} | Route::SignUp {} | Route::NotFound { .. } => None,
        Route::AdminDashboard {}
        | Route::AdminProfile {}
        | Route::Branches {}
        | Route::Clients {}
        | Route::ClientDetails { .. }
        | Route::AllCases { .. }
        | Route::AdminCaseCreate {}
        | Route::AdminCaseDetail { .. } => Some(SUPER_ADMIN),
        Route::EmployeeDashboard {}
        | Route::EmployeeCases {}
        | Route::EmployeeCaseCreate {}
        | Route::EmployeeCaseDetail { .. }
        | Route::EmployeeProfile {} => Some(EMPLOYEE),
        Route::ClientCases {} | Route::ClientCaseDetail { .. } | Route::ClientProfile {} => {
            Some(CLIENT)
        }
    }
}

/// Landing page after sign-in.
pub fn home_route(role: UserRole) -> Route {
    match role {
        UserRole::SuperAdmin => Route::AdminDashboard {},
        UserRole::Employee => Route::EmployeeDashboard {},
        UserRole::Client => Route::ClientProfile {},
    }
}

/// Sidebar icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavIcon {
    Dashboard,
    Branches,
    Clients,
    Cases,
    NewCase,
    Profile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: NavIcon,
    pub route: Route,
}

fn all_nav_items() -> Vec<NavItem> {
    let item = |label, icon, route| NavItem { label, icon, route };
    vec![
        item("Dashboard", NavIcon::Dashboard, Route::AdminDashboard {}),
        item("Branches", NavIcon::Branches, Route::Branches {}),
        item("Clients", NavIcon::Clients, Route::Clients {}),
        item("All Cases", NavIcon::Cases, Route::AllCases { kind: String::new() }),
        item("New Case", NavIcon::NewCase, Route::AdminCaseCreate {}),
        item("Profile", NavIcon::Profile, Route::AdminProfile {}),
        item("Dashboard", NavIcon::Dashboard, Route::EmployeeDashboard {}),
        item("My Cases", NavIcon::Cases, Route::EmployeeCases {}),
        item("New Case", NavIcon::NewCase, Route::EmployeeCaseCreate {}),
        item("Profile", NavIcon::Profile, Route::EmployeeProfile {}),
        item("My Cases", NavIcon::Cases, Route::ClientCases {}),
        item("Profile", NavIcon::Profile, Route::ClientProfile {}),
    ]
}

/// Sidebar links whose target route `role` may open.
pub fn nav_items(role: UserRole) -> Vec<NavItem> {
    all_nav_items()
        .into_iter()
        .filter(|item| match route_roles(&item.route) {
            Some(allowed) => guard(Some(&role), allowed) == GuardOutcome::Render,
            None => true,
        })
        .collect()
}

fn is_active(current: &Route, target: &Route) -> bool {
    match (current, target) {
        (Route::AllCases { .. }, Route::AllCases { .. }) => true,
        (Route::AdminCaseDetail { .. }, Route::AllCases { .. }) => true,
        (Route::EmployeeCaseDetail { .. }, Route::EmployeeCases {}) => true,
        (Route::ClientCaseDetail { .. }, Route::ClientCases {}) => true,
        (Route::ClientDetails { .. }, Route::Clients {}) => true,
        _ => current == target,
    }
}

#[component]
fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Branches => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        NavIcon::Clients => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        NavIcon::Cases => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        NavIcon::NewCase => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Profile => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

#[component]
fn SuperAdminArea() -> Element {
    rsx! {
        RoleGate { allowed: SUPER_ADMIN.to_vec(), AppLayout {} }
    }
}

#[component]
fn EmployeeArea() -> Element {
    rsx! {
        RoleGate { allowed: EMPLOYEE.to_vec(), AppLayout {} }
    }
}

#[component]
fn ClientArea() -> Element {
    rsx! {
        RoleGate { allowed: CLIENT.to_vec(), AppLayout {} }
    }
}

/// Sidebar plus the routed page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let api = use_api();
    let mut auth = use_auth();

    let user = auth.current_user.read().clone();
    let links = auth.role().map(nav_items).unwrap_or_default();
    let (name, role_label) = match &user {
        Some(u) => (
            u.display_name(),
            u.role().map(|r| r.label()).unwrap_or_default().to_string(),
        ),
        None => (String::new(), String::new()),
    };

    let sign_out = move |_: MouseEvent| {
        api.logout();
        auth.clear_auth();
        navigator().replace(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand", "CaseDesk" }
                nav { class: "sidebar-nav",
                    for item in links {
                        Link {
                            key: "{item.label}-{item.route}",
                            to: item.route.clone(),
                            class: if is_active(&route, &item.route) { "sidebar-link active" } else { "sidebar-link" },
                            NavIconView { icon: item.icon }
                            span { "{item.label}" }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    div { class: "sidebar-user",
                        span { class: "sidebar-user-name", "{name}" }
                        span { class: "sidebar-user-role", "{role_label}" }
                    }
                    Button { variant: ButtonVariant::Ghost, class: "sidebar-signout", onclick: sign_out, "Sign out" }
                }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}

// ── Super admin pages ──

#[component]
fn AdminDashboard() -> Element {
    rsx! { dashboard::AdminDashboardPage {} }
}

#[component]
fn AdminProfile() -> Element {
    rsx! { profile::ProfilePage {} }
}

#[component]
fn Branches() -> Element {
    rsx! { branches::BranchesPage {} }
}

#[component]
fn Clients() -> Element {
    rsx! { clients::list::ClientsPage {} }
}

#[component]
fn ClientDetails(id: String) -> Element {
    rsx! { clients::detail::ClientDetailPage { id } }
}

#[component]
fn AllCases(kind: String) -> Element {
    rsx! { cases::list::CaseFilterPage { kind } }
}

#[component]
fn AdminCaseCreate() -> Element {
    rsx! {
        cases::create::CaseCreatePage {
            on_created: move |(case_no, id): (String, String)| {
                navigator().push(Route::AdminCaseDetail { case_no, id });
            },
        }
    }
}

#[component]
fn AdminCaseDetail(case_no: String, id: String) -> Element {
    rsx! {
        cases::detail::CaseDetailPage { case_no, id, back: Route::AllCases { kind: String::new() } }
    }
}

// ── Employee pages ──

#[component]
fn EmployeeDashboard() -> Element {
    rsx! { dashboard::EmployeeDashboardPage {} }
}

#[component]
fn EmployeeCases() -> Element {
    rsx! { cases::own::OwnCasesPage { scope: CaseScope::Employee } }
}

#[component]
fn EmployeeCaseCreate() -> Element {
    rsx! {
        cases::create::CaseCreatePage {
            on_created: move |(case_no, id): (String, String)| {
                navigator().push(Route::EmployeeCaseDetail { case_no, id });
            },
        }
    }
}

#[component]
fn EmployeeCaseDetail(case_no: String, id: String) -> Element {
    rsx! {
        cases::detail::CaseDetailPage { case_no, id, back: Route::EmployeeCases {} }
    }
}

#[component]
fn EmployeeProfile() -> Element {
    rsx! { profile::ProfilePage {} }
}

// ── Client pages ──

#[component]
fn ClientCases() -> Element {
    rsx! { cases::own::OwnCasesPage { scope: CaseScope::Client } }
}

#[component]
fn ClientCaseDetail(case_no: String, id: String) -> Element {
    rsx! {
        cases::detail::CaseDetailPage { case_no, id, back: Route::ClientCases {} }
    }
}

#[component]
fn ClientProfile() -> Element {
    rsx! { profile::ProfilePage {} }
}
