use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role carried by every signed-in account.
///
/// - `SuperAdmin`: branches, client verification, all cases, assignment.
/// - `Employee`: creates cases and sees the cases they created.
/// - `Client`: a dealer account, profile only from this front-end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    #[serde(rename = "SUPERADMIN", alias = "SUPER_ADMIN", alias = "superadmin")]
    SuperAdmin,
    #[serde(rename = "EMPLOYEE", alias = "employee")]
    Employee,
    #[serde(rename = "CLIENT", alias = "client")]
    Client,
}

impl UserRole {
    /// Parse the server's role string. Unknown values yield `None` and are never granted access.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "SUPERADMIN" | "SUPER_ADMIN" => Some(UserRole::SuperAdmin),
            "EMPLOYEE" => Some(UserRole::Employee),
            "CLIENT" => Some(UserRole::Client),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPERADMIN",
            UserRole::Employee => "EMPLOYEE",
            UserRole::Client => "CLIENT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Employee => "Employee",
            UserRole::Client => "Dealer",
        }
    }

    /// Membership test used by every route guard.
    pub fn is_allowed(&self, allowed: &[UserRole]) -> bool {
        allowed.contains(self)
    }
}

/// What a route guard should do for the current visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Unauthorized,
    Login,
}

/// Decide access for `current` against a route's allowed-role set.
pub fn guard(current: Option<&UserRole>, allowed: &[UserRole]) -> GuardOutcome {
    match current {
        Some(role) if role.is_allowed(allowed) => GuardOutcome::Render,
        Some(_) => GuardOutcome::Unauthorized,
        None => GuardOutcome::Login,
    }
}

/// The signed-in account as returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Raw role string; see [`AuthUser::role`].
    #[serde(rename = "role")]
    pub role_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
}

impl AuthUser {
    pub fn role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role_name)
    }

    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// Bearer token plus the user it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [UserRole; 3] = [UserRole::SuperAdmin, UserRole::Employee, UserRole::Client];

    #[test]
    fn guard_grants_iff_member() {
        let sets: [&[UserRole]; 4] = [
            &[UserRole::SuperAdmin],
            &[UserRole::Employee],
            &[UserRole::SuperAdmin, UserRole::Employee],
            &[],
        ];
        for set in sets {
            for role in ALL {
                let expected = if set.contains(&role) {
                    GuardOutcome::Render
                } else {
                    GuardOutcome::Unauthorized
                };
                assert_eq!(guard(Some(&role), set), expected, "{role:?} vs {set:?}");
            }
        }
    }

    #[test]
    fn guard_without_session_goes_to_login() {
        assert_eq!(guard(None, &ALL), GuardOutcome::Login);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(UserRole::parse("superadmin"), Some(UserRole::SuperAdmin));
        assert_eq!(UserRole::parse("Super_Admin"), Some(UserRole::SuperAdmin));
        assert_eq!(UserRole::parse(" employee "), Some(UserRole::Employee));
        assert_eq!(UserRole::parse("CLIENT"), Some(UserRole::Client));
        assert_eq!(UserRole::parse("admin"), None);
    }

    #[test]
    fn auth_user_reads_camel_case_payload() {
        let json = r#"{"id":"u1","firstName":"Asha","lastName":"Rao","email":"a@x.in","role":"EMPLOYEE","employeeCode":"E-7"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.role(), Some(UserRole::Employee));
        assert_eq!(user.display_name(), "Asha Rao");
        assert_eq!(user.employee_code.as_deref(), Some("E-7"));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = AuthUser {
            id: "u2".into(),
            first_name: String::new(),
            last_name: String::new(),
            email: "ops@example.com".into(),
            role_name: "SUPERADMIN".into(),
            branch_code: None,
            employee_code: None,
        };
        assert_eq!(user.display_name(), "ops@example.com");
    }

    #[test]
    fn login_request_requires_email_and_password() {
        let req = LoginRequest {
            email: "not-an-email".into(),
            password: String::new(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
