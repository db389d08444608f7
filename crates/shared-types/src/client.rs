use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::AppError;

/// A user account attached to a dealer firm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    #[serde(default)]
    pub first_name: String,
    /// The server spells this key in lowercase for nested accounts.
    #[serde(default, rename = "lastname")]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_no: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_verified: serde_json::Value,
}

/// A dealer (client) record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile_no: String,
    #[serde(default)]
    pub firm_name: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    #[serde(default)]
    pub users: Vec<ClientUser>,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.address1, self.address2, self.city, self.state, self.pincode
        )
    }

    pub fn contact(&self) -> String {
        format!("{} | {}", self.email, self.mobile_no)
    }

    pub fn credit_limit_label(&self) -> String {
        match self.credit_limit {
            Some(limit) => format!("{limit}"),
            None => "N/A".to_string(),
        }
    }
}

/// One group of the client list response, tagged by verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientGroup {
    pub is_verified: bool,
    #[serde(default)]
    pub clients: Vec<Client>,
}

/// Clients split into the two verification tabs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientSplit {
    pub verified: Vec<Client>,
    pub unverified: Vec<Client>,
}

impl ClientSplit {
    pub fn tab(&self, tab: VerificationTab) -> &[Client] {
        match tab {
            VerificationTab::Verified => &self.verified,
            VerificationTab::Unverified => &self.unverified,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Client> {
        self.verified
            .iter()
            .chain(self.unverified.iter())
            .find(|c| c.id == id)
    }
}

/// Take the first `true` group as verified and the first `false` group as unverified.
pub fn split_by_verification(groups: &[ClientGroup]) -> ClientSplit {
    let pick = |flag: bool| {
        groups
            .iter()
            .find(|g| g.is_verified == flag)
            .map(|g| g.clients.clone())
            .unwrap_or_default()
    };
    ClientSplit {
        verified: pick(true),
        unverified: pick(false),
    }
}

/// Which client list the verification page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationTab {
    Verified,
    #[default]
    Unverified,
}

/// Active dealer offered by the assignment dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveClient {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Lowercase `lastname` key. Search matches on this one, not `lastName`.
    #[serde(default, rename = "lastname", skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

impl ActiveClient {
    pub fn label(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.first_name,
            self.lastname.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }

    /// Case-insensitive substring match of `query` against the dealer's name.
    pub fn matches(&self, query: &str) -> bool {
        self.search_text().contains(&query.to_lowercase())
    }
}

/// Dealers whose name contains `query`, preserving server order.
pub fn search_dealers<'a>(clients: &'a [ActiveClient], query: &str) -> Vec<&'a ActiveClient> {
    clients.iter().filter(|c| c.matches(query)).collect()
}

/// Request body for the verify endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyClientRequest {
    pub credit_limit: f64,
    pub fixed_penalty: f64,
}

impl VerifyClientRequest {
    /// Parse the two text inputs of the verify dialog. Both are required numbers.
    pub fn parse(credit_limit: &str, fixed_penalty: &str) -> Result<Self, AppError> {
        VerifyForm {
            credit_limit: credit_limit.trim().to_string(),
            fixed_penalty: fixed_penalty.trim().to_string(),
        }
        .to_request()
    }
}

/// Raw text of the verify dialog. Error keys are the field names.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct VerifyForm {
    #[validate(custom(function = "credit_limit_amount"))]
    pub credit_limit: String,
    #[validate(custom(function = "fixed_penalty_amount"))]
    pub fixed_penalty: String,
}

impl VerifyForm {
    pub fn to_request(&self) -> Result<VerifyClientRequest, AppError> {
        self.validate()?;
        Ok(VerifyClientRequest {
            credit_limit: amount_value(&self.credit_limit)?,
            fixed_penalty: amount_value(&self.fixed_penalty)?,
        })
    }
}

fn amount_value(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| AppError::bad_request(format!("Invalid amount: {e}")))
}

fn amount(raw: &str, label: &str) -> Result<(), ValidationError> {
    let fail = |code: &'static str, message: String| {
        Err(ValidationError::new(code).with_message(message.into()))
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return fail("required", format!("{label} is required"));
    }
    match raw.parse::<f64>() {
        Ok(v) if !v.is_finite() => fail("number", format!("{label} must be a number")),
        Ok(v) if v < 0.0 => fail("range", format!("{label} must be non-negative")),
        Ok(_) => Ok(()),
        Err(_) => fail("number", format!("{label} must be a number")),
    }
}

fn credit_limit_amount(raw: &str) -> Result<(), ValidationError> {
    amount(raw, "Credit limit")
}

fn fixed_penalty_amount(raw: &str) -> Result<(), ValidationError> {
    amount(raw, "Fixed penalty")
}

/// Request body for `POST /client/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientSignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_no: String,
    pub password: String,
    pub firm_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Dealer self-registration form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,
    #[validate(custom(function = "mobile_number"))]
    pub mobile_no: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Firm name is required"))]
    pub firm_name: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address1: String,
    pub address2: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(custom(function = "listed_state"))]
    pub state: String,
    #[validate(custom(function = "pincode"))]
    pub pincode: String,
}

impl SignupForm {
    /// Text inputs in render order, as `(field, label)`.
    pub const TEXT_FIELDS: [(&'static str, &'static str); 10] = [
        ("first_name", "First Name"),
        ("last_name", "Last Name"),
        ("email", "Email"),
        ("mobile_no", "Mobile No"),
        ("password", "Password"),
        ("firm_name", "Firm Name"),
        ("address1", "Address Line 1"),
        ("address2", "Address Line 2"),
        ("city", "City"),
        ("pincode", "Pincode"),
    ];

    pub fn field(&self, name: &str) -> &str {
        match name {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "email" => &self.email,
            "mobile_no" => &self.mobile_no,
            "password" => &self.password,
            "firm_name" => &self.firm_name,
            "address1" => &self.address1,
            "address2" => &self.address2,
            "city" => &self.city,
            "state" => &self.state,
            "pincode" => &self.pincode,
            _ => "",
        }
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "first_name" => self.first_name = value,
            "last_name" => self.last_name = value,
            "email" => self.email = value,
            "mobile_no" => self.mobile_no = value,
            "password" => self.password = value,
            "firm_name" => self.firm_name = value,
            "address1" => self.address1 = value,
            "address2" => self.address2 = value,
            "city" => self.city = value,
            "state" => self.state = value,
            "pincode" => self.pincode = value,
            _ => {}
        }
    }

    /// Trim every input except the password, validate, and build the request.
    pub fn to_request(&self) -> Result<ClientSignupRequest, AppError> {
        let form = Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            mobile_no: self.mobile_no.trim().to_string(),
            password: self.password.clone(),
            firm_name: self.firm_name.trim().to_string(),
            address1: self.address1.trim().to_string(),
            address2: self.address2.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
        };
        form.validate()?;
        Ok(ClientSignupRequest {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            mobile_no: form.mobile_no,
            password: form.password,
            firm_name: form.firm_name,
            address1: form.address1,
            address2: form.address2,
            city: form.city,
            state: form.state,
            pincode: form.pincode,
        })
    }
}

fn digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn mobile_number(value: &str) -> Result<(), ValidationError> {
    if digits(value, 10) {
        Ok(())
    } else {
        Err(ValidationError::new("mobile").with_message("Enter a 10-digit mobile number".into()))
    }
}

fn pincode(value: &str) -> Result<(), ValidationError> {
    if digits(value, 6) {
        Ok(())
    } else {
        Err(ValidationError::new("pincode").with_message("Enter a 6-digit pincode".into()))
    }
}

fn listed_state(value: &str) -> Result<(), ValidationError> {
    if crate::branch::is_known_state(value) {
        Ok(())
    } else {
        Err(ValidationError::new("state").with_message("Select a state from the list".into()))
    }
}
