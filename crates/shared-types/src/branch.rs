use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::AppError;

/// Region names a branch may be located in: the 28 states and 8 union territories.
pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

pub fn is_known_state(s: &str) -> bool {
    INDIAN_STATES.contains(&s)
}

/// A branch office as returned by the branch endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    pub name: String,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Branch {
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }

    /// "address1, address2, city, state, pincode" as shown in the table.
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.address1, self.address2, self.city, self.state, self.pincode
        )
    }

    /// Stable row key; branches created moments ago may not have a code yet.
    pub fn row_key(&self) -> String {
        self.branch_code.clone().unwrap_or_else(|| self.id.clone())
    }
}

/// Request DTO for the branch-creation dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address1 is required"))]
    pub address1: String,
    #[validate(length(min = 1, message = "address2 is required"))]
    pub address2: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "pincode is required"))]
    pub pincode: String,
    #[validate(
        length(min = 1, message = "State is required"),
        custom(function = "blank_or_listed_state")
    )]
    pub state: String,
}

/// Blank is left to the required check.
fn blank_or_listed_state(state: &str) -> Result<(), ValidationError> {
    if state.is_empty() || is_known_state(state) {
        Ok(())
    } else {
        Err(ValidationError::new("state").with_message("Select a state from the list".into()))
    }
}

impl CreateBranchRequest {
    /// Text inputs in the order the dialog renders them.
    pub const TEXT_FIELDS: [&'static str; 5] = ["name", "address1", "address2", "city", "pincode"];

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            address1: self.address1.trim().to_string(),
            address2: self.address2.trim().to_string(),
            city: self.city.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
            state: self.state.trim().to_string(),
        }
    }

    pub fn field(&self, name: &str) -> &str {
        match name {
            "name" => &self.name,
            "address1" => &self.address1,
            "address2" => &self.address2,
            "city" => &self.city,
            "pincode" => &self.pincode,
            "state" => &self.state,
            _ => "",
        }
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "address1" => self.address1 = value,
            "address2" => self.address2 = value,
            "city" => self.city = value,
            "pincode" => self.pincode = value,
            "state" => self.state = value,
            _ => {}
        }
    }

    /// Required-field check plus state membership. Run before any request is made.
    pub fn check(&self) -> Result<Self, AppError> {
        let trimmed = self.trimmed();
        trimmed.validate()?;
        Ok(trimmed)
    }
}

/// Capitalize the first letter of a field key for its placeholder ("address1" -> "Address1").
pub fn field_placeholder(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
