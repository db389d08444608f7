use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::AppError;

/// Wire format of every date the case endpoints accept.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetail {
    #[serde(default)]
    pub vehicle_no: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBy {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub employee_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTo {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<String>,
}

/// Expiry dates of the vehicle's documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puc_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit_expiry: Option<String>,
}

/// A vehicle case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    #[serde(rename = "CaseNo")]
    pub case_no: String,
    #[serde(default)]
    pub vehicle_detail: VehicleDetail,
    #[serde(default)]
    pub created_by: CreatedBy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<AssignedTo>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub general_detail: GeneralDetail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_detail: Option<DocumentDetail>,
}

impl Case {
    pub fn is_assignable(&self) -> bool {
        is_assignable(&self.status)
    }

    pub fn creator_name(&self) -> String {
        format!("{} {}", self.created_by.first_name, self.created_by.last_name)
    }

    pub fn assignee_name(&self) -> Option<String> {
        self.assigned_to
            .as_ref()
            .map(|a| format!("{} {}", a.first_name, a.last_name))
    }
}

/// The Assign action is offered unless the status is "assigned" or "created" (any case).
pub fn is_assignable(status: &str) -> bool {
    let status = status.to_lowercase();
    status != "assigned" && status != "created"
}

/// Date field a case listing is filtered on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum CaseFilterType {
    #[default]
    ApplicationDate,
    AppointmentDate,
    PucExpiry,
    InsuranceExpiry,
    FitnessExpiry,
    TaxExpiry,
    PermitExpiry,
}

impl CaseFilterType {
    pub const ALL: [CaseFilterType; 7] = [
        CaseFilterType::ApplicationDate,
        CaseFilterType::AppointmentDate,
        CaseFilterType::PucExpiry,
        CaseFilterType::InsuranceExpiry,
        CaseFilterType::FitnessExpiry,
        CaseFilterType::TaxExpiry,
        CaseFilterType::PermitExpiry,
    ];

    /// Value sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseFilterType::ApplicationDate => "applicationDate",
            CaseFilterType::AppointmentDate => "appointmentDate",
            CaseFilterType::PucExpiry => "pucExpiry",
            CaseFilterType::InsuranceExpiry => "insuranceExpiry",
            CaseFilterType::FitnessExpiry => "fitnessExpiry",
            CaseFilterType::TaxExpiry => "taxExpiry",
            CaseFilterType::PermitExpiry => "permitExpiry",
        }
    }

    /// Enumerated name, e.g. `PUC_EXPIRY`.
    pub fn key(&self) -> &'static str {
        match self {
            CaseFilterType::ApplicationDate => "APPLICATION_DATE",
            CaseFilterType::AppointmentDate => "APPOINTMENT_DATE",
            CaseFilterType::PucExpiry => "PUC_EXPIRY",
            CaseFilterType::InsuranceExpiry => "INSURANCE_EXPIRY",
            CaseFilterType::FitnessExpiry => "FITNESS_EXPIRY",
            CaseFilterType::TaxExpiry => "TAX_EXPIRY",
            CaseFilterType::PermitExpiry => "PERMIT_EXPIRY",
        }
    }

    /// Title-cased label derived from the key: `PUC_EXPIRY` -> "Puc Expiry".
    pub fn label(&self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let lower = word.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Map a dashboard tile hint onto a filter type. Unknown hints fall back to application date.
    pub fn from_hint(hint: &str) -> Self {
        match hint {
            "PUC" => CaseFilterType::PucExpiry,
            "INSURANCE" => CaseFilterType::InsuranceExpiry,
            "FITNESS" => CaseFilterType::FitnessExpiry,
            "TAX" => CaseFilterType::TaxExpiry,
            "PERMIT" => CaseFilterType::PermitExpiry,
            _ => CaseFilterType::ApplicationDate,
        }
    }
}

/// Filter criteria for the case listing: a date field plus an inclusive range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseFilter {
    pub filter_type: CaseFilterType,
    pub from_date: String,
    pub to_date: String,
}

impl CaseFilter {
    /// First day of `today`'s month through `today`, filtered on application date.
    pub fn default_for(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        Self {
            filter_type: CaseFilterType::default(),
            from_date: first.format(DATE_FORMAT).to_string(),
            to_date: today.format(DATE_FORMAT).to_string(),
        }
    }

    /// Both dates are required and must be `YYYY-MM-DD`.
    pub fn check(&self) -> Result<(), AppError> {
        DateRange {
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
        }
        .validate()?;
        Ok(())
    }

    /// Query string pairs for `GET /case/all`.
    pub fn query(&self) -> [(&'static str, String); 3] {
        [
            ("filterType", self.filter_type.as_str().to_string()),
            ("fromDate", self.from_date.clone()),
            ("toDate", self.to_date.clone()),
        ]
    }
}

/// Inputs of the filter bar, checked field by field.
#[derive(Debug, Validate)]
struct DateRange {
    #[validate(custom(function = "required_date"))]
    from_date: String,
    #[validate(custom(function = "required_date"))]
    to_date: String,
}

fn date_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

pub(crate) fn required_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(date_error("required", "Date is required"));
    }
    optional_date(value)
}

/// Blank is fine; anything else must parse as `YYYY-MM-DD`.
pub(crate) fn optional_date(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok() {
        Ok(())
    } else {
        Err(date_error("date", "Date must be YYYY-MM-DD"))
    }
}

fn vehicle_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required").with_message("Vehicle number is required".into()))
    } else {
        Ok(())
    }
}

/// Request body for the assign endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignCaseRequest {
    pub client_id: String,
}

/// Request body for `POST /case/new`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    pub vehicle_detail: VehicleDetail,
    pub general_detail: GeneralDetail,
    pub document_detail: DocumentDetail,
}

/// Raw text of the case-creation form. Error keys are the field names.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CaseForm {
    #[validate(custom(function = "vehicle_number"))]
    pub vehicle_no: String,
    #[validate(custom(function = "required_date"))]
    pub application_date: String,
    #[validate(custom(function = "optional_date"))]
    pub appointment_date: String,
    #[validate(custom(function = "optional_date"))]
    pub puc_expiry: String,
    #[validate(custom(function = "optional_date"))]
    pub insurance_expiry: String,
    #[validate(custom(function = "optional_date"))]
    pub fitness_expiry: String,
    #[validate(custom(function = "optional_date"))]
    pub tax_expiry: String,
    #[validate(custom(function = "optional_date"))]
    pub permit_expiry: String,
}

impl CaseForm {
    /// Validate and build the request. Vehicle number and application date are required.
    pub fn to_request(&self) -> Result<CreateCaseRequest, AppError> {
        self.validate()?;
        Ok(CreateCaseRequest {
            vehicle_detail: VehicleDetail {
                vehicle_no: self.vehicle_no.trim().to_uppercase(),
            },
            general_detail: GeneralDetail {
                application_date: non_empty(&self.application_date),
                appointment_date: non_empty(&self.appointment_date),
            },
            document_detail: DocumentDetail {
                puc_expiry: non_empty(&self.puc_expiry),
                insurance_expiry: non_empty(&self.insurance_expiry),
                fitness_expiry: non_empty(&self.fitness_expiry),
                tax_expiry: non_empty(&self.tax_expiry),
                permit_expiry: non_empty(&self.permit_expiry),
            },
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
