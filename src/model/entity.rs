use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::mysql::MySqlRow;
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::utils::normalizer::Normalize;

/// Record families the dashboard can list, keyed by their URL segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize, ToSchema,
)]
pub enum EntityKind {
    #[strum(serialize = "employees")]
    #[serde(rename = "employees")]
    Employee,
    #[strum(serialize = "leave-requests")]
    #[serde(rename = "leave-requests")]
    LeaveRequest,
    #[strum(serialize = "visas")]
    #[serde(rename = "visas")]
    Visa,
    #[strum(serialize = "driving-licences")]
    #[serde(rename = "driving-licences")]
    DrivingLicence,
    #[strum(serialize = "expenses")]
    #[serde(rename = "expenses")]
    Expense,
    #[strum(serialize = "assets")]
    #[serde(rename = "assets")]
    Asset,
    #[strum(serialize = "benefits")]
    #[serde(rename = "benefits")]
    Benefit,
    #[strum(serialize = "payroll")]
    #[serde(rename = "payroll")]
    Payroll,
    #[strum(serialize = "disciplinary-actions")]
    #[serde(rename = "disciplinary-actions")]
    DisciplinaryAction,
    #[strum(serialize = "health-insurance-policies")]
    #[serde(rename = "health-insurance-policies")]
    HealthInsurancePolicy,
    #[strum(serialize = "compliance-audits")]
    #[serde(rename = "compliance-audits")]
    ComplianceAudit,
    #[strum(serialize = "performance-reviews")]
    #[serde(rename = "performance-reviews")]
    PerformanceReview,
}

/// Who may read a record family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    HrOrAdmin,
    Admin,
}

impl EntityKind {
    pub fn access(&self) -> Access {
        match self {
            EntityKind::Payroll => Access::Admin,
            EntityKind::DisciplinaryAction | EntityKind::HealthInsurancePolicy => {
                Access::HrOrAdmin
            }
            _ => Access::Authenticated,
        }
    }
}

/// A persisted row type: readable from MySQL, from loose JSON, and
/// convertible to its display form.
pub trait Record:
    for<'r> FromRow<'r, MySqlRow> + Serialize + DeserializeOwned + Normalize + Send + Sync + Unpin + 'static
{
    const KIND: EntityKind;
    const TABLE: &'static str;
}
