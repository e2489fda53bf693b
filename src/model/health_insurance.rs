use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize, lenient};

pub static POLICY_STATUS: Lazy<LookupTable> =
    Lazy::new(|| LookupTable::titled(&["active", "lapsed", "cancelled"], "active"));

pub static COVERAGE_TYPE: Lazy<LookupTable> =
    Lazy::new(|| LookupTable::titled(&["individual", "family"], "individual"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct HealthInsurancePolicy {
    pub id: u64,
    pub employee_id: u64,
    pub provider: String,
    pub policy_number: String,
    pub coverage_type: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub premium: f64,
    #[serde(default, deserialize_with = "lenient::date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub end_date: Option<NaiveDate>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthInsurancePolicyView {
    pub id: u64,
    pub employee_id: u64,
    pub provider: String,
    pub policy_number: String,
    #[schema(example = "Family")]
    pub coverage_type: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub premium: f64,
    #[schema(value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,
    pub status: String,
}

impl Normalize for HealthInsurancePolicy {
    type Display = HealthInsurancePolicyView;

    fn to_display(&self) -> HealthInsurancePolicyView {
        HealthInsurancePolicyView {
            id: self.id,
            employee_id: self.employee_id,
            provider: self.provider.clone(),
            policy_number: self.policy_number.clone(),
            coverage_type: COVERAGE_TYPE.display(&self.coverage_type),
            premium: self.premium,
            start_date: self.start_date,
            end_date: self.end_date,
            status: POLICY_STATUS.display(&self.status),
        }
    }

    fn from_display(view: &HealthInsurancePolicyView) -> Self {
        HealthInsurancePolicy {
            id: view.id,
            employee_id: view.employee_id,
            provider: view.provider.clone(),
            policy_number: view.policy_number.clone(),
            coverage_type: COVERAGE_TYPE.persisted(&view.coverage_type),
            premium: view.premium,
            start_date: view.start_date,
            end_date: view.end_date,
            status: POLICY_STATUS.persisted(&view.status),
        }
    }
}

impl Record for HealthInsurancePolicy {
    const KIND: EntityKind = EntityKind::HealthInsurancePolicy;
    const TABLE: &'static str = "health_insurance_policies";
}
