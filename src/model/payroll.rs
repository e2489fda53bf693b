use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize, lenient};

pub static PAYROLL_STATUS: Lazy<LookupTable> =
    Lazy::new(|| LookupTable::titled(&["draft", "processed", "paid"], "draft"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payroll {
    pub id: u64,
    pub employee_id: u64,
    pub month: NaiveDate,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub base_salary: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub bonus: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub deductions: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub net_salary: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayrollView {
    pub id: u64,
    pub employee_id: u64,
    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub month: NaiveDate,
    #[serde(default, deserialize_with = "lenient::amount")]
    #[schema(example = 50000.0)]
    pub base_salary: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    #[schema(example = 5000.0)]
    pub bonus: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    #[schema(example = 2000.0)]
    pub deductions: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    #[schema(example = 53000.0)]
    pub net_salary: f64,
    #[schema(example = "Processed")]
    pub status: String,
}

impl Normalize for Payroll {
    type Display = PayrollView;

    fn to_display(&self) -> PayrollView {
        PayrollView {
            id: self.id,
            employee_id: self.employee_id,
            month: self.month,
            base_salary: self.base_salary,
            bonus: self.bonus,
            deductions: self.deductions,
            net_salary: self.net_salary,
            status: PAYROLL_STATUS.display(&self.status),
        }
    }

    fn from_display(view: &PayrollView) -> Self {
        Payroll {
            id: view.id,
            employee_id: view.employee_id,
            month: view.month,
            base_salary: view.base_salary,
            bonus: view.bonus,
            deductions: view.deductions,
            net_salary: view.net_salary,
            status: PAYROLL_STATUS.persisted(&view.status),
        }
    }
}

impl Record for Payroll {
    const KIND: EntityKind = EntityKind::Payroll;
    const TABLE: &'static str = "payroll";
}
