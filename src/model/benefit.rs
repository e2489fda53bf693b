use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize, lenient};

pub static BENEFIT_STATUS: Lazy<LookupTable> =
    Lazy::new(|| LookupTable::titled(&["active", "inactive", "pending"], "pending"));

pub static BENEFIT_TYPE: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(
        &["health", "dental", "retirement", "gym", "transport"],
        "health",
    )
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Benefit {
    pub id: u64,
    pub employee_id: u64,
    pub benefit_type: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monthly_cost: f64,
    #[serde(default, deserialize_with = "lenient::date")]
    pub start_date: Option<NaiveDate>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BenefitView {
    pub id: u64,
    pub employee_id: u64,
    pub benefit_type: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monthly_cost: f64,
    #[schema(value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,
    pub status: String,
}

impl Normalize for Benefit {
    type Display = BenefitView;

    fn to_display(&self) -> BenefitView {
        BenefitView {
            id: self.id,
            employee_id: self.employee_id,
            benefit_type: BENEFIT_TYPE.display(&self.benefit_type),
            monthly_cost: self.monthly_cost,
            start_date: self.start_date,
            status: BENEFIT_STATUS.display(&self.status),
        }
    }

    fn from_display(view: &BenefitView) -> Self {
        Benefit {
            id: view.id,
            employee_id: view.employee_id,
            benefit_type: BENEFIT_TYPE.persisted(&view.benefit_type),
            monthly_cost: view.monthly_cost,
            start_date: view.start_date,
            status: BENEFIT_STATUS.persisted(&view.status),
        }
    }
}

impl Record for Benefit {
    const KIND: EntityKind = EntityKind::Benefit;
    const TABLE: &'static str = "benefits";
}
