use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize, lenient};

pub static VISA_STATUS: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(
        &["active", "expired", "pending_renewal", "cancelled"],
        "active",
    )
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Visa {
    pub id: u64,
    pub employee_id: u64,
    pub visa_type: String,
    pub visa_number: String,
    pub country: String,
    #[serde(default, deserialize_with = "lenient::date")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub expiry_date: Option<NaiveDate>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisaView {
    pub id: u64,
    pub employee_id: u64,
    #[schema(example = "Work")]
    pub visa_type: String,
    #[schema(example = "V-100234")]
    pub visa_number: String,
    #[schema(example = "AE")]
    pub country: String,
    #[schema(value_type = Option<String>, format = "date")]
    pub issue_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date")]
    pub expiry_date: Option<NaiveDate>,
    #[schema(example = "Pending Renewal")]
    pub status: String,
}

impl Normalize for Visa {
    type Display = VisaView;

    fn to_display(&self) -> VisaView {
        VisaView {
            id: self.id,
            employee_id: self.employee_id,
            visa_type: self.visa_type.clone(),
            visa_number: self.visa_number.clone(),
            country: self.country.clone(),
            issue_date: self.issue_date,
            expiry_date: self.expiry_date,
            status: VISA_STATUS.display(&self.status),
        }
    }

    fn from_display(view: &VisaView) -> Self {
        Visa {
            id: view.id,
            employee_id: view.employee_id,
            visa_type: view.visa_type.clone(),
            visa_number: view.visa_number.clone(),
            country: view.country.clone(),
            issue_date: view.issue_date,
            expiry_date: view.expiry_date,
            status: VISA_STATUS.persisted(&view.status),
        }
    }
}

impl Record for Visa {
    const KIND: EntityKind = EntityKind::Visa;
    const TABLE: &'static str = "visas";
}
