use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize, lenient};

pub static LICENCE_STATUS: Lazy<LookupTable> =
    Lazy::new(|| LookupTable::titled(&["active", "suspended", "expired"], "active"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DrivingLicence {
    pub id: u64,
    pub employee_id: u64,
    pub licence_number: String,
    pub licence_class: String,
    #[serde(default, deserialize_with = "lenient::date")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub expiry_date: Option<NaiveDate>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrivingLicenceView {
    pub id: u64,
    pub employee_id: u64,
    pub licence_number: String,
    #[schema(example = "B")]
    pub licence_class: String,
    #[schema(value_type = Option<String>, format = "date")]
    pub issue_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date")]
    pub expiry_date: Option<NaiveDate>,
    pub status: String,
}

impl Normalize for DrivingLicence {
    type Display = DrivingLicenceView;

    fn to_display(&self) -> DrivingLicenceView {
        DrivingLicenceView {
            id: self.id,
            employee_id: self.employee_id,
            licence_number: self.licence_number.clone(),
            licence_class: self.licence_class.clone(),
            issue_date: self.issue_date,
            expiry_date: self.expiry_date,
            status: LICENCE_STATUS.display(&self.status),
        }
    }

    fn from_display(view: &DrivingLicenceView) -> Self {
        DrivingLicence {
            id: view.id,
            employee_id: view.employee_id,
            licence_number: view.licence_number.clone(),
            licence_class: view.licence_class.clone(),
            issue_date: view.issue_date,
            expiry_date: view.expiry_date,
            status: LICENCE_STATUS.persisted(&view.status),
        }
    }
}

impl Record for DrivingLicence {
    const KIND: EntityKind = EntityKind::DrivingLicence;
    const TABLE: &'static str = "driving_licences";
}
