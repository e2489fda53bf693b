use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize, lenient};

pub static DISCIPLINARY_STATUS: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(&["open", "under_review", "resolved", "appealed"], "open")
});

pub static DISCIPLINARY_ACTION_TYPE: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(
        &[
            "verbal_warning",
            "written_warning",
            "suspension",
            "termination",
        ],
        "verbal_warning",
    )
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DisciplinaryAction {
    pub id: u64,
    pub employee_id: u64,
    pub action_type: String,
    #[serde(default, deserialize_with = "lenient::date")]
    pub incident_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisciplinaryActionView {
    pub id: u64,
    pub employee_id: u64,
    #[schema(example = "Written Warning")]
    pub action_type: String,
    #[schema(value_type = Option<String>, format = "date")]
    pub incident_date: Option<NaiveDate>,
    pub description: Option<String>,
    #[schema(example = "Under Review")]
    pub status: String,
}

impl Normalize for DisciplinaryAction {
    type Display = DisciplinaryActionView;

    fn to_display(&self) -> DisciplinaryActionView {
        DisciplinaryActionView {
            id: self.id,
            employee_id: self.employee_id,
            action_type: DISCIPLINARY_ACTION_TYPE.display(&self.action_type),
            incident_date: self.incident_date,
            description: self.description.clone(),
            status: DISCIPLINARY_STATUS.display(&self.status),
        }
    }

    fn from_display(view: &DisciplinaryActionView) -> Self {
        DisciplinaryAction {
            id: view.id,
            employee_id: view.employee_id,
            action_type: DISCIPLINARY_ACTION_TYPE.persisted(&view.action_type),
            incident_date: view.incident_date,
            description: view.description.clone(),
            status: DISCIPLINARY_STATUS.persisted(&view.status),
        }
    }
}

impl Record for DisciplinaryAction {
    const KIND: EntityKind = EntityKind::DisciplinaryAction;
    const TABLE: &'static str = "disciplinary_actions";
}
