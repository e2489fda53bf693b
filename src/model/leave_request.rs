use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize};

pub const PENDING: &str = "pending";

pub static LEAVE_STATUS: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(&[PENDING, "approved", "rejected", "cancelled"], PENDING)
});

pub static LEAVE_TYPE: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::labelled(
        &[
            ("annual", "Annual Leave"),
            ("sick", "Sick Leave"),
            ("unpaid", "Unpaid Leave"),
            ("maternity", "Maternity Leave"),
            ("paternity", "Paternity Leave"),
        ],
        "annual",
    )
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveRequest {
    pub id: u64,
    pub employee_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: String,
    pub status: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == PENDING
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 1,
    "employeeId": 1000,
    "startDate": "2026-01-01",
    "endDate": "2026-01-03",
    "leaveType": "Sick Leave",
    "status": "Pending",
    "reason": "Flu",
    "createdAt": "2026-01-01T00:00:00Z"
}))]
pub struct LeaveRequestView {
    pub id: u64,
    pub employee_id: u64,
    #[schema(value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = "date")]
    pub end_date: NaiveDate,
    pub leave_type: String,
    pub status: String,
    pub reason: Option<String>,
    #[schema(value_type = Option<String>, format = "date-time")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Normalize for LeaveRequest {
    type Display = LeaveRequestView;

    fn to_display(&self) -> LeaveRequestView {
        LeaveRequestView {
            id: self.id,
            employee_id: self.employee_id,
            start_date: self.start_date,
            end_date: self.end_date,
            leave_type: LEAVE_TYPE.display(&self.leave_type),
            status: LEAVE_STATUS.display(&self.status),
            reason: self.reason.clone(),
            created_at: self.created_at,
        }
    }

    fn from_display(view: &LeaveRequestView) -> Self {
        LeaveRequest {
            id: view.id,
            employee_id: view.employee_id,
            start_date: view.start_date,
            end_date: view.end_date,
            leave_type: LEAVE_TYPE.persisted(&view.leave_type),
            status: LEAVE_STATUS.persisted(&view.status),
            reason: view.reason.clone(),
            created_at: view.created_at,
        }
    }
}

impl Record for LeaveRequest {
    const KIND: EntityKind = EntityKind::LeaveRequest;
    const TABLE: &'static str = "leave_requests";
}
