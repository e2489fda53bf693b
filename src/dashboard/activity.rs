use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::model::employee::Employee;
use crate::model::leave_request::{LEAVE_TYPE, LeaveRequest};

/// Entries kept in the recent-activity feed.
pub const ACTIVITY_LIMIT: usize = 5;

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const MONTH: i64 = 2_592_000;
const YEAR: i64 = 31_536_000;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "employee-12",
    "actor": "Jane Smith",
    "action": "joined",
    "timestamp": "2024-05-31T09:00:00Z",
    "time": "1 day ago"
}))]
pub struct Activity {
    pub id: String,
    pub actor: String,
    pub action: String,
    #[schema(value_type = String, format = "date-time")]
    pub timestamp: DateTime<Utc>,
    pub time: String,
}

/// Coarse "how long ago" string. Anything under a minute, or in the
/// future, is "just now".
pub fn relative_age(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < MINUTE {
        return "just now".to_string();
    }

    let (unit, name) = [
        (YEAR, "year"),
        (MONTH, "month"),
        (DAY, "day"),
        (HOUR, "hour"),
        (MINUTE, "minute"),
    ]
    .into_iter()
    .find(|(unit, _)| seconds >= *unit)
    .unwrap_or((MINUTE, "minute"));

    let count = seconds / unit;
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {name}{plural} ago")
}

/// Newest-first merge of employee joins and leave requests, capped at
/// [`ACTIVITY_LIMIT`]. Rows without a creation timestamp are skipped; equal
/// timestamps keep input order (employees before leave requests).
pub fn recent_activity(
    now: DateTime<Utc>,
    employees: &[Employee],
    leaves: &[LeaveRequest],
) -> Vec<Activity> {
    let names: HashMap<u64, String> = employees
        .iter()
        .map(|e| (e.id, e.full_name()))
        .collect();

    let joined = employees.iter().filter_map(|e| {
        e.created_at
            .map(|at| (format!("employee-{}", e.id), e.full_name(), "joined".to_string(), at))
    });

    let requested = leaves.iter().filter_map(|l| {
        l.created_at.map(|at| {
            let actor = names
                .get(&l.employee_id)
                .cloned()
                .unwrap_or_else(|| format!("Employee #{}", l.employee_id));
            let action = format!("requested {}", LEAVE_TYPE.display(&l.leave_type));
            (format!("leave-{}", l.id), actor, action, at)
        })
    });

    let mut entries: Vec<_> = joined.chain(requested).collect();
    // stable: ties keep input order
    entries.sort_by(|a, b| b.3.cmp(&a.3));
    entries.truncate(ACTIVITY_LIMIT);

    entries
        .into_iter()
        .map(|(id, actor, action, timestamp)| Activity {
            id,
            actor,
            action,
            timestamp,
            time: relative_age(now, timestamp),
        })
        .collect()
}
