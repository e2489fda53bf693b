use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

use crate::dashboard::activity::relative_age;
use crate::model::driving_licence::DrivingLicence;
use crate::model::leave_request::{LEAVE_TYPE, LeaveRequest};
use crate::model::visa::Visa;

/// Lookahead for "expiring soon".
pub const EXPIRY_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlertCategory {
    Leave,
    Expiry,
    Other,
}

/// Declaration order is sort order: high first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    High,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "visa-7",
    "title": "Visa expiring soon",
    "description": "Visa V-100234 (Work) for employee #12 expires on 2024-06-20",
    "time": "in 19 days",
    "type": "expiry",
    "link": "/visas",
    "priority": "high"
}))]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub time: String,
    #[serde(rename = "type")]
    pub category: AlertCategory,
    pub link: String,
    pub priority: Priority,
}

/// Whole days until `expiry` if it falls in `(now, now + 30 days]`.
/// A calendar date counts from midnight UTC.
pub fn days_until_expiry(now: DateTime<Utc>, expiry: NaiveDate) -> Option<i64> {
    let expires_at = expiry.and_time(NaiveTime::MIN).and_utc();
    if expires_at <= now || expires_at > now + Duration::days(EXPIRY_WINDOW_DAYS) {
        return None;
    }
    let seconds = (expires_at - now).num_seconds();
    Some((seconds + 86_399) / 86_400)
}

fn expires_in(days: i64) -> String {
    if days == 1 {
        "in 1 day".to_string()
    } else {
        format!("in {days} days")
    }
}

fn leave_alert(now: DateTime<Utc>, leave: &LeaveRequest) -> Alert {
    Alert {
        id: format!("leave-{}", leave.id),
        title: "Pending leave request".to_string(),
        description: format!(
            "Employee #{} requested {} from {} to {}",
            leave.employee_id,
            LEAVE_TYPE.display(&leave.leave_type),
            leave.start_date,
            leave.end_date
        ),
        time: leave
            .created_at
            .map(|at| relative_age(now, at))
            .unwrap_or_else(|| "recently".to_string()),
        category: AlertCategory::Leave,
        link: "/leave".to_string(),
        priority: Priority::Normal,
    }
}

fn visa_alert(visa: &Visa, expiry: NaiveDate, days: i64) -> Alert {
    Alert {
        id: format!("visa-{}", visa.id),
        title: "Visa expiring soon".to_string(),
        description: format!(
            "Visa {} ({}) for employee #{} expires on {}",
            visa.visa_number, visa.visa_type, visa.employee_id, expiry
        ),
        time: expires_in(days),
        category: AlertCategory::Expiry,
        link: "/visas".to_string(),
        priority: Priority::High,
    }
}

fn licence_alert(licence: &DrivingLicence, expiry: NaiveDate, days: i64) -> Alert {
    Alert {
        id: format!("licence-{}", licence.id),
        title: "Driving licence expiring soon".to_string(),
        description: format!(
            "Licence {} (class {}) for employee #{} expires on {}",
            licence.licence_number, licence.licence_class, licence.employee_id, expiry
        ),
        time: expires_in(days),
        category: AlertCategory::Expiry,
        link: "/driving-licences".to_string(),
        priority: Priority::High,
    }
}

/// Builds the alert list for one fetch cycle.
///
/// Pending leave requests become normal-priority `leave` alerts; visas and
/// driving licences expiring within the next [`EXPIRY_WINDOW_DAYS`] become
/// high-priority `expiry` alerts. Already expired documents are not reported.
///
/// Output is priority-first. The sort is stable, so within a priority the
/// collection order (visas, then licences, then leave) is kept.
pub fn classify(
    now: DateTime<Utc>,
    leaves: &[LeaveRequest],
    visas: &[Visa],
    licences: &[DrivingLicence],
) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = leaves
        .iter()
        .filter(|l| l.is_pending())
        .map(|l| leave_alert(now, l))
        .collect();

    alerts.extend(visas.iter().filter_map(|v| {
        let expiry = v.expiry_date?;
        days_until_expiry(now, expiry).map(|days| visa_alert(v, expiry, days))
    }));

    alerts.extend(licences.iter().filter_map(|l| {
        let expiry = l.expiry_date?;
        days_until_expiry(now, expiry).map(|days| licence_alert(l, expiry, days))
    }));

    alerts.sort_by_key(|a| a.priority);
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, leave, licence, ts, visa};

    #[test]
    fn visa_inside_window_is_high_priority() {
        let now = ts("2024-06-01T00:00:00Z");
        let alerts = classify(now, &[], &[visa(7, Some(date("2024-06-20")))], &[]);

        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.category, AlertCategory::Expiry);
        assert_eq!(alert.priority, Priority::High);
        assert_eq!(alert.id, "visa-7");
        assert_eq!(alert.time, "in 19 days");

        let json = serde_json::to_value(alert).unwrap();
        assert_eq!(json["type"], "expiry");
        assert_eq!(json["priority"], "high");
    }

    #[test]
    fn window_edges() {
        let now = ts("2024-06-01T00:00:00Z");
        let at = |days: i64| visa(1, Some(now.date_naive() + Duration::days(days)));

        assert_eq!(classify(now, &[], &[at(15)], &[]).len(), 1);
        assert_eq!(classify(now, &[], &[at(30)], &[]).len(), 1);
        assert!(classify(now, &[], &[at(31)], &[]).is_empty());
        assert!(classify(now, &[], &[at(0)], &[]).is_empty());
        assert!(classify(now, &[], &[at(-1)], &[]).is_empty());
        assert!(classify(now, &[], &[visa(2, None)], &[]).is_empty());
    }

    #[test]
    fn partial_days_round_up() {
        let now = ts("2024-06-01T18:00:00Z");
        assert_eq!(days_until_expiry(now, date("2024-06-02")), Some(1));
        assert_eq!(days_until_expiry(now, date("2024-06-01")), None);
    }

    #[test]
    fn licences_follow_the_same_rule() {
        let now = ts("2024-06-01T00:00:00Z");
        let licences = vec![
            licence(3, Some(date("2024-06-02"))),
            licence(4, Some(date("2024-08-01"))),
        ];

        let alerts = classify(now, &[], &[], &licences);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "licence-3");
        assert_eq!(alerts[0].time, "in 1 day");
        assert_eq!(alerts[0].link, "/driving-licences");
    }

    #[test]
    fn only_pending_leave_is_reported() {
        let now = ts("2024-06-01T00:00:00Z");
        let leaves = vec![
            leave(1, 10, "pending", Some("2024-05-31T12:00:00Z")),
            leave(2, 10, "approved", None),
            leave(3, 11, "rejected", None),
            leave(4, 12, "pending", None),
        ];

        let alerts = classify(now, &leaves, &[], &[]);

        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.category == AlertCategory::Leave));
        assert!(alerts.iter().all(|a| a.priority == Priority::Normal));
        assert_eq!(alerts[0].id, "leave-1");
        assert_eq!(alerts[0].time, "12 hours ago");
        assert_eq!(alerts[1].time, "recently");
    }

    #[test]
    fn expiry_alerts_come_before_leave() {
        let now = ts("2024-06-01T00:00:00Z");
        let leaves = vec![leave(1, 10, "pending", None)];
        let visas = vec![visa(5, Some(date("2024-06-10")))];
        let licences = vec![licence(6, Some(date("2024-06-05")))];

        let ids: Vec<String> = classify(now, &leaves, &visas, &licences)
            .into_iter()
            .map(|a| a.id)
            .collect();

        assert_eq!(ids, ["visa-5", "licence-6", "leave-1"]);
    }

    #[test]
    fn empty_inputs_give_no_alerts() {
        assert!(classify(Utc::now(), &[], &[], &[]).is_empty());
    }
}
