use actix_web::{HttpResponse, Responder, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::dashboard::alerts::Alert;
use crate::dashboard::poller::{AlertFeed, refresh};
use crate::source::RecordSource;

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "data": [{
        "id": "visa-7",
        "title": "Visa expiring soon",
        "description": "Visa V-100234 (Work) for employee #12 expires on 2024-06-20",
        "time": "in 19 days",
        "type": "expiry",
        "link": "/visas",
        "priority": "high"
    }],
    "refreshed_at": "2024-06-01T00:00:00Z"
}))]
pub struct NotificationListResponse {
    pub data: Vec<Alert>,
    #[schema(value_type = Option<String>, format = "date-time")]
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Current alerts: pending leave requests and visas/licences expiring
/// within 30 days.
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Latest alert snapshot", body = NotificationListResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Dashboard"
)]
pub async fn list_notifications<S: RecordSource>(
    source: web::Data<S>,
    feed: web::Data<AlertFeed>,
) -> impl Responder {
    let mut snapshot = feed.snapshot();

    if snapshot.refreshed_at.is_none() {
        debug!("Alert feed not populated yet, refreshing inline");
        refresh(source.get_ref(), feed.get_ref(), Utc::now()).await;
        snapshot = feed.snapshot();
    }

    HttpResponse::Ok().json(NotificationListResponse {
        data: snapshot.alerts.clone(),
        refreshed_at: snapshot.refreshed_at,
    })
}
