use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dashboard::activity::{Activity, recent_activity};
use crate::model::employee::Employee;
use crate::model::leave_request::LeaveRequest;
use crate::source::{RecordSource, fetch_or_empty};

#[derive(Serialize, ToSchema)]
pub struct ActivityListResponse {
    pub data: Vec<Activity>,
}

/// The five most recent employee joins and leave requests
#[utoipa::path(
    get,
    path = "/api/activity",
    responses(
        (status = 200, description = "Recent activity, newest first", body = ActivityListResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Dashboard"
)]
pub async fn list_activity<S: RecordSource>(source: web::Data<S>) -> impl Responder {
    let source = source.get_ref();
    let (employees, leaves) = futures::join!(
        fetch_or_empty::<Employee, S>(source),
        fetch_or_empty::<LeaveRequest, S>(source),
    );

    HttpResponse::Ok().json(ActivityListResponse {
        data: recent_activity(Utc::now(), &employees, &leaves),
    })
}
