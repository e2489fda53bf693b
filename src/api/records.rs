use actix_web::{HttpResponse, error::ErrorInternalServerError, web};
use serde_json::json;
use std::str::FromStr;
use tracing::{debug, error};

use crate::auth::auth::AuthUser;
use crate::model::{
    asset::Asset, benefit::Benefit, compliance_audit::ComplianceAudit,
    disciplinary_action::DisciplinaryAction, driving_licence::DrivingLicence, employee::Employee,
    entity::EntityKind, entity::Record, expense::Expense, health_insurance::HealthInsurancePolicy,
    leave_request::LeaveRequest, payroll::Payroll, performance_review::PerformanceReview,
    visa::Visa,
};
use crate::source::{PageQuery, PageRequest, RecordSource};
use crate::utils::normalizer::Normalize;

/// Paginated records of one kind, in display form
#[utoipa::path(
    get,
    path = "/api/records/{kind}",
    params(
        ("kind" = String, Path, description = "Record kind, e.g. `visas`, `leave-requests`, `performance-reviews`"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Paginated display records", body = Object, example = json!({
            "data": [{
                "id": 11,
                "employeeId": 4,
                "reviewerId": 2,
                "reviewPeriod": "2024-H1",
                "rating": "Needs Improvement",
                "comments": null,
                "status": "Submitted"
            }],
            "page": 1,
            "per_page": 20,
            "total": 1
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Unknown record kind", body = Object, example = json!({
            "message": "Unknown record type: vehicles"
        })),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Records"
)]
pub async fn list_records<S: RecordSource>(
    auth: AuthUser,
    source: web::Data<S>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> actix_web::Result<HttpResponse> {
    let segment = path.into_inner();

    let kind = match EntityKind::from_str(&segment) {
        Ok(kind) => kind,
        Err(_) => {
            return Ok(HttpResponse::NotFound().json(json!({
                "message": format!("Unknown record type: {segment}")
            })));
        }
    };

    auth.require(kind.access())?;

    let request = PageRequest::from(query.into_inner());
    debug!(
        user = %auth.username,
        role = %auth.role,
        %kind,
        page = request.page,
        per_page = request.per_page,
        "Listing records"
    );

    let source = source.get_ref();
    match kind {
        EntityKind::Employee => display_page::<Employee, S>(source, request).await,
        EntityKind::LeaveRequest => display_page::<LeaveRequest, S>(source, request).await,
        EntityKind::Visa => display_page::<Visa, S>(source, request).await,
        EntityKind::DrivingLicence => display_page::<DrivingLicence, S>(source, request).await,
        EntityKind::Expense => display_page::<Expense, S>(source, request).await,
        EntityKind::Asset => display_page::<Asset, S>(source, request).await,
        EntityKind::Benefit => display_page::<Benefit, S>(source, request).await,
        EntityKind::Payroll => display_page::<Payroll, S>(source, request).await,
        EntityKind::DisciplinaryAction => {
            display_page::<DisciplinaryAction, S>(source, request).await
        }
        EntityKind::HealthInsurancePolicy => {
            display_page::<HealthInsurancePolicy, S>(source, request).await
        }
        EntityKind::ComplianceAudit => display_page::<ComplianceAudit, S>(source, request).await,
        EntityKind::PerformanceReview => {
            display_page::<PerformanceReview, S>(source, request).await
        }
    }
}

async fn display_page<T: Record, S: RecordSource>(
    source: &S,
    request: PageRequest,
) -> actix_web::Result<HttpResponse> {
    let page = source.fetch_page::<T>(request).await.map_err(|e| {
        error!(error = %e, table = T::TABLE, "Failed to fetch records");
        ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(page.map(|record| record.to_display())))
}
