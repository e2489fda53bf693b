use crate::api::activity::ActivityListResponse;
use crate::api::notifications::NotificationListResponse;
use crate::dashboard::activity::Activity;
use crate::dashboard::alerts::{Alert, AlertCategory, Priority};
use crate::model::{
    asset::AssetView, benefit::BenefitView, compliance_audit::ComplianceAuditView,
    disciplinary_action::DisciplinaryActionView, driving_licence::DrivingLicenceView,
    employee::EmployeeView, entity::EntityKind, expense::ExpenseView,
    health_insurance::HealthInsurancePolicyView, leave_request::LeaveRequestView,
    payroll::PayrollView, performance_review::PerformanceReviewView, visa::VisaView,
};
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Dashboard API",
        version = "1.0.0",
        description = r#"
## Human Resource Management (HRM) Dashboard

Read side of an HR management system: the header notification feed, the
recent-activity panel and display-ready record lists.

### 🔹 Key Features
- **Notifications**
  - Pending leave requests
  - Visas and driving licences expiring within 30 days
- **Recent Activity**
  - The five newest employee joins and leave requests
- **Records**
  - Paginated lists of employees, leave, visas, licences, expenses, assets,
    benefits, payroll, disciplinary actions, health insurance, compliance
    audits and performance reviews

### 🔐 Security
All endpoints are protected using **JWT Bearer authentication**.
Payroll is **Admin** only; disciplinary actions and health insurance need **HR** or **Admin**.

### 📦 Response Format
- camelCase JSON with human-readable enum labels (`"Pending Review"`, `"Annual Leave"`)
- Pagination supported for record lists

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::notifications::list_notifications,
        crate::api::activity::list_activity,
        crate::api::records::list_records,
    ),
    components(
        schemas(
            Alert,
            AlertCategory,
            Priority,
            NotificationListResponse,
            Activity,
            ActivityListResponse,
            EntityKind,
            EmployeeView,
            LeaveRequestView,
            VisaView,
            DrivingLicenceView,
            ExpenseView,
            AssetView,
            BenefitView,
            PayrollView,
            DisciplinaryActionView,
            HealthInsurancePolicyView,
            ComplianceAuditView,
            PerformanceReviewView
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Dashboard", description = "Notification and activity feeds"),
        (name = "Records", description = "Display-form record lists"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
