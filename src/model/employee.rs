use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize};

pub static EMPLOYEE_STATUS: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(&["active", "inactive", "on_leave", "terminated"], "active")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: u64,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department_id: u64,
    pub job_title_id: u64,
    pub hire_date: NaiveDate,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "employeeCode": "EMP-001",
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@company.com",
        "phone": "+8801712345678",
        "departmentId": 10,
        "jobTitleId": 3,
        "hireDate": "2024-01-01",
        "status": "On Leave",
        "createdAt": "2024-01-01T09:00:00Z"
    })
)]
pub struct EmployeeView {
    pub id: u64,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department_id: u64,
    pub job_title_id: u64,
    #[schema(value_type = String, format = "date")]
    pub hire_date: NaiveDate,
    pub status: String,
    #[schema(value_type = Option<String>, format = "date-time")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Normalize for Employee {
    type Display = EmployeeView;

    fn to_display(&self) -> EmployeeView {
        EmployeeView {
            id: self.id,
            employee_code: self.employee_code.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department_id: self.department_id,
            job_title_id: self.job_title_id,
            hire_date: self.hire_date,
            status: EMPLOYEE_STATUS.display(&self.status),
            created_at: self.created_at,
        }
    }

    fn from_display(view: &EmployeeView) -> Self {
        Employee {
            id: view.id,
            employee_code: view.employee_code.clone(),
            first_name: view.first_name.clone(),
            last_name: view.last_name.clone(),
            email: view.email.clone(),
            phone: view.phone.clone(),
            department_id: view.department_id,
            job_title_id: view.job_title_id,
            hire_date: view.hire_date,
            status: EMPLOYEE_STATUS.persisted(&view.status),
            created_at: view.created_at,
        }
    }
}

impl Record for Employee {
    const KIND: EntityKind = EntityKind::Employee;
    const TABLE: &'static str = "employees";
}
