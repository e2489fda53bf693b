//! Fixtures shared by unit tests.

use chrono::{DateTime, NaiveDate, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::config::Config;
use crate::model::driving_licence::DrivingLicence;
use crate::model::employee::Employee;
use crate::model::entity::Record;
use crate::model::leave_request::LeaveRequest;
use crate::model::role::Role;
use crate::model::visa::Visa;
use crate::models::{Claims, TokenType};
use crate::source::{Page, PageRequest, RecordSource};

pub const SECRET: &str = "test-secret";

pub fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn employee(id: u64, created_at: &str) -> Employee {
    Employee {
        id,
        employee_code: format!("EMP-{id:03}"),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("emp{id}@company.com"),
        phone: None,
        department_id: 1,
        job_title_id: 1,
        hire_date: date("2024-01-01"),
        status: "active".into(),
        created_at: Some(ts(created_at)),
    }
}

pub fn leave(id: u64, employee_id: u64, status: &str, created_at: Option<&str>) -> LeaveRequest {
    LeaveRequest {
        id,
        employee_id,
        start_date: date("2024-06-10"),
        end_date: date("2024-06-12"),
        leave_type: "annual".into(),
        status: status.into(),
        reason: None,
        created_at: created_at.map(ts),
    }
}

pub fn visa(id: u64, expiry_date: Option<NaiveDate>) -> Visa {
    Visa {
        id,
        employee_id: 100 + id,
        visa_type: "work".into(),
        visa_number: format!("V-{id}"),
        country: "AE".into(),
        issue_date: None,
        expiry_date,
        status: "active".into(),
    }
}

pub fn licence(id: u64, expiry_date: Option<NaiveDate>) -> DrivingLicence {
    DrivingLicence {
        id,
        employee_id: 200 + id,
        licence_number: format!("DL-{id}"),
        licence_class: "B".into(),
        issue_date: None,
        expiry_date,
        status: "active".into(),
    }
}

pub fn config() -> Config {
    Config {
        database_url: "mysql://unused".into(),
        jwt_secret: SECRET.into(),
        server_addr: "127.0.0.1:0".into(),
        api_prefix: "/api".into(),
        rate_protected_per_min: 1000,
        poll_interval: Duration::from_secs(60),
        log_level: tracing::Level::DEBUG,
    }
}

pub fn token(role: Role, token_type: TokenType) -> String {
    let claims = Claims {
        user_id: 1,
        sub: "tester".into(),
        role: role.id(),
        exp: (Utc::now().timestamp() + 900) as usize,
        jti: "test-jti".into(),
        token_type,
        employee_id: Some(1),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn bearer(role: Role) -> String {
    format!("Bearer {}", token(role, TokenType::Access))
}

/// In-memory [`RecordSource`] holding rows as persisted-form JSON.
#[derive(Default)]
pub struct MemorySource {
    tables: HashMap<&'static str, Vec<Value>>,
    failing: HashSet<&'static str>,
}

impl MemorySource {
    pub fn with<T: Record>(mut self, rows: &[T]) -> Self {
        let rows = rows
            .iter()
            .map(|r| serde_json::to_value(r).unwrap());
        self.tables.entry(T::TABLE).or_default().extend(rows);
        self
    }

    pub fn with_json(mut self, table: &'static str, rows: Vec<Value>) -> Self {
        self.tables.entry(table).or_default().extend(rows);
        self
    }

    pub fn failing(mut self, table: &'static str) -> Self {
        self.failing.insert(table);
        self
    }
}

impl RecordSource for MemorySource {
    async fn fetch_all<T: Record>(&self) -> anyhow::Result<Vec<T>> {
        if self.failing.contains(T::TABLE) {
            anyhow::bail!("{} is unavailable", T::TABLE);
        }
        let rows = self.tables.get(T::TABLE).cloned().unwrap_or_default();
        let records = rows
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(records)
    }

    async fn fetch_page<T: Record>(&self, request: PageRequest) -> anyhow::Result<Page<T>> {
        let mut all: Vec<T> = self.fetch_all().await?;
        let total = all.len() as i64;
        all.reverse();
        let data = all
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.per_page as usize)
            .collect();

        Ok(Page {
            data,
            page: request.page,
            per_page: request.per_page,
            total,
        })
    }
}
