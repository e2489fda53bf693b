use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize, lenient};

pub static COMPLIANCE_STATUS: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(
        &["compliant", "non_compliant", "pending_review", "in_progress"],
        "pending_review",
    )
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ComplianceAudit {
    pub id: u64,
    pub audit_type: String,
    #[serde(default, deserialize_with = "lenient::date")]
    pub audit_date: Option<NaiveDate>,
    pub auditor: Option<String>,
    pub findings: Option<String>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub score: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceAuditView {
    pub id: u64,
    #[schema(example = "Labour Law")]
    pub audit_type: String,
    #[schema(value_type = Option<String>, format = "date")]
    pub audit_date: Option<NaiveDate>,
    pub auditor: Option<String>,
    pub findings: Option<String>,
    #[serde(default, deserialize_with = "lenient::amount")]
    #[schema(example = 87.5)]
    pub score: f64,
    #[schema(example = "Pending Review")]
    pub status: String,
}

impl Normalize for ComplianceAudit {
    type Display = ComplianceAuditView;

    fn to_display(&self) -> ComplianceAuditView {
        ComplianceAuditView {
            id: self.id,
            audit_type: self.audit_type.clone(),
            audit_date: self.audit_date,
            auditor: self.auditor.clone(),
            findings: self.findings.clone(),
            score: self.score,
            status: COMPLIANCE_STATUS.display(&self.status),
        }
    }

    fn from_display(view: &ComplianceAuditView) -> Self {
        ComplianceAudit {
            id: view.id,
            audit_type: view.audit_type.clone(),
            audit_date: view.audit_date,
            auditor: view.auditor.clone(),
            findings: view.findings.clone(),
            score: view.score,
            status: COMPLIANCE_STATUS.persisted(&view.status),
        }
    }
}

impl Record for ComplianceAudit {
    const KIND: EntityKind = EntityKind::ComplianceAudit;
    const TABLE: &'static str = "compliance_audits";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_display_status_defaults_to_pending_review() {
        let view = ComplianceAuditView {
            id: 2,
            audit_type: "Safety".into(),
            audit_date: None,
            auditor: None,
            findings: None,
            score: 0.0,
            status: "Waived".into(),
        };

        assert_eq!(ComplianceAudit::from_display(&view).status, "pending_review");
    }
}
