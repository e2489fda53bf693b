pub mod asset;
pub mod benefit;
pub mod compliance_audit;
pub mod disciplinary_action;
pub mod driving_licence;
pub mod employee;
pub mod entity;
pub mod expense;
pub mod health_insurance;
pub mod leave_request;
pub mod payroll;
pub mod performance_review;
pub mod role;
pub mod visa;

#[cfg(test)]
mod tests {
    use super::asset::{ASSET_STATUS, Asset, AssetView};
    use super::benefit::{BENEFIT_STATUS, BENEFIT_TYPE};
    use super::compliance_audit::{COMPLIANCE_STATUS, ComplianceAudit, ComplianceAuditView};
    use super::disciplinary_action::{DISCIPLINARY_ACTION_TYPE, DISCIPLINARY_STATUS};
    use super::driving_licence::LICENCE_STATUS;
    use super::employee::EMPLOYEE_STATUS;
    use super::expense::{EXPENSE_CATEGORY, EXPENSE_STATUS};
    use super::health_insurance::{COVERAGE_TYPE, POLICY_STATUS};
    use super::leave_request::{LEAVE_STATUS, LEAVE_TYPE, LeaveRequest, LeaveRequestView};
    use super::payroll::PAYROLL_STATUS;
    use super::performance_review::{
        PerformanceReview, PerformanceReviewView, REVIEW_RATING, REVIEW_STATUS,
    };
    use super::visa::{VISA_STATUS, Visa, VisaView};
    use crate::utils::normalizer::{LookupTable, Normalize};
    use chrono::NaiveDate;

    fn all_tables() -> Vec<(&'static str, &'static LookupTable)> {
        vec![
            ("employee.status", &*EMPLOYEE_STATUS),
            ("leave.status", &*LEAVE_STATUS),
            ("leave.type", &*LEAVE_TYPE),
            ("visa.status", &*VISA_STATUS),
            ("licence.status", &*LICENCE_STATUS),
            ("expense.status", &*EXPENSE_STATUS),
            ("expense.category", &*EXPENSE_CATEGORY),
            ("asset.status", &*ASSET_STATUS),
            ("benefit.status", &*BENEFIT_STATUS),
            ("benefit.type", &*BENEFIT_TYPE),
            ("payroll.status", &*PAYROLL_STATUS),
            ("disciplinary.status", &*DISCIPLINARY_STATUS),
            ("disciplinary.type", &*DISCIPLINARY_ACTION_TYPE),
            ("policy.status", &*POLICY_STATUS),
            ("policy.coverage", &*COVERAGE_TYPE),
            ("compliance.status", &*COMPLIANCE_STATUS),
            ("review.rating", &*REVIEW_RATING),
            ("review.status", &*REVIEW_STATUS),
        ]
    }

    #[test]
    fn every_table_is_a_bijection() {
        for (name, table) in all_tables() {
            for key in table.keys() {
                let label = table.display(key);
                assert_eq!(table.persisted(&label), *key, "{name}: {key}");
                assert_eq!(table.display(&table.persisted(&label)), label, "{name}");
            }
            assert!(
                table.keys().contains(&table.fallback()),
                "{name}: fallback must be a known key"
            );
            assert_eq!(table.persisted("Not A Real Label"), table.fallback(), "{name}");
        }
    }

    fn assert_view_round_trips<T: Normalize>(view: T::Display) {
        assert_eq!(T::from_display(&view).to_display(), view);
    }

    #[test]
    fn display_records_round_trip_for_every_status() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1);

        for status in VISA_STATUS.keys() {
            assert_view_round_trips::<Visa>(VisaView {
                id: 1,
                employee_id: 2,
                visa_type: "Work".into(),
                visa_number: "V-1".into(),
                country: "AE".into(),
                issue_date: date,
                expiry_date: date,
                status: VISA_STATUS.display(status),
            });
        }

        for status in ASSET_STATUS.keys() {
            assert_view_round_trips::<Asset>(AssetView {
                id: 1,
                asset_tag: "LAP-1".into(),
                name: "Laptop".into(),
                category: "it".into(),
                purchase_cost: 1200.0,
                assigned_to: Some(3),
                status: ASSET_STATUS.display(status),
            });
        }

        for status in COMPLIANCE_STATUS.keys() {
            assert_view_round_trips::<ComplianceAudit>(ComplianceAuditView {
                id: 1,
                audit_type: "Payroll".into(),
                audit_date: date,
                auditor: Some("External".into()),
                findings: None,
                score: 91.0,
                status: COMPLIANCE_STATUS.display(status),
            });
        }

        for rating in REVIEW_RATING.keys() {
            for status in REVIEW_STATUS.keys() {
                assert_view_round_trips::<PerformanceReview>(PerformanceReviewView {
                    id: 1,
                    employee_id: 2,
                    reviewer_id: None,
                    review_period: "2024".into(),
                    rating: REVIEW_RATING.display(rating),
                    comments: None,
                    status: REVIEW_STATUS.display(status),
                });
            }
        }

        for leave_type in LEAVE_TYPE.keys() {
            for status in LEAVE_STATUS.keys() {
                assert_view_round_trips::<LeaveRequest>(LeaveRequestView {
                    id: 1,
                    employee_id: 2,
                    start_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
                    leave_type: LEAVE_TYPE.display(leave_type),
                    status: LEAVE_STATUS.display(status),
                    reason: None,
                    created_at: None,
                });
            }
        }
    }
}
