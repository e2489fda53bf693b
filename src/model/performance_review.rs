use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize};

pub static REVIEW_RATING: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(
        &[
            "excellent",
            "good",
            "satisfactory",
            "needs_improvement",
            "unsatisfactory",
        ],
        "satisfactory",
    )
});

pub static REVIEW_STATUS: Lazy<LookupTable> =
    Lazy::new(|| LookupTable::titled(&["draft", "submitted", "acknowledged"], "draft"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PerformanceReview {
    pub id: u64,
    pub employee_id: u64,
    pub reviewer_id: Option<u64>,
    pub review_period: String,
    pub rating: String,
    pub comments: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReviewView {
    pub id: u64,
    pub employee_id: u64,
    pub reviewer_id: Option<u64>,
    #[schema(example = "2024-H1")]
    pub review_period: String,
    #[schema(example = "Needs Improvement")]
    pub rating: String,
    pub comments: Option<String>,
    pub status: String,
}

impl Normalize for PerformanceReview {
    type Display = PerformanceReviewView;

    fn to_display(&self) -> PerformanceReviewView {
        PerformanceReviewView {
            id: self.id,
            employee_id: self.employee_id,
            reviewer_id: self.reviewer_id,
            review_period: self.review_period.clone(),
            rating: REVIEW_RATING.display(&self.rating),
            comments: self.comments.clone(),
            status: REVIEW_STATUS.display(&self.status),
        }
    }

    fn from_display(view: &PerformanceReviewView) -> Self {
        PerformanceReview {
            id: view.id,
            employee_id: view.employee_id,
            reviewer_id: view.reviewer_id,
            review_period: view.review_period.clone(),
            rating: REVIEW_RATING.persisted(&view.rating),
            comments: view.comments.clone(),
            status: REVIEW_STATUS.persisted(&view.status),
        }
    }
}

impl Record for PerformanceReview {
    const KIND: EntityKind = EntityKind::PerformanceReview;
    const TABLE: &'static str = "performance_reviews";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: &str) -> PerformanceReview {
        PerformanceReview {
            id: 11,
            employee_id: 4,
            reviewer_id: Some(2),
            review_period: "2024-H1".into(),
            rating: rating.into(),
            comments: None,
            status: "submitted".into(),
        }
    }

    #[test]
    fn needs_improvement_round_trips() {
        let view = review("needs_improvement").to_display();
        assert_eq!(view.rating, "Needs Improvement");
        assert_eq!(view.status, "Submitted");

        let back = PerformanceReview::from_display(&view);
        assert_eq!(back.rating, "needs_improvement");
        assert_eq!(back, review("needs_improvement"));
    }

    #[test]
    fn unknown_persisted_rating_passes_through() {
        assert_eq!(review("outstanding").to_display().rating, "outstanding");
    }
}
