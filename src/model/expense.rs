use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize, lenient};

pub static EXPENSE_STATUS: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(&["pending", "approved", "rejected", "reimbursed"], "pending")
});

pub static EXPENSE_CATEGORY: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(
        &["travel", "meals", "equipment", "training", "other"],
        "other",
    )
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Expense {
    pub id: u64,
    pub employee_id: u64,
    pub category: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient::date")]
    pub expense_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseView {
    pub id: u64,
    pub employee_id: u64,
    #[schema(example = "Travel")]
    pub category: String,
    /// Form inputs may send the amount as a string.
    #[serde(default, deserialize_with = "lenient::amount")]
    #[schema(example = 120.5)]
    pub amount: f64,
    #[schema(value_type = Option<String>, format = "date")]
    pub expense_date: Option<NaiveDate>,
    pub description: Option<String>,
    #[schema(example = "Reimbursed")]
    pub status: String,
}

impl Normalize for Expense {
    type Display = ExpenseView;

    fn to_display(&self) -> ExpenseView {
        ExpenseView {
            id: self.id,
            employee_id: self.employee_id,
            category: EXPENSE_CATEGORY.display(&self.category),
            amount: self.amount,
            expense_date: self.expense_date,
            description: self.description.clone(),
            status: EXPENSE_STATUS.display(&self.status),
        }
    }

    fn from_display(view: &ExpenseView) -> Self {
        Expense {
            id: view.id,
            employee_id: view.employee_id,
            category: EXPENSE_CATEGORY.persisted(&view.category),
            amount: view.amount,
            expense_date: view.expense_date,
            description: view.description.clone(),
            status: EXPENSE_STATUS.persisted(&view.status),
        }
    }
}

impl Record for Expense {
    const KIND: EntityKind = EntityKind::Expense;
    const TABLE: &'static str = "expenses";
}
