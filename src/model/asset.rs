use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{EntityKind, Record};
use crate::utils::normalizer::{LookupTable, Normalize, lenient};

pub static ASSET_STATUS: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::titled(
        &["available", "assigned", "in_repair", "retired"],
        "available",
    )
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Asset {
    pub id: u64,
    pub asset_tag: String,
    pub name: String,
    pub category: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub purchase_cost: f64,
    pub assigned_to: Option<u64>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetView {
    pub id: u64,
    #[schema(example = "LAP-0042")]
    pub asset_tag: String,
    pub name: String,
    pub category: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub purchase_cost: f64,
    pub assigned_to: Option<u64>,
    #[schema(example = "In Repair")]
    pub status: String,
}

impl Normalize for Asset {
    type Display = AssetView;

    fn to_display(&self) -> AssetView {
        AssetView {
            id: self.id,
            asset_tag: self.asset_tag.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            purchase_cost: self.purchase_cost,
            assigned_to: self.assigned_to,
            status: ASSET_STATUS.display(&self.status),
        }
    }

    fn from_display(view: &AssetView) -> Self {
        Asset {
            id: view.id,
            asset_tag: view.asset_tag.clone(),
            name: view.name.clone(),
            category: view.category.clone(),
            purchase_cost: view.purchase_cost,
            assigned_to: view.assigned_to,
            status: ASSET_STATUS.persisted(&view.status),
        }
    }
}

impl Record for Asset {
    const KIND: EntityKind = EntityKind::Asset;
    const TABLE: &'static str = "assets";
}
