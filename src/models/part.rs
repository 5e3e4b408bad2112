use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::warranty::CoverageTerm;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PartOrderStatus {
    Pending,
    Ordered,
    Received,
    Installed,
}

impl PartOrderStatus {
    /// Not yet on the shelf.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, PartOrderStatus::Pending | PartOrderStatus::Ordered)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartOrder {
    pub id: String,
    pub work_order_id: String,
    pub part_number: String,
    pub part_name: String,
    pub brand: String,
    pub quantity: u32,
    pub unit_cost: Decimal,
    pub supplier: String,
    pub status: PartOrderStatus,
    pub customer_name: String,
    pub vehicle_description: String,
    pub estimated_delivery: Option<DateTime<Utc>>,
    pub actual_delivery: Option<DateTime<Utc>>,
    pub warranty: Option<CoverageTerm>,
}

impl PartOrder {
    pub fn total_cost(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.quantity)
    }
}

/// Stocked part with its reorder threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub part_number: String,
    pub name: String,
    pub category: Option<String>,
    pub current_stock: u32,
    pub reorder_level: u32,
    pub unit_cost: Decimal,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.reorder_level
    }
}
