use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::customer::VehicleSummary;
use super::inspection::Inspection;
use super::part::PartOrder;
use super::warranty::CoverageTerm;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkOrderStatus {
    Pending,
    Inspecting,
    AwaitingApproval,
    Approved,
    InProgress,
    AwaitingParts,
    QualityCheck,
    Completed,
    Delivered,
    Cancelled,
}

impl WorkOrderStatus {
    /// Vehicle is still in the shop and work remains.
    pub fn is_open(&self) -> bool {
        !matches!(
            self,
            WorkOrderStatus::Completed | WorkOrderStatus::Delivered | WorkOrderStatus::Cancelled
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderStatus::Pending => "Pending",
            WorkOrderStatus::Inspecting => "Inspecting",
            WorkOrderStatus::AwaitingApproval => "Awaiting Approval",
            WorkOrderStatus::Approved => "Approved",
            WorkOrderStatus::InProgress => "In Progress",
            WorkOrderStatus::AwaitingParts => "Awaiting Parts",
            WorkOrderStatus::QualityCheck => "Quality Check",
            WorkOrderStatus::Completed => "Completed",
            WorkOrderStatus::Delivered => "Delivered",
            WorkOrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkOrderPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ServiceStatus {
    Pending,
    InProgress,
    Completed,
}

/// Customer identity as carried on a work order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
}

/// One labor line on a work order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub name: String,
    pub description: Option<String>,
    pub labor_hours: Decimal,
    pub labor_rate: Decimal,
    pub status: ServiceStatus,
    pub technician_id: Option<String>,
    pub warranty: Option<CoverageTerm>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    pub customer: CustomerRef,
    pub vehicle_id: String,
    pub vehicle: VehicleSummary,
    pub technician: Option<String>,
    pub bay_id: Option<String>,
    pub status: WorkOrderStatus,
    pub priority: WorkOrderPriority,
    pub description: String,
    pub customer_concerns: Vec<String>,
    pub estimated_cost: Decimal,
    pub actual_cost: Option<Decimal>,
    pub estimated_completion: DateTime<Utc>,
    pub actual_completion: Option<DateTime<Utc>>,
    pub services: Vec<ServiceLine>,
    pub parts: Vec<PartOrder>,
    pub inspections: Vec<Inspection>,
    pub photo_count: u32,
    pub labor_warranty: Option<CoverageTerm>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkOrder {
    /// Cost shown on lists: the actual cost once known, otherwise the estimate.
    pub fn display_cost(&self) -> Decimal {
        self.actual_cost.unwrap_or(self.estimated_cost)
    }

    pub fn vehicle_description(&self) -> String {
        self.vehicle.to_string()
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status.is_open() && self.estimated_completion < now
    }

    pub fn total_labor_hours(&self) -> Decimal {
        self.services.iter().map(|s| s.labor_hours).sum()
    }
}
