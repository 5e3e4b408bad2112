// Core records
pub mod customer;
pub mod inspection;
pub mod part;
pub mod shop;
pub mod warranty;
pub mod work_order;

pub use customer::{Customer, CustomerAddress, CustomerValueTier, Vehicle, VehicleSummary};
pub use inspection::{FindingSeverity, Inspection, InspectionFinding, InspectionType};
pub use part::{InventoryItem, PartOrder, PartOrderStatus};
pub use shop::{Bay, SubscriptionPlan};
pub use warranty::{CoverageTerm, DurationUnit, PartCoverage, Warranty, WarrantyState};
pub use work_order::{
    CustomerRef, ServiceLine, ServiceStatus, WorkOrder, WorkOrderPriority, WorkOrderStatus,
};
