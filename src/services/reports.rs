//! Headline numbers for the dashboard, warranty and parts screens.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::instrument;

use crate::errors::ServiceError;
use crate::models::{Bay, InventoryItem, PartOrder, PartOrderStatus, Warranty, WarrantyState};
use crate::models::{WorkOrder, WorkOrderStatus};
use crate::services::warranties::WarrantyService;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_work_orders: usize,
    pub open_work_orders: usize,
    pub overdue_work_orders: usize,
    /// Billed value of completed and delivered orders.
    pub revenue: Decimal,
    /// Estimated value of orders still in the shop.
    pub pipeline_value: Decimal,
    /// Booked labor hours on orders still in the shop.
    pub open_labor_hours: Decimal,
    pub bays_occupied: usize,
    pub bays_total: usize,
    pub status_counts: BTreeMap<WorkOrderStatus, usize>,
}

impl DashboardSummary {
    #[instrument(skip_all, fields(work_orders = work_orders.len(), bays = bays.len()))]
    pub fn build(work_orders: &[WorkOrder], bays: &[Bay], now: DateTime<Utc>) -> Self {
        let mut status_counts = BTreeMap::new();
        let mut revenue = Decimal::ZERO;
        let mut pipeline_value = Decimal::ZERO;
        let mut open_labor_hours = Decimal::ZERO;
        let mut open_work_orders = 0;
        let mut overdue_work_orders = 0;

        for order in work_orders {
            *status_counts.entry(order.status).or_insert(0) += 1;
            match order.status {
                WorkOrderStatus::Completed | WorkOrderStatus::Delivered => {
                    revenue += order.display_cost();
                }
                WorkOrderStatus::Cancelled => {}
                _ => {
                    open_work_orders += 1;
                    pipeline_value += order.estimated_cost;
                    open_labor_hours += order.total_labor_hours();
                    if order.is_overdue(now) {
                        overdue_work_orders += 1;
                    }
                }
            }
        }

        Self {
            total_work_orders: work_orders.len(),
            open_work_orders,
            overdue_work_orders,
            revenue,
            pipeline_value,
            open_labor_hours,
            bays_occupied: bays.iter().filter(|b| b.is_occupied()).count(),
            bays_total: bays.len(),
            status_counts,
        }
    }

    pub fn bay_utilization(&self) -> f64 {
        if self.bays_total == 0 {
            return 0.0;
        }
        self.bays_occupied as f64 / self.bays_total as f64
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpiringWarranty {
    pub id: String,
    pub customer_name: String,
    pub expiration: DateTime<Utc>,
    pub days_remaining: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WarrantySummary {
    pub total: usize,
    pub active: usize,
    pub expiring: usize,
    pub expired: usize,
    pub with_claims: usize,
    pub covered_amount: Decimal,
    /// Soonest first.
    pub upcoming: Vec<ExpiringWarranty>,
}

impl WarrantySummary {
    pub fn build(
        service: &WarrantyService,
        warranties: &[Warranty],
        now: DateTime<Utc>,
    ) -> Result<Self, ServiceError> {
        let mut summary = Self {
            total: warranties.len(),
            active: 0,
            expiring: 0,
            expired: 0,
            with_claims: warranties.iter().filter(|w| w.has_claims()).count(),
            covered_amount: warranties.iter().map(|w| w.total_amount).sum(),
            upcoming: Vec::new(),
        };

        for warranty in warranties {
            match service.evaluate(warranty, now)?.status {
                WarrantyState::Active => summary.active += 1,
                WarrantyState::Expiring => summary.expiring += 1,
                WarrantyState::Expired => summary.expired += 1,
            }
        }

        summary.upcoming = service
            .upcoming_expirations(warranties, now)?
            .into_iter()
            .map(|(warranty, status)| ExpiringWarranty {
                id: warranty.id.clone(),
                customer_name: warranty.customer_name.clone(),
                expiration: status.expiration,
                days_remaining: status.days_remaining,
            })
            .collect();

        Ok(summary)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LowStockItem {
    pub part_number: String,
    pub name: String,
    pub current_stock: u32,
    pub reorder_level: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PartsSummary {
    /// Pending or ordered.
    pub outstanding_orders: usize,
    pub outstanding_value: Decimal,
    pub received_orders: usize,
    pub installed_orders: usize,
    pub low_stock: Vec<LowStockItem>,
}

impl PartsSummary {
    pub fn build(orders: &[PartOrder], inventory: &[InventoryItem]) -> Self {
        let outstanding: Vec<&PartOrder> =
            orders.iter().filter(|o| o.status.is_outstanding()).collect();

        Self {
            outstanding_orders: outstanding.len(),
            outstanding_value: outstanding.iter().map(|o| o.total_cost()).sum(),
            received_orders: orders
                .iter()
                .filter(|o| o.status == PartOrderStatus::Received)
                .count(),
            installed_orders: orders
                .iter()
                .filter(|o| o.status == PartOrderStatus::Installed)
                .count(),
            low_stock: inventory
                .iter()
                .filter(|item| item.is_low_stock())
                .map(|item| LowStockItem {
                    part_number: item.part_number.clone(),
                    name: item.name.clone(),
                    current_stock: item.current_stock,
                    reorder_level: item.reorder_level,
                })
                .collect(),
        }
    }
}
