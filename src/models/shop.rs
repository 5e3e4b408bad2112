use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A physical service stall, optionally holding a work order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bay {
    pub id: String,
    pub number: u32,
    pub name: String,
    pub current_work_order: Option<String>,
    pub equipment: Vec<String>,
    pub specializations: Vec<String>,
}

impl Bay {
    pub fn is_occupied(&self) -> bool {
        self.current_work_order.is_some()
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SubscriptionPlan {
    Starter,
    Professional,
    Enterprise,
}

impl SubscriptionPlan {
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionPlan::Starter => "Starter",
            SubscriptionPlan::Professional => "Professional",
            SubscriptionPlan::Enterprise => "Enterprise",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            SubscriptionPlan::Starter => "Perfect for small independent shops",
            SubscriptionPlan::Professional => "Ideal for growing repair shops",
            SubscriptionPlan::Enterprise => "For multi-location operations",
        }
    }

    /// Bay cap included in the plan, `None` when unlimited.
    pub fn max_bays(&self) -> Option<u32> {
        match self {
            SubscriptionPlan::Starter => Some(2),
            SubscriptionPlan::Professional | SubscriptionPlan::Enterprise => None,
        }
    }
}
