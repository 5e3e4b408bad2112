use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InspectionType {
    Initial,
    Diagnostic,
    Final,
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
pub enum FindingSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspectionFinding {
    pub category: String,
    pub severity: FindingSeverity,
    pub description: String,
    pub recommendation: String,
    pub estimated_cost: Option<Decimal>,
    pub photo_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: String,
    pub work_order_id: String,
    pub customer_name: String,
    pub vehicle_description: String,
    pub inspection_type: InspectionType,
    pub technician: String,
    pub findings: Vec<InspectionFinding>,
    pub recommendations: Vec<String>,
    pub photo_count: u32,
    pub video_count: u32,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Inspection {
    pub fn highest_severity(&self) -> Option<FindingSeverity> {
        self.findings.iter().map(|f| f.severity).max()
    }

    /// Findings at or above `severity`.
    pub fn findings_at_least(
        &self,
        severity: FindingSeverity,
    ) -> impl Iterator<Item = &InspectionFinding> {
        self.findings.iter().filter(move |f| f.severity >= severity)
    }

    /// Sum of quoted repair costs; findings without a quote contribute nothing.
    pub fn estimated_repair_total(&self) -> Decimal {
        self.findings.iter().filter_map(|f| f.estimated_cost).sum()
    }

    pub fn media_count(&self) -> u32 {
        self.photo_count + self.video_count
    }
}
