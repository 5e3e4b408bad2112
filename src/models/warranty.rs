use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

use crate::errors::ServiceError;

/// Longest coverage accepted, expressed in months (100 years).
pub const MAX_COVERAGE_MONTHS: i64 = 1200;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DurationUnit {
    Days,
    Months,
    Years,
}

/// A validated coverage duration. Amounts are whole units and never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoverageTerm")]
pub struct CoverageTerm {
    amount: u32,
    unit: DurationUnit,
}

#[derive(Deserialize)]
struct RawCoverageTerm {
    amount: i64,
    unit: DurationUnit,
}

impl TryFrom<RawCoverageTerm> for CoverageTerm {
    type Error = ServiceError;

    fn try_from(raw: RawCoverageTerm) -> Result<Self, Self::Error> {
        CoverageTerm::new(raw.amount, raw.unit)
    }
}

impl CoverageTerm {
    pub fn new(amount: i64, unit: DurationUnit) -> Result<Self, ServiceError> {
        if amount < 0 {
            return Err(ServiceError::ValidationError(format!(
                "warranty duration must not be negative, got {} {}",
                amount, unit
            )));
        }
        let months_equivalent = match unit {
            DurationUnit::Days => amount / 30,
            DurationUnit::Months => amount,
            DurationUnit::Years => amount.saturating_mul(12),
        };
        if months_equivalent > MAX_COVERAGE_MONTHS {
            return Err(ServiceError::ValidationError(format!(
                "warranty duration of {} {} exceeds {} months",
                amount, unit, MAX_COVERAGE_MONTHS
            )));
        }
        let amount = u32::try_from(amount).map_err(|_| {
            ServiceError::ValidationError(format!("warranty duration {} is too large", amount))
        })?;
        Ok(Self { amount, unit })
    }

    pub fn months(amount: i64) -> Result<Self, ServiceError> {
        Self::new(amount, DurationUnit::Months)
    }

    pub fn days(amount: i64) -> Result<Self, ServiceError> {
        Self::new(amount, DurationUnit::Days)
    }

    pub fn years(amount: i64) -> Result<Self, ServiceError> {
        Self::new(amount, DurationUnit::Years)
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    /// Calendar months covered, `None` for day-based terms.
    pub fn calendar_months(&self) -> Option<u32> {
        match self.unit {
            DurationUnit::Days => None,
            DurationUnit::Months => Some(self.amount),
            DurationUnit::Years => Some(self.amount * 12),
        }
    }
}

impl fmt::Display for CoverageTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match (self.unit, self.amount) {
            (DurationUnit::Days, 1) => "day",
            (DurationUnit::Days, _) => "days",
            (DurationUnit::Months, 1) => "month",
            (DurationUnit::Months, _) => "months",
            (DurationUnit::Years, 1) => "year",
            (DurationUnit::Years, _) => "years",
        };
        write!(f, "{} {}", self.amount, unit)
    }
}

/// Computed coverage state; never stored on a record.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WarrantyState {
    Active,
    Expiring,
    Expired,
}

impl WarrantyState {
    pub fn label(&self) -> &'static str {
        match self {
            WarrantyState::Active => "Active",
            WarrantyState::Expiring => "Expiring Soon",
            WarrantyState::Expired => "Expired",
        }
    }
}

/// Manufacturer coverage on one installed part.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartCoverage {
    pub part_name: String,
    pub term: CoverageTerm,
    pub description: Option<String>,
}

/// Warranty issued for completed work: shop labor plus any part coverage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Warranty {
    pub id: String,
    pub work_order_id: String,
    pub customer_name: String,
    pub vehicle_description: String,
    pub services: Vec<String>,
    pub service_date: DateTime<Utc>,
    pub labor_coverage: CoverageTerm,
    #[serde(default)]
    pub parts_coverage: Vec<PartCoverage>,
    pub total_amount: Decimal,
    pub terms: Vec<String>,
    pub exclusions: Vec<String>,
    pub claim_count: u32,
}

impl Warranty {
    pub fn has_claims(&self) -> bool {
        self.claim_count > 0
    }
}
