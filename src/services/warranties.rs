use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::models::warranty::{CoverageTerm, PartCoverage, Warranty, WarrantyState};
use crate::services::search::{RecordFilter, Searchable};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 30;

/// Thresholds used when classifying coverage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyPolicy {
    /// A warranty with this many days or fewer left is `Expiring`.
    pub expiring_window_days: i64,
}

impl Default for WarrantyPolicy {
    fn default() -> Self {
        Self {
            expiring_window_days: DEFAULT_EXPIRING_WINDOW_DAYS,
        }
    }
}

/// Result of classifying one warranty at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyStatus {
    pub status: WarrantyState,
    /// Whole days until expiration, rounded up; 0 once expired.
    pub days_remaining: i64,
    pub expiration: DateTime<Utc>,
}

/// Adds the coverage term to the service date.
///
/// Month and year terms use calendar arithmetic: the day of month is kept and
/// clamped to the last day of a shorter target month, so Jan 31 + 1 month is
/// Feb 29 in a leap year. Day terms add exact 24-hour days.
pub fn calculate_expiration(
    service_date: DateTime<Utc>,
    term: CoverageTerm,
) -> Result<DateTime<Utc>, ServiceError> {
    let expiration = match term.calendar_months() {
        Some(months) => service_date.checked_add_months(Months::new(months)),
        None => service_date.checked_add_signed(Duration::days(i64::from(term.amount()))),
    };
    expiration.ok_or_else(|| {
        ServiceError::ValidationError(format!(
            "warranty of {} from {} runs past the supported calendar range",
            term, service_date
        ))
    })
}

/// Classifies coverage relative to `now`.
#[instrument(level = "debug")]
pub fn warranty_status_at(
    service_date: DateTime<Utc>,
    term: CoverageTerm,
    now: DateTime<Utc>,
    policy: WarrantyPolicy,
) -> Result<WarrantyStatus, ServiceError> {
    let expiration = calculate_expiration(service_date, term)?;

    if expiration < now {
        return Ok(WarrantyStatus {
            status: WarrantyState::Expired,
            days_remaining: 0,
            expiration,
        });
    }

    let remaining_ms = (expiration - now).num_milliseconds();
    let days_remaining = (remaining_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    let status = if days_remaining <= policy.expiring_window_days {
        WarrantyState::Expiring
    } else {
        WarrantyState::Active
    };
    debug!(%expiration, days_remaining, %status, "classified warranty");

    Ok(WarrantyStatus {
        status,
        days_remaining,
        expiration,
    })
}

/// Classifies coverage against the current instant with the default policy.
pub fn warranty_status(
    service_date: DateTime<Utc>,
    term: CoverageTerm,
) -> Result<WarrantyStatus, ServiceError> {
    warranty_status_at(service_date, term, Utc::now(), WarrantyPolicy::default())
}

/// Evaluates warranty records under a fixed policy.
#[derive(Clone, Debug, Default)]
pub struct WarrantyService {
    policy: WarrantyPolicy,
}

impl WarrantyService {
    pub fn new(policy: WarrantyPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> WarrantyPolicy {
        self.policy
    }

    /// Labor coverage status of a warranty record.
    pub fn evaluate(
        &self,
        warranty: &Warranty,
        now: DateTime<Utc>,
    ) -> Result<WarrantyStatus, ServiceError> {
        warranty_status_at(warranty.service_date, warranty.labor_coverage, now, self.policy)
    }

    /// Status of each part's coverage, in listing order.
    pub fn evaluate_parts<'a>(
        &self,
        warranty: &'a Warranty,
        now: DateTime<Utc>,
    ) -> Result<Vec<(&'a PartCoverage, WarrantyStatus)>, ServiceError> {
        warranty
            .parts_coverage
            .iter()
            .map(|part| {
                warranty_status_at(warranty.service_date, part.term, now, self.policy)
                    .map(|status| (part, status))
            })
            .collect()
    }

    /// Records whose computed state is `state`, in input order.
    #[instrument(skip(self, warranties), fields(count = warranties.len()))]
    pub fn filter_by_state<'a>(
        &self,
        warranties: &'a [Warranty],
        state: WarrantyState,
        now: DateTime<Utc>,
    ) -> Result<Vec<&'a Warranty>, ServiceError> {
        let mut matching = Vec::new();
        for warranty in warranties {
            if self.evaluate(warranty, now)?.status == state {
                matching.push(warranty);
            }
        }
        Ok(matching)
    }

    /// Search box and status dropdown together, in input order.
    #[instrument(skip(self, warranties), fields(count = warranties.len()))]
    pub fn filter<'a>(
        &self,
        filter: &RecordFilter<WarrantyState>,
        warranties: &'a [Warranty],
        now: DateTime<Utc>,
    ) -> Result<Vec<&'a Warranty>, ServiceError> {
        let needle = filter.query.to_lowercase();
        let mut matching = Vec::new();
        for warranty in warranties {
            if !needle.is_empty() && !warranty.matches_lowercase(&needle) {
                continue;
            }
            if filter.status.accepts(&self.evaluate(warranty, now)?.status) {
                matching.push(warranty);
            }
        }
        Ok(matching)
    }

    /// Warranties inside the expiring window, soonest first.
    pub fn upcoming_expirations<'a>(
        &self,
        warranties: &'a [Warranty],
        now: DateTime<Utc>,
    ) -> Result<Vec<(&'a Warranty, WarrantyStatus)>, ServiceError> {
        let mut upcoming = Vec::new();
        for warranty in warranties {
            let status = self.evaluate(warranty, now)?;
            if status.status == WarrantyState::Expiring {
                upcoming.push((warranty, status));
            }
        }
        upcoming.sort_by_key(|(_, status)| status.expiration);
        Ok(upcoming)
    }
}
