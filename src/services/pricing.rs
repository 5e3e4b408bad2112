use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::formatting::format_currency;
use crate::models::shop::SubscriptionPlan;
use crate::models::work_order::WorkOrder;

/// Subscription fees: the base covers one bay, every further bay adds `per_bay_price`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub base_price: Decimal,
    pub per_bay_price: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            base_price: dec!(149),
            per_bay_price: dec!(29),
        }
    }
}

impl PricingPolicy {
    pub fn new(base_price: Decimal, per_bay_price: Decimal) -> Self {
        Self {
            base_price,
            per_bay_price,
        }
    }

    /// `base + max(0, bays - 1) * per_bay`
    pub fn calculate_monthly_price(&self, bays: u32) -> Decimal {
        let additional_bays = bays.saturating_sub(1);
        self.base_price + Decimal::from(additional_bays) * self.per_bay_price
    }

    /// Monthly price for a plan, or an error when the plan cannot serve `bays`.
    #[instrument(skip(self))]
    pub fn quote(&self, plan: SubscriptionPlan, bays: u32) -> Result<Decimal, ServiceError> {
        let price = match plan {
            SubscriptionPlan::Starter => {
                if let Some(max) = plan.max_bays() {
                    if bays > max {
                        return Err(ServiceError::ValidationError(format!(
                            "{} plan covers up to {} bays, requested {}",
                            plan.display_name(),
                            max,
                            bays
                        )));
                    }
                }
                self.base_price
            }
            SubscriptionPlan::Professional => self.calculate_monthly_price(bays),
            SubscriptionPlan::Enterprise => {
                return Err(ServiceError::InvalidOperation(
                    "Enterprise pricing is custom; contact sales".to_string(),
                ))
            }
        };
        debug!(%price, "quoted subscription");
        Ok(price)
    }

    /// Billing period line shown under a plan's price.
    pub fn period_description(&self, plan: SubscriptionPlan) -> String {
        match plan {
            SubscriptionPlan::Starter => "per shop/month".to_string(),
            SubscriptionPlan::Professional => format!(
                "per shop + {}/bay/month",
                format_currency(self.per_bay_price).trim_end_matches(".00")
            ),
            SubscriptionPlan::Enterprise => "contact sales".to_string(),
        }
    }

    /// Every plan priced for `bays`; plans that cannot be priced carry `None`.
    pub fn catalog(&self, bays: u32) -> Vec<PlanQuote> {
        SubscriptionPlan::iter()
            .map(|plan| PlanQuote {
                plan,
                name: plan.display_name().to_string(),
                description: plan.tagline().to_string(),
                period: self.period_description(plan),
                bays,
                monthly_price: self.quote(plan, bays).ok(),
            })
            .collect()
    }
}

/// Monthly price with the default fees.
pub fn calculate_monthly_price(bays: u32) -> Decimal {
    PricingPolicy::default().calculate_monthly_price(bays)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanQuote {
    pub plan: SubscriptionPlan,
    pub name: String,
    pub description: String,
    pub period: String,
    pub bays: u32,
    pub monthly_price: Option<Decimal>,
}

fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `hours * rate`, rounded to cents.
pub fn calculate_labor_cost(hours: Decimal, rate: Decimal) -> Result<Decimal, ServiceError> {
    if hours.is_sign_negative() && !hours.is_zero() {
        return Err(ServiceError::ValidationError(format!(
            "labor hours must not be negative, got {}",
            hours
        )));
    }
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(ServiceError::ValidationError(format!(
            "labor rate must not be negative, got {}",
            rate
        )));
    }
    hours
        .checked_mul(rate)
        .map(round_cents)
        .ok_or_else(|| ServiceError::InvalidInput("labor cost overflows".to_string()))
}

/// Invoice breakdown of a work order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderTotals {
    pub labor: Decimal,
    pub parts: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl WorkOrderTotals {
    pub fn from_amounts(
        labor: Decimal,
        parts: Decimal,
        tax_rate: Decimal,
    ) -> Result<Self, ServiceError> {
        if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE {
            return Err(ServiceError::ValidationError(format!(
                "tax rate must be between 0 and 1, got {}",
                tax_rate
            )));
        }
        ensure_non_negative("labor total", labor)?;
        ensure_non_negative("parts total", parts)?;

        let subtotal = checked_sum(labor, parts)?;
        let tax = subtotal
            .checked_mul(tax_rate)
            .map(round_cents)
            .ok_or_else(|| ServiceError::InvalidInput("tax amount overflows".to_string()))?;
        Ok(Self {
            labor,
            parts,
            subtotal,
            tax,
            total: checked_sum(subtotal, tax)?,
        })
    }

    /// Labor from each service line, parts from each part order.
    pub fn for_work_order(order: &WorkOrder, tax_rate: Decimal) -> Result<Self, ServiceError> {
        let mut labor = Decimal::ZERO;
        for service in &order.services {
            let line = calculate_labor_cost(service.labor_hours, service.labor_rate)?;
            labor = checked_sum(labor, line)?;
        }
        let mut parts = Decimal::ZERO;
        for part in &order.parts {
            let line = part
                .unit_cost
                .checked_mul(Decimal::from(part.quantity))
                .ok_or_else(|| {
                    ServiceError::InvalidInput(format!("cost of part {} overflows", part.part_number))
                })?;
            parts = checked_sum(parts, line)?;
        }
        Self::from_amounts(labor, parts, tax_rate)
    }
}

fn ensure_non_negative(what: &str, amount: Decimal) -> Result<(), ServiceError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ServiceError::ValidationError(format!(
            "{} must not be negative, got {}",
            what, amount
        )));
    }
    Ok(())
}

fn checked_sum(a: Decimal, b: Decimal) -> Result<Decimal, ServiceError> {
    a.checked_add(b)
        .ok_or_else(|| ServiceError::InvalidInput("invoice total overflows".to_string()))
}
