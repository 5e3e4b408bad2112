use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::formatting::format_currency_with_symbol;
use crate::models::shop::Bay;

const DEFAULT_BUSY_THRESHOLD: f64 = 0.8;

/// Operating parameters of one shop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShopSettings {
    pub labor_rate: Decimal,
    pub tax_rate: Decimal,
    pub currency_symbol: String,
    pub busy_threshold: f64,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            labor_rate: dec!(125),
            tax_rate: dec!(0.0825),
            currency_symbol: "$".to_string(),
            busy_threshold: DEFAULT_BUSY_THRESHOLD,
        }
    }
}

impl ShopSettings {
    pub fn format_amount(&self, amount: Decimal) -> String {
        format_currency_with_symbol(amount, &self.currency_symbol)
    }

    pub fn status(&self, is_open: bool, current: u32, capacity: u32) -> ShopStatus {
        shop_status_with_threshold(is_open, current, capacity, self.busy_threshold)
    }

    /// Status derived from bay occupancy.
    pub fn status_from_bays(&self, is_open: bool, bays: &[Bay]) -> ShopStatus {
        let occupied = bays.iter().filter(|b| b.is_occupied()).count();
        self.status(
            is_open,
            u32::try_from(occupied).unwrap_or(u32::MAX),
            u32::try_from(bays.len()).unwrap_or(u32::MAX),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShopStatusKind {
    Open,
    Busy,
    Full,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BadgeColor {
    Green,
    Yellow,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShopStatus {
    pub status: ShopStatusKind,
    pub label: &'static str,
    pub color: BadgeColor,
}

impl ShopStatus {
    fn of(status: ShopStatusKind) -> Self {
        let (label, color) = match status {
            ShopStatusKind::Open => ("Open", BadgeColor::Green),
            ShopStatusKind::Busy => ("Busy", BadgeColor::Yellow),
            ShopStatusKind::Full => ("Full", BadgeColor::Red),
            ShopStatusKind::Closed => ("Closed", BadgeColor::Red),
        };
        Self {
            status,
            label,
            color,
        }
    }
}

/// Closed, or open/busy/full by bay utilization with the default busy threshold.
pub fn shop_status(is_open: bool, current: u32, capacity: u32) -> ShopStatus {
    shop_status_with_threshold(is_open, current, capacity, DEFAULT_BUSY_THRESHOLD)
}

/// An open shop with no capacity is reported full.
pub fn shop_status_with_threshold(
    is_open: bool,
    current: u32,
    capacity: u32,
    busy_threshold: f64,
) -> ShopStatus {
    if !is_open {
        return ShopStatus::of(ShopStatusKind::Closed);
    }
    if capacity == 0 {
        return ShopStatus::of(ShopStatusKind::Full);
    }

    let utilization = f64::from(current) / f64::from(capacity);
    if utilization >= 1.0 {
        ShopStatus::of(ShopStatusKind::Full)
    } else if utilization >= busy_threshold {
        ShopStatus::of(ShopStatusKind::Busy)
    } else {
        ShopStatus::of(ShopStatusKind::Open)
    }
}
