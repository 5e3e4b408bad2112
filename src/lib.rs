//! ShopDesk core library
//!
//! Domain records and calculators for auto repair shop management: warranty
//! coverage, subscription pricing, work-order totals, display formatting and
//! list search.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod errors;
pub mod formatting;
pub mod models;
pub mod services;

pub use errors::{ServiceError, ServiceResult};
pub use formatting::{format_currency, format_date, format_date_time};
pub use services::pricing::{calculate_labor_cost, calculate_monthly_price, PricingPolicy};
pub use services::search::{search, RecordFilter, Searchable, StatusFilter};
pub use services::warranties::{
    calculate_expiration, warranty_status, warranty_status_at, WarrantyPolicy, WarrantyStatus,
};
