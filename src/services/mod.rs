// Calculators
pub mod pricing;
pub mod shop;
pub mod warranties;

// List pages and summaries
pub mod reports;
pub mod search;

// Billing
pub mod invoices;
