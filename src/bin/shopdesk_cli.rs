use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use shopdesk::{
    config::{self, AppConfig},
    errors::{ErrorResponse, ServiceError},
    formatting::{format_currency_with_symbol, format_date, format_date_time},
    models::{CoverageTerm, DurationUnit, SubscriptionPlan},
    services::{
        invoices::generate_invoice_number,
        pricing::{calculate_labor_cost, WorkOrderTotals},
        shop::ShopStatus,
        warranties::warranty_status_at,
    },
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let json = cli.json;
    match run(cli) {
        Ok(()) => Ok(()),
        Err(err) if json => match error_report(&err) {
            Some(report) => {
                print_json(&report)?;
                std::process::exit(1);
            }
            None => Err(err),
        },
        Err(err) => Err(err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_config().context("failed to load configuration")?;
    config::init_tracing(cfg.log_level(), cfg.log_json);
    cfg.log_summary();

    match cli.command {
        Commands::Warranty(args) => handle_warranty(&cfg, args, cli.json)?,
        Commands::Price(args) => handle_price(&cfg, args, cli.json)?,
        Commands::Plans(args) => handle_plans(&cfg, args, cli.json)?,
        Commands::Labor(args) => handle_labor(&cfg, args, cli.json)?,
        Commands::Format(command) => handle_format(&cfg, command)?,
        Commands::ShopStatus(args) => handle_shop_status(&cfg, args, cli.json)?,
        Commands::InvoiceNumber => handle_invoice_number(cli.json)?,
    }

    Ok(())
}

/// Structured body for errors raised by the library; `None` for anything else.
fn error_report(err: &anyhow::Error) -> Option<ErrorResponse> {
    let service_error = err.downcast_ref::<ServiceError>()?;
    debug!(code = service_error.error_code(), "command failed");
    Some(service_error.to_response())
}

#[derive(Parser)]
#[command(
    name = "shopdesk",
    about = "Warranty, pricing and formatting tools for auto repair shops",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON when available"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify warranty coverage for a service date
    Warranty(WarrantyArgs),
    /// Monthly subscription price for a bay count
    Price(PriceArgs),
    /// List subscription plans priced for a bay count
    Plans(PlansArgs),
    /// Labor cost and invoice totals
    Labor(LaborArgs),
    /// Format amounts and timestamps for display
    #[command(subcommand)]
    Format(FormatCommands),
    /// Shop availability from bay occupancy
    ShopStatus(ShopStatusArgs),
    /// Generate a new invoice number
    InvoiceNumber,
}

#[derive(Args)]
struct WarrantyArgs {
    #[arg(long, help = "Service date (YYYY-MM-DD or RFC 3339)")]
    service_date: String,
    #[arg(long, help = "Coverage length in whole units", allow_negative_numbers = true)]
    duration: i64,
    #[arg(long, default_value = "months", help = "days, months or years")]
    unit: DurationUnit,
    #[arg(long, help = "Evaluate as of this instant instead of now")]
    as_of: Option<String>,
}

#[derive(Args)]
struct PriceArgs {
    #[arg(long, help = "Number of service bays")]
    bays: u32,
    #[arg(long, help = "starter, professional or enterprise")]
    plan: Option<SubscriptionPlan>,
}

#[derive(Args)]
struct PlansArgs {
    #[arg(long, default_value_t = 1, help = "Number of service bays")]
    bays: u32,
}

#[derive(Args)]
struct LaborArgs {
    #[arg(long, help = "Billable labor hours")]
    hours: Decimal,
    #[arg(long, help = "Hourly rate; defaults to the configured shop rate")]
    rate: Option<Decimal>,
    #[arg(long, default_value = "0", help = "Parts total to include")]
    parts: Decimal,
}

#[derive(Subcommand)]
enum FormatCommands {
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
    Date {
        value: String,
    },
    DateTime {
        value: String,
    },
}

#[derive(Args)]
struct ShopStatusArgs {
    #[arg(long, action = ArgAction::SetTrue, help = "Shop is open for business")]
    open: bool,
    #[arg(long, help = "Bays currently occupied")]
    occupied: u32,
    #[arg(long, help = "Total bays")]
    capacity: u32,
}

#[derive(Serialize)]
struct WarrantyReport {
    service_date: DateTime<Utc>,
    coverage: String,
    expiration: DateTime<Utc>,
    status: String,
    days_remaining: i64,
}

fn handle_warranty(cfg: &AppConfig, args: WarrantyArgs, json: bool) -> Result<()> {
    let service_date = parse_instant(&args.service_date)?;
    let now = match args.as_of.as_deref() {
        Some(raw) => parse_instant(raw)?,
        None => Utc::now(),
    };
    let term = CoverageTerm::new(args.duration, args.unit)?;
    let status = warranty_status_at(service_date, term, now, cfg.warranty_policy())?;

    let report = WarrantyReport {
        service_date,
        coverage: term.to_string(),
        expiration: status.expiration,
        status: status.status.to_string(),
        days_remaining: status.days_remaining,
    };

    if json {
        print_json(&report)?;
    } else {
        println!("Coverage:   {}", report.coverage);
        println!("Expires:    {}", format_date(&report.expiration));
        println!("Status:     {}", status.status.label());
        println!("Days left:  {}", report.days_remaining);
    }
    Ok(())
}

fn handle_price(cfg: &AppConfig, args: PriceArgs, json: bool) -> Result<()> {
    let policy = cfg.pricing_policy();
    let price = match args.plan {
        Some(plan) => policy.quote(plan, args.bays)?,
        None => policy.calculate_monthly_price(args.bays),
    };
    let symbol = &cfg.shop.currency_symbol;

    if json {
        print_json(&serde_json::json!({ "bays": args.bays, "monthly_price": price }))?;
    } else {
        println!(
            "{}/month for {} bay{} ({} base + {} per additional bay)",
            format_currency_with_symbol(price, symbol),
            args.bays,
            if args.bays == 1 { "" } else { "s" },
            format_currency_with_symbol(policy.base_price, symbol),
            format_currency_with_symbol(policy.per_bay_price, symbol),
        );
    }
    Ok(())
}

fn handle_plans(cfg: &AppConfig, args: PlansArgs, json: bool) -> Result<()> {
    let catalog = cfg.pricing_policy().catalog(args.bays);
    if json {
        return print_json(&catalog);
    }
    for quote in catalog {
        let price = quote
            .monthly_price
            .map(|p| format_currency_with_symbol(p, &cfg.shop.currency_symbol))
            .unwrap_or_else(|| "Custom".to_string());
        println!("{:<14} {:>10}  {}", quote.name, price, quote.period);
        println!("{:<14} {}", "", quote.description);
    }
    Ok(())
}

fn handle_labor(cfg: &AppConfig, args: LaborArgs, json: bool) -> Result<()> {
    let settings = cfg.shop_settings();
    let rate = args.rate.unwrap_or(settings.labor_rate);
    let labor = calculate_labor_cost(args.hours, rate)?;
    let totals = WorkOrderTotals::from_amounts(labor, args.parts, settings.tax_rate)?;

    if json {
        return print_json(&totals);
    }
    println!("Labor:    {}", settings.format_amount(totals.labor));
    println!("Parts:    {}", settings.format_amount(totals.parts));
    println!("Tax:      {}", settings.format_amount(totals.tax));
    println!("Total:    {}", settings.format_amount(totals.total));
    Ok(())
}

fn handle_format(cfg: &AppConfig, command: FormatCommands) -> Result<()> {
    let rendered = match command {
        FormatCommands::Currency { amount } => {
            format_currency_with_symbol(amount, &cfg.shop.currency_symbol)
        }
        FormatCommands::Date { value } => format_date(&parse_instant(&value)?),
        FormatCommands::DateTime { value } => format_date_time(&parse_instant(&value)?),
    };
    println!("{}", rendered);
    Ok(())
}

fn handle_shop_status(cfg: &AppConfig, args: ShopStatusArgs, json: bool) -> Result<()> {
    let status: ShopStatus = cfg
        .shop_settings()
        .status(args.open, args.occupied, args.capacity);
    if json {
        return print_json(&status);
    }
    println!("{} ({})", status.label, status.color);
    Ok(())
}

fn handle_invoice_number(json: bool) -> Result<()> {
    let number = generate_invoice_number();
    if json {
        return print_json(&serde_json::json!({ "invoice_number": number }));
    }
    println!("{}", number);
    Ok(())
}

/// Accepts `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp.
fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}'", raw))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("invalid date '{}'", raw))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
