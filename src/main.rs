mod cli;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use resale_pricer::{
    domain::{
        compare_rounding, price_range_report, BulkSummary, CompetitionLevel, PricingCalculator,
        PricingConfig, ProductCategory, DEFAULT_REPORT_PRICES,
    },
    infra::bulk_input::{read_products, validate_supplier_price},
    util::{
        format::{breakdown_lines, money, money_exact, percent, result_line},
        logging::init_tracing,
        persistence::{
            default_profile_path, load_default_profile, load_profile, save_default_profile,
            save_profile,
        },
    },
};

use crate::cli::{Cli, Commands, ProfileCommands, QuoteArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Quote(args) => run_quote(&load_calculator(profile)?, &args),
        Commands::Bulk { input, json } => run_bulk(&load_calculator(profile)?, &input, json),
        Commands::Report { prices } => run_report(&load_calculator(profile)?, &prices),
        Commands::Profile { action } => run_profile(action, profile),
    }
}

fn load_calculator(path: Option<&Path>) -> Result<PricingCalculator> {
    PricingCalculator::new(effective_config(path)?).context("pricing profile rejected")
}

fn effective_config(path: Option<&Path>) -> Result<PricingConfig> {
    match path {
        Some(path) => load_profile(path)
            .with_context(|| format!("failed to load profile {}", path.display())),
        None => Ok(load_default_profile()
            .context("failed to load the default profile")?
            .unwrap_or_default()),
    }
}

fn run_quote(calculator: &PricingCalculator, args: &QuoteArgs) -> Result<()> {
    let supplier_price = validate_supplier_price(args.supplier_price)?;
    warn_unknown_keys(calculator, &args.category, &args.competition);

    let result = calculator.calculate_price(
        supplier_price,
        &args.category,
        &args.competition,
        args.unique,
        !args.no_rounding,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Supplier price:   {}", money(result.supplier_price));
    println!("Base markup:      {}", percent(result.base_markup_percent));
    println!("Adjusted markup:  {}", percent(result.adjusted_markup_percent));
    println!("Selling price:    {}", money_exact(result.selling_price));
    println!("Additional costs:");
    for line in breakdown_lines(&result.cost_breakdown) {
        println!("  {line}");
    }
    println!("  Total: {}", money_exact(result.total_additional_costs));

    if !args.no_rounding {
        let comparison = compare_rounding(
            calculator,
            supplier_price,
            &args.category,
            &args.competition,
            args.unique,
        );
        println!(
            "Before rounding:  {} ({:+.2})",
            money_exact(comparison.without_rounding),
            comparison.difference()
        );
    }
    println!("Final price:      {}", money(result.final_price));
    println!("Profit:           {}", money_exact(result.profit));
    println!("Profit margin:    {}", percent(result.profit_margin));
    Ok(())
}

fn run_bulk(calculator: &PricingCalculator, input: &Path, json: bool) -> Result<()> {
    let products = read_products(input)?;
    for product in &products {
        warn_unknown_keys(calculator, &product.category, &product.competition);
    }

    let results = calculator.bulk_calculate(&products);
    let summary = BulkSummary::from_results(&results);
    info!(products = summary.products, "bulk pricing finished");

    if json {
        let payload = serde_json::json!({ "results": results, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for (index, result) in results.iter().enumerate() {
        println!("Product {}: {}", index + 1, result_line(result));
    }
    println!(
        "Processed {} products: revenue {}, profit {}, average margin {}",
        summary.products,
        money(summary.total_revenue),
        money(summary.total_profit),
        percent(summary.average_margin)
    );
    Ok(())
}

fn run_report(calculator: &PricingCalculator, prices: &[f64]) -> Result<()> {
    let prices = if prices.is_empty() {
        DEFAULT_REPORT_PRICES.to_vec()
    } else {
        prices
            .iter()
            .map(|&price| validate_supplier_price(price))
            .collect::<Result<Vec<_>, _>>()?
    };

    println!("Supplier Price | Base Markup | Final Price | Profit Margin");
    println!("{}", "-".repeat(55));
    for row in price_range_report(calculator, &prices) {
        println!(
            "{:>14} | {:>11} | {:>11} | {:>13}",
            money(row.supplier_price),
            percent(row.base_markup_percent),
            money(row.final_price),
            percent(row.profit_margin)
        );
    }
    Ok(())
}

fn run_profile(action: ProfileCommands, path: Option<&Path>) -> Result<()> {
    match action {
        ProfileCommands::Path => match path.map(ToOwned::to_owned).or_else(default_profile_path) {
            Some(path) => println!("{}", path.display()),
            None => bail!("no configuration directory available on this platform"),
        },
        ProfileCommands::Show => {
            let config = effective_config(path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ProfileCommands::Init { force } => {
            let target = path.map(ToOwned::to_owned).or_else(default_profile_path);
            if let Some(existing) = target.as_ref().filter(|p| p.exists()) {
                if !force {
                    bail!(
                        "profile {} already exists, pass --force to overwrite",
                        existing.display()
                    );
                }
            }
            let config = PricingConfig::default();
            let written = match path {
                Some(path) => {
                    save_profile(path, &config)?;
                    path.to_owned()
                }
                None => save_default_profile(&config)?,
            };
            println!("Wrote default profile to {}", written.display());
        }
    }
    Ok(())
}

/// Unknown keys are priced as neutral; tell the user rather than fail.
fn warn_unknown_keys(calculator: &PricingCalculator, category: &str, competition: &str) {
    let config = calculator.config();
    if !config.categories.contains(category) {
        let fallback = ProductCategory::Generic.label();
        warn!(category, "unknown category, priced like {fallback}");
    }
    if !config.competition.contains(competition) {
        let fallback = CompetitionLevel::Medium.label();
        warn!(competition, "unknown competition level, priced like {fallback}");
    }
}
