use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "resale_pricer", version, about = "Retail price recommendations for resold products")]
pub struct Cli {
    /// Pricing profile (JSON); defaults to the per-user profile if present
    #[arg(short, long, global = true)]
    pub profile: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price a single product
    Quote(QuoteArgs),

    /// Price every product in a JSON array (file path or `-` for stdin)
    Bulk {
        input: PathBuf,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show base markup, final price and margin across supplier prices
    Report {
        /// Supplier prices to sample
        #[arg(allow_negative_numbers = true)]
        prices: Vec<f64>,
    },

    /// Manage the pricing profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    #[arg(allow_negative_numbers = true)]
    pub supplier_price: f64,

    #[arg(short, long, default_value = "generic")]
    pub category: String,

    #[arg(short = 'k', long, default_value = "medium")]
    pub competition: String,

    /// Product has a unique value proposition (bundle, warranty, ...)
    #[arg(short, long)]
    pub unique: bool,

    /// Keep the exact price instead of a psychological ending
    #[arg(long)]
    pub no_rounding: bool,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProfileCommands {
    /// Write the built-in tables to the profile location
    Init {
        /// Overwrite an existing profile
        #[arg(long)]
        force: bool,
    },
    /// Print the effective profile
    Show,
    /// Print the default profile location
    Path,
}
