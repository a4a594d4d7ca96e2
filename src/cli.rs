use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::types::input::{Category, IncomeBracket, Mode, PurchaseInput};

#[derive(Parser)]
#[command(
    name = "girlmath",
    version,
    about = "Transparent rule-based purchase justification CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a purchase and render the verdict
    Score(ScoreCommand),
    /// Show what-if scenarios for a purchase
    Whatif(WhatifCommand),
    /// Print the active rule tables
    Tables(TablesCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Text,
}

#[derive(Args)]
pub struct PurchaseArgs {
    /// Purchase price in dollars
    #[arg(long, required_unless_present = "input")]
    pub price: Option<f64>,

    #[arg(long, value_enum)]
    pub category: Option<Category>,

    /// Tone selector; never affects the score
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Expected number of uses
    #[arg(long)]
    pub uses: Option<f64>,

    /// Pre-discount price
    #[arg(long)]
    pub original_price: Option<f64>,

    /// Explicit discount percentage; wins over --original-price
    #[arg(long)]
    pub discount_percent: Option<f64>,

    #[arg(long, value_enum)]
    pub income: Option<IncomeBracket>,

    /// Percent of monthly income allocated to vibe spending
    #[arg(long, value_parser = clap::value_parser!(u32).range(5..=25))]
    pub budget_percent: Option<u32>,

    /// Skip the budget-impact baseline entirely
    #[arg(long)]
    pub skip_vibe: bool,

    /// Read the purchase from a JSON file; flags override its fields
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl PurchaseArgs {
    /// Overlay the flags that were actually given onto `base` (usually the
    /// contents of --input, or an empty purchase).
    pub fn overlay(&self, mut base: PurchaseInput) -> PurchaseInput {
        if self.price.is_some() {
            base.price = self.price;
        }
        if self.category.is_some() {
            base.category = self.category;
        }
        if self.mode.is_some() {
            base.mode = self.mode;
        }
        if self.uses.is_some() {
            base.uses = self.uses;
        }
        if self.original_price.is_some() {
            base.original_price = self.original_price;
        }
        if self.discount_percent.is_some() {
            base.discount_percent = self.discount_percent;
        }
        if self.income.is_some() {
            base.income = self.income;
        }
        if self.budget_percent.is_some() {
            base.budget_percent = self.budget_percent;
        }
        if self.skip_vibe {
            base.skip_vibe = true;
        }
        base
    }
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub purchase: PurchaseArgs,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Include what-if scenarios in the report
    #[arg(long)]
    pub what_if: bool,
}

#[derive(Args)]
pub struct WhatifCommand {
    #[command(flatten)]
    pub purchase: PurchaseArgs,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct TablesCommand {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}
