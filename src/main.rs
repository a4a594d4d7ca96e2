mod cli;
mod config;
mod engine;
mod error;
mod report;
mod scenarios;
mod types;

use chrono::Utc;
use clap::Parser;

use crate::error::GirlMathError;
use crate::types::input::PurchaseInput;
use crate::types::metrics::Verdict;
use crate::types::report::VerdictReport;
use crate::types::tables::RuleTables;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const QUESTIONABLE: i32 = 1;
    pub const DENIED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, GirlMathError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let root = std::env::current_dir()?;
    let loaded = config::load_config(&root)?;
    let tables = RuleTables::from_config(loaded.as_ref());

    match cli.command {
        cli::Commands::Score(cmd) => {
            let input = resolve_input(&cmd.purchase)?;
            let metrics = engine::calculate_metrics(&input, &tables);
            let scenarios = if cmd.what_if {
                scenarios::what_if(&input, &tables)
            } else {
                Vec::new()
            };
            let report = VerdictReport {
                evaluated_at: Some(Utc::now()),
                justification: engine::justify::justification(metrics.verdict, metrics.category)
                    .to_string(),
                scenarios,
                metrics,
            };

            let rendered = report::render(&report, output_format(&cmd.format))?;
            println!("{rendered}");

            Ok(match report.metrics.verdict {
                Verdict::Approved | Verdict::Justified => exit_code::SUCCESS,
                Verdict::Questionable => exit_code::QUESTIONABLE,
                Verdict::Denied => exit_code::DENIED,
            })
        }
        cli::Commands::Whatif(cmd) => {
            let input = resolve_input(&cmd.purchase)?;
            let scenarios = scenarios::what_if(&input, &tables);

            if scenarios.is_empty() {
                println!("whatif: no scenarios");
                return Ok(exit_code::SUCCESS);
            }

            match cmd.format {
                cli::ReportFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&scenarios)?);
                }
                _ => {
                    println!("scenarios:");
                    for scenario in &scenarios {
                        println!(
                            "- {} {}/100 {}",
                            scenario.description, scenario.score, scenario.stamp
                        );
                    }
                }
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Tables(cmd) => {
            let rendered = report::render_tables(&tables, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn resolve_input(args: &cli::PurchaseArgs) -> Result<PurchaseInput, GirlMathError> {
    let base = match &args.input {
        Some(path) => {
            if !path.exists() {
                return Err(GirlMathError::InputNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        None => PurchaseInput::default(),
    };
    Ok(args.overlay(base))
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Text => report::OutputFormat::Text,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
