// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use shop_insights::{
    AnalyticsPipeline, CachedLoader, Config, DashboardReport, DatasetLoader, PerformanceCategory,
    ReportExporter,
    utils::logging::{format_error, format_success},
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "shop_insights")]
#[command(version = "0.1.0")]
#[command(about = "Aggregation pipeline for e-commerce dashboard metrics", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(flatten)]
    filters: FilterArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Filters shared by every analysis command; each overrides its
/// configuration-file counterpart.
#[derive(Args)]
struct FilterArgs {
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    start_date: Option<NaiveDate>,

    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    end_date: Option<NaiveDate>,

    #[arg(long, value_name = "NAME", global = true)]
    category: Option<String>,

    #[arg(long, value_name = "1-5", global = true)]
    min_score: Option<u8>,

    #[arg(long, value_name = "1-5", global = true)]
    max_score: Option<u8>,

    #[arg(long = "performance", value_name = "LOW|MEDIUM|HIGH|TOP", global = true)]
    performance: Vec<PerformanceCategory>,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline dataset counters (orders, items, sellers, payment total)
    Summary,

    /// Seller performance ranking with quartile categories
    Sellers {
        #[arg(long, value_name = "NUM", default_value_t = 20)]
        limit: usize,
    },

    /// Monthly order counts
    Trend,

    /// Per-order satisfaction vs total payment
    Satisfaction {
        #[arg(long, value_name = "NUM", default_value_t = 20)]
        limit: usize,
    },

    /// Top product categories per month
    Categories {
        #[arg(short, value_name = "NUM")]
        k: Option<usize>,
    },

    /// Run every aggregation and export the report as JSON
    Report {
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// Check that every configured source file exists with the required columns
    Verify,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    shop_insights::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Shop Insights aggregation pipeline");
    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    apply_filter_overrides(&mut config, &cli.filters);

    match cli.command {
        Commands::Summary => cmd_summary(&config)?,
        Commands::Sellers { limit } => cmd_sellers(&config, limit)?,
        Commands::Trend => cmd_trend(&config)?,
        Commands::Satisfaction { limit } => cmd_satisfaction(&config, limit)?,
        Commands::Categories { k } => {
            if let Some(k) = k {
                config.report.top_k = k;
            }
            cmd_categories(&config)?;
        }
        Commands::Report { output, pretty } => cmd_report(&config, output, pretty)?,
        Commands::Verify => cmd_verify(&config)?,
    }

    Ok(())
}

fn apply_filter_overrides(config: &mut Config, args: &FilterArgs) {
    if args.start_date.is_some() {
        config.filters.start_date = args.start_date;
    }
    if args.end_date.is_some() {
        config.filters.end_date = args.end_date;
    }
    if args.category.is_some() {
        config.filters.category = args.category.clone();
    }
    if args.min_score.is_some() {
        config.filters.min_score = args.min_score;
    }
    if args.max_score.is_some() {
        config.filters.max_score = args.max_score;
    }
    if !args.performance.is_empty() {
        config.filters.performance_categories = args.performance.clone();
    }
}

fn build_report(config: &Config) -> Result<DashboardReport> {
    let mut loader = CachedLoader::new(DatasetLoader::new(config.dataset.clone()));
    let dataset = loader.load().context("Failed to load dataset")?;

    let pipeline = AnalyticsPipeline::new(config.clone());
    let report = pipeline.build_report(&dataset).context("Failed to build report")?;
    Ok(report)
}

fn cmd_summary(config: &Config) -> Result<()> {
    let report = build_report(config)?;
    let summary = &report.summary;

    println!("Total orders:        {}", summary.total_orders);
    println!("Total items sold:    {}", summary.total_items_sold);
    println!("Total sellers:       {}", summary.total_sellers);
    println!("Total payment value: ${:.2}", summary.total_payment_value);

    Ok(())
}

fn cmd_sellers(config: &Config, limit: usize) -> Result<()> {
    let report = build_report(config)?;

    if report.seller_performance.is_empty() {
        println!("No sellers matched the current filters");
        return Ok(());
    }

    println!("{:<36} {:>12}  {:<10} {}", "seller_id", "total_orders", "category", "city");
    for row in report.seller_performance.iter().take(limit) {
        println!(
            "{:<36} {:>12}  {:<10} {}",
            row.seller_id,
            row.total_orders,
            row.performance_category,
            row.seller_city.as_deref().unwrap_or("-")
        );
    }

    if report.seller_performance.len() > limit {
        println!("... {} more sellers", report.seller_performance.len() - limit);
    }

    Ok(())
}

fn cmd_trend(config: &Config) -> Result<()> {
    let report = build_report(config)?;

    if report.monthly_trend.is_empty() {
        println!("No orders in the selected date range");
        return Ok(());
    }

    for entry in &report.monthly_trend {
        println!("{}  {:>8}", entry.month, entry.count);
    }

    let total: u64 = report.monthly_trend.iter().map(|m| m.count).sum();
    println!("total    {total:>8}");

    Ok(())
}

fn cmd_satisfaction(config: &Config, limit: usize) -> Result<()> {
    let report = build_report(config)?;

    println!("{:<36} {:>10} {:>14}", "order_id", "avg_score", "total_payment");
    for row in report.satisfaction.iter().take(limit) {
        let payment = match row.total_payment {
            Some(value) => format!("{value:.2}"),
            None => "-".to_string(),
        };
        println!("{:<36} {:>10.2} {:>14}", row.order_id, row.avg_review_score, payment);
    }

    if report.satisfaction.len() > limit {
        println!("... {} more orders", report.satisfaction.len() - limit);
    }

    Ok(())
}

fn cmd_categories(config: &Config) -> Result<()> {
    let report = build_report(config)?;

    let Some(top_categories) = &report.top_categories else {
        println!("No products table configured; category breakdown unavailable");
        return Ok(());
    };

    for (month, ranked) in top_categories {
        println!("{month}");
        for entry in ranked {
            println!("  {:<40} {:>8}", entry.category, entry.count);
        }
    }

    Ok(())
}

fn cmd_report(config: &Config, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    let report = build_report(config)?;

    let output_dir = output.unwrap_or_else(|| config.report.output_dir.clone());
    let pretty = pretty || config.report.pretty_json;

    let exporter = ReportExporter::new(output_dir).context("Failed to prepare output directory")?;
    let manifest = exporter.export(&report, pretty).context("Failed to export report")?;

    info!("Report exported: {} files", manifest.files.len());
    Ok(())
}

fn cmd_verify(config: &Config) -> Result<()> {
    let loader = DatasetLoader::new(config.dataset.clone());
    let checks = loader.verify();

    let mut failures = 0;
    for check in &checks {
        match &check.error {
            None => println!("{}", format_success(&format!("{} ({})", check.table, check.path.display()))),
            Some(err) => {
                failures += 1;
                println!("{}", format_error(&format!("{}: {}", check.table, err)));
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} tables failed verification", checks.len());
    }

    println!("{}", format_success("All tables verified"));
    Ok(())
}
