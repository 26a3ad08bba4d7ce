//! CLI entry point for the shipping dashboard generator.
//!
//! With no arguments it reads `files/input/shipping-data.csv` and writes four
//! chart images plus `index.html` into `docs/`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use shipping_dashboard::aggregates::aggregate::DEFAULT_HISTOGRAM_BINS;
use shipping_dashboard::config::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use shipping_dashboard::{DashboardConfig, run};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "shipping_dashboard")]
#[command(about = "Build a static HTML dashboard of shipment charts", long_about = None)]
struct Cli {
    /// CSV file with shipment records
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory for the chart images and index.html
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// TrueType font used for chart text
    #[arg(long)]
    font: Option<PathBuf>,

    /// Number of equal-width bins in the weight histogram
    #[arg(short, long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    bins: usize,

    /// Log the aggregated chart data as JSON
    #[arg(long, default_value_t = false)]
    summary_json: bool,
}

impl From<Cli> for DashboardConfig {
    fn from(cli: Cli) -> Self {
        DashboardConfig {
            input: cli.input,
            output_dir: cli.output_dir,
            font_path: cli.font,
            histogram_bins: cli.bins,
            summary_json: cli.summary_json,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/shipping_dashboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("shipping_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let config = DashboardConfig::from(Cli::parse());
    let report = run(&config).with_context(|| {
        format!(
            "dashboard generation failed for {}",
            config.input.display()
        )
    })?;

    if let Some((block, share)) = report.summary.top_warehouse() {
        info!(block, share_pct = share, "Busiest warehouse block");
    }
    info!(
        rows = report.summary.row_count,
        charts = report.artifacts.len(),
        "Dashboard complete"
    );

    println!("Dashboard HTML generated at {}", report.page.display());
    Ok(())
}
