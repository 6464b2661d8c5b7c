//! Pressure Report CLI
//!
//! Match metadata (JSON) + tracking feed (JSONL) → timestamped on-ball
//! pressure report (CSV)

mod config;
mod paths;

use anyhow::{Context, Result};
use clap::Parser;
use pressure_core::{
    process_stream, process_stream_parallel, MatchContext, MatchMetadata, PressureConfig,
    PressureSession, ReportWriter, TrackingReader,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use config::ReportDefaults;
use paths::{existing_file, select_input, select_output, Selection, JSONL_EXT, JSON_EXT};

#[derive(Parser)]
#[command(name = "pressure_report")]
#[command(about = "Find on-ball pressure events in match tracking data", long_about = None)]
struct Cli {
    /// Metadata file name, including the .json extension
    #[arg(long)]
    metadata: Option<String>,

    /// Tracking file name, including the .jsonl extension
    #[arg(long)]
    tracking: Option<String>,

    /// Report name, WITHOUT the .csv extension
    #[arg(long)]
    out: Option<String>,

    /// Evaluate frames in parallel batches of this size
    #[arg(long)]
    batch_size: Option<usize>,

    /// Write a JSON run summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

/// Run summary
#[derive(Debug, Clone, Serialize)]
struct ReportSummary {
    metadata_file: String,
    tracking_file: String,
    output_file: String,
    home_team: String,
    away_team: String,
    match_date: Option<String>,
    total_frames: u64,
    live_frames: u64,
    entries: usize,
    /// Tracking units (yards)
    radius: f64,
    duration_secs: f64,
    created_at: String,
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let defaults = ReportDefaults::from_env_or_default();
    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    let metadata_file = select_input(cli.metadata.as_deref(), JSON_EXT, &defaults.metadata_file);
    announce_fallback(cli.metadata.as_deref(), &metadata_file);
    let metadata_path = existing_file(&cwd, &metadata_file.name)?;

    let tracking_file = select_input(cli.tracking.as_deref(), JSONL_EXT, &defaults.tracking_file);
    announce_fallback(cli.tracking.as_deref(), &tracking_file);
    let tracking_path = existing_file(&cwd, &tracking_file.name)?;

    println!("\nThe metadata file to be used:\t{}", metadata_file.name);
    println!("The tracking file to be used:\t{}\n", tracking_file.name);

    let output_file = select_output(cli.out.as_deref(), &defaults.output_file);
    announce_fallback(cli.out.as_deref(), &output_file);
    let output_path = cwd.join(&output_file.name);

    let metadata = MatchMetadata::load(&metadata_path)
        .with_context(|| format!("Failed to load metadata: {}", metadata_path.display()))?;
    let ctx = MatchContext::from_metadata(&metadata, &PressureConfig::default())
        .context("Failed to build match context")?;

    let mut report = ReportWriter::create(&output_path)
        .with_context(|| format!("Failed to create report: {}", output_path.display()))?;

    let start = Instant::now();
    let session = run(&ctx, &tracking_path, cli.batch_size)?;
    let duration = start.elapsed();

    print_frame_summary(&session);

    report
        .write_rows(&session.rows)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
    let entries = report.finish()?;

    let summary = ReportSummary {
        metadata_file: metadata_file.name,
        tracking_file: tracking_file.name,
        output_file: output_file.name,
        home_team: ctx.home_team().to_string(),
        away_team: ctx.away_team().to_string(),
        match_date: ctx.match_date().map(str::to_string),
        total_frames: session.total_frames,
        live_frames: session.live_frames,
        entries,
        radius: ctx.radius(),
        duration_secs: duration.as_secs_f64(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    print_report_summary(&summary);

    if let Some(summary_path) = cli.summary {
        save_summary(&summary_path, &summary)?;
    }

    Ok(())
}

fn run(
    ctx: &MatchContext,
    tracking_path: &Path,
    batch_size: Option<usize>,
) -> Result<PressureSession> {
    let reader = TrackingReader::open(tracking_path)?;
    tracing::info!(batch_size = ?batch_size, "processing {}", tracking_path.display());

    let session = match batch_size {
        Some(size) => process_stream_parallel(ctx, reader, size),
        None => process_stream(ctx, reader),
    }
    .with_context(|| format!("Failed to process tracking file: {}", tracking_path.display()))?;

    Ok(session)
}

fn announce_fallback(given: Option<&str>, selection: &Selection) {
    if selection.fell_back {
        println!(
            "\tYour input of <{}> was either empty or of an invalid format.\n\tThe default file of <{}> will be used instead.",
            given.unwrap_or(""),
            selection.name
        );
    }
}

fn print_frame_summary(session: &PressureSession) {
    println!("\n====================");
    println!("|| REPORT SUMMARY ||");
    println!("====================");
    println!("The tool successfully searched through:");
    println!("\t1. Total Frames: \t\t{}", session.total_frames);
    println!("\t2. Live Frames: \t\t{}\n", session.live_frames);
}

fn print_report_summary(summary: &ReportSummary) {
    println!(
        "There is a total of {} discovered instances of when a defending player pressed an opponent and was within {} yards of the ball.",
        summary.entries, summary.radius
    );
    println!(
        "The final report was generated in {:.3} seconds and can be found in <{}>.",
        summary.duration_secs, summary.output_file
    );
}

fn save_summary(path: &Path, summary: &ReportSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary: {}", path.display()))?;
    println!("\n📄 Summary saved to: {}", path.display());
    Ok(())
}
