//! @ai:module:intent CLI for comparing two benchmark result sets
//! @ai:module:layer presentation

use clap::{Parser, ValueEnum};
use commbench::{
    analyze,
    config::AnalyzerConfig,
    input::load_results,
    report::{ReportGenerator, TableReporter},
    subject::Subject,
    verdict::WeightPolicy,
    Error,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "commbench")]
#[command(about = "Compare benchmark results of two communication stacks and pick a winner")]
#[command(version)]
struct Cli {
    /// Path to the benchmark results JSON file
    results: PathBuf,

    /// Path to configuration file (defaults to ./commbench.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for chart images
    #[arg(long)]
    charts_dir: Option<PathBuf>,

    /// Path of the CSV export
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also write the full comparison report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip chart generation
    #[arg(long)]
    no_charts: bool,

    /// Which metrics contribute to the overall score
    #[arg(long, value_enum)]
    policy: Option<Policy>,

    /// Subject id used as baseline (A); also used as its label
    #[arg(long)]
    subject_a: Option<String>,

    /// Subject id compared against the baseline (B); also used as its label
    #[arg(long)]
    subject_b: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    ExplicitOnly,
    DefaultOne,
}

impl From<Policy> for WeightPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::ExplicitOnly => WeightPolicy::ExplicitOnly,
            Policy::DefaultOne => WeightPolicy::DefaultOne,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("commbench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);

            match e.downcast_ref::<Error>() {
                Some(Error::InputNotFound(_)) => ExitCode::from(1),
                _ => ExitCode::from(2),
            }
        }
    }
}

/// @ai:intent Load, analyze, print and export
/// @ai:effects fs:read, fs:write, io
fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;

    // Fatal input errors surface here, before any comparison runs
    let records = load_results(&cli.results)?;

    let report = analyze(&records, &config.subjects, config.scoring.policy);

    let table = TableReporter::new();
    print!("{}", table.render(&report));

    let artifacts = ReportGenerator::new().generate_all(&report, &config.output)?;

    if let Some(reason) = &artifacts.chart_error {
        println!();
        println!("Warning: Could not generate charts: {}", reason);
    } else if !artifacts.charts.is_empty() {
        println!();
        println!("Charts saved to: {}/", config.output.charts_dir.display());
    }

    println!();
    println!("CSV exported to: {}", config.output.csv_file.display());

    if let Some(json_file) = &config.output.json_file {
        println!("JSON report written to: {}", json_file.display());
    }

    println!();
    println!("Analysis complete!");
    Ok(())
}

/// @ai:intent Merge the config file with command line overrides
/// @ai:effects fs:read
fn build_config(cli: &Cli) -> anyhow::Result<AnalyzerConfig> {
    let mut config = AnalyzerConfig::load_or_default(cli.config.as_deref())?;

    if let Some(dir) = &cli.charts_dir {
        config.output.charts_dir = dir.clone();
    }
    if let Some(csv) = &cli.csv {
        config.output.csv_file = csv.clone();
    }
    if cli.json.is_some() {
        config.output.json_file = cli.json.clone();
    }
    if cli.no_charts {
        config.output.charts = false;
    }
    if let Some(policy) = cli.policy {
        config.scoring.policy = policy.into();
    }
    if let Some(a) = &cli.subject_a {
        config.subjects.a = Subject::new(a.as_str());
    }
    if let Some(b) = &cli.subject_b {
        config.subjects.b = Subject::new(b.as_str());
    }

    Ok(config)
}
