//! medscan - grayscale medical image enhancement CLI
//!
//! Applies deterministic intensity transforms (gamma correction,
//! piecewise-linear contrast stretching, histogram equalization) to
//! MRI/X-ray scans and writes histogram charts for inspection.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "medscan")]
#[command(author, version, about = "Grayscale medical image enhancement")]
#[command(long_about = "
Enhance grayscale medical images (MRI, X-ray) with deterministic
intensity transforms, writing the result plus before/after histogram
charts.

Examples:
  medscan gamma scan.png -o out/scan.png --gamma 0.5
  medscan stretch scan.png -o out/scan.png --r1 70 --r2 140
  medscan equalize scan.png -o out/scan.png
  medscan combine scan.png -o out/scan.png --stages stretch,gamma
  medscan combine scan.png -o out/scan.png --stages equalize,gamma
  medscan report scan.png --images-dir out --hist-dir out/hists
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply power-law gamma correction
    #[command(visible_alias = "g")]
    Gamma(GammaArgs),

    /// Apply piecewise-linear contrast stretching
    #[command(visible_alias = "s")]
    Stretch(StretchArgs),

    /// Apply histogram equalization
    #[command(visible_alias = "e")]
    Equalize(EqualizeArgs),

    /// Chain base transforms in a chosen order
    #[command(visible_alias = "c")]
    Combine(CombineArgs),

    /// Run every method and write all images and histograms
    Report(ReportArgs),
}

/// Output locations shared by the enhancement commands.
#[derive(Args)]
struct OutputArgs {
    /// Path for the enhanced image
    #[arg(short, long)]
    output: PathBuf,

    /// Directory for histogram charts
    #[arg(long, default_value = "images/histograms")]
    hist_dir: PathBuf,

    /// Cap the histogram y-axis at 2.5% of the max count
    #[arg(long)]
    detail_hist: bool,
}

/// Gamma correction parameters.
#[derive(Args)]
struct GammaParams {
    /// Gamma exponent applied to normalized intensity
    #[arg(long, default_value = "0.5")]
    gamma: f64,

    /// Gain multiplier applied after the power
    #[arg(long, default_value = "1.0")]
    gain: f64,
}

/// Contrast stretch breakpoint parameters.
#[derive(Args)]
struct StretchParams {
    /// Low input breakpoint (must be < r2)
    #[arg(long, default_value = "70")]
    r1: u8,

    /// Output value at r1
    #[arg(long, default_value = "0")]
    s1: u8,

    /// High input breakpoint
    #[arg(long, default_value = "140")]
    r2: u8,

    /// Output value at r2
    #[arg(long, default_value = "255")]
    s2: u8,
}

#[derive(Args)]
struct GammaArgs {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    #[command(flatten)]
    out: OutputArgs,

    #[command(flatten)]
    gamma: GammaParams,
}

#[derive(Args)]
struct StretchArgs {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    #[command(flatten)]
    out: OutputArgs,

    #[command(flatten)]
    stretch: StretchParams,
}

#[derive(Args)]
struct EqualizeArgs {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args)]
struct CombineArgs {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    #[command(flatten)]
    out: OutputArgs,

    /// Stages applied in order: gamma, stretch (alias contrast),
    /// equalize (alias hist-eq)
    #[arg(long, value_delimiter = ',', default_value = "stretch,gamma")]
    stages: Vec<String>,

    #[command(flatten)]
    gamma: GammaParams,

    #[command(flatten)]
    stretch: StretchParams,
}

#[derive(Args)]
struct ReportArgs {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    /// Directory for enhanced images
    #[arg(long, default_value = "images")]
    images_dir: PathBuf,

    /// Directory for histogram charts
    #[arg(long, default_value = "images/histograms")]
    hist_dir: PathBuf,

    /// Cap the histogram y-axis at 2.5% of the max count
    #[arg(long)]
    detail_hist: bool,

    #[command(flatten)]
    gamma: GammaParams,

    #[command(flatten)]
    stretch: StretchParams,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Gamma(args) => commands::gamma::run(args),
        Commands::Stretch(args) => commands::stretch::run(args),
        Commands::Equalize(args) => commands::equalize::run(args),
        Commands::Combine(args) => commands::combine::run(args),
        Commands::Report(args) => commands::report::run(args),
    }
}
