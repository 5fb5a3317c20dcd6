//! beam - Projection screen and photometry calculator
//!
//! Computes screen geometry, brightness/contrast under ambient light,
//! viewing-distance recommendations and inverse improvement suggestions.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "beam")]
#[command(author, version, about = "Projection screen and photometry calculator")]
#[command(long_about = "
Computes derived quantities for a projection installation: screen
geometry from a diagonal and aspect ratio, brightness and contrast from
projector/screen/ambient-light parameters, and recommended viewing
distances from published display-sizing standards.

Examples:
  beam report -d 135 -r 21:9 -l 3000 -a 110 --alr-ambient 0.7
  beam report --screen \"ALR Gray\" --projector \"Generic Lamp\" -t 30
  beam contrast -d 135 -r 16:9 -l 3000 -a 110 --alr 30
  beam viewing -d 135 -r 21:9 --area-factor 0.6 --letterbox 16:9
  beam screen-size --distance 20 -r 16:9 --detail general
  beam suggest -t 30 -l 3000 -a 110 --alr-ambient 0.7 --area 4.26
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (inputs not given as flags fall back to it)
    #[arg(short, long, global = true, default_value = "beam-settings.yaml")]
    settings: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Full installation report: geometry, light, distances, suggestions
    #[command(visible_alias = "r")]
    Report(ReportArgs),

    /// Nit-level black/white levels and maximum contrast
    #[command(visible_alias = "c")]
    Contrast(ContrastArgs),

    /// Viewing-distance recommendations only
    #[command(visible_alias = "v")]
    Viewing(ViewingArgs),

    /// Minimum worthwhile screen for a seating distance
    #[command(name = "screen-size", visible_alias = "ss")]
    ScreenSize(ScreenSizeArgs),

    /// Improvement levers for a target contrast ratio
    Suggest(SuggestArgs),
}

#[derive(Args)]
struct ReportArgs {
    /// Screen diagonal, inches
    #[arg(short, long)]
    diagonal: Option<f64>,

    /// Aspect ratio, e.g. 16:9 or 21:9
    #[arg(short, long)]
    ratio: Option<String>,

    /// Rated projector output, lumens
    #[arg(short, long)]
    lumens: Option<f64>,

    /// Screen gain
    #[arg(short, long)]
    gain: Option<f64>,

    /// Ambient light on the screen, lux
    #[arg(short, long)]
    ambient: Option<f64>,

    /// Fraction of ambient light passing the ALR screen (0-1)
    #[arg(long)]
    alr_ambient: Option<f64>,

    /// Fraction of projector light usefully retained (0-1)
    #[arg(long, default_value = "1.0")]
    alr_projector: f64,

    /// Screen half-gain angle, degrees
    #[arg(long)]
    half_gain_angle: Option<f64>,

    /// Content area fraction for a picture-in-picture region (0-1)
    #[arg(long)]
    area_factor: Option<f64>,

    /// Screen profile name from the database
    #[arg(long)]
    screen: Option<String>,

    /// Projector profile name from the database
    #[arg(long)]
    projector: Option<String>,

    /// Profile database file (builtin profiles if omitted)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Target contrast ratio for improvement suggestions
    #[arg(short, long)]
    target: Option<f64>,

    /// Save the resolved inputs back to the settings file
    #[arg(long)]
    save: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ContrastArgs {
    /// Screen diagonal, inches
    #[arg(short, long)]
    diagonal: Option<f64>,

    /// Aspect ratio, e.g. 16:9
    #[arg(short, long)]
    ratio: Option<String>,

    /// Rated projector output, lumens
    #[arg(short, long)]
    lumens: Option<f64>,

    /// Lumen reduction, percent 0-100 (eco mode, filter, aging)
    #[arg(long)]
    reduction: Option<f64>,

    /// Ambient light on the screen, lux
    #[arg(short, long)]
    ambient: Option<f64>,

    /// Ambient light rejection, percent 0-100
    #[arg(long)]
    alr: Option<f64>,

    /// Screen gain
    #[arg(short, long)]
    gain: Option<f64>,

    /// Color factor
    #[arg(long)]
    color_factor: Option<f64>,

    /// Screen profile name from the database
    #[arg(long)]
    screen: Option<String>,

    /// Projector profile name from the database
    #[arg(long)]
    projector: Option<String>,

    /// Profile database file (builtin profiles if omitted)
    #[arg(long)]
    db: Option<PathBuf>,
}

#[derive(Args)]
struct ViewingArgs {
    /// Screen diagonal, inches
    #[arg(short, long)]
    diagonal: Option<f64>,

    /// Aspect ratio, e.g. 21:9
    #[arg(short, long)]
    ratio: Option<String>,

    /// Content detail class: general or detailed
    #[arg(long, default_value = "general")]
    detail: String,

    /// Content area fraction for a picture-in-picture region (0-1)
    #[arg(long)]
    area_factor: Option<f64>,

    /// Also show the same-height sibling in this ratio, e.g. 16:9
    #[arg(long)]
    letterbox: Option<String>,
}

#[derive(Args)]
struct ScreenSizeArgs {
    /// Seating distance, feet
    #[arg(long)]
    distance: f64,

    /// Aspect ratio, e.g. 16:9
    #[arg(short, long, default_value = "16:9")]
    ratio: String,

    /// Content detail class: general or detailed
    #[arg(long, default_value = "general")]
    detail: String,
}

#[derive(Args)]
struct SuggestArgs {
    /// Target contrast ratio
    #[arg(short, long)]
    target: f64,

    /// Rated projector output, lumens
    #[arg(short, long)]
    lumens: Option<f64>,

    /// Screen gain
    #[arg(short, long)]
    gain: Option<f64>,

    /// Ambient light on the screen, lux
    #[arg(short, long)]
    ambient: Option<f64>,

    /// Fraction of ambient light passing the ALR screen (0-1)
    #[arg(long)]
    alr_ambient: Option<f64>,

    /// Fraction of projector light usefully retained (0-1)
    #[arg(long, default_value = "1.0")]
    alr_projector: f64,

    /// Screen area, m² (derived from diagonal/ratio if omitted)
    #[arg(long)]
    area: Option<f64>,

    /// Screen diagonal, inches
    #[arg(short, long)]
    diagonal: Option<f64>,

    /// Aspect ratio, e.g. 21:9
    #[arg(short, long)]
    ratio: Option<String>,
}

fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "warn" })
        });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Report(args) => commands::report::run(args, &cli.settings),
        Commands::Contrast(args) => commands::contrast::run(args, &cli.settings),
        Commands::Viewing(args) => commands::viewing::run(args, &cli.settings),
        Commands::ScreenSize(args) => commands::screen::run(args),
        Commands::Suggest(args) => commands::suggest::run(args, &cli.settings),
    }
}
