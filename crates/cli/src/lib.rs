pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use sitequote_core::config::{AppConfig, LoadOptions, LogFormat};

#[derive(Debug, Parser)]
#[command(
    name = "sitequote",
    about = "Sitequote operator CLI",
    long_about = "Inspect Sitequote client configuration, check API readiness, and exercise draft scoring and depot distance calculations.",
    after_help = "Examples:\n  sitequote doctor --json\n  sitequote config\n  sitequote score --delivery-window --line-specs\n  sitequote distance --from-lat 41.7151 --from-lng 44.8271 --to-lat 41.6168 --to-lng 41.6367"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
    #[command(about = "Validate config and report API submission readiness")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Compute the completeness-confidence score for a set of draft signals")]
    Score {
        #[arg(long, help = "Draft is attached to a project")]
        project: bool,
        #[arg(long = "line-specs", help = "Line items carry detailed spec notes")]
        line_specs: bool,
        #[arg(long = "delivery-window", help = "A delivery window with dates is set")]
        delivery_window: bool,
        #[arg(long = "access-notes", help = "Site access notes are provided")]
        access_notes: bool,
        #[arg(long = "profile-complete", help = "The buyer profile is complete")]
        profile_complete: bool,
    },
    #[command(about = "Great-circle distance in kilometers between two coordinates")]
    Distance {
        #[arg(long)]
        from_lat: f64,
        #[arg(long)]
        from_lng: f64,
        #[arg(long)]
        to_lat: f64,
        #[arg(long)]
        to_lng: f64,
    },
}

fn init_logging() {
    // Config load failures are reported by the individual commands; logging
    // falls back to defaults when the config cannot be read.
    let config = AppConfig::load(LoadOptions::default()).unwrap_or_default();
    let log_level =
        config.logging.level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);

    let builder = tracing_subscriber::fmt().with_target(false).with_max_level(log_level);
    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Config => commands::CommandResult { exit_code: 0, output: commands::config::run() },
        Command::Doctor { json } => commands::doctor::run(json),
        Command::Score { project, line_specs, delivery_window, access_notes, profile_complete } => {
            commands::CommandResult {
                exit_code: 0,
                output: commands::score::run(
                    project,
                    line_specs,
                    delivery_window,
                    access_notes,
                    profile_complete,
                ),
            }
        }
        Command::Distance { from_lat, from_lng, to_lat, to_lng } => commands::CommandResult {
            exit_code: 0,
            output: commands::distance::run(from_lat, from_lng, to_lat, to_lng),
        },
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
