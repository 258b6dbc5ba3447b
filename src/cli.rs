use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Sanli tri-calendar date converter.
#[derive(Parser)]
#[command(
    name = "sanli",
    version,
    about = "Gregorian, Chinese lunar and Tibetan calendar dates with festival annotations"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print today's date in the chosen calendar.
    Today(TodayArgs),
    /// Convert a specific Gregorian date.
    Convert(ConvertArgs),
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "sanli.toml")]
    pub config: PathBuf,

    /// Calendar to render (overrides config).
    #[arg(long, value_enum)]
    pub calendar: Option<CalendarArg>,

    /// Output language (overrides config and environment detection).
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "sanli.toml")]
    pub config: PathBuf,

    /// Gregorian date to convert, YYYY-MM-DD.
    #[arg(short, long)]
    pub date: String,

    /// Calendar to render (overrides config).
    #[arg(long, value_enum)]
    pub calendar: Option<CalendarArg>,

    /// Output language (overrides config and environment detection).
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,
}

/// Calendar choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalendarArg {
    Gregorian,
    Lunar,
    Tibetan,
}

/// Locale choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    Zh,
    En,
}
