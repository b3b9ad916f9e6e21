//! CLI command definitions.

pub mod fetch;

use clap::{Parser, Subcommand, ValueEnum};

/// Fetch events from the events API and render them as HTML.
#[derive(Debug, Parser)]
#[command(name = "events-widget")]
#[command(version, about = "Fetch events and render them as HTML", long_about = None)]
pub struct Cli {
    /// Events API base URL (overrides EVENTS_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "html")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A full HTML page with the rendered mount element.
    #[default]
    Html,
    /// The decoded events as JSON.
    Json,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch events and render them.
    Fetch(fetch::FetchArgs),
    /// Print the request URL without sending it.
    Url(fetch::FetchArgs),
}
