//! events-widget CLI entry point.

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use events_widget::cli::{fetch::FetchArgs, Cli, Commands, OutputFormat};
use events_widget::output::{format_events_json, format_page};
use events_widget::{
    Config, ErrorDispatch, EventsWidget, FetchOutcome, InMemoryDocument, InMemoryElement,
    ReqwestTransport,
};
use events_widget_core::mount::MountElement;
use events_widget_core::render::Renderer;
use events_widget_core::url::PathEncoding;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "events_widget=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = resolve_config(&cli);

    match &cli.command {
        Commands::Url(args) => {
            let widget = build_widget(args, &config, &InMemoryDocument::new());
            println!("{}", widget.url(&args.query_params()));
        }
        Commands::Fetch(args) => {
            let document = InMemoryDocument::new();
            let widget = build_widget(args, &config, &document);
            let params = args.query_params();

            if !cli.quiet {
                tracing::info!(url = %widget.url(&params), "Fetching events");
            }

            let renderer: Option<&dyn Renderer> = match cli.format {
                OutputFormat::Json => Some(&format_events_json as &dyn Renderer),
                OutputFormat::Html => None,
            };

            match widget.fetch(&params, renderer).await? {
                FetchOutcome::Rendered { .. } => match cli.format {
                    OutputFormat::Json => println!("{}", widget.container().inner_html()),
                    OutputFormat::Html => println!("{}", format_page(&document)?),
                },
                FetchOutcome::NoEvents => {
                    if !cli.quiet {
                        eprintln!("No events in response.");
                    }
                }
                FetchOutcome::Warned => bail!("The events API did not answer with 200"),
                FetchOutcome::Unreachable => bail!("The events API could not be reached"),
            }
        }
    }

    Ok(())
}

/// Environment configuration with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Config {
    let mut config = Config::from_env();
    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.clone();
    }
    let args = match &cli.command {
        Commands::Fetch(args) | Commands::Url(args) => args,
    };
    if args.encode_path {
        config.path_encoding = PathEncoding::Encoded;
    }
    if args.report_errors {
        config.error_dispatch = ErrorDispatch::OnFailure;
    }
    config
}

fn build_widget(
    args: &FetchArgs,
    config: &Config,
    document: &InMemoryDocument,
) -> EventsWidget<InMemoryElement> {
    EventsWidget::new(
        args.widget_options(),
        document,
        Arc::new(ReqwestTransport::new()),
    )
    .with_config(config)
}
