//! adrep CLI - terminal client for an adverse-event report backend

use clap::{Parser, Subcommand};
use colored::Colorize;

use adrep::client::ReportClient;
use adrep::config::AdrepConfig;
use adrep::error::AdrepError;
use adrep::model::field_or_blank;

#[derive(Parser)]
#[command(name = "adrep")]
#[command(about = "adrep - adverse-event report console")]
#[command(version)]
struct Cli {
    /// Backend origin (overrides config file and ADREP_BACKEND_URL)
    #[arg(short, long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a report for classification and print the structured result
    Submit {
        /// Report text (reads stdin when omitted)
        text: Option<String>,
    },

    /// List recent processed reports
    History {
        /// Show only the first N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Translate a phrase via the backend
    Translate {
        /// Text to translate
        text: String,

        /// Target language code (the backend decides what it supports)
        #[arg(short, long, default_value = "fr")]
        lang: String,
    },

    /// Persist a default backend origin to the config file
    SetBackend {
        /// Backend origin, e.g. http://127.0.0.1:8000
        url: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not present)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AdrepError> {
    let config = AdrepConfig::load()?.with_env();
    let backend = cli.backend.as_deref();

    match cli.command {
        None => run_tui(&config, backend).await,
        Some(Commands::Submit { text }) => {
            let client = ReportClient::new(config.backend_origin(backend))?;
            let text = match text {
                Some(t) => t,
                None => read_stdin()?,
            };
            let report = client.submit_report(&text).await?;

            println!("{}", "Processed report:".cyan().bold());
            println!("  Drug:           {}", field_or_blank(report.drug.as_deref()));
            println!("  Adverse events: {}", report.events_joined());
            println!(
                "  Severity:       {}",
                field_or_blank(report.severity.as_deref())
            );
            println!(
                "  Outcome:        {}",
                field_or_blank(report.outcome.as_deref())
            );
            Ok(())
        }
        Some(Commands::History { limit }) => {
            let client = ReportClient::new(config.backend_origin(backend))?;
            let entries = client.fetch_history().await?;
            let entries = match limit {
                Some(n) => &entries[..entries.len().min(n)],
                None => &entries[..],
            };

            println!(
                "{:<6} {:<16} {:<28} {:<10} {:<12} {:<20}",
                "ID", "DRUG", "EVENTS", "SEVERITY", "OUTCOME", "CREATED"
            );
            println!("{}", "-".repeat(94));
            for entry in entries {
                println!(
                    "{:<6} {:<16} {:<28} {:<10} {:<12} {:<20}",
                    entry.id,
                    field_or_blank(entry.drug.as_deref()),
                    entry.events_joined(),
                    field_or_blank(entry.severity.as_deref()),
                    field_or_blank(entry.outcome.as_deref()),
                    field_or_blank(entry.created_at.as_deref()),
                );
            }
            Ok(())
        }
        Some(Commands::Translate { text, lang }) => {
            let client = ReportClient::new(config.backend_origin(backend))?;
            let translation = client.translate(&text, &lang).await?;
            println!("{} ({}): {}", "Translation".cyan().bold(), lang, translation);
            Ok(())
        }
        Some(Commands::SetBackend { url }) => {
            // Load without the env merge so an ADREP_BACKEND_URL session
            // value is not persisted by accident.
            let mut stored = AdrepConfig::load()?;
            stored.backend = Some(url.clone());
            stored.save()?;
            println!("{} backend set to {}", "✓".green(), url);
            Ok(())
        }
    }
}

#[cfg(feature = "tui")]
async fn run_tui(config: &AdrepConfig, backend: Option<&str>) -> Result<(), AdrepError> {
    adrep::tui::run_tui(config, backend).await
}

#[cfg(not(feature = "tui"))]
async fn run_tui(_config: &AdrepConfig, _backend: Option<&str>) -> Result<(), AdrepError> {
    Err(AdrepError::TuiError {
        reason: "TUI feature not enabled. Rebuild with --features tui, or use a subcommand"
            .to_string(),
    })
}

fn read_stdin() -> Result<String, AdrepError> {
    use std::io::Read;

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| AdrepError::Unhandled {
            message: format!("Failed to read stdin: {}", e),
        })?;
    Ok(buf.trim_end().to_string())
}
