//! `cochar` - generate one investigator from the command line

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cochar_client::cli::{failure_exit_code, render_choices, Cli};
use cochar_client::presentation::{describe_failure, CharacterCard};
use cochar_client::{ClientConfig, GenerationService, HttpCharacterApi};
use cochar_domain::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays the card or JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cochar_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::standard();
    catalog.check_consistency()?;

    if cli.list_choices {
        print!("{}", render_choices(&catalog));
        return Ok(ExitCode::SUCCESS);
    }

    let config = cli.apply_overrides(ClientConfig::from_env());
    tracing::debug!(
        api_url = %config.api_url,
        timeout_ms = config.request_timeout.as_millis() as u64,
        "Configuration loaded"
    );

    let api = HttpCharacterApi::new(&config.api_url, config.request_timeout)?;
    let service = GenerationService::new(Arc::new(api), Arc::new(catalog), config.settings());

    match service.submit(&cli.to_bundle()).await {
        Ok(character) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&character)?);
            } else {
                print!("{}", CharacterCard::new(&character));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", describe_failure(&err));
            Ok(ExitCode::from(failure_exit_code(&err)))
        }
    }
}
