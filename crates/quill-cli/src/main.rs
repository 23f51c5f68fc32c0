//! Quill CLI - Command-line interface for the Quill editorial pipeline.

use clap::Parser;
use quill_cli::commands;
use quill_cli::{Cli, Command, Config, Formatter};
use quill_drafter::{DraftGenerator, DEFAULT_DRAFT_TIMEOUT_SECS};
use quill_extractor::Extractor;
use quill_llm::ChatCompletionProvider;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> quill_cli::Result<()> {
    // Credentials may live in a local .env file
    dotenvy::dotenv().ok();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;
    config.validate()?;

    // --profile applies to this run only and never reaches the saved file
    let profile_override = cli.profile;
    config.profile_for(profile_override.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Profile(args) => {
            commands::execute_profile(args, &mut config, &config_path, &formatter)?;
        }
        Command::Export(args) => {
            commands::execute_export(args, &formatter)?;
        }
        Command::Extract(args) => {
            let llm = config.profile_for(profile_override.as_deref())?.resolve();
            let provider = ChatCompletionProvider::from_config(&llm)?;
            let extractor = Extractor::new(provider, config.settings.extraction.clone());

            commands::execute_extract(args, &extractor, &formatter, interrupted()).await?;
        }
        Command::Draft(args) => {
            let mut llm = config.profile_for(profile_override.as_deref())?.resolve();
            llm.max_tokens = config.settings.draft_max_tokens;
            llm.request_timeout_secs = llm.request_timeout_secs.max(DEFAULT_DRAFT_TIMEOUT_SECS);
            let generator = DraftGenerator::new(ChatCompletionProvider::from_config(&llm)?);

            commands::execute_draft(args, &generator, &formatter, interrupted()).await?;
        }
    }

    Ok(())
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed.
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Interrupt received, cancelling");
}
