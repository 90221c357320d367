//! Crosspost CLI.

mod cli;

use clap::Parser;
use cli::{
    Cli, Commands, handle_compose_command, handle_key_command, handle_normalize_command,
    handle_platforms_command,
};
use crosspost::{
    Composer, CrosspostConfig, CrosspostResult, LogFormat, PublishDefaults, init_tracing,
};

fn main() -> CrosspostResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    })?;

    let config = CrosspostConfig::load(cli.config.as_deref())?;
    let defaults = PublishDefaults::install(config.publish_defaults());
    let composer = Composer::new(config.registry(), defaults.clone());
    tracing::debug!(
        platforms = composer.normalizer().registry().len(),
        "Composer ready"
    );

    match cli.command {
        Commands::Compose {
            request,
            stored,
            profile_key,
            pretty,
        } => handle_compose_command(
            &composer,
            &request,
            stored.as_deref(),
            &profile_key,
            pretty,
        ),
        Commands::Normalize { request } => handle_normalize_command(&composer, &request),
        Commands::Key { platforms } => {
            handle_key_command(&platforms);
            Ok(())
        }
        Commands::Platforms => {
            handle_platforms_command(&composer);
            Ok(())
        }
    }
}
