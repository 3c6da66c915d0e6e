use anyhow::Result;
use clap::Parser;

use tagquick::cli::{Cli, Commands};
use tagquick_core::{ClientConfig, HttpTagApi};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.client_config()?;

    dispatch(cli.command, config).await
}

async fn dispatch(command: Commands, config: ClientConfig) -> Result<()> {
    match command {
        Commands::Tags => tagquick::cli::tags::run(connect(config)?).await,
        Commands::Toggle { tag, images } => {
            tagquick::cli::toggle::run_toggle(connect(config)?, &tag, &images).await
        }
        Commands::Shortcut { number, images } => {
            tagquick::cli::toggle::run_shortcut(connect(config)?, number, &images).await
        }
        Commands::Render { images } => tagquick::cli::render::run(connect(config)?, &images).await,
        Commands::Zoom { images } => {
            tagquick::cli::zoom::run(&images);
            Ok(())
        }
    }
}

fn connect(config: ClientConfig) -> Result<HttpTagApi> {
    tracing::debug!(base_url = %config.base_url, "connecting to tag server");
    Ok(HttpTagApi::new(config)?)
}
