//! Command-line entry points.

mod card;
mod review;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::model::builtin_profiles;
use crate::remote::http_remote;
use crate::server::{load_profiles, shutdown_signal, DeckServer};
use crate::session::SwipeSession;

pub use card::CardView;
pub use review::{run_review, Command as ReviewCommand, ReviewSummary};

#[derive(Debug, Parser)]
#[command(name = "swipedeck", version, about = "Review candidate profiles one swipe at a time")]
pub struct Cli {
    /// Config file (default: ~/.config/swipedeck/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the fixture deck server
    Serve {
        /// Bind address, overrides server.bind_addr
        #[arg(short, long)]
        bind: Option<String>,
        /// JSON profile list, overrides server.profiles_file
        #[arg(short, long)]
        profiles: Option<PathBuf>,
    },
    /// Review profiles from a deck server interactively
    Review {
        /// Deck server URL, overrides remote.base_url
        #[arg(short, long)]
        base_url: Option<String>,
        /// Wait for an explicit 'submit' after the last card
        #[arg(long)]
        no_auto_submit: bool,
    },
}

impl Cli {
    /// Load the config file and fold in command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;

        match &self.command {
            CliCommand::Serve { bind, profiles } => {
                if let Some(bind) = bind {
                    config.server.bind_addr = bind.clone();
                }
                if let Some(profiles) = profiles {
                    config.server.profiles_file = Some(profiles.clone());
                }
            }
            CliCommand::Review {
                base_url,
                no_auto_submit,
            } => {
                if let Some(base_url) = base_url {
                    config.remote.base_url = base_url.clone();
                }
                if *no_auto_submit {
                    config.session.auto_submit = false;
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    match cli.command {
        CliCommand::Serve { .. } => serve(config).await,
        CliCommand::Review { .. } => review(config).await,
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let profiles = match &config.server.profiles_file {
        Some(path) => load_profiles(path)?,
        None => builtin_profiles(),
    };

    let mut server = DeckServer::new(profiles)?;
    let addr = server.bind(&config.server.bind_addr).await?;
    eprintln!("Deck server listening on http://{}", addr);
    server.run(shutdown_signal()).await?;
    Ok(())
}

async fn review(config: Config) -> anyhow::Result<()> {
    let (source, sink) = http_remote(&config.remote).context("Failed to build HTTP client")?;
    tracing::info!(
        candidates = source.url(),
        decisions = sink.url(),
        "Starting review"
    );

    let session = SwipeSession::with_config(Arc::new(source), Arc::new(sink), config.session);
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    let summary = run_review(&session, input, &mut out).await?;
    tracing::info!(
        phase = %summary.phase,
        decided = summary.decisions.len(),
        "Review finished"
    );
    Ok(())
}
