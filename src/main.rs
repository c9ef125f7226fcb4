use clap::Parser;

use swipedeck::cli::{self, Cli};
use swipedeck::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    cli::run(Cli::parse()).await
}
