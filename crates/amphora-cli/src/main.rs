//! Amphora CLI - container registry housekeeping for GitLab projects.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "amphora=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => commands::list::run(&args).await,
        Commands::Show(args) => commands::show::run(&args).await,
        Commands::Delete(args) => commands::delete::run(&args).await,
        Commands::Tags(args) => commands::tags::run(&args).await,
        Commands::Tag(args) => commands::tag::run(&args).await,
        Commands::DeleteTag(args) => commands::delete_tag::run(&args).await,
        Commands::Cleanup(args) => commands::cleanup::run(&args).await,
        Commands::Visibility(args) => commands::visibility::run(&args).await,
        Commands::Version => {
            println!("amphora {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
