mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod report;
mod services;
#[cfg(test)]
mod testing;
mod workflow;
mod workspace;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::github::GitHubClient;
use crate::infra::linguist::LinguistCli;

#[derive(Parser)]
#[command(
    name = "langbox",
    author,
    version,
    about = "Publish the languages of your recent commits to a gist"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze recent pushes and overwrite the gist with the report (default).
    Update(WindowArgs),
    /// Analyze recent pushes and print the report without updating the gist.
    Preview(WindowArgs),
    /// Show the configuration read from the environment.
    Config,
}

#[derive(Args, Default)]
struct WindowArgs {
    /// Override DAYS; clamped to 1..=30.
    #[arg(short, long)]
    days: Option<u32>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Update(WindowArgs::default())) {
        Commands::Config => cmd::config::run(),
        Commands::Update(args) => {
            let context = build_context(args)?;
            cmd::update::run(&context).await?;
            Ok(())
        }
        Commands::Preview(args) => {
            let context = build_context(args)?;
            cmd::preview::run(&context).await
        }
    }
}

fn build_context(args: WindowArgs) -> AppResult<AppContext> {
    let config = AppConfig::load()?.with_days_override(args.days.map(i64::from));

    tracing::info!("Username: {}", config.username);
    tracing::info!("Days: {}", config.days);

    let github = Arc::new(GitHubClient::new(
        config.api_base_url.clone(),
        config.github_token.clone(),
    ));
    let git = Arc::new(GitCli::new(config.git_bin.clone()));
    let linguist = Arc::new(LinguistCli::new(config.linguist_bin.clone()));

    Ok(AppContext::new(config, github.clone(), github, git, linguist))
}
