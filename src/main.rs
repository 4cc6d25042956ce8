mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use clap::{Args, Parser, Subcommand};

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::pr::PrCommandArgs;
use crate::cmd::release::ReleaseCommandArgs;

#[derive(Parser)]
#[command(
    name = "project-commit",
    author,
    version,
    about = "Generate commit messages, PR descriptions and release notes with ChatGPT"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure OpenAI API credentials.
    Config(ConfigArgs),
    /// Generate a commit message and create a commit.
    Commit,
    /// Generate a structured PR description for the current branch.
    Pr(PrArgs),
    /// Generate structured release notes from the diff between two versions.
    Release(ReleaseArgs),
}

#[derive(Args)]
struct PrArgs {
    /// Base branch to compare against (defaults to main, then master).
    base_branch: Option<String>,
}

#[derive(Args)]
struct ReleaseArgs {
    /// Previous version ref (tag, branch or commit).
    previous_version: String,
    /// New version ref (tag, branch or commit).
    new_version: String,
}

#[tokio::main]
async fn main() {
    logging::setup_logger();
    run(Cli::parse()).await;
}

async fn run(cli: Cli) {
    match cli.command {
        Commands::Config(args) => {
            if let Err(err) = config_cmd::run(args) {
                cmd::report("config", err);
            }
        }
        Commands::Commit => cmd::commit::run().await,
        Commands::Pr(args) => {
            cmd::pr::run(PrCommandArgs {
                base_branch: args.base_branch,
            })
            .await
        }
        Commands::Release(args) => {
            cmd::release::run(ReleaseCommandArgs {
                previous_version: args.previous_version,
                new_version: args.new_version,
            })
            .await
        }
    }
}
