use tracing::info;

use crate::cmd::{build_context, report};
use crate::workflow::commit::{CommitOutcome, generate_and_commit};

pub async fn run() {
    let outcome = match build_context() {
        Ok(ctx) => generate_and_commit(&ctx).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(CommitOutcome::NoChanges) => println!("No changes detected. Nothing to commit."),
        Ok(CommitOutcome::Cancelled { message }) => {
            info!(
                summary = message.lines().next().unwrap_or_default(),
                "commit declined"
            );
            println!("Operation cancelled.");
        }
        Ok(CommitOutcome::Committed { message }) => {
            info!(
                summary = message.lines().next().unwrap_or_default(),
                "committed"
            );
            println!("Changes added and committed successfully!");
        }
        Err(err) => report("commit", err),
    }
}
