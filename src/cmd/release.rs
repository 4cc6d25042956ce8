use chrono::Local;
use tracing::info;

use crate::cmd::{build_context, report};
use crate::workflow::release::{ReleaseOutcome, describe_release};

#[derive(Debug, Clone)]
pub struct ReleaseCommandArgs {
    pub previous_version: String,
    pub new_version: String,
}

pub async fn run(args: ReleaseCommandArgs) {
    let ReleaseCommandArgs {
        previous_version,
        new_version,
    } = args;
    let today = Local::now().date_naive();
    let outcome = match build_context() {
        Ok(ctx) => describe_release(&ctx, &previous_version, &new_version, today).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(ReleaseOutcome::NoDifferences { range }) => println!(
            "No differences detected between {} and {}",
            range.base, range.head
        ),
        Ok(ReleaseOutcome::Generated { range, description }) => {
            info!(%range, chars = description.len(), "release description generated")
        }
        Err(err) => report("release", err),
    }
}
