use tracing::info;

use crate::cmd::{build_context, report};
use crate::workflow::pull_request::{PullRequestOutcome, describe_pull_request};

#[derive(Debug, Clone)]
pub struct PrCommandArgs {
    pub base_branch: Option<String>,
}

pub async fn run(args: PrCommandArgs) {
    let outcome = match build_context() {
        Ok(ctx) => describe_pull_request(&ctx, args.base_branch).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(PullRequestOutcome::NoBaseBranch) => {
            println!("No base branch given and neither 'main' nor 'master' exists.");
            println!("Pass one explicitly: project-commit pr <base-branch>");
        }
        Ok(PullRequestOutcome::NoDifferences { range }) => println!(
            "No differences detected between the current branch and {}",
            range.base
        ),
        Ok(PullRequestOutcome::Generated { range, description }) => {
            info!(%range, chars = description.len(), "PR description generated")
        }
        Err(err) => report("pr", err),
    }
}
