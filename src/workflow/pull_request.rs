use tracing::info;

use crate::context::AppContext;
use crate::domain::artifact::{ArtifactContext, ArtifactRequest};
use crate::domain::change::DiffSnapshot;
use crate::domain::revision::RevisionRange;
use crate::error::AppResult;

#[derive(Debug, PartialEq, Eq)]
pub enum PullRequestOutcome {
    /// No base given and neither `main` nor `master` exists.
    NoBaseBranch,
    NoDifferences {
        range: RevisionRange,
    },
    Generated {
        range: RevisionRange,
        description: String,
    },
}

pub async fn describe_pull_request(
    ctx: &AppContext,
    base_override: Option<String>,
) -> AppResult<PullRequestOutcome> {
    let current_branch = ctx.version_control.current_branch_name().await?;

    let base_branch = match base_override.filter(|base| !base.trim().is_empty()) {
        Some(base) => base,
        None => match ctx.version_control.default_base_branch().await? {
            Some(base) => base,
            None => return Ok(PullRequestOutcome::NoBaseBranch),
        },
    };

    let range = RevisionRange::new(base_branch, current_branch);
    let diff = ctx.version_control.diff_between(&range).await?;
    let context = ArtifactContext::PullRequest {
        base_branch: range.base.clone(),
        compare_branch: range.head.clone(),
    };
    let Some(request) = ArtifactRequest::new(DiffSnapshot::from_diff(diff), context) else {
        info!(%range, "no differences");
        return Ok(PullRequestOutcome::NoDifferences { range });
    };

    let description = super::generate(ctx, &request).await?;
    let presented = format!("\nGenerated PR Description:\n{description}");
    ctx.console.display(&presented);

    Ok(PullRequestOutcome::Generated { range, description })
}
