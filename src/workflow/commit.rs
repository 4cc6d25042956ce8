use tracing::{debug, info};

use crate::context::AppContext;
use crate::domain::artifact::{ArtifactContext, ArtifactRequest};
use crate::error::{AppError, AppResult};

const CONFIRM_QUESTION: &str = "\nDo you want to proceed with git add . and commit?";

#[derive(Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    NoChanges,
    Cancelled { message: String },
    Committed { message: String },
}

/// Generates a commit message for the working tree and, once confirmed,
/// stages everything and commits with it.
///
/// If the commit step fails after staging succeeded, the index is left as is
/// and `AppError::PartiallyApplied` is returned.
pub async fn generate_and_commit(ctx: &AppContext) -> AppResult<CommitOutcome> {
    debug!(
        workspace = %ctx.config.workspace_root.display(),
        "collecting working tree changes"
    );
    let snapshot = ctx.version_control.current_changes().await?;
    if snapshot.is_empty {
        info!("working tree clean");
        return Ok(CommitOutcome::NoChanges);
    }

    debug!(
        paths = snapshot.changed_paths_summary.lines().count(),
        "working tree has changes"
    );
    let diff = ctx.version_control.working_diff().await?;
    let snapshot = snapshot.with_diff(diff);
    let title_hint = snapshot.first_line().to_string();
    let context = ArtifactContext::Commit { title_hint };
    let Some(request) = ArtifactRequest::new(snapshot, context) else {
        info!("status reported changes but the diff is empty");
        return Ok(CommitOutcome::NoChanges);
    };

    let staged = ctx.version_control.staged_file_list().await?;
    if !staged.trim().is_empty() {
        ctx.console.display(&format!("\nStaged files:\n{staged}"));
    }

    let message = super::generate(ctx, &request).await?;
    let presented = format!("\nGenerated commit message:\n{message}");
    ctx.console.display(&presented);

    if !ctx.console.confirm(CONFIRM_QUESTION)? {
        return Ok(CommitOutcome::Cancelled { message });
    }

    ctx.version_control.stage_all().await?;
    if let Err(err) = ctx.version_control.commit(&message).await {
        debug!(error = %err, "commit failed after staging");
        return Err(AppError::PartiallyApplied {
            source: Box::new(err),
        });
    }

    Ok(CommitOutcome::Committed { message })
}
