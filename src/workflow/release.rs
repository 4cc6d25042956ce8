use chrono::NaiveDate;
use tracing::info;

use crate::context::AppContext;
use crate::domain::artifact::{ArtifactContext, ArtifactRequest};
use crate::domain::change::DiffSnapshot;
use crate::domain::revision::RevisionRange;
use crate::error::AppResult;

#[derive(Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    NoDifferences {
        range: RevisionRange,
    },
    Generated {
        range: RevisionRange,
        description: String,
    },
}

/// Describes the changes between two version refs. The release title comes
/// from `current_date`, not from the versions.
pub async fn describe_release(
    ctx: &AppContext,
    previous_version: &str,
    new_version: &str,
    current_date: NaiveDate,
) -> AppResult<ReleaseOutcome> {
    let range = RevisionRange::new(previous_version, new_version);
    let diff = ctx.version_control.diff_between(&range).await?;
    let context = ArtifactContext::Release {
        previous_version: range.base.clone(),
        new_version: range.head.clone(),
        current_date,
    };
    let Some(request) = ArtifactRequest::new(DiffSnapshot::from_diff(diff), context) else {
        info!(%range, "no differences");
        return Ok(ReleaseOutcome::NoDifferences { range });
    };

    let description = super::generate(ctx, &request).await?;
    let presented = format!("\nGenerated Release Description:\n{description}");
    ctx.console.display(&presented);

    Ok(ReleaseOutcome::Generated { range, description })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::language_model::MockLanguageModelService;
    use crate::services::version_control::MockVersionControlService;
    use crate::workflow::test_support::{context, silent_console};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn diffs_the_two_versions_and_names_release_by_date() {
        let mut vcs = MockVersionControlService::new();
        vcs.expect_current_branch_name().never();
        vcs.expect_diff_between()
            .withf(|range| range.to_string() == "v1.0.0..v1.1.0")
            .times(1)
            .returning(|_| Ok("diff --git a/a b/a\n+fix".to_string()));
        let mut model = MockLanguageModelService::new();
        model
            .expect_complete()
            .withf(|prompt| {
                let text = &prompt.user_content;
                text.contains("Release v2024.06.01")
                    && text.contains("'v1.0.0' and 'v1.1.0'")
                    && text.ends_with("+fix")
            })
            .times(1)
            .returning(|_| Ok("Release v2024.06.01\n## 🚀 What's New".to_string()));

        let ctx = context(vcs, model, silent_console());
        let outcome = describe_release(&ctx, "v1.0.0", "v1.1.0", date())
            .await
            .unwrap();
        assert!(matches!(outcome, ReleaseOutcome::Generated { .. }));
    }

    #[tokio::test]
    async fn identical_versions_never_call_model() {
        let mut vcs = MockVersionControlService::new();
        vcs.expect_diff_between().returning(|_| Ok("\n".to_string()));
        let mut model = MockLanguageModelService::new();
        model.expect_complete().never();

        let ctx = context(vcs, model, silent_console());
        let outcome = describe_release(&ctx, "v1.0.0", "v1.0.0", date())
            .await
            .unwrap();
        assert_eq!(
            outcome,
            ReleaseOutcome::NoDifferences {
                range: RevisionRange::new("v1.0.0", "v1.0.0")
            }
        );
    }

    #[tokio::test]
    async fn remote_rejection_is_surfaced() {
        let mut vcs = MockVersionControlService::new();
        vcs.expect_diff_between()
            .returning(|_| Ok("diff --git a/a b/a\n+x".to_string()));
        let mut model = MockLanguageModelService::new();
        model.expect_complete().times(1).returning(|_| {
            Err(AppError::RemoteRejected {
                status: 429,
                body: "rate limited".to_string(),
            })
        });

        let ctx = context(vcs, model, silent_console());
        let err = describe_release(&ctx, "v1.0.0", "v1.1.0", date())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RemoteRejected { status: 429, .. }));
    }
}
