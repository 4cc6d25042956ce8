use async_trait::async_trait;

use crate::domain::change::DiffSnapshot;
use crate::domain::revision::RevisionRange;
use crate::error::AppResult;

/// Repository queries and mutations the pipeline needs.
///
/// Every failure surfaces as `AppError::VersionControl`; callers only care
/// whether an operation succeeded.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Porcelain status; the snapshot is empty iff the status output is blank.
    async fn current_changes(&self) -> AppResult<DiffSnapshot>;
    /// Staged and unstaged diff text of the working tree.
    async fn working_diff(&self) -> AppResult<String>;
    async fn staged_file_list(&self) -> AppResult<String>;
    async fn diff_between(&self, range: &RevisionRange) -> AppResult<String>;
    async fn current_branch_name(&self) -> AppResult<String>;
    /// `main` if it exists, else `master`, else `None`.
    async fn default_base_branch(&self) -> AppResult<Option<String>>;
    async fn stage_all(&self) -> AppResult<()>;
    async fn commit(&self, message: &str) -> AppResult<()>;
}
