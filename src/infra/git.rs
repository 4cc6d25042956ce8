use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::change::DiffSnapshot;
use crate::domain::revision::RevisionRange;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

const BASE_BRANCH_CANDIDATES: [&str; 2] = ["main", "master"];

/// `VersionControlService` backed by the system `git` binary.
pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    /// Runs git and returns stdout, or the exit status and stderr on failure.
    async fn run(&self, args: &[&str]) -> AppResult<String> {
        let command = args.join(" ");
        debug!(%command, "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| AppError::VersionControl {
                command: command.clone(),
                code: None,
                stderr: err.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(%command, code = ?output.status.code(), %stderr, "git failed");
            return Err(AppError::VersionControl {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn ref_exists(&self, name: &str) -> AppResult<bool> {
        match self.run(&["rev-parse", "--verify", "--quiet", name]).await {
            Ok(_) => Ok(true),
            Err(AppError::VersionControl { code: Some(_), .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn current_changes(&self) -> AppResult<DiffSnapshot> {
        let status = self.run(&["status", "--porcelain"]).await?;
        Ok(DiffSnapshot::from_status(status))
    }

    async fn working_diff(&self) -> AppResult<String> {
        let staged = self.run(&["diff", "--cached"]).await?;
        let unstaged = self.run(&["diff"]).await?;
        Ok(format!("{staged}{unstaged}"))
    }

    async fn staged_file_list(&self) -> AppResult<String> {
        self.run(&["diff", "--name-only", "--cached"]).await
    }

    async fn diff_between(&self, range: &RevisionRange) -> AppResult<String> {
        self.run(&["diff", &range.to_string()]).await
    }

    async fn current_branch_name(&self) -> AppResult<String> {
        let name = self.run(&["rev-parse", "--abbrev-ref", "HEAD"]).await?;
        let name = name.trim();
        // A detached checkout resolves to the literal `HEAD`.
        if name == "HEAD" {
            return Err(AppError::VersionControl {
                command: "rev-parse --abbrev-ref HEAD".to_string(),
                code: None,
                stderr: "HEAD is detached; check out a branch first".to_string(),
            });
        }
        Ok(name.to_string())
    }

    async fn default_base_branch(&self) -> AppResult<Option<String>> {
        for candidate in BASE_BRANCH_CANDIDATES {
            if self.ref_exists(candidate).await? {
                return Ok(Some(candidate.to_string()));
            }
        }
        Ok(None)
    }

    async fn stage_all(&self) -> AppResult<()> {
        self.run(&["add", "."]).await.map(|_| ())
    }

    async fn commit(&self, message: &str) -> AppResult<()> {
        self.run(&["commit", "-m", message]).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::process::Command as StdCommand;

    use tempfile::TempDir;

    use super::*;

    fn git(dir: &Path, args: &[&str]) {
        let status = StdCommand::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .expect("git should be installed");
        assert!(status.success(), "git {args:?} failed");
    }

    /// Repository on branch `trunk` so neither default base exists yet.
    fn init_repo() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path();
        git(path, &["init", "--quiet"]);
        git(path, &["symbolic-ref", "HEAD", "refs/heads/trunk"]);
        git(path, &["config", "user.name", "Test User"]);
        git(path, &["config", "user.email", "test@example.com"]);
        git(path, &["config", "commit.gpgsign", "false"]);
        dir
    }

    fn commit_file(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
        git(dir, &["add", name]);
        git(dir, &["commit", "--quiet", "-m", &format!("add {name}")]);
    }

    #[tokio::test]
    async fn clean_tree_has_empty_snapshot() {
        let repo = init_repo();
        commit_file(repo.path(), "a.txt", "one\n");
        let cli = GitCli::new(repo.path().to_path_buf());

        let snapshot = cli.current_changes().await.unwrap();
        assert!(snapshot.is_empty);
    }

    #[tokio::test]
    async fn working_diff_includes_staged_and_unstaged() {
        let repo = init_repo();
        commit_file(repo.path(), "a.txt", "one\n");
        commit_file(repo.path(), "b.txt", "two\n");
        fs::write(repo.path().join("a.txt"), "one\nstaged\n").unwrap();
        git(repo.path(), &["add", "a.txt"]);
        fs::write(repo.path().join("b.txt"), "two\nunstaged\n").unwrap();
        let cli = GitCli::new(repo.path().to_path_buf());

        let snapshot = cli.current_changes().await.unwrap();
        assert!(!snapshot.is_empty);
        assert!(snapshot.changed_paths_summary.contains("a.txt"));

        let diff = cli.working_diff().await.unwrap();
        assert!(diff.contains("+staged"));
        assert!(diff.contains("+unstaged"));

        let staged = cli.staged_file_list().await.unwrap();
        assert_eq!(staged.trim(), "a.txt");
    }

    #[tokio::test]
    async fn default_base_branch_prefers_main_then_master() {
        let repo = init_repo();
        commit_file(repo.path(), "a.txt", "one\n");
        let cli = GitCli::new(repo.path().to_path_buf());

        assert_eq!(cli.default_base_branch().await.unwrap(), None);

        git(repo.path(), &["branch", "master"]);
        assert_eq!(
            cli.default_base_branch().await.unwrap().as_deref(),
            Some("master")
        );

        git(repo.path(), &["branch", "main"]);
        assert_eq!(
            cli.default_base_branch().await.unwrap().as_deref(),
            Some("main")
        );
    }

    #[tokio::test]
    async fn current_branch_and_range_diff() {
        let repo = init_repo();
        commit_file(repo.path(), "a.txt", "one\n");
        git(repo.path(), &["branch", "main"]);
        git(repo.path(), &["checkout", "--quiet", "-b", "feature"]);
        commit_file(repo.path(), "c.txt", "feature work\n");
        let cli = GitCli::new(repo.path().to_path_buf());

        let branch = cli.current_branch_name().await.unwrap();
        assert_eq!(branch, "feature");

        let diff = cli
            .diff_between(&RevisionRange::new("main", branch))
            .await
            .unwrap();
        assert!(diff.contains("+feature work"));

        let none = cli
            .diff_between(&RevisionRange::new("main", "main"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn detached_or_unborn_head_has_no_branch_name() {
        let repo = init_repo();
        let cli = GitCli::new(repo.path().to_path_buf());
        assert!(cli.current_branch_name().await.is_err());

        commit_file(repo.path(), "a.txt", "one\n");
        git(repo.path(), &["checkout", "--quiet", "--detach"]);
        assert!(cli.current_branch_name().await.is_err());
    }

    #[tokio::test]
    async fn unknown_ref_reports_version_control_error() {
        let repo = init_repo();
        commit_file(repo.path(), "a.txt", "one\n");
        let cli = GitCli::new(repo.path().to_path_buf());

        let err = cli
            .diff_between(&RevisionRange::new("v0.0.0-missing", "trunk"))
            .await
            .unwrap_err();
        match err {
            AppError::VersionControl {
                command,
                code,
                stderr,
            } => {
                assert_eq!(command, "diff v0.0.0-missing..trunk");
                assert!(code.is_some_and(|c| c != 0));
                assert!(!stderr.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn stage_all_and_commit() {
        let repo = init_repo();
        commit_file(repo.path(), "a.txt", "one\n");
        fs::write(repo.path().join("new.txt"), "fresh\n").unwrap();
        let cli = GitCli::new(repo.path().to_path_buf());

        cli.stage_all().await.unwrap();
        cli.commit("Add new file\n\nBody text").await.unwrap();

        assert!(cli.current_changes().await.unwrap().is_empty);
    }

    #[tokio::test]
    async fn commit_with_nothing_staged_fails() {
        let repo = init_repo();
        commit_file(repo.path(), "a.txt", "one\n");
        let cli = GitCli::new(repo.path().to_path_buf());

        assert!(cli.commit("nothing").await.is_err());
    }
}
