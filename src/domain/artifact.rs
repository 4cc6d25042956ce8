use chrono::NaiveDate;

use crate::domain::change::DiffSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Commit,
    PullRequest,
    Release,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Commit => "commit message",
            ArtifactKind::PullRequest => "PR description",
            ArtifactKind::Release => "release description",
        }
    }
}

/// Named parameters each template needs besides the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactContext {
    Commit {
        title_hint: String,
    },
    PullRequest {
        base_branch: String,
        compare_branch: String,
    },
    Release {
        previous_version: String,
        new_version: String,
        current_date: NaiveDate,
    },
}

impl ArtifactContext {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            ArtifactContext::Commit { .. } => ArtifactKind::Commit,
            ArtifactContext::PullRequest { .. } => ArtifactKind::PullRequest,
            ArtifactContext::Release { .. } => ArtifactKind::Release,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArtifactRequest {
    pub kind: ArtifactKind,
    pub diff: DiffSnapshot,
    pub context: ArtifactContext,
}

impl ArtifactRequest {
    /// Returns `None` for an empty diff; there is nothing to summarize.
    pub fn new(diff: DiffSnapshot, context: ArtifactContext) -> Option<Self> {
        if diff.is_empty {
            return None;
        }
        Some(Self {
            kind: context.kind(),
            diff,
            context,
        })
    }
}
