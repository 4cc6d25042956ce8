/// Working-tree or ref-range changes collected for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSnapshot {
    pub changed_paths_summary: String,
    pub unified_diff: String,
    pub is_empty: bool,
}

impl DiffSnapshot {
    /// Snapshot from porcelain status output; empty iff the status is blank.
    pub fn from_status(status: impl Into<String>) -> Self {
        let changed_paths_summary = status.into();
        let is_empty = changed_paths_summary.trim().is_empty();
        Self {
            changed_paths_summary,
            unified_diff: String::new(),
            is_empty,
        }
    }

    pub fn from_diff(diff: impl Into<String>) -> Self {
        let unified_diff = diff.into();
        let is_empty = unified_diff.trim().is_empty();
        Self {
            changed_paths_summary: String::new(),
            unified_diff,
            is_empty,
        }
    }

    /// Attaches diff text. A snapshot that was already empty stays empty.
    pub fn with_diff(self, diff: impl Into<String>) -> Self {
        let unified_diff = diff.into();
        let is_empty = self.is_empty || unified_diff.trim().is_empty();
        Self {
            changed_paths_summary: self.changed_paths_summary,
            unified_diff,
            is_empty,
        }
    }

    pub fn first_line(&self) -> &str {
        self.unified_diff.lines().next().unwrap_or_default()
    }
}
