use std::fmt;

/// Two refs compared with `git diff base..head`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRange {
    pub base: String,
    pub head: String,
}

impl RevisionRange {
    pub fn new(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            base: base.into().trim().to_string(),
            head: head.into().trim().to_string(),
        }
    }
}

impl fmt::Display for RevisionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.base, self.head)
    }
}
