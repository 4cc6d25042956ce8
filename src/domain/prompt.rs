//! Prompt templates for each artifact kind.
//!
//! Every template embeds the diff verbatim. Nothing is truncated or redacted,
//! so very large diffs are sent as-is.

use chrono::NaiveDate;

use crate::domain::artifact::{ArtifactContext, ArtifactRequest};

pub const SYSTEM_INSTRUCTION: &str = "You are a specialized assistant for generating git commit messages, PR descriptions, and release notes. Focus on generating content in English, formatted in Markdown when applicable. Emphasize clarity, conciseness, and relevance in your responses.";

/// Section headings a PR description must contain, in order.
pub const PR_HEADINGS: [&str; 7] = [
    "## PR Title",
    "## PR Description",
    "## Changes Made",
    "## Instructions for Reviewer",
    "## Recommendations for Testing this PR",
    "## Concerns",
    "## Link to Related Issue(s)",
];

const RELEASE_SKELETON: &str = "## 🚀 What's New
- [New feature 1]
- [New feature 2]
- [New feature 3]
## 🐛 Bug Fixes
- [Bug fix 1]
- [Bug fix 2]
- [Bug fix 3]
## 🛠 Changes
- [Change 1]
- [Change 2]
- [Change 3]
## 📚 Documentation
- [Documentation update 1]
- [Documentation update 2]
## 🏗 Dependencies
- [Dependency update 1]
- [Dependency update 2]
## 🗑 Deprecations
- [Deprecated item 1]
- [Deprecated item 2]
---
**Installation**: [Installation or update instructions]
**Additional Notes**: [Any additional relevant information]
**Contributors**: [@user1], [@user2], [@user3]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPrompt {
    pub system_instruction: String,
    pub user_content: String,
}

pub fn build_prompt(request: &ArtifactRequest) -> CompletionPrompt {
    let diff = request.diff.unified_diff.as_str();
    let user_content = match &request.context {
        ArtifactContext::Commit { title_hint } => commit_prompt(diff, title_hint),
        ArtifactContext::PullRequest {
            base_branch,
            compare_branch,
        } => pull_request_prompt(diff, base_branch, compare_branch),
        ArtifactContext::Release {
            previous_version,
            new_version,
            current_date,
        } => release_prompt(diff, previous_version, new_version, *current_date),
    };

    CompletionPrompt {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        user_content,
    }
}

/// Release name derived from the calendar date, e.g. `Release v2024.03.07`.
pub fn release_name(date: NaiveDate) -> String {
    format!("Release v{}", date.format("%Y.%m.%d"))
}

fn commit_prompt(diff: &str, title_hint: &str) -> String {
    format!(
        "Based on the following git diff and the context '{title_hint}', generate a concise commit message in English. \
         Start with a brief summary line (50 characters or less), followed by a blank line, and then a more detailed explanation. \
         Do not include any prefixes like 'title:', '**Summary:**', '**Details:**'. Here's the diff:\n\n{diff}"
    )
}

fn pull_request_prompt(diff: &str, base_branch: &str, compare_branch: &str) -> String {
    let skeleton = PR_HEADINGS.join("\n\n");
    format!(
        "Generate a structured GitHub Pull Request description based on the following git diff between '{base_branch}' and '{compare_branch}' branches. \
         Use this format:\n\n{skeleton}\n\n\
         Ensure the content is clear, concise, and relevant to each heading. Here's the diff:\n\n{diff}"
    )
}

fn release_prompt(
    diff: &str,
    previous_version: &str,
    new_version: &str,
    date: NaiveDate,
) -> String {
    let name = release_name(date);
    format!(
        "Generate a structured release description based on the following git diff between versions '{previous_version}' and '{new_version}'. \
         Use this exact format:\n\n{name}\n{RELEASE_SKELETON}\n\n\
         Ensure the content is clear, concise, and relevant to each heading. Fill in the placeholders with actual content based on the diff. \
         If there's no relevant information for a section, include \"No updates in this release.\" Here's the diff:\n\n{diff}"
    )
}
