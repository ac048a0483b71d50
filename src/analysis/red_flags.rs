// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Red flag detection.
//!
//! Every check is independent; all that apply are reported, in a fixed order.

use chrono::{DateTime, Utc};

use crate::github::{CommitRecord, DirectoryEntry, RepoSnapshot, RepositoryMetadata};

use super::categories::days_between;
use super::report::{RedFlag, RedFlagKind};

/// Name fragments of leftover temporary files.
const LEFTOVER_MARKERS: &[&str] = &["temp", "backup", "old", "copy"];

/// Months without a push before a repository counts as inactive.
const INACTIVE_MONTHS: f64 = 6.0;

/// A commit message that says nothing: very short, a bare "fix"/"update",
/// or work in progress.
pub fn is_poor_message(message: &str) -> bool {
    let message = message.to_lowercase();
    message.chars().count() < 5 || message == "fix" || message == "update" || message.contains("wip")
}

/// Run every check against a snapshot.
pub fn generate_red_flags(snapshot: &RepoSnapshot, now: DateTime<Utc>) -> Vec<RedFlag> {
    [
        check_poor_commits(&snapshot.commits),
        check_missing_readme(snapshot),
        check_security_risk(&snapshot.entries),
        check_leftover_files(&snapshot.entries),
        check_inactivity(&snapshot.metadata, now),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Fires when strictly more than 30% of commits are poor.
fn check_poor_commits(commits: &[CommitRecord]) -> Option<RedFlag> {
    let total = commits.len();
    let poor = commits.iter().filter(|c| is_poor_message(&c.message)).count();

    // poor / total > 0.3, in integers
    if poor * 10 <= total * 3 {
        return None;
    }

    let percent = (poor as f64 / total as f64 * 100.0).round() as u32;
    Some(RedFlag {
        kind: RedFlagKind::PoorCommits,
        title: "📝 Vague Commit Messages".to_string(),
        description: format!(
            "{}% of your commits use unclear messages. Try writing what you changed and why, like \"Add user login validation\" instead of just \"fix\".",
            percent
        ),
    })
}

fn check_missing_readme(snapshot: &RepoSnapshot) -> Option<RedFlag> {
    if snapshot.has_readme() {
        return None;
    }

    Some(RedFlag {
        kind: RedFlagKind::MissingDocs,
        title: "📚 Missing README File".to_string(),
        description: "Your project needs a README.md file to explain what it does, how to install it, and how to use it. This is the first thing people see!".to_string(),
    })
}

fn check_security_risk(entries: &[DirectoryEntry]) -> Option<RedFlag> {
    let risky = entries
        .iter()
        .any(|e| e.name == ".env" || e.name.contains("secret") || e.name.contains("key"));
    if !risky {
        return None;
    }

    Some(RedFlag {
        kind: RedFlagKind::SecurityIssue,
        title: "🔒 Potential Security Risk".to_string(),
        description: "Found files that might contain secrets or passwords. Move sensitive data to environment variables and add these files to .gitignore.".to_string(),
    })
}

fn check_leftover_files(entries: &[DirectoryEntry]) -> Option<RedFlag> {
    let leftovers: Vec<&str> = entries
        .iter()
        .filter(|e| LEFTOVER_MARKERS.iter().any(|m| e.name.contains(m)))
        .map(|e| e.name.as_str())
        .collect();
    if leftovers.is_empty() {
        return None;
    }

    let examples: Vec<&str> = leftovers.iter().take(2).copied().collect();
    Some(RedFlag {
        kind: RedFlagKind::UnusedFiles,
        title: "🗑️ Cleanup Needed".to_string(),
        description: format!(
            "Found {} files that look like temporary or backup files ({}). Clean these up to keep your repo tidy.",
            leftovers.len(),
            examples.join(", ")
        ),
    })
}

fn check_inactivity(metadata: &RepositoryMetadata, now: DateTime<Utc>) -> Option<RedFlag> {
    let months = days_between(metadata.last_activity(), now) / 30.0;
    if months <= INACTIVE_MONTHS {
        return None;
    }

    Some(RedFlag {
        kind: RedFlagKind::InactiveRepository,
        title: "⏰ Inactive Repository".to_string(),
        description: format!(
            "No updates in {} months. Consider adding recent improvements or archiving if the project is complete.",
            months.round() as i64
        ),
    })
}
