// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Snapshot assembly: the three top-level fetches plus the README.

use crate::error::GitHubError;

use super::source::RepoSource;
use super::types::{CommitRecord, DirectoryEntry, RepositoryMetadata};
use super::url::RepoCoordinates;

/// Everything an analysis reads, fetched once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoSnapshot {
    pub metadata: RepositoryMetadata,
    /// Most recent first.
    pub commits: Vec<CommitRecord>,
    /// Root listing only. Empty when the listing could not be fetched.
    pub entries: Vec<DirectoryEntry>,
    /// Decoded README text. Empty when absent or unreadable.
    pub readme: String,
}

impl RepoSnapshot {
    /// First root entry whose name starts with "readme", any case.
    pub fn readme_entry(&self) -> Option<&DirectoryEntry> {
        find_readme(&self.entries)
    }

    /// Whether the root listing contains a README.
    pub fn has_readme(&self) -> bool {
        self.readme_entry().is_some()
    }
}

fn find_readme(entries: &[DirectoryEntry]) -> Option<&DirectoryEntry> {
    entries.iter().find(|e| e.is_readme())
}

/// Fetch metadata, commits and the root listing concurrently, then the README.
///
/// Metadata and commit failures abort. A failed listing becomes an empty
/// listing, and a failed README fetch becomes empty text.
pub async fn fetch_snapshot(
    source: &dyn RepoSource,
    repo: &RepoCoordinates,
    commit_count: u32,
) -> Result<RepoSnapshot, GitHubError> {
    tracing::debug!("Fetching {} from {}", repo, source.source_tag());

    let (metadata, commits, entries) = tokio::join!(
        source.repository(repo),
        source.commits(repo, commit_count),
        source.contents(repo, ""),
    );

    let metadata = metadata?;
    let commits = commits?;
    let entries = entries.unwrap_or_else(|e| {
        tracing::warn!("Root listing for {} unavailable, continuing without it: {}", repo, e);
        Vec::new()
    });

    let readme = match find_readme(&entries) {
        Some(entry) => fetch_file_text(source, repo, &entry.path).await,
        None => String::new(),
    };

    tracing::debug!(
        "Fetched {}: {} commits, {} root entries, README {} chars",
        repo,
        commits.len(),
        entries.len(),
        readme.chars().count()
    );

    Ok(RepoSnapshot {
        metadata,
        commits,
        entries,
        readme,
    })
}

/// Fetch one file's text, degrading to an empty string on any failure.
pub async fn fetch_file_text(source: &dyn RepoSource, repo: &RepoCoordinates, path: &str) -> String {
    match source.file_text(repo, path).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Could not read {} in {}: {}", path, repo, e);
            String::new()
        }
    }
}
