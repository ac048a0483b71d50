// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! In-memory [`RepoSource`] for tests and offline fixtures.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::GitHubError;

use super::source::RepoSource;
use super::types::{CommitRecord, DirectoryEntry, RepositoryMetadata};
use super::url::RepoCoordinates;

/// A canned repository. Every call is counted.
#[derive(Debug, Default)]
pub struct FakeSource {
    pub metadata: RepositoryMetadata,
    pub commits: Vec<CommitRecord>,
    pub entries: Vec<DirectoryEntry>,
    /// File contents by path, already decoded.
    pub files: HashMap<String, String>,
    /// Returned by `repository` instead of the metadata.
    pub repository_error: Option<GitHubError>,
    /// Returned by `commits` instead of the commit list.
    pub commits_error: Option<GitHubError>,
    /// Returned by `contents` instead of the listing.
    pub contents_error: Option<GitHubError>,
    /// Returned by `file_text` for every path.
    pub file_error: Option<GitHubError>,
    pub calls: AtomicU64,
}

impl FakeSource {
    /// A fake serving the given metadata, commits and root listing.
    pub fn new(
        metadata: RepositoryMetadata,
        commits: Vec<CommitRecord>,
        entries: Vec<DirectoryEntry>,
    ) -> Self {
        Self {
            metadata,
            commits,
            entries,
            ..Default::default()
        }
    }

    /// Serve `content` for `path`.
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Total number of requests answered so far.
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }
}

#[async_trait]
impl RepoSource for FakeSource {
    fn source_tag(&self) -> &'static str {
        "fake"
    }

    async fn repository(&self, _repo: &RepoCoordinates) -> Result<RepositoryMetadata, GitHubError> {
        self.record_call();
        match &self.repository_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.metadata.clone()),
        }
    }

    async fn commits(
        &self,
        _repo: &RepoCoordinates,
        count: u32,
    ) -> Result<Vec<CommitRecord>, GitHubError> {
        self.record_call();
        match &self.commits_error {
            Some(err) => Err(err.clone()),
            None => Ok(self
                .commits
                .iter()
                .take(count as usize)
                .cloned()
                .collect()),
        }
    }

    async fn contents(
        &self,
        _repo: &RepoCoordinates,
        _path: &str,
    ) -> Result<Vec<DirectoryEntry>, GitHubError> {
        self.record_call();
        match &self.contents_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.entries.clone()),
        }
    }

    async fn file_text(&self, _repo: &RepoCoordinates, path: &str) -> Result<String, GitHubError> {
        self.record_call();
        if let Some(err) = &self.file_error {
            return Err(err.clone());
        }
        self.files
            .get(path)
            .cloned()
            .ok_or(GitHubError::NotFound)
    }
}
