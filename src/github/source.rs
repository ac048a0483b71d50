// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The seam between the fetch pipeline and a concrete data source.

use async_trait::async_trait;

use crate::error::GitHubError;

use super::types::{CommitRecord, DirectoryEntry, RepositoryMetadata};
use super::url::RepoCoordinates;

/// Something that can answer the four GitHub queries an analysis needs.
///
/// Implementations report failures faithfully; the decision to degrade a
/// failed listing or README to an empty value is made by the caller.
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Short name used in logs.
    fn source_tag(&self) -> &'static str;

    /// `GET /repos/{owner}/{repo}`
    async fn repository(&self, repo: &RepoCoordinates) -> Result<RepositoryMetadata, GitHubError>;

    /// `GET /repos/{owner}/{repo}/commits?per_page={count}`, most recent first.
    async fn commits(
        &self,
        repo: &RepoCoordinates,
        count: u32,
    ) -> Result<Vec<CommitRecord>, GitHubError>;

    /// `GET /repos/{owner}/{repo}/contents/{path}` for a directory.
    async fn contents(
        &self,
        repo: &RepoCoordinates,
        path: &str,
    ) -> Result<Vec<DirectoryEntry>, GitHubError>;

    /// `GET /repos/{owner}/{repo}/contents/{path}` for a file, decoded to text.
    async fn file_text(&self, repo: &RepoCoordinates, path: &str) -> Result<String, GitHubError>;
}
