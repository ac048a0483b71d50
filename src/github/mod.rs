// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub data fetching.
//!
//! Resolves repository URLs and retrieves the metadata, recent commits,
//! root listing and README that scoring works from.

pub mod cache;
mod client;
pub mod fake;
mod fetch;
mod source;
mod types;
mod url;

pub use cache::SnapshotCache;
pub use client::{decode_content, GitHubClient, GITHUB_ACCEPT};
pub use fetch::{fetch_file_text, fetch_snapshot, RepoSnapshot};
pub use source::RepoSource;
pub use types::{CommitRecord, DirectoryEntry, EntryKind, License, RepositoryMetadata};
pub use url::{parse_repo_url, RepoCoordinates};
