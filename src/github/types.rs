// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub payload models.
//!
//! These mirror the subset of the REST v3 responses that scoring reads.
//! Unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository metadata from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryMetadata {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    /// Repository size in KB.
    pub size: u64,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Null for repositories that never received a push.
    pub pushed_at: Option<DateTime<Utc>>,
    pub license: Option<License>,
    pub topics: Vec<String>,
    pub default_branch: String,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub has_pages: bool,
    pub archived: bool,
    pub disabled: bool,
}

impl RepositoryMetadata {
    /// Timestamp of the last push, falling back to the last metadata update.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.pushed_at.unwrap_or(self.updated_at)
    }

    /// Description text, empty when unset.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Whether a license was detected.
    pub fn has_license(&self) -> bool {
        self.license.is_some()
    }
}

/// License summary attached to repository metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    pub key: String,
    pub name: String,
}

/// A commit from `GET /repos/{owner}/{repo}/commits`, flattened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitRecord {
    /// Full commit message, subject and body.
    pub message: String,
    /// Author date.
    pub date: Option<DateTime<Utc>>,
}

impl CommitRecord {
    /// Build a commit record.
    pub fn new(message: impl Into<String>, date: Option<DateTime<Utc>>) -> Self {
        Self {
            message: message.into(),
            date,
        }
    }
}

/// Wire shape of one element of the commit list.
#[derive(Debug, Deserialize)]
pub(crate) struct CommitPayload {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    #[serde(default)]
    message: String,
    author: Option<CommitAuthor>,
}

#[derive(Debug, Deserialize)]
struct CommitAuthor {
    date: Option<DateTime<Utc>>,
}

impl From<CommitPayload> for CommitRecord {
    fn from(payload: CommitPayload) -> Self {
        CommitRecord {
            message: payload.commit.message,
            date: payload.commit.author.and_then(|a| a.date),
        }
    }
}

/// Kind of a directory listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One entry of a `GET /repos/{owner}/{repo}/contents/{path}` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub size: Option<u64>,
}

impl DirectoryEntry {
    /// A root-level file.
    pub fn file(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind: EntryKind::File,
            size: None,
        }
    }

    /// A root-level directory.
    pub fn dir(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind: EntryKind::Dir,
            size: None,
        }
    }

    /// Whether this entry looks like a README.
    pub fn is_readme(&self) -> bool {
        self.name.to_lowercase().starts_with("readme")
    }
}

/// A single-file response from the contents endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct FilePayload {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_repository() {
        let json = r#"{
            "name": "bar",
            "full_name": "foo/bar",
            "description": null,
            "html_url": "https://github.com/foo/bar",
            "language": "Rust",
            "size": 1234,
            "stargazers_count": 42,
            "forks_count": 3,
            "open_issues_count": 1,
            "created_at": "2020-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "pushed_at": "2024-02-01T00:00:00Z",
            "license": {"key": "mit", "name": "MIT License", "spdx_id": "MIT"},
            "topics": ["cli"],
            "default_branch": "main",
            "has_issues": true,
            "archived": false,
            "owner": {"login": "foo"}
        }"#;

        let repo: RepositoryMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(repo.full_name, "foo/bar");
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(repo.stargazers_count, 42);
        assert!(repo.has_license());
        assert_eq!(repo.description_text(), "");
        assert_eq!(repo.last_activity(), repo.pushed_at.unwrap());
    }

    #[test]
    fn test_last_activity_falls_back_to_updated_at() {
        let repo = RepositoryMetadata {
            updated_at: "2023-05-05T00:00:00Z".parse().unwrap(),
            ..Default::default()
        };
        assert_eq!(repo.last_activity(), repo.updated_at);
    }

    #[test]
    fn test_deserialize_commit_list() {
        let json = r#"[
            {"sha": "abc", "commit": {"message": "Add parser", "author": {"name": "x", "date": "2024-03-01T12:00:00Z"}}},
            {"sha": "def", "commit": {"message": "wip", "author": null}}
        ]"#;

        let payload: Vec<CommitPayload> = serde_json::from_str(json).unwrap();
        let commits: Vec<CommitRecord> = payload.into_iter().map(CommitRecord::from).collect();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "Add parser");
        assert!(commits[0].date.is_some());
        assert!(commits[1].date.is_none());
    }

    #[test]
    fn test_deserialize_listing() {
        let json = r#"[
            {"name": "src", "path": "src", "type": "dir", "size": 0},
            {"name": "README.md", "path": "README.md", "type": "file", "size": 812},
            {"name": "vendor", "path": "vendor", "type": "submodule"},
            {"name": "weird", "path": "weird", "type": "unexpected"}
        ]"#;

        let entries: Vec<DirectoryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].kind, EntryKind::Dir);
        assert!(entries[1].is_readme());
        assert_eq!(entries[1].size, Some(812));
        assert_eq!(entries[2].kind, EntryKind::Submodule);
        assert_eq!(entries[3].kind, EntryKind::Other);
    }

    #[test]
    fn test_readme_detection_is_case_insensitive() {
        assert!(DirectoryEntry::file("readme.rst").is_readme());
        assert!(DirectoryEntry::file("ReadMe").is_readme());
        assert!(!DirectoryEntry::file("docs-readme.md").is_readme());
    }
}
