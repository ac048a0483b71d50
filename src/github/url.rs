// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub repository URL parsing.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::error::GitHubError;

lazy_static! {
    /// `github.com/<owner>/<repo>`, scheme and `www.` optional.
    static ref REPO_URL: Regex =
        Regex::new(r"(?i)^(?:https?://)?(?:www\.)?github\.com/([^/?#\s]+)/([^/?#\s]+)").unwrap();
}

/// Owner and repository name identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoCoordinates {
    pub owner: String,
    pub repo: String,
}

impl RepoCoordinates {
    /// Build coordinates from parts.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Case-insensitive key, as GitHub treats owner and repo names.
    pub fn cache_key(&self) -> String {
        format!("{}/{}", self.owner, self.repo).to_lowercase()
    }
}

impl fmt::Display for RepoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl std::str::FromStr for RepoCoordinates {
    type Err = GitHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_repo_url(s)
    }
}

/// Extract owner and repository from a GitHub URL.
///
/// Surrounding whitespace, one trailing slash and a `.git` suffix are
/// tolerated. Anything after the repository segment (e.g. `/tree/main`)
/// is ignored.
pub fn parse_repo_url(url: &str) -> Result<RepoCoordinates, GitHubError> {
    let trimmed = url.trim();
    let cleaned = trimmed.strip_suffix('/').unwrap_or(trimmed);
    let cleaned = cleaned.strip_suffix(".git").unwrap_or(cleaned);

    REPO_URL
        .captures(cleaned)
        .map(|caps| RepoCoordinates::new(&caps[1], &caps[2]))
        .ok_or_else(|| GitHubError::InvalidUrl {
            url: url.trim().to_string(),
        })
}
