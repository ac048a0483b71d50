// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The analysis pipeline: URL in, report card out.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::GradeConfig;
use crate::error::Result;
use crate::github::{fetch_snapshot, parse_repo_url, GitHubClient, RepoSnapshot, RepoSource, SnapshotCache};

use super::categories::score_categories;
use super::checklist::generate_checklist;
use super::grade::{overall_score, Readiness, Tier};
use super::red_flags::generate_red_flags;
use super::report::AnalysisResult;
use super::roadmap::generate_roadmap;
use super::summary::generate_summary;

/// Fetches repositories through a [`RepoSource`] and grades them.
pub struct Analyzer {
    source: Arc<dyn RepoSource>,
    commit_count: u32,
    cache: Option<SnapshotCache>,
}

impl Analyzer {
    /// Build an analyzer over any source, honoring the cache settings.
    pub fn new(source: Arc<dyn RepoSource>, config: &GradeConfig) -> Self {
        let cache = config
            .cache
            .enabled
            .then(|| SnapshotCache::new(Duration::from_secs(config.cache.ttl_secs)));

        Self {
            source,
            commit_count: config.github.commit_count,
            cache,
        }
    }

    /// Build an analyzer talking to the configured GitHub API.
    pub fn from_config(config: &GradeConfig) -> Result<Self> {
        let client = GitHubClient::new(&config.github)?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Parse `url`, fetch the repository and grade it against the current time.
    pub async fn analyze_repository(&self, url: &str) -> Result<AnalysisResult> {
        let repo = parse_repo_url(url)?;

        let snapshot = match self.cache.as_ref().and_then(|c| c.get(&repo)) {
            Some(snapshot) => snapshot,
            None => {
                let snapshot = fetch_snapshot(self.source.as_ref(), &repo, self.commit_count).await?;
                if let Some(cache) = &self.cache {
                    cache.insert(&repo, snapshot.clone());
                }
                snapshot
            }
        };

        let result = analyze_snapshot(&snapshot, Utc::now());
        info!("Graded {}: {} ({})", repo, result.score, result.tier);
        Ok(result)
    }
}

/// Grade an already fetched snapshot. Pure: the same inputs always give
/// the same report.
pub fn analyze_snapshot(snapshot: &RepoSnapshot, now: DateTime<Utc>) -> AnalysisResult {
    let categories = score_categories(snapshot, now);
    let score = overall_score(&categories);
    debug!("Overall score {}", score);

    AnalysisResult {
        repo_name: snapshot.metadata.name.clone(),
        repo_url: snapshot.metadata.html_url.clone(),
        score,
        tier: Tier::from_score(score),
        industry_readiness: Readiness::from_score(score),
        summary: generate_summary(&snapshot.metadata, &categories, score),
        roadmap: generate_roadmap(&categories, score),
        red_flags: generate_red_flags(snapshot, now),
        readme_checklist: generate_checklist(snapshot),
        categories,
    }
}
