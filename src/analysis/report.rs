// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The analysis result handed to renderers.

use serde::Serialize;
use std::fmt;

use super::categories::Category;
use super::grade::{Readiness, Tier};

/// The complete report card for one repository.
///
/// Serializes with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub repo_name: String,
    pub repo_url: String,
    /// Rounded mean of the category scores.
    pub score: u8,
    pub tier: Tier,
    pub industry_readiness: Readiness,
    pub summary: String,
    /// All nine categories, in [`Category::ALL`] order.
    pub categories: Vec<CategoryScore>,
    pub roadmap: Vec<RoadmapItem>,
    pub red_flags: Vec<RedFlag>,
    pub readme_checklist: Vec<ChecklistItem>,
}

impl AnalysisResult {
    /// Score of one category.
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.kind == category)
    }

    /// Number of checklist items found in the README.
    pub fn checklist_present(&self) -> usize {
        self.readme_checklist.iter().filter(|i| i.present).count()
    }
}

/// One scored category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    #[serde(skip)]
    pub kind: Category,
    pub title: String,
    /// Always within 0..=100.
    pub score: u8,
    pub description: String,
    pub icon_name: String,
}

/// Roadmap priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Label shown next to a roadmap item.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// One improvement suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapItem {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// What a red flag is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlagKind {
    PoorCommits,
    MissingDocs,
    SecurityIssue,
    UnusedFiles,
    InactiveRepository,
}

/// An independently detected issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedFlag {
    #[serde(rename = "type")]
    pub kind: RedFlagKind,
    pub title: String,
    pub description: String,
}

/// One README checklist line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    pub label: String,
    pub present: bool,
}
