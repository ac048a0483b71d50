// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository grading.
//!
//! Turns a fetched [`RepoSnapshot`](crate::github::RepoSnapshot) into an
//! [`AnalysisResult`]: nine category scores, the overall grade, a summary,
//! an improvement roadmap, red flags and a README checklist.

mod analyzer;
pub mod categories;
pub mod checklist;
pub mod grade;
pub mod red_flags;
mod report;
pub mod roadmap;
pub mod summary;

pub use analyzer::{analyze_snapshot, Analyzer};
pub use categories::{score_categories, Category};
pub use grade::{overall_score, Readiness, Tier};
pub use report::{
    AnalysisResult, CategoryScore, ChecklistItem, Priority, RedFlag, RedFlagKind, RoadmapItem,
};
