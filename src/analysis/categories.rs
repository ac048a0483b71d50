// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The nine category scorers.
//!
//! Each scorer is a pure function of a [`RepoSnapshot`] (and, for the
//! time-relative ones, the evaluation instant). Scores start from a base
//! value, move by fixed deltas for literal conditions, and are clamped.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::github::{CommitRecord, DirectoryEntry, RepoSnapshot, RepositoryMetadata};

use super::report::CategoryScore;

/// A scored aspect of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    CodeQuality,
    ProjectStructure,
    Documentation,
    Testing,
    GitPractices,
    Security,
    Performance,
    ErrorHandling,
    Practicality,
}

/// Display text for one category: title, icon and the three description bands.
struct CategoryProfile {
    title: &'static str,
    icon: &'static str,
    excellent: &'static str,
    good: &'static str,
    needs_work: &'static str,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Category; 9] = [
        Category::CodeQuality,
        Category::ProjectStructure,
        Category::Documentation,
        Category::Testing,
        Category::GitPractices,
        Category::Security,
        Category::Performance,
        Category::ErrorHandling,
        Category::Practicality,
    ];

    fn profile(&self) -> &'static CategoryProfile {
        match self {
            Category::CodeQuality => &CategoryProfile {
                title: "Code Quality",
                icon: "code",
                excellent: "Your code is well-structured and follows good practices",
                good: "Code organization needs improvement",
                needs_work: "Consider improving code structure and consistency",
            },
            Category::ProjectStructure => &CategoryProfile {
                title: "Project Structure",
                icon: "folder",
                excellent: "Excellent file organization and folder structure",
                good: "Basic structure in place",
                needs_work: "Reorganize files into logical folders (src/, docs/, tests/)",
            },
            Category::Documentation => &CategoryProfile {
                title: "Documentation",
                icon: "file",
                excellent: "Comprehensive documentation with clear instructions",
                good: "Good README with basic information",
                needs_work: "Add setup instructions, usage examples, and API docs",
            },
            Category::Testing => &CategoryProfile {
                title: "Testing",
                icon: "test",
                excellent: "Great test coverage and testing setup",
                good: "Some tests present",
                needs_work: "Add unit tests and aim for 70%+ code coverage",
            },
            Category::GitPractices => &CategoryProfile {
                title: "Git Practices",
                icon: "git",
                excellent: "Excellent commit messages and git workflow",
                good: "Good commit practices",
                needs_work: "Write more descriptive commit messages",
            },
            Category::Security => &CategoryProfile {
                title: "Security",
                icon: "shield",
                excellent: "Strong security practices implemented",
                good: "Basic security measures in place",
                needs_work: "Add input validation and remove any exposed secrets",
            },
            Category::Performance => &CategoryProfile {
                title: "Performance",
                icon: "gauge",
                excellent: "Well-optimized with performance considerations",
                good: "Decent performance setup",
                needs_work: "Add build optimization and consider bundle size",
            },
            Category::ErrorHandling => &CategoryProfile {
                title: "Error Handling",
                icon: "alert",
                excellent: "Robust error handling throughout",
                good: "Basic error handling present",
                needs_work: "Add try-catch blocks and user-friendly error messages",
            },
            Category::Practicality => &CategoryProfile {
                title: "Practicality",
                icon: "idea",
                excellent: "Solves real problems with clear value",
                good: "Addresses a specific use case",
                needs_work: "Clarify the problem this project solves",
            },
        }
    }

    /// Human title, e.g. "Code Quality".
    pub fn title(&self) -> &'static str {
        self.profile().title
    }

    /// Icon tag consumed by renderers.
    pub fn icon(&self) -> &'static str {
        self.profile().icon
    }

    /// Description for a score: >=80, >=60, else.
    pub fn describe(&self, score: u8) -> &'static str {
        let profile = self.profile();
        match score {
            80..=u8::MAX => profile.excellent,
            60..=79 => profile.good,
            _ => profile.needs_work,
        }
    }

    /// Score this category.
    pub fn score(&self, snapshot: &RepoSnapshot, now: DateTime<Utc>) -> u8 {
        let metadata = &snapshot.metadata;
        let entries = snapshot.entries.as_slice();

        match self {
            Category::CodeQuality => code_quality(metadata, entries),
            Category::ProjectStructure => project_structure(entries),
            Category::Documentation => documentation(snapshot),
            Category::Testing => testing(entries),
            Category::GitPractices => git_practices(&snapshot.commits, now),
            Category::Security => security(entries),
            Category::Performance => performance(metadata, entries),
            Category::ErrorHandling => error_handling(metadata, now),
            Category::Practicality => practicality(metadata, now),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Score every category once, in report order.
pub fn score_categories(snapshot: &RepoSnapshot, now: DateTime<Utc>) -> Vec<CategoryScore> {
    Category::ALL
        .iter()
        .map(|&kind| {
            let score = kind.score(snapshot, now);
            tracing::debug!("{}: {}", kind, score);
            CategoryScore {
                kind,
                title: kind.title().to_string(),
                score,
                description: kind.describe(score).to_string(),
                icon_name: kind.icon().to_string(),
            }
        })
        .collect()
}

const POPULAR_LANGUAGES: &[&str] = &["JavaScript", "TypeScript", "Python", "Java", "Go", "Rust"];
const SOURCE_DIRS: &[&str] = &["src", "lib", "app"];
const MANIFEST_FILES: &[&str] = &["package.json", "requirements.txt", "Cargo.toml", "go.mod", "pom.xml"];
const STRUCTURE_INDICATORS: &[&str] = &[
    "src",
    "lib",
    "app",
    "components",
    "utils",
    "services",
    "types",
    "interfaces",
];
const TEST_INDICATORS: &[&str] = &["test", "spec", "__tests__", "tests"];
const TEST_CONFIGS: &[&str] = &["jest.config", "vitest.config", "cypress.json", ".spec.ts", ".test.js"];
const BUNDLER_CONFIGS: &[&str] = &["webpack.config", "vite.config", "rollup.config", ".babelrc"];

const SECONDS_PER_DAY: f64 = 86_400.0;

fn clamp_score(score: i32, min: i32, max: i32) -> u8 {
    score.clamp(min, max) as u8
}

fn has_named(entries: &[DirectoryEntry], name: &str) -> bool {
    entries.iter().any(|e| e.name == name)
}

fn any_name_contains(entries: &[DirectoryEntry], needle: &str) -> bool {
    entries.iter().any(|e| e.name.contains(needle))
}

/// Fractional days from `then` to `now`; negative when `then` is in the future.
pub(crate) fn days_between(then: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - then).num_seconds() as f64 / SECONDS_PER_DAY
}

fn code_quality(metadata: &RepositoryMetadata, entries: &[DirectoryEntry]) -> u8 {
    let mut score = 50;

    if metadata
        .language
        .as_deref()
        .is_some_and(|lang| POPULAR_LANGUAGES.contains(&lang))
    {
        score += 10;
    }

    if SOURCE_DIRS.iter().any(|dir| has_named(entries, dir)) {
        score += 15;
    }

    if MANIFEST_FILES.iter().any(|file| has_named(entries, file)) {
        score += 10;
    }

    if metadata.size > 100 && metadata.size < 50_000 {
        score += 15;
    }

    clamp_score(score, 0, 100)
}

fn project_structure(entries: &[DirectoryEntry]) -> u8 {
    let lowered: Vec<String> = entries.iter().map(|e| e.name.to_lowercase()).collect();

    let matched = STRUCTURE_INDICATORS
        .iter()
        .filter(|indicator| lowered.iter().any(|name| name.contains(*indicator)))
        .count() as i32;

    let mut score = 40 + matched * 8;

    if has_named(entries, ".gitignore") {
        score += 10;
    }
    if any_name_contains(entries, "config") {
        score += 5;
    }

    clamp_score(score, 0, 100)
}

fn documentation(snapshot: &RepoSnapshot) -> u8 {
    let mut score = 20;

    if snapshot.has_readme() {
        score += 30;

        let readme = snapshot.readme.to_lowercase();
        if snapshot.readme.chars().count() > 500 {
            score += 20;
        }
        if readme.contains("installation") || readme.contains("setup") {
            score += 10;
        }
        if readme.contains("usage") || readme.contains("example") {
            score += 10;
        }
        if readme.contains("license") {
            score += 5;
        }
        if readme.contains("contributing") {
            score += 5;
        }
    }

    clamp_score(score, 0, 100)
}

fn testing(entries: &[DirectoryEntry]) -> u8 {
    let mut score = 20;

    let has_tests = entries.iter().any(|e| {
        let name = e.name.to_lowercase();
        TEST_INDICATORS.iter().any(|indicator| name.contains(indicator))
    });
    if has_tests {
        score += 60;
    }

    if TEST_CONFIGS.iter().any(|config| any_name_contains(entries, config)) {
        score += 20;
    }

    clamp_score(score, 0, 100)
}

/// A message that says what changed: longer than 10 characters, not a
/// bare "fix..."/"update..." and not work in progress.
fn is_descriptive_message(message: &str) -> bool {
    let message = message.to_lowercase();
    message.chars().count() > 10
        && !message.starts_with("fix")
        && !message.starts_with("update")
        && !message.contains("wip")
}

fn git_practices(commits: &[CommitRecord], now: DateTime<Utc>) -> u8 {
    if commits.is_empty() {
        return 20;
    }

    let mut score = 30;

    let descriptive = commits
        .iter()
        .filter(|c| is_descriptive_message(&c.message))
        .count();
    let ratio = descriptive as f64 / commits.len() as f64;
    score += (ratio * 40.0).round() as i32;

    let recent = commits
        .iter()
        .filter(|c| c.date.is_some_and(|date| days_between(date, now) <= 30.0))
        .count();
    if recent > 0 {
        score += 20;
    }
    if recent > 5 {
        score += 10;
    }

    clamp_score(score, 0, 100)
}

fn security(entries: &[DirectoryEntry]) -> u8 {
    let mut score = 60;

    if has_named(entries, "SECURITY.md") {
        score += 15;
    }
    if has_named(entries, ".env.example") {
        score += 10;
    }

    if has_named(entries, ".env") {
        score -= 20;
    }
    if any_name_contains(entries, "secret") || any_name_contains(entries, "key") {
        score -= 15;
    }

    clamp_score(score, 20, 100)
}

fn performance(metadata: &RepositoryMetadata, entries: &[DirectoryEntry]) -> u8 {
    let mut score = 50;

    if metadata.size < 10_000 {
        score += 20;
    } else if metadata.size > 100_000 {
        score -= 10;
    }

    if BUNDLER_CONFIGS.iter().any(|config| any_name_contains(entries, config)) {
        score += 20;
    }

    let is_js = matches!(metadata.language.as_deref(), Some("TypeScript" | "JavaScript"));
    if is_js && has_named(entries, "tsconfig.json") {
        score += 10;
    }

    clamp_score(score, 0, 100)
}

fn error_handling(metadata: &RepositoryMetadata, now: DateTime<Utc>) -> u8 {
    let mut score = 50;

    // Age and popularity stand in for code inspection
    let age_days = days_between(metadata.created_at, now);
    if age_days > 365.0 {
        score += 20;
    } else if age_days > 30.0 {
        score += 10;
    }

    if metadata.stargazers_count > 100 {
        score += 15;
    } else if metadata.stargazers_count > 10 {
        score += 10;
    }

    clamp_score(score, 0, 100)
}

fn practicality(metadata: &RepositoryMetadata, now: DateTime<Utc>) -> u8 {
    let mut score = 40;

    if metadata.description_text().chars().count() > 20 {
        score += 20;
    }

    if metadata.stargazers_count > 0 {
        score += 10;
    }
    if metadata.forks_count > 0 {
        score += 10;
    }
    if metadata.stargazers_count > 10 {
        score += 10;
    }

    if days_between(metadata.last_activity(), now) < 30.0 {
        score += 10;
    }

    clamp_score(score, 0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2025-06-01T00:00:00Z".parse().unwrap()
    }

    fn snapshot_with(entries: Vec<DirectoryEntry>) -> RepoSnapshot {
        RepoSnapshot {
            metadata: RepositoryMetadata {
                created_at: now(),
                updated_at: now() - Duration::days(400),
                ..Default::default()
            },
            entries,
            ..Default::default()
        }
    }

    fn score(category: Category, snapshot: &RepoSnapshot) -> u8 {
        category.score(snapshot, now())
    }

    #[test]
    fn test_code_quality_all_bonuses() {
        let mut snapshot = snapshot_with(vec![
            DirectoryEntry::dir("src"),
            DirectoryEntry::file("Cargo.toml"),
        ]);
        snapshot.metadata.language = Some("Rust".to_string());
        snapshot.metadata.size = 2_000;
        assert_eq!(score(Category::CodeQuality, &snapshot), 100);
    }

    #[test]
    fn test_code_quality_base() {
        let mut snapshot = snapshot_with(vec![DirectoryEntry::dir("source")]);
        snapshot.metadata.language = Some("Haskell".to_string());
        snapshot.metadata.size = 50_000;
        assert_eq!(score(Category::CodeQuality, &snapshot), 50);
    }

    #[test]
    fn test_project_structure_counts_indicators_once() {
        // "src" and "lib" match; "libs" and "library" do not add a second "lib"
        let snapshot = snapshot_with(vec![
            DirectoryEntry::dir("src"),
            DirectoryEntry::dir("libs"),
            DirectoryEntry::dir("library"),
            DirectoryEntry::file(".gitignore"),
        ]);
        assert_eq!(score(Category::ProjectStructure, &snapshot), 40 + 16 + 10);
    }

    #[test]
    fn test_project_structure_caps_at_100() {
        let snapshot = snapshot_with(vec![
            DirectoryEntry::dir("src"),
            DirectoryEntry::dir("lib"),
            DirectoryEntry::dir("app"),
            DirectoryEntry::dir("components"),
            DirectoryEntry::dir("utils"),
            DirectoryEntry::dir("services"),
            DirectoryEntry::dir("types"),
            DirectoryEntry::dir("interfaces"),
            DirectoryEntry::file(".gitignore"),
            DirectoryEntry::file("tsconfig.json"),
        ]);
        assert_eq!(score(Category::ProjectStructure, &snapshot), 100);
    }

    #[test]
    fn test_documentation_without_readme() {
        let snapshot = snapshot_with(vec![DirectoryEntry::dir("src")]);
        assert_eq!(score(Category::Documentation, &snapshot), 20);
    }

    #[test]
    fn test_documentation_keywords_are_case_insensitive() {
        let mut snapshot = snapshot_with(vec![DirectoryEntry::file("README.md")]);
        snapshot.readme = "# Tool\n## Installation\n## Usage\n## License\n".to_string();
        assert_eq!(score(Category::Documentation, &snapshot), 20 + 30 + 10 + 10 + 5);
    }

    #[test]
    fn test_documentation_full_marks() {
        let mut snapshot = snapshot_with(vec![DirectoryEntry::file("readme.md")]);
        snapshot.readme = format!(
            "Setup, usage, license, contributing. {}",
            "x".repeat(500)
        );
        assert_eq!(score(Category::Documentation, &snapshot), 100);
    }

    #[test]
    fn test_testing_scores() {
        assert_eq!(score(Category::Testing, &snapshot_with(vec![])), 20);
        assert_eq!(
            score(Category::Testing, &snapshot_with(vec![DirectoryEntry::dir("Tests")])),
            80
        );
        assert_eq!(
            score(
                Category::Testing,
                &snapshot_with(vec![DirectoryEntry::file("jest.config.js")])
            ),
            40
        );
        assert_eq!(
            score(
                Category::Testing,
                &snapshot_with(vec![
                    DirectoryEntry::dir("__tests__"),
                    DirectoryEntry::file("vitest.config.ts"),
                ])
            ),
            100
        );
    }

    fn commit(message: &str, days_ago: i64) -> CommitRecord {
        CommitRecord::new(message, Some(now() - Duration::days(days_ago)))
    }

    #[test]
    fn test_git_practices_no_commits() {
        assert_eq!(git_practices(&[], now()), 20);
    }

    #[test]
    fn test_git_practices_all_vague_and_old() {
        let commits: Vec<_> = (0..10).map(|_| commit("fix", 400)).collect();
        assert_eq!(git_practices(&commits, now()), 30);
    }

    #[test]
    fn test_git_practices_scaled_ratio() {
        // 1 of 3 descriptive: 40 / 3 = 13.3 rounds to 13
        let commits = vec![
            commit("Add configuration loader", 100),
            commit("fix typo in readme", 100),
            commit("wip", 100),
        ];
        assert_eq!(git_practices(&commits, now()), 43);
    }

    #[test]
    fn test_git_practices_recency() {
        let few: Vec<_> = (0..3).map(|_| commit("Implement the thing", 2)).collect();
        assert_eq!(git_practices(&few, now()), 30 + 40 + 20);

        let many: Vec<_> = (0..6).map(|_| commit("Implement the thing", 2)).collect();
        assert_eq!(git_practices(&many, now()), 100);
    }

    #[test]
    fn test_security_bounds() {
        let good = snapshot_with(vec![
            DirectoryEntry::file("SECURITY.md"),
            DirectoryEntry::file(".env.example"),
        ]);
        assert_eq!(score(Category::Security, &good), 85);

        let bad = snapshot_with(vec![
            DirectoryEntry::file(".env"),
            DirectoryEntry::file("secrets.json"),
        ]);
        assert_eq!(score(Category::Security, &bad), 25);
    }

    #[test]
    fn test_security_penalties_apply_once() {
        let worst = snapshot_with(vec![
            DirectoryEntry::file(".env"),
            DirectoryEntry::file("secrets.json"),
            DirectoryEntry::file("api_key.pem"),
            DirectoryEntry::dir("keys"),
        ]);
        assert_eq!(score(Category::Security, &worst), 25);
    }

    #[test]
    fn test_performance() {
        let mut snapshot = snapshot_with(vec![
            DirectoryEntry::file("vite.config.ts"),
            DirectoryEntry::file("tsconfig.json"),
        ]);
        snapshot.metadata.size = 500;
        snapshot.metadata.language = Some("TypeScript".to_string());
        assert_eq!(score(Category::Performance, &snapshot), 100);

        snapshot.metadata.size = 200_000;
        snapshot.metadata.language = Some("Python".to_string());
        assert_eq!(score(Category::Performance, &snapshot), 60);
    }

    #[test]
    fn test_error_handling_uses_else_branches() {
        let mut snapshot = snapshot_with(vec![]);
        snapshot.metadata.created_at = now() - Duration::days(1000);
        snapshot.metadata.stargazers_count = 500;
        assert_eq!(score(Category::ErrorHandling, &snapshot), 50 + 20 + 15);

        snapshot.metadata.created_at = now() - Duration::days(60);
        snapshot.metadata.stargazers_count = 11;
        assert_eq!(score(Category::ErrorHandling, &snapshot), 50 + 10 + 10);

        snapshot.metadata.created_at = now() - Duration::days(5);
        snapshot.metadata.stargazers_count = 0;
        assert_eq!(score(Category::ErrorHandling, &snapshot), 50);
    }

    #[test]
    fn test_practicality() {
        let mut snapshot = snapshot_with(vec![]);
        assert_eq!(score(Category::Practicality, &snapshot), 40);

        snapshot.metadata.description = Some("A tool that grades GitHub repositories".to_string());
        snapshot.metadata.stargazers_count = 12;
        snapshot.metadata.forks_count = 1;
        snapshot.metadata.pushed_at = Some(now() - Duration::days(3));
        assert_eq!(score(Category::Practicality, &snapshot), 100);
    }

    #[test]
    fn test_describe_bands() {
        assert_eq!(
            Category::Testing.describe(80),
            "Great test coverage and testing setup"
        );
        assert_eq!(Category::Testing.describe(79), "Some tests present");
        assert_eq!(Category::Testing.describe(60), "Some tests present");
        assert_eq!(
            Category::Testing.describe(59),
            "Add unit tests and aim for 70%+ code coverage"
        );
    }

    #[test]
    fn test_score_categories_is_complete_and_consistent() {
        let snapshot = snapshot_with(vec![DirectoryEntry::dir("src")]);
        let scores = score_categories(&snapshot, now());

        assert_eq!(scores.len(), 9);
        for (score, kind) in scores.iter().zip(Category::ALL) {
            assert_eq!(score.kind, kind);
            assert_eq!(score.title, kind.title());
            assert_eq!(score.description, kind.describe(score.score));
            assert!(score.score <= 100);
        }
        assert_eq!(scores, score_categories(&snapshot, now()));
    }
}
