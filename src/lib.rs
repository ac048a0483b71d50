// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! gitgrade - GitHub Repository Report Cards
//!
//! Grades a public GitHub repository the way a reviewer would skim it.
//!
//! # Features
//!
//! - **Nine Category Scores**: code quality, structure, docs, tests, git
//!   hygiene, security, performance, error handling and practicality
//! - **Overall Grade**: a 0-100 score with a tier and an industry-readiness label
//! - **Roadmap**: prioritized improvement suggestions for weak categories
//! - **Red Flags**: independently detected issues such as exposed secrets
//! - **README Checklist**: which sections a good README is missing
//! - **Report Formats**: terminal, JSON and Markdown
//!
//! # Example
//!
//! ```no_run
//! use gitgrade::analysis::Analyzer;
//! use gitgrade::config::GradeConfig;
//!
//! # async fn run() -> gitgrade::Result<()> {
//! let config = GradeConfig::load()?;
//! let analyzer = Analyzer::from_config(&config)?;
//!
//! let report = analyzer
//!     .analyze_repository("https://github.com/rust-lang/rustlings")
//!     .await?;
//! println!("{}: {} ({})", report.repo_name, report.score, report.tier);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod render;

// Re-exports for convenience
pub use analysis::{analyze_snapshot, AnalysisResult, Analyzer};
pub use config::GradeConfig;
pub use error::{GradeError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of gitgrade.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// The build date (if available).
    pub const BUILD_DATE: Option<&str> = option_env!("VERGEN_BUILD_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
