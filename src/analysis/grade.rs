// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Overall score, tier and readiness.

use serde::Serialize;
use std::fmt;

use super::report::CategoryScore;

/// Coarse quality band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Minimum overall score per tier, highest first.
const TIER_THRESHOLDS: [(u8, Tier); 3] = [(90, Tier::Platinum), (75, Tier::Gold), (60, Tier::Silver)];

impl Tier {
    /// Tier for an overall score.
    pub fn from_score(score: u8) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Bronze)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }

    /// Badge glyph for terminal output.
    pub fn badge(&self) -> &'static str {
        match self {
            Tier::Bronze => "🥉",
            Tier::Silver => "🥈",
            Tier::Gold => "🏆",
            Tier::Platinum => "💎",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Usage-context label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Readiness {
    Academic,
    #[serde(rename = "Portfolio-Ready")]
    PortfolioReady,
    #[serde(rename = "Industry-Ready")]
    IndustryReady,
}

const READINESS_THRESHOLDS: [(u8, Readiness); 2] =
    [(85, Readiness::IndustryReady), (65, Readiness::PortfolioReady)];

impl Readiness {
    /// Readiness for an overall score.
    pub fn from_score(score: u8) -> Self {
        READINESS_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, readiness)| *readiness)
            .unwrap_or(Readiness::Academic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Readiness::Academic => "Academic",
            Readiness::PortfolioReady => "Portfolio-Ready",
            Readiness::IndustryReady => "Industry-Ready",
        }
    }

    /// One-line explanation of the label.
    pub fn description(&self) -> &'static str {
        match self {
            Readiness::Academic => "Suitable for coursework and learning purposes",
            Readiness::PortfolioReady => "Good for showcasing skills to potential employers",
            Readiness::IndustryReady => "Meets professional production standards",
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rounded arithmetic mean of the category scores; 0 for no categories.
pub fn overall_score(categories: &[CategoryScore]) -> u8 {
    if categories.is_empty() {
        return 0;
    }
    let total: u32 = categories.iter().map(|c| u32::from(c.score)).sum();
    let mean = f64::from(total) / categories.len() as f64;
    mean.round().clamp(0.0, 100.0) as u8
}
