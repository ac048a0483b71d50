// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal report card.

use console::{style, StyledObject};
use std::fmt::Write;

use crate::analysis::{AnalysisResult, Priority, Tier};

use super::ScoreBand;

const BAR_WIDTH: usize = 20;
const RULE: &str = "────────────────────────────────────────────────────────────";

fn paint<D>(value: D, color: bool) -> StyledObject<D> {
    style(value).force_styling(color)
}

fn band_style<D>(value: D, score: u8, color: bool) -> StyledObject<D> {
    let styled = paint(value, color);
    match ScoreBand::from_score(score) {
        ScoreBand::Strong => styled.green(),
        ScoreBand::Fair => styled.yellow(),
        ScoreBand::Weak => styled.magenta(),
        ScoreBand::Poor => styled.red(),
    }
}

/// A fixed-width bar proportional to a 0-100 score.
fn score_bar(score: u8) -> String {
    let filled = (usize::from(score) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn tier_style<D>(value: D, tier: Tier, color: bool) -> StyledObject<D> {
    let styled = paint(value, color).bold();
    match tier {
        Tier::Platinum => styled.cyan(),
        Tier::Gold => styled.yellow(),
        Tier::Silver => styled.white(),
        Tier::Bronze => styled.red(),
    }
}

/// Render the report card for a terminal.
pub fn render_text(result: &AnalysisResult, color: bool) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, result, color);
    out
}

fn write_report(out: &mut String, result: &AnalysisResult, color: bool) -> std::fmt::Result {
    writeln!(out, "{}", paint(RULE, color).dim())?;
    writeln!(
        out,
        "{} {}",
        paint("📋 Report Card:", color).bold(),
        paint(&result.repo_name, color).bold().cyan()
    )?;
    writeln!(out, "   {}", paint(&result.repo_url, color).dim())?;
    writeln!(out, "{}", paint(RULE, color).dim())?;
    writeln!(out)?;

    writeln!(
        out,
        "  Overall  {}  {} {}",
        band_style(format!("{:>3}/100", result.score), result.score, color).bold(),
        result.tier.badge(),
        tier_style(result.tier.as_str(), result.tier, color)
    )?;
    writeln!(
        out,
        "  Ready    {} {}",
        paint(result.industry_readiness.as_str(), color).bold(),
        paint(format!("({})", result.industry_readiness.description()), color).dim()
    )?;
    writeln!(out)?;
    writeln!(out, "  {}", result.summary)?;
    writeln!(out)?;

    writeln!(out, "{}", paint("Categories", color).bold().underlined())?;
    for category in &result.categories {
        writeln!(
            out,
            "  {:<18} {} {}",
            category.title,
            band_style(score_bar(category.score), category.score, color),
            band_style(format!("{:>3}", category.score), category.score, color).bold()
        )?;
        writeln!(out, "  {:<18} {}", "", paint(&category.description, color).dim())?;
    }

    if !result.roadmap.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", paint("Roadmap", color).bold().underlined())?;
        for (i, item) in result.roadmap.iter().enumerate() {
            let label = match item.priority {
                Priority::High => paint(item.priority.label(), color).red(),
                Priority::Medium => paint(item.priority.label(), color).yellow(),
                Priority::Low => paint(item.priority.label(), color).blue(),
            };
            writeln!(out, "  {}. {} [{}]", i + 1, paint(&item.title, color).bold(), label)?;
            writeln!(out, "     {}", item.description)?;
        }
    }

    if !result.red_flags.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", paint("Red Flags", color).bold().red().underlined())?;
        for flag in &result.red_flags {
            writeln!(out, "  {}", paint(&flag.title, color).bold())?;
            writeln!(out, "     {}", flag.description)?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} {}",
        paint("README Checklist", color).bold().underlined(),
        paint(
            format!("({}/{})", result.checklist_present(), result.readme_checklist.len()),
            color
        )
        .dim()
    )?;
    for item in &result.readme_checklist {
        let mark = if item.present {
            paint("✓", color).green()
        } else {
            paint("✗", color).red()
        };
        writeln!(out, "  {} {}", mark, item.label)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0), "░".repeat(20));
        assert_eq!(score_bar(100), "█".repeat(20));
        assert_eq!(score_bar(50).chars().filter(|&c| c == '█').count(), 10);
        assert_eq!(score_bar(48).chars().count(), 20);
    }

    #[test]
    fn test_plain_text_has_no_escape_codes() {
        let text = render_text(&fixtures::result(), false);
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_text_sections() {
        let text = render_text(&fixtures::result(), false);

        assert!(text.contains("📋 Report Card: demo"));
        assert!(text.contains("68/100"));
        assert!(text.contains("🥈 Silver"));
        assert!(text.contains("Portfolio-Ready"));
        assert!(text.contains("Code Quality"));
        assert!(text.contains("1. 🧪 Add Comprehensive Tests [High Priority]"));
        assert!(text.contains("📚 Missing README File"));
        assert!(text.contains("README Checklist (1/2)"));
        assert!(text.contains("✓ Project Overview"));
        assert!(text.contains("✗ License"));
    }

    #[test]
    fn test_colored_text_is_styled() {
        let text = render_text(&fixtures::result(), true);
        assert!(text.contains('\u{1b}'));
    }
}
