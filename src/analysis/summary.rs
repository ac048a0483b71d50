// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Summary paragraph generation.

use crate::github::RepositoryMetadata;

use super::report::CategoryScore;

/// Opening sentence by minimum overall score, highest band first.
const OPENINGS: [(u8, &str); 4] = [
    (
        85,
        "🎉 Excellent work! Your repository demonstrates professional-level development practices.",
    ),
    (
        70,
        "👍 Good job! Your repository shows solid development fundamentals with room for enhancement.",
    ),
    (
        55,
        "📈 Your repository has a good foundation but needs some improvements to reach its full potential.",
    ),
    (
        0,
        "🚀 Great start! With some focused improvements, this repository can become much stronger.",
    ),
];

const STRENGTH_THRESHOLD: u8 = 75;
const WEAKNESS_THRESHOLD: u8 = 60;
const MAX_NAMED: usize = 2;

const COMMUNITY_INTEREST: &str = "The community interest in your project shows it addresses a real need.";
const CLEAR_DESCRIPTION: &str = "Your clear project description helps others understand its purpose.";
const MISSING_DESCRIPTION: &str =
    "Consider adding a detailed description to help others understand your project's value.";

const CLOSING_BUILDING: &str =
    "Keep building - every improvement makes your repository more professional and valuable! 💪";
const CLOSING_ON_TRACK: &str = "You're on the right track to creating an industry-ready repository! 🌟";

fn opening(score: u8) -> &'static str {
    OPENINGS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, text)| *text)
        .unwrap_or(OPENINGS[OPENINGS.len() - 1].1)
}

fn named_titles<'a>(categories: impl Iterator<Item = &'a CategoryScore>) -> Option<String> {
    let titles: Vec<&str> = categories.take(MAX_NAMED).map(|c| c.title.as_str()).collect();
    if titles.is_empty() {
        None
    } else {
        Some(titles.join(" and "))
    }
}

/// Build the summary paragraph for a graded repository.
pub fn generate_summary(metadata: &RepositoryMetadata, categories: &[CategoryScore], score: u8) -> String {
    let mut sentences: Vec<String> = vec![opening(score).to_string()];

    if let Some(strengths) = named_titles(categories.iter().filter(|c| c.score >= STRENGTH_THRESHOLD)) {
        sentences.push(format!(
            "Your strongest areas are {}, which shows you understand these important aspects well.",
            strengths
        ));
    }

    if let Some(weaknesses) = named_titles(categories.iter().filter(|c| c.score < WEAKNESS_THRESHOLD)) {
        sentences.push(format!(
            "Focus on improving {} to significantly boost your repository's quality.",
            weaknesses
        ));
    }

    let community = if metadata.stargazers_count > 10 {
        COMMUNITY_INTEREST
    } else if metadata.description_text().chars().count() > 20 {
        CLEAR_DESCRIPTION
    } else {
        MISSING_DESCRIPTION
    };
    sentences.push(community.to_string());

    let closing = if score < 70 { CLOSING_BUILDING } else { CLOSING_ON_TRACK };
    sentences.push(closing.to_string());

    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::categories::Category;

    fn categories(values: [u8; 9]) -> Vec<CategoryScore> {
        Category::ALL
            .iter()
            .zip(values)
            .map(|(&kind, score)| CategoryScore {
                kind,
                title: kind.title().to_string(),
                score,
                description: kind.describe(score).to_string(),
                icon_name: kind.icon().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_opening_bands() {
        assert!(opening(85).starts_with("🎉"));
        assert!(opening(84).starts_with("👍"));
        assert!(opening(70).starts_with("👍"));
        assert!(opening(69).starts_with("📈"));
        assert!(opening(55).starts_with("📈"));
        assert!(opening(54).starts_with("🚀"));
        assert!(opening(0).starts_with("🚀"));
    }

    #[test]
    fn test_names_at_most_two_strengths_and_weaknesses() {
        let cats = categories([90, 80, 76, 40, 30, 20, 65, 65, 65]);
        let summary = generate_summary(&RepositoryMetadata::default(), &cats, 59);

        assert!(summary.contains("Your strongest areas are Code Quality and Project Structure,"));
        assert!(!summary.contains("Documentation,"));
        assert!(summary.contains("Focus on improving Testing and Git Practices to"));
        assert!(!summary.contains("Security to"));
        assert!(summary.contains(MISSING_DESCRIPTION));
        assert!(summary.ends_with(CLOSING_BUILDING));
    }

    #[test]
    fn test_single_named_category() {
        let cats = categories([76, 65, 65, 65, 65, 65, 65, 65, 65]);
        let summary = generate_summary(&RepositoryMetadata::default(), &cats, 66);
        assert!(summary.contains("Your strongest areas are Code Quality, which"));
        assert!(!summary.contains("Focus on improving"));
    }

    #[test]
    fn test_community_remarks() {
        let cats = categories([70; 9]);
        let mut metadata = RepositoryMetadata {
            description: Some("A well described project for everyone".to_string()),
            ..Default::default()
        };
        let summary = generate_summary(&metadata, &cats, 70);
        assert!(summary.contains(CLEAR_DESCRIPTION));
        assert!(summary.ends_with(CLOSING_ON_TRACK));

        metadata.stargazers_count = 11;
        let summary = generate_summary(&metadata, &cats, 70);
        assert!(summary.contains(COMMUNITY_INTEREST));
        assert!(!summary.contains(CLEAR_DESCRIPTION));
    }
}
