// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Improvement roadmap generation.

use super::categories::Category;
use super::report::{CategoryScore, Priority, RoadmapItem};

/// Categories scoring below this get a roadmap item.
pub const ROADMAP_THRESHOLD: u8 = 70;

/// The roadmap never grows beyond this many items.
pub const MAX_ROADMAP_ITEMS: usize = 6;

/// A fixed roadmap entry.
#[derive(Debug, Clone, Copy)]
pub struct RoadmapTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
}

impl RoadmapTemplate {
    fn to_item(self) -> RoadmapItem {
        RoadmapItem {
            title: self.title.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
        }
    }
}

/// The template for an underperforming category. Code Quality and
/// Practicality have none.
pub fn category_template(category: Category) -> Option<RoadmapTemplate> {
    let template = match category {
        Category::ProjectStructure => RoadmapTemplate {
            title: "📁 Organize Project Structure",
            description: "Create clear folders like src/, docs/, tests/. Group related files together. This makes your project easier to navigate and understand.",
            priority: Priority::Medium,
        },
        Category::Documentation => RoadmapTemplate {
            title: "📚 Enhance Documentation",
            description: "Add clear setup instructions, usage examples, and screenshots. A good README should help someone understand and use your project in 5 minutes.",
            priority: Priority::High,
        },
        Category::Testing => RoadmapTemplate {
            title: "🧪 Add Comprehensive Tests",
            description: "Create unit tests for your main functions. Start with testing the most important features first. Tools like Jest, Vitest, or Pytest can help you get started quickly.",
            priority: Priority::High,
        },
        Category::GitPractices => RoadmapTemplate {
            title: "📝 Improve Commit Messages",
            description: "Write clear commit messages that explain what changed and why. Use format like \"Add user authentication\" instead of just \"fix\".",
            priority: Priority::Low,
        },
        Category::Security => RoadmapTemplate {
            title: "🔒 Improve Security Practices",
            description: "Remove any hardcoded passwords or API keys. Add input validation to prevent common security issues. Use environment variables for sensitive data.",
            priority: Priority::High,
        },
        Category::Performance => RoadmapTemplate {
            title: "⚡ Optimize Performance",
            description: "Add build optimization, minimize bundle size, and implement caching where appropriate. Consider lazy loading for better user experience.",
            priority: Priority::Medium,
        },
        Category::ErrorHandling => RoadmapTemplate {
            title: "🛠️ Enhance Error Handling",
            description: "Add try-catch blocks around risky operations. Provide helpful error messages that guide users on what went wrong and how to fix it.",
            priority: Priority::Medium,
        },
        Category::CodeQuality | Category::Practicality => return None,
    };
    Some(template)
}

/// Appended when the overall score is below 80.
pub const CI_CD_TEMPLATE: RoadmapTemplate = RoadmapTemplate {
    title: "🚀 Set Up CI/CD Pipeline",
    description: "Use GitHub Actions to automatically test your code when you push changes. This catches bugs early and shows professionalism.",
    priority: Priority::Medium,
};

/// Appended when the overall score is below 60.
pub const PROJECT_GOALS_TEMPLATE: RoadmapTemplate = RoadmapTemplate {
    title: "🎯 Define Project Goals",
    description: "Clearly explain what problem your project solves and who it's for. Add a demo or screenshots to show it in action.",
    priority: Priority::High,
};

/// Build the roadmap: one item per templated category under the threshold,
/// in category order, then the general items, truncated to the maximum.
pub fn generate_roadmap(categories: &[CategoryScore], overall: u8) -> Vec<RoadmapItem> {
    let mut roadmap: Vec<RoadmapItem> = categories
        .iter()
        .filter(|c| c.score < ROADMAP_THRESHOLD)
        .filter_map(|c| category_template(c.kind))
        .map(RoadmapTemplate::to_item)
        .collect();

    if overall < 80 {
        roadmap.push(CI_CD_TEMPLATE.to_item());
    }
    if overall < 60 {
        roadmap.push(PROJECT_GOALS_TEMPLATE.to_item());
    }

    roadmap.truncate(MAX_ROADMAP_ITEMS);
    roadmap
}
