// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! README completeness checklist.

use crate::github::{DirectoryEntry, RepoSnapshot};

use super::report::ChecklistItem;

/// What a checklist line looks for.
enum Check {
    /// A heading marker, or more than 100 characters of text.
    Overview,
    /// Any keyword in the lowercased README.
    Keywords(&'static [&'static str]),
    /// Any keyword in the README, or a root entry whose name contains it.
    KeywordsOrEntry(&'static str),
}

const CHECKLIST: [(&str, Check); 8] = [
    ("Project Overview", Check::Overview),
    ("Setup Instructions", Check::Keywords(&["install", "setup"])),
    ("Usage Examples", Check::Keywords(&["usage", "example"])),
    ("Screenshots/Demo", Check::Keywords(&["![", "demo"])),
    ("API Documentation", Check::Keywords(&["api"])),
    ("Contributing Guide", Check::KeywordsOrEntry("contribut")),
    ("License", Check::KeywordsOrEntry("license")),
    ("Future Scope", Check::Keywords(&["todo", "roadmap", "future"])),
];

impl Check {
    fn passes(&self, readme: &str, lowered: &str, entries: &[DirectoryEntry]) -> bool {
        match self {
            Check::Overview => readme.contains("##") || readme.chars().count() > 100,
            Check::Keywords(words) => words.iter().any(|w| lowered.contains(w)),
            Check::KeywordsOrEntry(word) => {
                lowered.contains(word)
                    || entries.iter().any(|e| e.name.to_lowercase().contains(word))
            }
        }
    }
}

/// Evaluate the eight checklist lines against the README and root listing.
pub fn generate_checklist(snapshot: &RepoSnapshot) -> Vec<ChecklistItem> {
    let lowered = snapshot.readme.to_lowercase();

    CHECKLIST
        .iter()
        .map(|(label, check)| ChecklistItem {
            label: label.to_string(),
            present: check.passes(&snapshot.readme, &lowered, &snapshot.entries),
        })
        .collect()
}
