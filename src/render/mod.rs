// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Report card renderers.

mod markdown;
mod text;

pub use markdown::render_markdown;
pub use text::render_text;

use crate::analysis::AnalysisResult;
use crate::config::OutputFormat;
use crate::error::Result;

/// How a category score reads at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Strong,
            60..=79 => ScoreBand::Fair,
            40..=59 => ScoreBand::Weak,
            _ => ScoreBand::Poor,
        }
    }
}

/// Render a report card in the requested format.
///
/// `color` only affects [`OutputFormat::Text`].
pub fn render(result: &AnalysisResult, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, color)),
        OutputFormat::Json => render_json(result),
        OutputFormat::Markdown => render_markdown(result),
    }
}

/// Pretty-printed JSON with camelCase keys.
pub fn render_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
