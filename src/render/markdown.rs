// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Markdown report card, rendered with Handlebars.

use handlebars::{no_escape, Handlebars};
use serde_json::json;

use crate::analysis::AnalysisResult;
use crate::error::{GradeError, Result};

const TEMPLATE_NAME: &str = "report";

const REPORT_TEMPLATE: &str = r#"# 📋 Report Card: {{repoName}}

<{{repoUrl}}>

| Overall | Tier | Industry Readiness |
|---|---|---|
| **{{score}}/100** | {{tierBadge}} {{tier}} | {{industryReadiness}} |

_{{readinessDescription}}_

## Summary

{{summary}}

## Categories

| Category | Score | Notes |
|---|---:|---|
{{#each categories}}
| {{title}} | {{score}} | {{description}} |
{{/each}}
{{#if roadmap}}

## Roadmap

{{#each roadmap}}
{{inc @index}}. **{{title}}** ({{priorityLabel}})
   {{description}}
{{/each}}
{{/if}}
{{#if redFlags}}

## Red Flags

{{#each redFlags}}
- **{{title}}**: {{description}}
{{/each}}
{{/if}}

## README Checklist

{{#each readmeChecklist}}
- [{{#if present}}x{{else}} {{/if}}] {{label}}
{{/each}}
"#;

fn inc_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let index = h.param(0).and_then(|v| v.value().as_u64()).unwrap_or(0);
    out.write(&(index + 1).to_string())?;
    Ok(())
}

fn registry() -> Result<Handlebars<'static>> {
    let mut hb = Handlebars::new();
    hb.register_escape_fn(no_escape);
    hb.set_strict_mode(true);
    hb.register_helper("inc", Box::new(inc_helper));
    hb.register_template_string(TEMPLATE_NAME, REPORT_TEMPLATE)
        .map_err(|e| GradeError::Render(e.to_string()))?;
    Ok(hb)
}

/// Render the report card as a Markdown document.
pub fn render_markdown(result: &AnalysisResult) -> Result<String> {
    let roadmap: Vec<_> = result
        .roadmap
        .iter()
        .map(|item| {
            json!({
                "title": item.title,
                "description": item.description,
                "priorityLabel": item.priority.label(),
            })
        })
        .collect();

    let data = json!({
        "repoName": result.repo_name,
        "repoUrl": result.repo_url,
        "score": result.score,
        "tier": result.tier.as_str(),
        "tierBadge": result.tier.badge(),
        "industryReadiness": result.industry_readiness.as_str(),
        "readinessDescription": result.industry_readiness.description(),
        "summary": result.summary,
        "categories": result.categories,
        "roadmap": roadmap,
        "redFlags": result.red_flags,
        "readmeChecklist": result.readme_checklist,
    });

    Ok(registry()?.render(TEMPLATE_NAME, &data)?)
}
