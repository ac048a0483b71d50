// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::analysis::{AnalysisResult, Analyzer};
use crate::config::{GradeConfig, OutputFormat};
use crate::error::{ConfigError, GradeError, Result, ResultExt};
use crate::github::parse_repo_url;
use crate::render::render;

use super::args::{AnalyzeArgs, Cli, Commands, InitArgs};

/// File written by `gitgrade init`.
const INIT_FILE: &str = "gitgrade.toml";

/// Output settings after applying command-line overrides.
#[derive(Debug, Clone, Copy)]
struct OutputSettings {
    format: OutputFormat,
    color: bool,
    hints: bool,
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(&args),
        Commands::Analyze(args) => {
            let mut config = if let Some(config_path) = &cli.config {
                GradeConfig::load_from(config_path)?
            } else {
                GradeConfig::load()?
            };
            if cli.no_cache {
                config.cache.enabled = false;
            }

            let output = OutputSettings {
                format: cli.format.unwrap_or(config.ui.format),
                color: config.ui.color && !cli.no_color,
                hints: config.ui.hints,
            };
            run_analyze(&config, output, args)
        }
    }
}

/// Run the analyze command.
fn run_analyze(config: &GradeConfig, output: OutputSettings, args: AnalyzeArgs) -> Result<()> {
    tracing::debug!("Running analyze command with args: {:?}", args);

    // Reject malformed URLs before any network setup
    for url in &args.urls {
        parse_repo_url(url)?;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let analyzer = Analyzer::from_config(config)?;

    if args.urls.is_empty() {
        return run_interactive(&runtime, &analyzer, output);
    }

    let mut failed = 0;
    for url in &args.urls {
        match analyze_with_spinner(&runtime, &analyzer, url) {
            Ok(result) => print_report(&result, output)?,
            Err(e) if args.urls.len() > 1 => {
                failed += 1;
                eprintln!("{} {}: {}", style("✗").red(), url, e);
            }
            Err(e) => return Err(e),
        }
    }

    if failed > 0 {
        return Err(GradeError::WithContext {
            context: "analyze".to_string(),
            message: format!(
                "{} of {} repositories could not be analyzed",
                failed,
                args.urls.len()
            ),
        });
    }

    Ok(())
}

/// Prompt for repositories until the user stops.
fn run_interactive(runtime: &Runtime, analyzer: &Analyzer, output: OutputSettings) -> Result<()> {
    if !Term::stderr().is_term() {
        return Err(GradeError::WithContext {
            context: "analyze".to_string(),
            message: "No repository URL given. Usage: gitgrade <URL>".to_string(),
        });
    }

    let term = Term::stderr();
    let theme = ColorfulTheme::default();

    loop {
        let url: String = Input::with_theme(&theme)
            .with_prompt("GitHub repository URL")
            .validate_with(|input: &String| parse_repo_url(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;

        match analyze_with_spinner(runtime, analyzer, &url) {
            Ok(result) => print_report(&result, output)?,
            Err(e) => term.write_line(&format!("{} {}", style("✗").red().bold(), e))?,
        }

        let again = Confirm::with_theme(&theme)
            .with_prompt("Analyze another repository?")
            .default(false)
            .interact()?;

        if !again {
            return Ok(());
        }
    }
}

/// Run one analysis behind a spinner.
fn analyze_with_spinner(runtime: &Runtime, analyzer: &Analyzer, url: &str) -> Result<AnalysisResult> {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(spinner.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]));
    }
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(format!("Analyzing {}...", url));

    let result = runtime.block_on(analyzer.analyze_repository(url));
    pb.finish_and_clear();
    result
}

fn print_report(result: &AnalysisResult, output: OutputSettings) -> Result<()> {
    println!("{}", render(result, output.format, output.color)?);

    if output.hints && output.format == OutputFormat::Text {
        let term = Term::stderr();
        term.write_line(&format!(
            "{}",
            style("Tip: use --format markdown to save this report card").dim()
        ))?;
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("gitgrade {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }
    if let Some(date) = crate::version::BUILD_DATE {
        println!("build date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: &InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new(INIT_FILE);

    if config_path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }
        .into());
    }

    std::fs::write(config_path, example_config())
        .context(format!("Failed to write {}", INIT_FILE))?;

    println!("✓ Created {}", INIT_FILE);

    Ok(())
}
