//! Handler for the `check` command.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use colored::*;
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use mdfence_lib::analysis::{Diagnostic, compute_diagnostics};
use mdfence_lib::config::Config;
use mdfence_lib::exit_codes::exit;
use mdfence_lib::utils::line_index::LineIndex;

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Files or directories to check. Defaults to the current directory.
    #[arg(required = false)]
    pub paths: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Exclude files or directories (comma-separated glob patterns)
    #[arg(long)]
    pub exclude: Option<String>,

    /// Ignore .gitignore files when scanning directories
    #[arg(long)]
    pub no_gitignore: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Only print diagnostics, no summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// A diagnostic with 1-based positions, as reported on the command line
#[derive(Debug, Serialize)]
struct Finding {
    file: String,
    line: u32,
    column: u32,
    end_line: u32,
    end_column: u32,
    severity: &'static str,
    message: String,
    tag: String,
}

impl Finding {
    fn new(file: &str, diagnostic: &Diagnostic, index: &LineIndex<'_>) -> Self {
        let (start, end) = diagnostic.positions(index);
        Self {
            file: file.to_string(),
            line: start.line + 1,
            column: start.character + 1,
            end_line: end.line + 1,
            end_column: end.character + 1,
            severity: "warning",
            message: diagnostic.message.clone(),
            tag: diagnostic.tag.clone(),
        }
    }
}

enum FileResult {
    Checked(Vec<Finding>),
    Failed { file: String, error: String },
}

/// Handle the check command: report unrecognized language tags and exit with the matching code.
pub fn handle_check(args: &CheckArgs) {
    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    let files = match find_markdown_files(args, &config) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };
    log::debug!("Checking {} file(s)", files.len());

    #[cfg(feature = "parallel")]
    let results: Vec<FileResult> = files.par_iter().map(|path| check_file(path)).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<FileResult> = files.iter().map(|path| check_file(path)).collect();

    let mut findings = Vec::new();
    let mut had_errors = false;
    for result in results {
        match result {
            FileResult::Checked(file_findings) => findings.extend(file_findings),
            FileResult::Failed { file, error } => {
                eprintln!("{}: Failed to read {}: {}", "Error".red().bold(), file, error);
                had_errors = true;
            }
        }
    }

    match args.output_format {
        OutputFormat::Text => print_text(&findings, files.len(), args.quiet),
        OutputFormat::Json => match serde_json::to_string_pretty(&findings) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{}: Failed to serialize results: {}", "Error".red().bold(), e);
                exit::tool_error();
            }
        },
    }

    if had_errors {
        exit::tool_error();
    }
    if !findings.is_empty() {
        exit::violations_found();
    }
}

fn check_file(path: &Path) -> FileResult {
    let file = path.display().to_string();
    match fs::read_to_string(path) {
        Ok(content) => {
            let index = LineIndex::new(&content);
            let findings = compute_diagnostics(&content)
                .iter()
                .map(|diagnostic| Finding::new(&file, diagnostic, &index))
                .collect();
            FileResult::Checked(findings)
        }
        Err(e) => FileResult::Failed {
            file,
            error: e.to_string(),
        },
    }
}

fn print_text(findings: &[Finding], file_count: usize, quiet: bool) {
    for finding in findings {
        println!(
            "{}:{}:{}: {} {} \"{}\"",
            finding.file.bold(),
            finding.line,
            finding.column,
            "warning:".yellow().bold(),
            finding.message,
            finding.tag
        );
    }

    if quiet {
        return;
    }

    if findings.is_empty() {
        println!(
            "{} No unrecognized language identifiers in {} file(s)",
            "Success:".green().bold(),
            file_count
        );
    } else {
        let files_with_findings = findings
            .iter()
            .map(|finding| finding.file.as_str())
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        println!(
            "\n{} Found {} unrecognized language identifier(s) in {} of {} file(s)",
            "Summary:".yellow().bold(),
            findings.len(),
            files_with_findings,
            file_count
        );
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.iter().any(|md| ext.eq_ignore_ascii_case(md)))
}

/// Collect the Markdown files under `args.paths`, honouring include/exclude patterns.
///
/// Explicitly named files are always checked, whatever their extension.
fn find_markdown_files(args: &CheckArgs, config: &Config) -> Result<Vec<PathBuf>, ignore::Error> {
    let paths: Vec<&str> = if args.paths.is_empty() {
        vec!["."]
    } else {
        args.paths.iter().map(String::as_str).collect()
    };

    let mut excludes: Vec<String> = config.global.exclude.clone();
    if let Some(extra) = &args.exclude {
        excludes.extend(extra.split(',').map(|p| p.trim().to_string()).filter(|p| !p.is_empty()));
    }
    let respect_gitignore = config.global.respect_gitignore && !args.no_gitignore;

    let mut files = Vec::new();
    for path in paths {
        let root = Path::new(path);
        if root.is_file() {
            files.push(root.to_path_buf());
            continue;
        }

        let mut overrides = OverrideBuilder::new(root);
        for pattern in &config.global.include {
            overrides.add(pattern)?;
        }
        for pattern in &excludes {
            overrides.add(&format!("!{pattern}"))?;
        }

        let walker = WalkBuilder::new(root)
            .git_ignore(respect_gitignore)
            .git_global(respect_gitignore)
            .git_exclude(respect_gitignore)
            .require_git(false)
            .overrides(overrides.build()?)
            .build();

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_some_and(|ft| ft.is_file()) && is_markdown_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
