//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use lingo::LingoOptions;
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

use super::load_registry;
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Translation file or directory (.xml).
    #[arg(long)]
    pub path: PathBuf,

    /// Source language whose keys define the full set (e.g., en).
    #[arg(long)]
    pub source: String,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// One language in `--json` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LanguageReport<'a> {
    language: &'a str,
    translated: usize,
    total: usize,
    missing: &'a [String],
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let lingo = load_registry(LingoOptions::default(), &args.path)?;
    let snapshot = lingo.snapshot();

    let Some(source) = snapshot.get(&args.source) else {
        return Err(miette!(
            "No translations for source language '{}' in {}",
            args.source,
            args.path.display()
        ));
    };
    let total = source.len();

    // Keys compare case-insensitively, as in lookups.
    let coverage: Vec<LanguageCoverage> = args
        .lang
        .iter()
        .map(|lang| {
            let target = snapshot.get(lang);
            let missing: Vec<String> = source
                .keys()
                .filter(|key| target.is_none_or(|t| !t.contains_key(key)))
                .map(str::to_string)
                .collect();
            LanguageCoverage {
                language: lang.clone(),
                translated: total - missing.len(),
                missing,
            }
        })
        .collect();

    if args.json {
        let reports: Vec<LanguageReport<'_>> = coverage
            .iter()
            .map(|c| LanguageReport {
                language: &c.language,
                translated: c.translated,
                total,
                missing: &c.missing,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    } else {
        println!("{}", format_coverage_table(total, &coverage));
        for incomplete in coverage.iter().filter(|c| !c.missing.is_empty()) {
            println!();
            println!("Missing in {} ({}):", incomplete.language, incomplete.missing.len());
            for key in &incomplete.missing {
                println!("  {}", key);
            }
        }
    }

    let complete = coverage.iter().all(|c| c.missing.is_empty());
    Ok(if args.strict && !complete {
        exitcode::DATAERR
    } else {
        exitcode::OK
    })
}
