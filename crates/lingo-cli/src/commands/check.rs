//! Implementation of the `lingo check` command.

use std::path::PathBuf;

use lingo::loader::read_xml_file;
use lingo::parser::parse_document;
use miette::{IntoDiagnostic, Report, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::{load_error_report, LingoDiagnostic};

const TRANSLATIONS_ELEMENT: &str = "Translations";
const LANGUAGE_ATTRIBUTE: &str = "Language";

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.xml)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    ok: bool,
    languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());
    let mut diagnostics = Vec::new();

    for path in &args.files {
        let content = read_xml_file(path).map_err(load_error_report)?;
        let file = path.display().to_string();

        match parse_document(&content) {
            Ok(root) => {
                let languages = root
                    .descendants_named(TRANSLATIONS_ELEMENT)
                    .into_iter()
                    .filter_map(|t| t.attribute(LANGUAGE_ATTRIBUTE))
                    .map(str::to_string)
                    .collect();
                results.push(CheckJson {
                    file,
                    ok: true,
                    languages,
                    line: None,
                    column: None,
                    error: None,
                });
            }
            Err(e) => {
                let (line, column) = e.position();
                results.push(CheckJson {
                    file,
                    ok: false,
                    languages: Vec::new(),
                    line: Some(line),
                    column: Some(column),
                    error: Some(e.message()),
                });
                diagnostics.push(LingoDiagnostic::from_parse_error(path, &content, &e));
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&results).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        for result in results.iter().filter(|r| r.ok) {
            let status = "ok".if_supports_color(Stream::Stdout, OwoColorize::green);
            if result.languages.is_empty() {
                println!("{} {} (no translations)", status, result.file);
            } else {
                println!("{} {} [{}]", status, result.file, result.languages.join(", "));
            }
        }
        for diagnostic in diagnostics {
            eprintln!("{:?}", Report::new(diagnostic));
        }
    }

    if results.iter().all(|r| r.ok) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
