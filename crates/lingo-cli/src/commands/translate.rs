//! Implementation of the `lingo translate` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use lingo::{LingoOptions, LingoSettings, MissingTranslationMode};
use miette::{miette, IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::load_registry;

/// Arguments for the translate command.
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Translation file or directory (.xml)
    #[arg(long)]
    pub path: PathBuf,

    /// Language tag (e.g., en, fr-CA)
    #[arg(long)]
    pub lang: String,

    /// Prefix prepended to every key
    #[arg(long)]
    pub prefix: Option<String>,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Missing translation handling; overrides the config file
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Keys to resolve; `#Key` ignores the prefix
    #[arg(required = true)]
    pub keys: Vec<String>,
}

/// Missing translation handling selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    #[value(name = "AsName")]
    AsName,
    #[value(name = "AsReadable")]
    AsReadable,
    #[value(name = "AsError")]
    AsError,
}

impl From<ModeArg> for MissingTranslationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::AsName => MissingTranslationMode::AsName,
            ModeArg::AsReadable => MissingTranslationMode::AsReadable,
            ModeArg::AsError => MissingTranslationMode::AsError,
        }
    }
}

/// JSON output for one resolved key.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslationJson {
    key: String,
    full_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

fn read_settings(args: &TranslateArgs) -> Result<LingoSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            let content = read_to_string(path)
                .into_diagnostic()
                .map_err(|e| miette!("Cannot read config file {}: {}", path.display(), e))?;
            serde_json::from_str(&content)
                .into_diagnostic()
                .map_err(|e| miette!("Invalid config file {}: {}", path.display(), e))?
        }
        None => LingoSettings::default(),
    };
    if let Some(mode) = args.mode {
        settings.missing_translation_mode = Some(mode.into());
    }
    Ok(settings)
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> Result<i32> {
    let mut options = LingoOptions::from(read_settings(&args)?);
    for (name, value) in &args.params {
        let value = value.clone();
        options.add_parameter(name.as_str(), move |_, _| value.clone());
    }

    let lingo = load_registry(options, &args.path)?;
    let translator = lingo.get_translator(Some(&args.lang), args.prefix.as_deref());

    let mut results = Vec::with_capacity(args.keys.len());
    for key in &args.keys {
        let (value, error) = match translator.translate(key) {
            Ok(text) => (Some(text), None),
            Err(e) => (None, Some(e.to_string())),
        };
        results.push(TranslationJson {
            key: key.clone(),
            full_key: translator.full_key(key),
            value,
            error,
        });
    }

    let any_missing = results.iter().any(|r| r.error.is_some());

    if args.json {
        let json_output = serde_json::to_string_pretty(&results).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        for result in &results {
            let key = result
                .full_key
                .if_supports_color(Stream::Stdout, OwoColorize::dimmed)
                .to_string();
            match (&result.value, &result.error) {
                (Some(value), _) => println!("{} = {}", key, value),
                (None, Some(error)) => eprintln!(
                    "{} {}",
                    "error:".if_supports_color(Stream::Stderr, OwoColorize::red),
                    error
                ),
                (None, None) => println!("{}", key),
            }
        }
    }

    if any_missing {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
