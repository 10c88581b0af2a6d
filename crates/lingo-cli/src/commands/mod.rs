//! CLI command implementations.

mod check;
mod coverage;
mod translate;

use std::path::Path;

use lingo::{Lingo, LingoOptions};
use miette::Result;
use tracing::debug;

use crate::output::load_error_report;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use translate::{run_translate, TranslateArgs};

/// Build a registry over the translations at `path` and load it.
fn load_registry(mut options: LingoOptions, path: &Path) -> Result<Lingo> {
    options.add_translation_xml(path, true);
    let lingo = Lingo::new(options);
    lingo.load().map_err(load_error_report)?;
    debug!(path = %path.display(), languages = ?lingo.languages(), "registry loaded");
    Ok(lingo)
}
