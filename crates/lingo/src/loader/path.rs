use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8};
use ignore::WalkBuilder;
use tracing::debug;

use super::{LoadSession, Loader, load_xml};
use crate::error::LoadError;

/// Loads XML translations from a file or a directory tree.
///
/// A directory is searched recursively for `*.xml` files, which are loaded
/// in path order so later files override earlier ones deterministically.
#[derive(Debug, Clone)]
pub struct XmlPathLoader {
    path: PathBuf,
    throw_if_not_exists: bool,
}

impl XmlPathLoader {
    pub fn new(path: impl Into<PathBuf>, throw_if_not_exists: bool) -> Self {
        Self {
            path: path.into(),
            throw_if_not_exists,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Loader for XmlPathLoader {
    fn load(&self, session: &mut LoadSession<'_>) -> Result<(), LoadError> {
        if self.path.is_dir() {
            for file in xml_files(&self.path)? {
                load_file(session, &file)?;
            }
        } else if self.path.is_file() {
            load_file(session, &self.path)?;
        } else if self.throw_if_not_exists {
            return Err(LoadError::NotFound {
                path: self.path.clone(),
            });
        } else {
            debug!(path = %self.path.display(), "translation path does not exist, skipping");
        }
        Ok(())
    }
}

/// All `*.xml` files below `dir`, sorted by path.
pub(crate) fn xml_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();

    for result in WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(true)
        .build()
    {
        let entry = result.map_err(|source| LoadError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            continue;
        }

        let path = entry.path();
        let is_xml = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        if is_xml {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

fn load_file(session: &mut LoadSession<'_>, path: &Path) -> Result<usize, LoadError> {
    let content = read_xml_file(path)?;
    load_xml(session, path, &content)
}

/// Read an XML file into a string.
///
/// A byte order mark selects the encoding; without one, the `encoding` named
/// in the XML declaration is used, and UTF-8 otherwise.
pub fn read_xml_file(path: &Path) -> Result<String, LoadError> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let bytes = fs::read(path).map_err(io_error)?;
    decode_xml(&bytes).map(Cow::into_owned).map_err(io_error)
}

fn decode_xml(bytes: &[u8]) -> io::Result<Cow<'_, str>> {
    let (encoding, bom_length) = Encoding::for_bom(bytes)
        .unwrap_or_else(|| (declared_encoding(bytes).unwrap_or(UTF_8), 0));
    let body = bytes.get(bom_length..).unwrap_or_default();

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| {
            io::Error::new(
                ErrorKind::InvalidData,
                format!("stream did not contain valid {}", encoding.name()),
            )
        })
}

/// The encoding named by a leading `<?xml ... encoding="..."?>` declaration.
///
/// A declaration that reads as ASCII rules out UTF-16, so UTF-16 labels map
/// to UTF-8 here.
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let declaration = bytes.strip_prefix(b"<?xml")?;
    let end = declaration.windows(2).position(|w| w == b"?>")?;
    let declaration = declaration.get(..end)?;

    let name_at = declaration.windows(8).position(|w| w == b"encoding")?;
    let rest = declaration
        .get(name_at + 8..)?
        .trim_ascii_start()
        .strip_prefix(b"=")?
        .trim_ascii_start();
    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let label = rest.get(..rest.iter().position(|&b| b == quote)?)?;

    Encoding::for_label(label).map(Encoding::output_encoding)
}
