//! Reading `<Translations>` documents into dictionaries.

use std::path::Path;

use tracing::debug;

use super::LoadSession;
use crate::dictionary::TranslationDictionary;
use crate::error::LoadError;
use crate::parser::{Element, Node, ParseError, parse_document};
use crate::prefix::SEPARATOR;
use crate::types::TextFormat;

const TRANSLATIONS_ELEMENT: &str = "Translations";
const LANGUAGE_ATTRIBUTE: &str = "Language";
const MARKUP_ATTRIBUTE: &str = "Markup";

/// Parse XML `content` and add its translations to the session.
///
/// `source` names the content in error messages (a file path or resource
/// id). Returns the number of entries read.
pub fn load_xml(
    session: &mut LoadSession<'_>,
    source: &Path,
    content: &str,
) -> Result<usize, LoadError> {
    let root = parse_document(content).map_err(|e| parse_error(source, e))?;
    let count = load_xml_document(session, &root);
    debug!(source = %source.display(), entries = count, "loaded translation source");
    Ok(count)
}

/// Add the translations of every `Translations` element in a parsed
/// document. Elements without a `Language` attribute are skipped.
pub fn load_xml_document(session: &mut LoadSession<'_>, root: &Element) -> usize {
    let mut count = 0;

    for translations in root.descendants_named(TRANSLATIONS_ELEMENT) {
        let Some(language) = translations.attribute(LANGUAGE_ATTRIBUTE) else {
            debug!("skipping Translations element without a Language attribute");
            continue;
        };
        let dictionary = session.dictionary(language);
        for child in translations.elements() {
            count += read_element(dictionary, child, None);
        }
    }

    count
}

/// Add entries for `element` and its descendants, keyed by the chain of
/// element names below the `Translations` element.
///
/// Only an element with no child nodes at all yields an empty entry; one
/// holding just a comment yields nothing.
fn read_element(
    dictionary: &mut TranslationDictionary,
    element: &Element,
    parent_key: Option<&str>,
) -> usize {
    let key = match parent_key {
        Some(parent) => format!("{parent}{SEPARATOR}{}", element.name),
        None => element.name.clone(),
    };

    if element.children.is_empty() {
        dictionary.add(key, "", TextFormat::Plain, false);
        return 1;
    }

    let format = TextFormat::from_markup_attribute(element.attribute(MARKUP_ATTRIBUTE));
    let mut count = 0;
    for child in &element.children {
        match child {
            Node::Text(text) => {
                dictionary.add(key.as_str(), text.as_str(), format, true);
                count += 1;
            }
            Node::Element(nested) => count += read_element(dictionary, nested, Some(&key)),
            Node::Comment(_) | Node::ProcessingInstruction(_) => {}
        }
    }
    count
}

fn parse_error(source: &Path, error: ParseError) -> LoadError {
    let (line, column) = error.position();
    LoadError::Parse {
        path: source.to_path_buf(),
        line,
        column,
        message: error.message(),
    }
}
