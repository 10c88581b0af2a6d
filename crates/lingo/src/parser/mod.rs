//! XML parser for translation files.
//!
//! Parses the subset of XML that translation files use: elements,
//! attributes, character data, entity and character references, CDATA
//! sections, comments, processing instructions and a simple doctype.

pub mod ast;
pub mod error;
mod xml;

pub use ast::{Attribute, Element, Node};
pub use error::ParseError;
pub use xml::parse_document;
