//! XML document parser.

use std::mem;

use super::ast::{Attribute, Element, Node};
use super::error::ParseError;
use winnow::ascii::{digit1, hex_digit1, multispace0, multispace1};
use winnow::combinator::{alt, cut_err, delimited, opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_till, take_until, take_while};

/// Parse an XML document and return its root element.
pub fn parse_document(input: &str) -> Result<Element, ParseError> {
    let mut remaining = input;
    match document(&mut remaining) {
        Ok(root) if remaining.is_empty() => Ok(root),
        Ok(_) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: "unexpected content after root element".to_string(),
            })
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: describe(&e),
                })
            }
        }
    }
}

/// Render the expectations and labels a failed parse collected.
fn describe(error: &ErrMode<ContextError>) -> String {
    let context = match error {
        ErrMode::Backtrack(context) | ErrMode::Cut(context) => context,
        ErrMode::Incomplete(_) => return "incomplete input".to_string(),
    };

    let expected: Vec<String> = context
        .context()
        .filter_map(|c| match c {
            StrContext::Expected(value) => Some(value.to_string()),
            _ => None,
        })
        .collect();
    if !expected.is_empty() {
        return format!("expected {}", expected.join(" or "));
    }

    match context.context().find_map(|c| match c {
        StrContext::Label(label) => Some(*label),
        _ => None,
    }) {
        Some(label) => format!("invalid {label}"),
        None => "malformed markup".to_string(),
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

/// A piece of element content before text nodes are merged.
enum Content {
    Text(String),
    /// Any other node; ends the current text node.
    Node(Node),
}

fn document(input: &mut &str) -> ModalResult<Element> {
    opt('\u{feff}').parse_next(input)?;
    skip_misc(input)?;
    let root = element
        .context(StrContext::Label("root element"))
        .parse_next(input)?;
    skip_misc(input)?;
    Ok(root)
}

/// Skip whitespace, comments, processing instructions and doctypes.
fn skip_misc(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(
        0..,
        alt((
            multispace1.void(),
            comment.void(),
            processing_instruction.void(),
            doctype,
        )),
    )
    .parse_next(input)?;
    Ok(())
}

/// Parse a comment: <!-- ... -->
fn comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited("<!--", take_until(0.., "-->"), "-->").parse_next(input)
}

/// Parse a processing instruction, including the XML declaration: <? ... ?>
fn processing_instruction<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited("<?", take_until(0.., "?>"), "?>").parse_next(input)
}

/// Parse a doctype, skipping any bracketed internal subset.
fn doctype(input: &mut &str) -> ModalResult<()> {
    (
        "<!DOCTYPE",
        take_till(0.., ['[', '>']),
        opt(delimited('[', take_until(0.., "]"), ']')),
        take_till(0.., '>'),
        '>',
    )
        .void()
        .parse_next(input)
}

/// Parse a CDATA section and return its raw content.
fn cdata<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited("<![CDATA[", take_until(0.., "]]>"), "]]>").parse_next(input)
}

/// Parse an element: <name attr="value"> content </name> or <name/>
fn element(input: &mut &str) -> ModalResult<Element> {
    '<'.parse_next(input)?;
    let name = xml_name(input)?;
    let attributes: Vec<Attribute> =
        repeat(0.., preceded(multispace1, attribute)).parse_next(input)?;
    multispace0.parse_next(input)?;

    if opt("/>").parse_next(input)?.is_some() {
        return Ok(Element {
            name,
            attributes,
            children: Vec::new(),
        });
    }

    cut_err('>')
        .context(StrContext::Expected(StrContextValue::CharLiteral('>')))
        .parse_next(input)?;

    let items: Vec<Content> = repeat(0.., content_item).parse_next(input)?;
    cut_err(|i: &mut &str| end_tag(i, &name)).parse_next(input)?;

    Ok(Element {
        name,
        attributes,
        children: normalize(items),
    })
}

/// Parse an end tag that must close `name`.
fn end_tag(input: &mut &str, name: &str) -> ModalResult<()> {
    "</".parse_next(input)?;
    xml_name
        .verify(|closing: &str| closing == name)
        .context(StrContext::Expected(StrContextValue::Description(
            "matching end tag",
        )))
        .parse_next(input)?;
    multispace0.parse_next(input)?;
    '>'.parse_next(input)?;
    Ok(())
}

fn content_item(input: &mut &str) -> ModalResult<Content> {
    alt((
        comment.map(|text: &str| Content::Node(Node::Comment(text.to_string()))),
        cdata.map(|text: &str| Content::Text(text.to_string())),
        processing_instruction
            .map(|text: &str| Content::Node(Node::ProcessingInstruction(text.to_string()))),
        element.map(|element| Content::Node(Node::Element(element))),
        reference.map(Content::Text),
        char_data.map(|text: &str| Content::Text(text.to_string())),
    ))
    .parse_next(input)
}

/// Parse character data up to the next markup or reference.
fn char_data<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c != '<' && c != '&').parse_next(input)
}

/// Parse an element or attribute name.
fn xml_name(input: &mut &str) -> ModalResult<String> {
    (
        any.verify(|c: &char| c.is_alphabetic() || *c == '_' || *c == ':'),
        take_while(0.., |c: char| {
            c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')
        }),
    )
        .take()
        .map(str::to_string)
        .parse_next(input)
}

/// Parse an attribute: name = "value" or name = 'value'
fn attribute(input: &mut &str) -> ModalResult<Attribute> {
    let name = xml_name(input)?;
    (multispace0, '=', multispace0).parse_next(input)?;
    let value = cut_err(quoted_value)
        .context(StrContext::Expected(StrContextValue::Description(
            "quoted attribute value",
        )))
        .parse_next(input)?;
    Ok(Attribute { name, value })
}

fn quoted_value(input: &mut &str) -> ModalResult<String> {
    let mut quote = alt(('"', '\'')).parse_next(input)?;
    let parts: Vec<String> = repeat(
        0..,
        alt((
            reference,
            take_while(1.., move |c: char| c != quote && c != '&' && c != '<')
                .map(str::to_string),
        )),
    )
    .parse_next(input)?;
    quote.parse_next(input)?;
    Ok(parts.concat())
}

/// Parse an entity or character reference and return its expansion.
fn reference(input: &mut &str) -> ModalResult<String> {
    delimited(
        '&',
        alt((char_reference, named_entity)),
        cut_err(';').context(StrContext::Expected(StrContextValue::CharLiteral(';'))),
    )
    .map(String::from)
    .parse_next(input)
}

/// Parse the body of a character reference: #123 or #x7B
fn char_reference(input: &mut &str) -> ModalResult<char> {
    preceded(
        '#',
        alt((
            preceded('x', hex_digit1)
                .verify_map(|hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)),
            digit1.verify_map(|dec: &str| dec.parse::<u32>().ok().and_then(char::from_u32)),
        )),
    )
    .parse_next(input)
}

/// Parse one of the five predefined entity names.
fn named_entity(input: &mut &str) -> ModalResult<char> {
    alt((
        "amp".value('&'),
        "lt".value('<'),
        "gt".value('>'),
        "quot".value('"'),
        "apos".value('\''),
    ))
    .parse_next(input)
}

/// Merge adjacent text pieces into text nodes.
fn normalize(items: Vec<Content>) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut text = String::new();

    for item in items {
        match item {
            Content::Text(piece) => text.push_str(&piece),
            Content::Node(node) => {
                flush_text(&mut text, &mut nodes);
                nodes.push(node);
            }
        }
    }
    flush_text(&mut text, &mut nodes);

    nodes
}

fn flush_text(text: &mut String, nodes: &mut Vec<Node>) {
    let piece = mem::take(text);
    if !piece.trim().is_empty() {
        nodes.push(Node::Text(piece.replace("\r\n", "\n")));
    }
}
