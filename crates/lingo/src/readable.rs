//! Humanized fallback text for missing translations.

use std::mem;

use unicode_segmentation::UnicodeSegmentation;

/// Turn an identifier or dotted key into readable words.
///
/// Splits on `.`, `_`, `-` and whitespace, on lower-to-upper case changes,
/// at the end of an acronym and before digits, then capitalizes each word.
///
/// ```
/// use lingo::to_readable;
///
/// assert_eq!(to_readable("FirstName"), "First Name");
/// assert_eq!(to_readable("missing.key"), "Missing Key");
/// assert_eq!(to_readable("HTMLParser"), "HTML Parser");
/// ```
pub fn to_readable(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_word_separator(c: char) -> bool {
    matches!(c, '.' | '_' | '-') || c.is_whitespace()
}

fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if is_word_separator(c) {
            if !current.is_empty() {
                words.push(mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            let next = chars.peek().copied();
            let boundary = (c.is_uppercase() && (p.is_lowercase() || p.is_numeric()))
                || (c.is_uppercase() && p.is_uppercase() && next.is_some_and(char::is_lowercase))
                || (c.is_numeric() && p.is_alphabetic());
            if boundary {
                words.push(mem::take(&mut current));
            }
        }

        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case() {
        assert_eq!(split_words("firstName"), vec!["first", "Name"]);
    }

    #[test]
    fn splits_digits() {
        assert_eq!(to_readable("address2"), "Address 2");
        assert_eq!(to_readable("Line2Text"), "Line 2 Text");
    }

    #[test]
    fn collapses_repeated_separators() {
        assert_eq!(to_readable("__order..total_"), "Order Total");
    }

    #[test]
    fn keeps_acronyms_whole() {
        assert_eq!(to_readable("userID"), "User ID");
        assert_eq!(to_readable("IOError"), "IO Error");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(to_readable(""), "");
    }
}
