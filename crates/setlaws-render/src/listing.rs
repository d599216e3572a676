//! Brace listings such as `{1, 5, "pear"}` and their parser.
//!
//! Integers are written bare. Text elements are double-quoted with `\\`,
//! `\"`, `\n`, `\r`, `\t` and `\u{..}` escapes, so every listing parses back
//! to the set it was rendered from.

use std::iter::Peekable;
use std::str::Chars;

use setlaws_core::{Element, ErrorInfo, FiniteSet, SetLawError};

/// Unicode empty-set symbol.
pub const EMPTY_SET: &str = "∅";
/// ASCII-only empty set.
pub const EMPTY_SET_ASCII: &str = "{}";

fn listing_error(message: impl Into<String>, input: &str) -> SetLawError {
    SetLawError::InvalidInput(
        ErrorInfo::new("malformed-listing", message).with_context("input", input),
    )
}

/// Quotes and escapes a text element. Non-ASCII characters are escaped as
/// well when `ascii_only` is set.
pub fn quote_text(text: &str, ascii_only: bool) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() || (ascii_only && !ch.is_ascii()) => {
                out.push_str(&format!("\\u{{{:x}}}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Renders a single element.
pub fn render_element(element: &Element, ascii_only: bool) -> String {
    match element {
        Element::Int(value) => value.to_string(),
        Element::Text(text) => quote_text(text, ascii_only),
    }
}

/// Renders `{a, b, c}` in ascending total order, or the empty-set marker.
pub fn render_listing(set: &FiniteSet, ascii_only: bool) -> String {
    if set.is_empty() {
        return if ascii_only { EMPTY_SET_ASCII } else { EMPTY_SET }.to_string();
    }
    let items: Vec<String> = set
        .iter()
        .map(|element| render_element(element, ascii_only))
        .collect();
    format!("{{{}}}", items.join(", "))
}

fn parse_quoted(chars: &mut Peekable<Chars<'_>>, input: &str) -> Result<String, SetLawError> {
    let mut text = String::new();
    loop {
        match chars.next() {
            None => return Err(listing_error("unterminated text element", input)),
            Some('"') => return Ok(text),
            Some('\\') => match chars.next() {
                Some('"') => text.push('"'),
                Some('\\') => text.push('\\'),
                Some('n') => text.push('\n'),
                Some('r') => text.push('\r'),
                Some('t') => text.push('\t'),
                Some('u') => {
                    if chars.next() != Some('{') {
                        return Err(listing_error("expected `{` after `\\u`", input));
                    }
                    let mut hex = String::new();
                    for ch in chars.by_ref() {
                        if ch == '}' {
                            break;
                        }
                        hex.push(ch);
                    }
                    let decoded = u32::from_str_radix(&hex, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or_else(|| listing_error("invalid unicode escape", input))?;
                    text.push(decoded);
                }
                _ => return Err(listing_error("unknown escape sequence", input)),
            },
            Some(ch) => text.push(ch),
        }
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|ch| ch.is_whitespace()) {
        chars.next();
    }
}

/// Parses a listing produced by [`render_listing`].
pub fn parse_set_listing(input: &str) -> Result<FiniteSet, SetLawError> {
    let trimmed = input.trim();
    if trimmed == EMPTY_SET {
        return Ok(FiniteSet::empty());
    }
    let body = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| listing_error("listing must be enclosed in braces", input))?;

    let mut elements = Vec::new();
    let mut chars = body.chars().peekable();
    skip_whitespace(&mut chars);
    if chars.peek().is_none() {
        return Ok(FiniteSet::empty());
    }
    loop {
        skip_whitespace(&mut chars);
        if chars.peek() == Some(&'"') {
            chars.next();
            elements.push(Element::Text(parse_quoted(&mut chars, input)?));
        } else {
            let mut token = String::new();
            while let Some(&ch) = chars.peek() {
                if ch == ',' {
                    break;
                }
                token.push(ch);
                chars.next();
            }
            let value = token
                .trim()
                .parse::<i64>()
                .map_err(|_| listing_error(format!("`{}` is not an integer", token.trim()), input))?;
            elements.push(Element::Int(value));
        }
        skip_whitespace(&mut chars);
        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(other) => {
                return Err(listing_error(format!("unexpected `{other}`"), input));
            }
        }
    }
    Ok(elements.into_iter().collect())
}
