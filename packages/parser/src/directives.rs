//! Structural directive grammar.
//!
//! Directives are leading prefix tokens checked in one fixed order; each match
//! strips its prefix and the next matcher runs on the remainder, so tokens
//! compose: `#rticles#name#intro #rticles#heading#2 Welcome` yields a named
//! level-2 heading with body `Welcome`.

use serde::{Deserialize, Serialize};

/// Marker every directive starts with.
pub const SIGIL: &str = "#rticles#";

/// Structural metadata extracted from raw paragraph text at creation time.
///
/// `body` is the text left over once the structural prefixes are stripped; it
/// may still carry inline conditional/insertion tokens for render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedParagraph {
    pub body: String,
    pub name: Option<String>,
    pub topic: Option<String>,
    pub heading: Option<u32>,
    pub continuation: bool,
    pub list: bool,
}

/// One recognized structural token.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Directive {
    Name(String),
    Topic(String),
    Continuation,
    Heading(u32),
    List,
}

/// A matcher inspects the start of the input and, on success, returns the
/// extracted directive together with the stripped remainder.
type Matcher = fn(&str) -> Option<(Directive, &str)>;

/// Matchers in application order. Adding a directive kind means adding a row
/// here, not touching the parse loop.
const MATCHERS: &[Matcher] = &[
    match_name,
    match_topic,
    match_continuation,
    match_heading,
    match_list,
];

/// Parse the structural directives off the front of `text`.
///
/// Never fails: unrecognized text is simply the paragraph body.
pub fn parse_directives(text: &str) -> ParsedParagraph {
    let mut parsed = ParsedParagraph::default();
    let mut rest = text;

    for matcher in MATCHERS {
        if let Some((directive, remainder)) = matcher(rest) {
            match directive {
                Directive::Name(value) => parsed.name = Some(value),
                Directive::Topic(value) => parsed.topic = Some(value),
                Directive::Continuation => parsed.continuation = true,
                Directive::Heading(level) => parsed.heading = Some(level),
                Directive::List => parsed.list = true,
            }
            rest = remainder;
        }
    }

    parsed.body = rest.to_string();
    parsed
}

fn match_name(input: &str) -> Option<(Directive, &str)> {
    let rest = strip_keyword(input, "name#")?;
    let (ident, rest) = take_ident(rest)?;
    let rest = rest.strip_prefix(' ')?;
    Some((Directive::Name(ident.to_string()), rest))
}

fn match_topic(input: &str) -> Option<(Directive, &str)> {
    let rest = strip_keyword(input, "topic#")?;
    let (ident, rest) = take_ident(rest)?;
    let rest = rest.strip_prefix(' ')?;
    Some((Directive::Topic(ident.to_string()), rest))
}

fn match_continuation(input: &str) -> Option<(Directive, &str)> {
    let rest = strip_keyword(input, "continue ")?;
    Some((Directive::Continuation, rest))
}

fn match_heading(input: &str) -> Option<(Directive, &str)> {
    let rest = strip_keyword(input, "heading")?;

    // `#rticles#heading ` is level 1; `#rticles#heading#3 ` is level 3.
    if let Some(rest) = rest.strip_prefix(' ') {
        return Some((Directive::Heading(1), rest));
    }

    let rest = rest.strip_prefix('#')?;
    let digits_len = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    let (digits, rest) = rest.split_at(digits_len);
    let rest = rest.strip_prefix(' ')?;
    let level: u32 = digits.parse().ok()?;
    Some((Directive::Heading(level), rest))
}

fn match_list(input: &str) -> Option<(Directive, &str)> {
    let rest = strip_keyword(input, "list ")?;
    Some((Directive::List, rest))
}

fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    input.strip_prefix(SIGIL)?.strip_prefix(keyword)
}

/// Identifiers in name/topic directives: `[A-Za-z_]+`.
fn take_ident(input: &str) -> Option<(&str, &str)> {
    let len = input
        .chars()
        .take_while(|c| c.is_ascii_alphabetic() || *c == '_')
        .count();
    if len == 0 {
        None
    } else {
        Some(input.split_at(len))
    }
}
