//! Pulls a displayable quote out of free-form model output.
//!
//! Reasoning models (deepseek-r1 and friends) answer with a
//! `<think>...</think>` block followed by the actual reply, and the reply can
//! be a quoted sentence, a `**bold**` line, a numbered list item or just
//! plain text. Parsing is a fixed sequence of named matchers over the text;
//! the first one producing a non-empty candidate wins. Nothing here can fail:
//! unusable input degrades to the raw text or to [`NO_RESPONSE`].
//!
//! A matcher whose hit trims to nothing (`" "`, `** **`, a `---` rule line)
//! does not end parsing; the next matcher gets a turn. The first-line
//! matcher likewise skips lines without any letters.
//!
//! Without a reasoning block, or with nothing after it, the matchers run
//! over the whole text, so `He said "hi" once` yields `hi`.

use lazy_static::lazy_static;
use regex::Regex;

pub const NO_RESPONSE: &str = "No response from AI";
pub const ANONYMOUS: &str = "Anonymous";

lazy_static! {
    static ref THINK_BLOCK: Regex =
        Regex::new(r"(?is)<think[^>]*>.*?</think>\s*(.*)").expect("think block pattern");
    static ref QUOTED_SPAN: Regex = Regex::new(r#""([^"]+)""#).expect("quoted span pattern");
    static ref BOLD_SPAN: Regex =
        Regex::new(r#"\*\*"?([^"*]+)"?\*\*"#).expect("bold span pattern");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub quote: String,
    pub author: String,
    pub thinking: String,
}

type Matcher = fn(&str) -> Option<String>;

// Tried in order against the answer text
const ANSWER_MATCHERS: &[(&str, Matcher)] = &[
    ("quoted-span", quoted_span),
    ("bold-span", bold_span),
    ("first-line", first_line),
];

/// Text following a reasoning block, if there is a non-empty one.
pub fn after_think_block(text: &str) -> Option<&str> {
    let caps = THINK_BLOCK.captures(text)?;
    let rest = caps.get(1)?.as_str().trim();
    (!rest.is_empty()).then_some(rest)
}

pub fn quoted_span(text: &str) -> Option<String> {
    let caps = QUOTED_SPAN.captures(text)?;
    non_empty(caps.get(1)?.as_str())
}

pub fn bold_span(text: &str) -> Option<String> {
    let caps = BOLD_SPAN.captures(text)?;
    non_empty(caps.get(1)?.as_str())
}

// First line with letters, leading numbering/bullets/punctuation removed
pub fn first_line(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| non_empty(line.trim_start_matches(|c: char| !c.is_alphabetic())))
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

pub fn parse(raw: &str) -> ParsedResponse {
    let text = raw.trim();

    // an empty answer after the reasoning block means: scan everything
    let answer = after_think_block(text).unwrap_or(text);

    let quote = ANSWER_MATCHERS
        .iter()
        .find_map(|(name, matcher)| {
            let hit = matcher(answer)?;
            tracing::trace!(matcher = *name, "response parser matched");
            Some(hit)
        })
        .unwrap_or_else(|| {
            if text.is_empty() {
                NO_RESPONSE.to_string()
            } else {
                text.to_string()
            }
        });

    ParsedResponse {
        quote,
        author: ANONYMOUS.to_string(),
        thinking: text.to_string(),
    }
}
