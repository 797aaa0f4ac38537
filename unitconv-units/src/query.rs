//! Free-text query parsing
//!
//! Splits a query such as `"how much is 20 inches in FEET?"` into a
//! magnitude, the source unit text and an optional target unit text. The
//! parser knows nothing about units: resolving the texts is left to the
//! registry.

use std::sync::OnceLock;
use regex::Regex;
use unitconv_core::{Number, NumberError};
use crate::ConvertError;

/// Conversational openings dropped before parsing
const LEAD_INS: [&str; 4] = ["how much is", "how many", "what is", "convert"];

/// Words splitting the source from the target, strongest first
const STRONG_SEPARATORS: [&str; 2] = ["to", "into"];
const WEAK_SEPARATOR: &str = "in";

/// Articles allowed in front of the target ("in a cup")
const ARTICLES: [&str; 2] = ["a", "an"];

/// A query split into its parts
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub magnitude: Number,
    /// Source unit text, lowercased and whitespace-collapsed
    pub source: String,
    /// Target unit text, when the query names one
    pub target: Option<String>,
}

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // a number not glued to a preceding word ("m3" holds no number)
        Regex::new(
            r"(?:^|[^\w.,-])(?P<number>(?P<sign>-)?(?:(?P<int>\d+)(?:[.,](?P<frac>\d*))?|[.,](?P<lead>\d+))(?:e(?P<exp>[-+]?\d+))?)",
        )
        .unwrap()
    })
}

fn power_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // only after a letter: "10^2" is not a unit power
    RE.get_or_init(|| Regex::new(r"([^\W\d_])\s*(?:\*\*|\^)\s*([23])").unwrap())
}

/// Parse a free-text query
pub fn parse_query(text: &str) -> Result<ParsedQuery, ConvertError> {
    let text = normalize_query(text);

    let captures = number_regex()
        .captures(&text)
        .ok_or_else(|| ConvertError::MalformedQuery(format!("no number found in '{}'", text)))?;
    let Some(number) = captures.name("number") else {
        return Err(ConvertError::MalformedQuery(format!("no number found in '{}'", text)));
    };

    let magnitude = magnitude_from(&captures)
        .map_err(|e| ConvertError::MalformedQuery(format!("bad number '{}': {}", number.as_str(), e)))?;

    let before = strip_trailing_separator(text[..number.start()].trim());
    let after = text[number.end()..].trim();

    let (source, target) = split_units(after);
    let (source, target) = match (source.is_empty(), target, before.is_empty()) {
        (_, target, true) => (source, target),
        // "cm 20", "cm 20 in inches"
        (true, target, false) => (before.to_string(), target),
        // "yards 1000 meters"
        (false, None, false) => (source, Some(before.to_string())),
        (false, Some(_), false) => {
            return Err(ConvertError::MalformedQuery(format!(
                "unexpected text '{}' before the number",
                before
            )));
        }
    };

    if source.is_empty() {
        return Err(ConvertError::MalformedQuery(format!("no unit given in '{}'", text)));
    }

    Ok(ParsedQuery { magnitude, source, target })
}

/// Lowercase, collapse whitespace, fold exponent marks onto their unit
/// and drop trailing punctuation and conversational lead-ins
fn normalize_query(text: &str) -> String {
    let text = text
        .to_lowercase()
        .replace('²', "^2")
        .replace('³', "^3");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let text = power_regex().replace_all(&text, "${1}${2}");
    let mut text = text.trim_end_matches(['?', '!']).trim_end();

    for lead_in in LEAD_INS {
        if let Some(rest) = text.strip_prefix(lead_in) {
            if rest.is_empty() || rest.starts_with(' ') {
                text = rest.trim_start();
                break;
            }
        }
    }

    text.to_string()
}

fn magnitude_from(captures: &regex::Captures<'_>) -> Result<Number, NumberError> {
    let negative = captures.name("sign").is_some();
    let exponent = match captures.name("exp") {
        Some(exp) => exp
            .as_str()
            .parse::<i64>()
            .map_err(|_| NumberError::ParseError(exp.as_str().to_string()))?,
        None => 0,
    };

    match captures.name("lead") {
        Some(lead) => Number::from_decimal_parts(negative, "", lead.as_str(), exponent),
        None => {
            let int_part = captures.name("int").map_or("", |m| m.as_str());
            let frac_part = captures.name("frac").map_or("", |m| m.as_str());
            Number::from_decimal_parts(negative, int_part, frac_part, exponent)
        }
    }
}

/// Split the text after the number into source and optional target
///
/// `to`/`into` win over `in`, and the last valid separator of a kind
/// wins, so `"feet to in"` and `"sq in in sq cm"` both split correctly.
fn split_units(text: &str) -> (String, Option<String>) {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    // "5 kg to" names no target
    if words.last().is_some_and(|w| STRONG_SEPARATORS.contains(w)) {
        words.pop();
    }

    let split = last_separator(&words, |w| STRONG_SEPARATORS.contains(&w))
        .or_else(|| last_separator(&words, |w| w == WEAK_SEPARATOR));

    match split {
        Some(i) => {
            let source = words[..i].join(" ");
            let target = strip_article(&words[i + 1..]);
            (source, Some(target))
        }
        None => (words.join(" "), None),
    }
}

/// Position of the last separator with a target after it
fn last_separator(words: &[&str], accept: impl Fn(&str) -> bool) -> Option<usize> {
    (0..words.len())
        .rev()
        .find(|&i| accept(words[i]) && i + 1 < words.len())
}

/// Drop a leading article unless it is all there is
fn strip_article(words: &[&str]) -> String {
    match words.split_first() {
        Some((first, rest)) if ARTICLES.contains(first) && !rest.is_empty() => rest.join(" "),
        _ => words.join(" "),
    }
}

/// "how many cm in 3 meters": the text before the number may end in a
/// separator that belongs to it
fn strip_trailing_separator(text: &str) -> &str {
    match text.rsplit_once(' ') {
        Some((head, last)) if is_separator(last) => head,
        _ if is_separator(text) => "",
        _ => text,
    }
}

fn is_separator(word: &str) -> bool {
    word == WEAK_SEPARATOR || STRONG_SEPARATORS.contains(&word)
}
