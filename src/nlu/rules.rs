//! Lexical rule tables driving the extraction core
//!
//! Pure static data plus the word-boundary matcher shared by all three
//! extractors. Extending the vocabulary means adding table entries, never
//! new control logic.

use crate::models::{Metric, TimeCategory};

/// Surface phrase (lowercased) to canonical metric
///
/// Multi-word phrases come before their single-word prefixes so the
/// longest-phrase tie-break has something to prefer at equal offsets.
pub const METRIC_PHRASES: &[(&str, Metric)] = &[
    ("temperature", Metric::Temperature),
    ("temp", Metric::Temperature),
    ("degrees", Metric::Temperature),
    ("hotter", Metric::Temperature),
    ("colder", Metric::Temperature),
    ("weather", Metric::Temperature),
    ("rainfall", Metric::Rainfall),
    ("rain", Metric::Rainfall),
    ("rainy", Metric::Rainfall),
    ("precipitation", Metric::Rainfall),
    ("humidity", Metric::Humidity),
    ("humid", Metric::Humidity),
    ("wind speed", Metric::WindSpeed),
    ("windspeed", Metric::WindSpeed),
    ("wind gust", Metric::WindSpeed),
    ("wind", Metric::WindSpeed),
    ("pressure", Metric::Pressure),
    ("hpa", Metric::Pressure),
    ("atm", Metric::Pressure),
];

/// Surface phrase to canonical time category
pub const TIME_PHRASES: &[(&str, TimeCategory)] = &[
    ("now", TimeCategory::Now),
    ("today", TimeCategory::Today),
    ("yesterday", TimeCategory::Yesterday),
    ("january", TimeCategory::Month("january")),
    ("february", TimeCategory::Month("february")),
    ("march", TimeCategory::Month("march")),
    ("april", TimeCategory::Month("april")),
    ("may", TimeCategory::Month("may")),
    ("june", TimeCategory::Month("june")),
    ("july", TimeCategory::Month("july")),
    ("august", TimeCategory::Month("august")),
    ("september", TimeCategory::Month("september")),
    ("october", TimeCategory::Month("october")),
    ("november", TimeCategory::Month("november")),
    ("december", TimeCategory::Month("december")),
];

/// Tokens stripped from the tail of a location candidate
///
/// Every time-table phrase plus the qualifier words and month
/// abbreviations that show up in temporal tails ("madurai last week").
const TIME_STOP_WORDS: &[&str] = &[
    "now",
    "today",
    "yesterday",
    "last",
    "this",
    "next",
    "week",
    "month",
    "january",
    "jan",
    "february",
    "feb",
    "march",
    "mar",
    "april",
    "apr",
    "may",
    "june",
    "jun",
    "july",
    "jul",
    "august",
    "aug",
    "september",
    "sep",
    "october",
    "oct",
    "november",
    "nov",
    "december",
    "dec",
];

/// Whether a token is a recognized time expression word
#[must_use]
pub fn is_time_stop_word(token: &str) -> bool {
    TIME_STOP_WORDS.contains(&token)
}

/// Find the first word-boundary occurrence of `phrase` in `text`
///
/// Both inputs are assumed already lowercased. A match must not sit
/// inside a longer alphanumeric word, so "wind" never matches inside
/// "rewind" and "rain" never swallows the "in" token.
#[must_use]
pub fn find_phrase(text: &str, phrase: &str) -> Option<usize> {
    if phrase.is_empty() {
        return None;
    }
    for (idx, matched) in text.match_indices(phrase) {
        let before_ok = text[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[idx + matched.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return Some(idx);
        }
    }
    None
}
