//! Location extraction: the "in <location>" pattern
//!
//! Locations are not validated against a gazetteer; any non-empty
//! sanitized string is accepted and validity is left to the weather
//! provider.

use crate::nlu::rules;

/// Extract the ordered location set from normalized (lowercased) text
///
/// Finds the first standalone "in" token followed by whitespace, takes
/// the span up to the next sentence-ending punctuation, splits it on
/// conjunctions and separators, and sanitizes each candidate. Text
/// without an "in" pattern yields an empty set, which is a normal
/// outcome rather than an error.
#[must_use]
pub fn extract_locations(text: &str) -> Vec<String> {
    let Some(span) = location_span(text) else {
        return Vec::new();
    };

    split_candidates(span)
        .filter_map(sanitize_candidate)
        .collect()
}

/// Sanitize one raw location candidate
///
/// Trims punctuation and parentheses, strips recognized time-expression
/// tokens from the tail, and collapses interior whitespace. Returns
/// `None` when nothing survives. Public because the HTTP layer reuses
/// it for the raw `location` query parameter.
#[must_use]
pub fn sanitize_candidate(candidate: &str) -> Option<String> {
    let mut words: Vec<&str> = candidate
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .collect();

    // A location must never retain a trailing word that is itself a
    // recognized time phrase ("madurai now" -> "madurai").
    while let Some(last) = words.last() {
        if rules::is_time_stop_word(last) {
            words.pop();
        } else {
            break;
        }
    }

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Split and sanitize a raw location list parameter
///
/// Applies the same conjunction split and sanitization as the question
/// path, so "Chennai and Madurai now" behaves identically whether it
/// arrives inside a question or as a `location` query parameter.
#[must_use]
pub fn split_location_list(raw: &str) -> Vec<String> {
    let normalized = crate::nlu::normalize(raw);
    split_candidates(&normalized)
        .filter_map(sanitize_candidate)
        .collect()
}

/// Locate the span following the first standalone "in" token
fn location_span(text: &str) -> Option<&str> {
    for (idx, _) in text.match_indices("in") {
        let before_ok = text[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let rest = &text[idx + 2..];
        if before_ok && rest.chars().next().is_some_and(char::is_whitespace) {
            let span = rest.trim_start();
            let end = span.find(['?', '!', '.', ';']).unwrap_or(span.len());
            return Some(&span[..end]);
        }
    }
    None
}

/// Split a location span on conjunctions and list separators
fn split_candidates(span: &str) -> impl Iterator<Item = &str> {
    span.split([',', '/', '|'])
        .flat_map(|part| part.split(" and "))
}
