//! Time expression extraction over normalized question text

use crate::models::TimeCategory;
use crate::nlu::rules::{self, TIME_PHRASES};

/// Extract the canonical time category from normalized (lowercased) text
///
/// Same matching rule as the metric extractor: earliest match in the
/// text, longer phrase on ties. Defaults to [`TimeCategory::Now`] when
/// no temporal phrase is present. Operates on the same immutable text
/// as the other extractors; nothing is consumed or mutated.
#[must_use]
pub fn extract_time(text: &str) -> TimeCategory {
    let mut best: Option<(usize, &str, TimeCategory)> = None;

    for &(phrase, category) in TIME_PHRASES {
        if let Some(pos) = rules::find_phrase(text, phrase) {
            let better = match best {
                None => true,
                Some((best_pos, best_phrase, _)) => {
                    pos < best_pos || (pos == best_pos && phrase.len() > best_phrase.len())
                }
            };
            if better {
                best = Some((pos, phrase, category));
            }
        }
    }

    best.map_or(TimeCategory::Now, |(_, _, category)| category)
}
