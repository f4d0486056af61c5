//! Metric extraction over normalized question text

use crate::models::Metric;
use crate::nlu::rules::{self, METRIC_PHRASES};

/// Extract the canonical metric from normalized (lowercased) text
///
/// Scans every metric-table phrase and keeps the match appearing
/// earliest in the text; at equal offsets the longer phrase wins.
/// Never fails: text without any recognized phrase asks about
/// temperature.
#[must_use]
pub fn extract_metric(text: &str) -> Metric {
    let mut best: Option<(usize, &str, Metric)> = None;

    for &(phrase, metric) in METRIC_PHRASES {
        if let Some(pos) = rules::find_phrase(text, phrase) {
            let better = match best {
                None => true,
                Some((best_pos, best_phrase, _)) => {
                    pos < best_pos || (pos == best_pos && phrase.len() > best_phrase.len())
                }
            };
            if better {
                best = Some((pos, phrase, metric));
            }
        }
    }

    best.map_or(Metric::Temperature, |(_, _, metric)| metric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("what is the temperature in chennai", Metric::Temperature)]
    #[case("how hot is the weather in delhi", Metric::Temperature)]
    #[case("temp in madurai", Metric::Temperature)]
    #[case("how many degrees is it outside", Metric::Temperature)]
    #[case("is it hotter than yesterday", Metric::Temperature)]
    #[case("is it colder in shimla", Metric::Temperature)]
    #[case("rainfall in mumbai", Metric::Rainfall)]
    #[case("will it rain today", Metric::Rainfall)]
    #[case("is it rainy in kochi", Metric::Rainfall)]
    #[case("precipitation in pune", Metric::Rainfall)]
    #[case("humidity in delhi today", Metric::Humidity)]
    #[case("how humid is chennai", Metric::Humidity)]
    #[case("what is the wind speed now", Metric::WindSpeed)]
    #[case("windspeed in goa", Metric::WindSpeed)]
    #[case("wind gust in leh", Metric::WindSpeed)]
    #[case("how strong is the wind", Metric::WindSpeed)]
    #[case("pressure in bangalore", Metric::Pressure)]
    #[case("how many hpa today", Metric::Pressure)]
    fn test_synonyms_map_to_canonical_metric(#[case] text: &str, #[case] expected: Metric) {
        assert_eq!(extract_metric(text), expected);
    }

    #[test]
    fn test_default_is_temperature() {
        assert_eq!(extract_metric("how are things in chennai"), Metric::Temperature);
        assert_eq!(extract_metric(""), Metric::Temperature);
    }

    #[test]
    fn test_earliest_match_wins() {
        // Both rain and wind are mentioned; rain comes first.
        assert_eq!(
            extract_metric("will the rain affect the wind in chennai"),
            Metric::Rainfall
        );
        assert_eq!(
            extract_metric("is the wind stronger when it is rainy"),
            Metric::WindSpeed
        );
    }

    #[test]
    fn test_longer_phrase_wins_at_equal_offset() {
        // "wind speed" and "wind" both match at the same offset.
        assert_eq!(extract_metric("wind speed in chennai"), Metric::WindSpeed);
    }

    #[test]
    fn test_no_match_inside_words() {
        // "rewind" must not count as a wind mention.
        assert_eq!(extract_metric("rewind to the forecast"), Metric::Temperature);
    }
}
