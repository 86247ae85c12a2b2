//! Search snippet parsing
//!
//! This is a placeholder policy, not an extractor: it only checks for fixed
//! substrings and answers with one of two constant value sets. It must be
//! replaced wholesale once a real search backend exists.

use crate::models::PollutantValues;

const HIGH_READING: PollutantValues = PollutantValues {
    pm25: 86.0,
    pm10: 150.0,
    aqi: 128,
};

const MODERATE_READING: PollutantValues = PollutantValues {
    pm25: 55.0,
    pm10: 90.0,
    aqi: 80,
};

/// Returns `None` when the snippet does not mention PM2.5 at all
#[must_use]
pub fn parse_search_snippet(snippet: &str) -> Option<PollutantValues> {
    if !snippet.to_lowercase().contains("pm2.5") {
        return None;
    }

    if snippet.contains("86") {
        Some(HIGH_READING)
    } else {
        Some(MODERATE_READING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("AQI Delhi: 86")]
    #[case("PM10: 150 µg/m3")]
    #[case("pm 2.5 is 86")]
    fn test_text_without_pm25_is_empty(#[case] snippet: &str) {
        assert_eq!(parse_search_snippet(snippet), None);
    }

    #[rstest]
    #[case("AQI Chennai: 128. PM2.5: 86 µg/m3.")]
    #[case("pm2.5 reading 186")]
    #[case("Pm2.5 86")]
    fn test_high_constant_set(#[case] snippet: &str) {
        let values = parse_search_snippet(snippet).unwrap();
        assert_eq!(values.pm25, 86.0);
        assert_eq!(values.pm10, 150.0);
        assert_eq!(values.aqi, 128);
    }

    #[test]
    fn test_moderate_constant_set() {
        let values = parse_search_snippet("PM2.5: 40 µg/m3").unwrap();
        assert_eq!(values, MODERATE_READING);
    }
}
