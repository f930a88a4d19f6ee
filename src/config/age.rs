use crate::utils::{Result, ShearError};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

const HOUR: u64 = 60 * 60;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

fn age_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)([wdhms])$").unwrap())
}

/// Parses an age threshold such as `2w`, `14d`, `336h`, `20160m` or `60s`.
/// Anything that does not match the magnitude+unit form is handed to
/// `humantime` as a standard duration literal (`1h30m`, `90 minutes`, ...).
pub fn parse_age_threshold(input: &str) -> Result<Duration> {
    let Some(captures) = age_pattern().captures(input) else {
        return humantime::parse_duration(input)
            .map_err(|e| ShearError::invalid_age(input, e.to_string()));
    };

    let magnitude: u64 = captures[1]
        .parse()
        .map_err(|_| ShearError::invalid_age(input, "magnitude out of range"))?;

    let unit_seconds = match &captures[2] {
        "w" => WEEK,
        "d" => DAY,
        "h" => HOUR,
        "m" => 60,
        "s" => 1,
        unit => {
            return Err(ShearError::invalid_age(
                input,
                format!("unsupported time unit '{}'", unit),
            ))
        }
    };

    let seconds = magnitude
        .checked_mul(unit_seconds)
        .ok_or_else(|| ShearError::invalid_age(input, "magnitude out of range"))?;

    Ok(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_equivalences() {
        assert_eq!(
            parse_age_threshold("2w").unwrap(),
            parse_age_threshold("14d").unwrap()
        );
        assert_eq!(
            parse_age_threshold("1d").unwrap(),
            parse_age_threshold("24h").unwrap()
        );
        assert_eq!(
            parse_age_threshold("1h").unwrap(),
            parse_age_threshold("60m").unwrap()
        );
        assert_eq!(
            parse_age_threshold("1m").unwrap(),
            parse_age_threshold("60s").unwrap()
        );
    }

    #[test]
    fn test_week_magnitude() {
        assert_eq!(
            parse_age_threshold("2w").unwrap(),
            Duration::from_secs(2 * 7 * 24 * 60 * 60)
        );
    }

    #[test]
    fn test_duration_literal_fallback() {
        assert_eq!(
            parse_age_threshold("1h30m").unwrap(),
            Duration::from_secs(90 * 60)
        );
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(parse_age_threshold("").is_err());
    }

    #[test]
    fn test_rejects_bare_unit() {
        assert!(parse_age_threshold("w").is_err());
    }

    #[test]
    fn test_rejects_negative_magnitude() {
        assert!(parse_age_threshold("-2w").is_err());
    }

    #[test]
    fn test_rejects_unknown_input() {
        assert!(parse_age_threshold("invalid").is_err());
    }

    #[test]
    fn test_rejects_unknown_unit_letter() {
        assert!(parse_age_threshold("3x").is_err());
    }

    #[test]
    fn test_error_carries_input() {
        let err = parse_age_threshold("-2w").unwrap_err();
        assert!(err.to_string().contains("-2w"));
    }

    #[test]
    fn test_rejects_overflowing_magnitude() {
        let err = parse_age_threshold("100000000000000w").unwrap_err();
        assert!(err.to_string().contains("out of range"));

        // Exceeds u64 before the unit conversion even runs.
        assert!(parse_age_threshold("99999999999999999999s").is_err());
    }
}
