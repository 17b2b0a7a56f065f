//! Per-cell coercion.
//!
//! Every parser here returns `Option`: a cell that cannot be read becomes an
//! absent value and the caller decides whether that is an integrity issue or
//! simply excluded from an aggregate.

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::NA_TOKENS;

// One term of a duration: an optional sign, then either a clock part or a
// number with an optional unit. Digits are ASCII only.
static DURATION_TERM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)^
        \s*,?\s*
        (?P<sign>[+-])?\s*
        (?:
            (?P<h>[0-9]+):(?P<m>[0-9]{2}):(?P<s>[0-9]{2}(?:\.[0-9]+)?)
          |
            (?P<value>[0-9]+(?:\.[0-9]+)?)\s*(?P<unit>[a-z]+)?
        )",
    )
    .expect("duration pattern is valid")
});

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;

/// True when a raw cell should be treated as null.
pub fn is_null_token(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NA_TOKENS.contains(&trimmed)
}

/// Best-effort numeric coercion. NaN and unparseable text are absent.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if is_null_token(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parse a duration such as `"30 days"`, `"1 day 2 hours"`, `"2w"`,
/// `"-2 days 04:00:00"` or `"12:30:00"`.
///
/// Terms are `<n><unit>` pairs in any order, optionally ending with an
/// `HH:MM:SS[.f]` clock part. A sign applies to the terms after it until the
/// next sign, so `"-1 days +20:00:00"` is minus four hours. A lone number
/// without a unit counts nanoseconds.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let trimmed = raw.trim();
    if is_null_token(trimmed) || trimmed.starts_with(',') {
        return None;
    }

    let mut total: i128 = 0;
    let mut negative = false;
    let mut terms = 0usize;
    let mut rest = trimmed;

    while !rest.is_empty() {
        let caps = DURATION_TERM_RE.captures(rest)?;
        match caps.name("sign").map(|m| m.as_str()) {
            Some("-") => negative = true,
            Some(_) => negative = false,
            None => {}
        }

        let nanos = if let Some(hours) = caps.name("h") {
            let nanos = clock_nanos(hours.as_str(), &caps["m"], &caps["s"])?;
            rest = &rest[caps.get(0)?.end()..];
            // The clock part closes the expression.
            if !rest.is_empty() {
                return None;
            }
            nanos
        } else {
            let value = &caps["value"];
            let scale = match caps.name("unit") {
                Some(unit) => unit_nanos(unit.as_str())?,
                None if terms == 0 && caps.get(0)?.end() == rest.len() => 1,
                None => return None,
            };
            rest = &rest[caps.get(0)?.end()..];
            scaled_nanos(value, scale)?
        };

        total += if negative { -nanos } else { nanos };
        terms += 1;
    }

    if terms == 0 {
        return None;
    }
    i64::try_from(total).ok().map(Duration::nanoseconds)
}

fn unit_nanos(unit: &str) -> Option<i128> {
    let nanos = match unit.to_ascii_lowercase().as_str() {
        "w" | "week" | "weeks" => 7 * NANOS_PER_DAY,
        "d" | "day" | "days" => NANOS_PER_DAY,
        "h" | "hr" | "hrs" | "hour" | "hours" => NANOS_PER_HOUR,
        "m" | "min" | "mins" | "minute" | "minutes" => NANOS_PER_MINUTE,
        "s" | "sec" | "secs" | "second" | "seconds" => NANOS_PER_SECOND,
        "ms" | "milli" | "millis" | "millisecond" | "milliseconds" => 1_000_000,
        "us" | "micro" | "micros" | "microsecond" | "microseconds" => 1_000,
        "ns" | "nano" | "nanos" | "nanosecond" | "nanoseconds" => 1,
        _ => return None,
    };
    Some(nanos)
}

/// `value` times `unit` in nanoseconds; the fractional part is rounded.
fn scaled_nanos(value: &str, unit: i128) -> Option<i128> {
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };
    let whole_nanos = whole.parse::<i128>().ok()?.checked_mul(unit)?;
    let fraction_nanos = match fraction {
        Some(digits) => {
            let fraction: f64 = format!("0.{digits}").parse().ok()?;
            (fraction * unit as f64).round() as i128
        }
        None => 0,
    };
    whole_nanos.checked_add(fraction_nanos)
}

fn clock_nanos(hours: &str, minutes: &str, seconds: &str) -> Option<i128> {
    let minutes: i128 = minutes.parse().ok()?;
    let second_nanos = scaled_nanos(seconds, NANOS_PER_SECOND)?;
    if minutes >= 60 || second_nanos >= 60 * NANOS_PER_SECOND {
        return None;
    }
    let hour_nanos = hours.parse::<i128>().ok()?.checked_mul(NANOS_PER_HOUR)?;
    hour_nanos.checked_add(minutes * NANOS_PER_MINUTE + second_nanos)
}

/// Render whole days the way [`parse_duration`] reads them back.
pub fn format_days(days: i64) -> String {
    format!("{days} days")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_tokens() {
        assert!(is_null_token(""));
        assert!(is_null_token("   "));
        assert!(is_null_token("NaN"));
        assert!(is_null_token("None"));
        assert!(!is_null_token("0"));
        assert!(!is_null_token("Food"));
    }

    #[test]
    fn test_parse_number_coerces_garbage_to_absent() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number(" -3 "), Some(-3.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("nan"), None);
    }

    #[test]
    fn test_parse_duration_day_forms() {
        assert_eq!(parse_duration("30 days"), Some(Duration::days(30)));
        assert_eq!(parse_duration("1 day"), Some(Duration::days(1)));
        assert_eq!(parse_duration("7d"), Some(Duration::days(7)));
        assert_eq!(parse_duration("30 Days"), Some(Duration::days(30)));
        assert_eq!(parse_duration("0 days"), Some(Duration::zero()));
        assert_eq!(parse_duration("-5 days"), Some(Duration::days(-5)));
    }

    #[test]
    fn test_parse_duration_with_clock_part() {
        assert_eq!(
            parse_duration("2 days 04:30:00"),
            Some(Duration::days(2) + Duration::hours(4) + Duration::minutes(30))
        );
        assert_eq!(parse_duration("12:00:00"), Some(Duration::hours(12)));
        assert_eq!(parse_duration("00:00:01.5"), Some(Duration::milliseconds(1500)));
    }

    #[test]
    fn test_parse_duration_other_units() {
        assert_eq!(parse_duration("12 hours"), Some(Duration::hours(12)));
        assert_eq!(parse_duration("2w"), Some(Duration::weeks(2)));
        assert_eq!(parse_duration("3 weeks"), Some(Duration::weeks(3)));
        assert_eq!(parse_duration("90 min"), Some(Duration::minutes(90)));
        assert_eq!(parse_duration("15m"), Some(Duration::minutes(15)));
        assert_eq!(parse_duration("45 seconds"), Some(Duration::seconds(45)));
        assert_eq!(parse_duration("250ms"), Some(Duration::milliseconds(250)));
        assert_eq!(parse_duration("7 us"), Some(Duration::microseconds(7)));
        assert_eq!(parse_duration("12ns"), Some(Duration::nanoseconds(12)));
        assert_eq!(parse_duration("1.5 days"), Some(Duration::hours(36)));
    }

    #[test]
    fn test_parse_duration_compound_terms() {
        assert_eq!(parse_duration("1 day 2 hours"), Some(Duration::hours(26)));
        assert_eq!(
            parse_duration("1d2h30m"),
            Some(Duration::hours(26) + Duration::minutes(30))
        );
        assert_eq!(parse_duration("1 day, 02:00:00"), Some(Duration::hours(26)));
    }

    #[test]
    fn test_parse_duration_signed_clock_part() {
        assert_eq!(parse_duration("-1 days +20:00:00"), Some(Duration::hours(-4)));
        assert_eq!(
            parse_duration("-2 days 04:00:00"),
            Some(-(Duration::days(2) + Duration::hours(4)))
        );
        assert_eq!(parse_duration("-12:00:00"), Some(Duration::hours(-12)));
    }

    #[test]
    fn test_parse_duration_bare_integer_is_nanoseconds() {
        assert_eq!(parse_duration("30"), Some(Duration::nanoseconds(30)));
        assert_eq!(parse_duration("0"), Some(Duration::zero()));
    }

    #[test]
    fn test_parse_duration_rejects_unparseable() {
        assert_eq!(parse_duration("soon"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("1 day 00:75:00"), None);
        assert_eq!(parse_duration("days"), None);
        assert_eq!(parse_duration("30 fortnights"), None);
        assert_eq!(parse_duration("1 day 30"), None);
        assert_eq!(parse_duration("12:00:00 1 day"), None);
        assert_eq!(parse_duration("1 day,"), None);
    }

    #[test]
    fn test_parse_duration_rejects_non_ascii_digits() {
        assert_eq!(parse_duration("\u{663}\u{660} days"), None);
        assert_eq!(parse_duration("\u{663}\u{660}"), None);
    }

    #[test]
    fn test_format_days_round_trips() {
        assert_eq!(format_days(45), "45 days");
        assert_eq!(parse_duration(&format_days(45)), Some(Duration::days(45)));
    }
}
