//! Field coercion helpers for incoming vehicle records.
//!
//! Every function here is a pure mapping from a single loosely-typed input
//! value to a typed column value. The lenient variants resolve unparseable
//! input to `None` instead of failing; only `parse_date_strict` can reject.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Date formats accepted for calendar-date fields, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }
    // Full ISO-8601 date/time string; keep only the date portion.
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

/// Lenient date coercion: empty/missing input and unparseable input both
/// resolve to `None`.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    match value {
        None => None,
        Some(s) if s.is_empty() => None,
        Some(s) => try_parse_date(s),
    }
}

/// Strict date coercion: empty/missing input resolves to `None`, but a
/// non-empty value that matches no accepted format is an error. Used only for
/// the RC `registration_date` field, which has a stricter contract than the
/// other date columns.
pub fn parse_date_strict(value: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match value {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => try_parse_date(s)
            .map(Some)
            .ok_or_else(|| format!("Unparseable date: {:?}", s)),
    }
}

/// Lenient datetime coercion. A trailing `Z` is normalized to an explicit UTC
/// offset before parsing; offset-less forms are interpreted as UTC.
pub fn parse_datetime(value: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = match value {
        None => return None,
        Some(s) if s.is_empty() => return None,
        Some(s) => s,
    };

    let normalized = if let Some(stripped) = raw.strip_suffix('Z') {
        format!("{}+00:00", stripped)
    } else {
        raw.to_string()
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }
    None
}

/// Numeric coercion to integer. Accepts JSON numbers and numeric strings;
/// anything else, including empty strings, resolves to `None`.
pub fn coerce_int(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) if !s.is_empty() => s.trim().parse().ok(),
        _ => None,
    }
}

/// Numeric coercion to float, same policy as [`coerce_int`].
pub fn coerce_float(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if !s.is_empty() => s.trim().parse().ok(),
        _ => None,
    }
}

/// Boolean-to-small-integer mapping: `true`, `"true"`, `"1"` and the integer
/// `1` map to 1; every other value, including missing, maps to 0.
pub fn bool_flag(value: Option<&Value>) -> u8 {
    match value {
        Some(Value::Bool(true)) => 1,
        Some(Value::String(s)) if s == "true" || s == "1" => 1,
        Some(Value::Number(n)) if n.as_i64() == Some(1) => 1,
        _ => 0,
    }
}

/// Free-text passthrough: missing input becomes an empty string.
pub fn text_or_empty(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn date_formats_normalize_to_same_day() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date(Some("2024-03-15")), Some(expected));
        assert_eq!(parse_date(Some("15/03/2024")), Some(expected));
        assert_eq!(parse_date(Some("2024/03/15")), Some(expected));
    }

    #[test]
    fn date_extracts_date_portion_from_iso_datetime() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date(Some("2024-03-15T10:00:00Z")), Some(expected));
        assert_eq!(parse_date(Some("2024-03-15T10:00:00")), Some(expected));
    }

    #[test]
    fn lenient_date_resolves_garbage_to_none() {
        assert_eq!(parse_date(None), None);
        assert_eq!(parse_date(Some("")), None);
        assert_eq!(parse_date(Some("not-a-date")), None);
        assert_eq!(parse_date(Some("31/31/2024")), None);
    }

    #[test]
    fn strict_date_rejects_garbage_but_allows_missing() {
        assert_eq!(parse_date_strict(None), Ok(None));
        assert_eq!(parse_date_strict(Some("")), Ok(None));
        assert!(parse_date_strict(Some("2024-03-15")).unwrap().is_some());
        assert!(parse_date_strict(Some("not-a-date")).is_err());
    }

    #[test]
    fn datetime_normalizes_z_suffix_to_utc() {
        let dt = parse_datetime(Some("2024-03-15T10:00:00Z")).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap());
    }

    #[test]
    fn datetime_accepts_offset_and_plain_forms() {
        let with_offset = parse_datetime(Some("2024-03-15T15:30:00+05:30")).unwrap();
        assert_eq!(
            with_offset,
            Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
        );

        let plain = parse_datetime(Some("2024-03-15 10:00:00")).unwrap();
        assert_eq!(plain, Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap());
    }

    #[test]
    fn datetime_resolves_garbage_to_none() {
        assert_eq!(parse_datetime(None), None);
        assert_eq!(parse_datetime(Some("")), None);
        assert_eq!(parse_datetime(Some("soon")), None);
    }

    #[test]
    fn int_coercion_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_int(Some(&json!(4))), Some(4));
        assert_eq!(coerce_int(Some(&json!("4"))), Some(4));
        assert_eq!(coerce_int(Some(&json!(""))), None);
        assert_eq!(coerce_int(Some(&json!("four"))), None);
        assert_eq!(coerce_int(Some(&json!(null))), None);
        assert_eq!(coerce_int(None), None);
    }

    #[test]
    fn float_coercion_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_float(Some(&json!(1498.5))), Some(1498.5));
        assert_eq!(coerce_float(Some(&json!("1498.5"))), Some(1498.5));
        assert_eq!(coerce_float(Some(&json!("heavy"))), None);
        assert_eq!(coerce_float(None), None);
    }

    #[test]
    fn bool_flag_true_equivalents_map_to_one() {
        assert_eq!(bool_flag(Some(&json!(true))), 1);
        assert_eq!(bool_flag(Some(&json!("true"))), 1);
        assert_eq!(bool_flag(Some(&json!("1"))), 1);
        assert_eq!(bool_flag(Some(&json!(1))), 1);
    }

    #[test]
    fn bool_flag_everything_else_maps_to_zero() {
        assert_eq!(bool_flag(Some(&json!(false))), 0);
        assert_eq!(bool_flag(Some(&json!("0"))), 0);
        assert_eq!(bool_flag(Some(&json!(0))), 0);
        assert_eq!(bool_flag(Some(&json!(null))), 0);
        assert_eq!(bool_flag(Some(&json!("TRUE"))), 0);
        assert_eq!(bool_flag(None), 0);
    }

    #[test]
    fn text_defaults_to_empty_string() {
        assert_eq!(text_or_empty(None), "");
        assert_eq!(text_or_empty(Some(&"SBI".to_string())), "SBI");
    }
}
