//! Cell formatting and the smart date rule
//!
//! Timestamps are shown relative to the current day:
//!
//! | Timestamp falls on | Rendered as |
//! |--------------------|-------------|
//! | today | `Today at 14:05` |
//! | yesterday | `Yesterday at 09:30` |
//! | any other day | `March 3, 2024 at 18:45` |

use crate::model::{ValueKind, value_to_text};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use std::fmt::Display;

const TIME_FORMAT: &str = "%H:%M";
const LONG_DATE_FORMAT: &str = "%B %-d, %Y at %H:%M";

/// Formats a timestamp relative to `now` using the smart date rule
///
/// Both timestamps are compared by calendar day in their own time zone, so a
/// timestamp exactly 24 hours before `now` is rendered as "Yesterday".
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use reportgrid_core::format_smart_date;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
/// let older = Utc.with_ymd_and_hms(2024, 3, 3, 18, 45, 0).unwrap();
///
/// assert_eq!(format_smart_date(&now, &now), "Today at 12:00");
/// assert_eq!(format_smart_date(&older, &now), "March 3, 2024 at 18:45");
/// ```
pub fn format_smart_date<Tz>(value: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	let day = value.date_naive();
	let today = now.date_naive();

	if day == today {
		format!("Today at {}", value.format(TIME_FORMAT))
	} else if today.pred_opt() == Some(day) {
		format!("Yesterday at {}", value.format(TIME_FORMAT))
	} else {
		value.format(LONG_DATE_FORMAT).to_string()
	}
}

/// Interprets a raw field value as a point in time
///
/// Accepted forms:
/// - numbers: milliseconds since the Unix epoch
/// - RFC 3339 strings (`2024-03-03T18:45:00Z`)
/// - naive date-times (`2024-03-03 18:45:00` or `2024-03-03T18:45:00`), read as local time
/// - bare dates (`2024-03-03`), read as UTC midnight
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Local>> {
	match value {
		Value::Number(n) => {
			let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
			Local.timestamp_millis_opt(millis).single()
		}
		Value::String(s) => parse_timestamp_str(s.trim()),
		_ => None,
	}
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Local>> {
	if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
		return Some(dt.with_timezone(&Local));
	}
	for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
		if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
			return Local.from_local_datetime(&naive).earliest();
		}
	}
	let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
	let midnight = date.and_hms_opt(0, 0, 0)?;
	Some(Utc.from_utc_datetime(&midnight).with_timezone(&Local))
}

/// Formats a raw value for display according to its column kind
///
/// Date values that cannot be parsed fall back to their plain text form.
pub fn format_cell(kind: ValueKind, value: &Value, now: &DateTime<Local>) -> String {
	match kind {
		ValueKind::Date => match parse_timestamp(value) {
			Some(ts) => format_smart_date(&ts, now),
			None => value_to_text(value),
		},
		ValueKind::Text | ValueKind::Number => value_to_text(value),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Duration;
	use rstest::rstest;
	use serde_json::json;

	fn fixed_now() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2024, 3, 10, 12, 5, 0).unwrap()
	}

	#[rstest]
	fn test_today() {
		let now = fixed_now();
		assert_eq!(format_smart_date(&now, &now), "Today at 12:05");
	}

	#[rstest]
	fn test_exactly_one_day_earlier_is_yesterday() {
		let now = fixed_now();
		let earlier = now - Duration::hours(24);
		assert_eq!(format_smart_date(&earlier, &now), "Yesterday at 12:05");
	}

	#[rstest]
	fn test_start_of_today_is_today() {
		let now = fixed_now();
		let midnight = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
		assert_eq!(format_smart_date(&midnight, &now), "Today at 00:00");
	}

	#[rstest]
	fn test_older_uses_long_date() {
		let now = fixed_now();
		let older = Utc.with_ymd_and_hms(2023, 12, 1, 7, 9, 0).unwrap();
		assert_eq!(format_smart_date(&older, &now), "December 1, 2023 at 07:09");
	}

	#[rstest]
	fn test_future_day_uses_long_date() {
		let now = fixed_now();
		let later = now + Duration::days(2);
		assert_eq!(format_smart_date(&later, &now), "March 12, 2024 at 12:05");
	}

	#[rstest]
	#[case(json!(1_700_000_000_000_i64))]
	#[case(json!("2024-03-03T18:45:00Z"))]
	#[case(json!("2024-03-03 18:45:00"))]
	#[case(json!("2024-03-03"))]
	fn test_parse_timestamp_accepts(#[case] value: Value) {
		assert!(parse_timestamp(&value).is_some());
	}

	#[rstest]
	#[case(json!("not a date"))]
	#[case(json!(null))]
	#[case(json!(true))]
	fn test_parse_timestamp_rejects(#[case] value: Value) {
		assert!(parse_timestamp(&value).is_none());
	}

	#[rstest]
	fn test_format_cell_unparseable_date_falls_back() {
		let now = Local::now();
		assert_eq!(
			format_cell(ValueKind::Date, &json!("soon"), &now),
			"soon"
		);
	}

	#[rstest]
	fn test_format_cell_number() {
		let now = Local::now();
		assert_eq!(format_cell(ValueKind::Number, &json!(1250), &now), "1250");
	}
}
