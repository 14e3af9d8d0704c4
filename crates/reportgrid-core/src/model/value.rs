//! Helpers for reading raw field values

use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Returns the plain string form of a field value
///
/// `null` becomes the empty string, strings are returned verbatim, and nested
/// arrays/objects are rendered as compact JSON.
pub fn value_to_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => number_to_text(n),
		Value::String(s) => s.clone(),
		Value::Array(_) | Value::Object(_) => value.to_string(),
	}
}

/// Integral floats print without a fractional part (`3.0` -> `3`).
fn number_to_text(n: &Number) -> String {
	if n.is_i64() || n.is_u64() {
		return n.to_string();
	}
	match n.as_f64() {
		Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
		Some(f) => f.to_string(),
		None => n.to_string(),
	}
}

/// Compares two raw field values for sorting
///
/// This is a total order. Values of different kinds rank as missing or `null`
/// first, then booleans, numbers, strings and finally arrays or objects.
/// Within a kind, numbers compare numerically, strings lexicographically and
/// booleans with `false < true`. Arrays and objects compare equal to each
/// other so that a stable sort keeps their original relative order.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
	match (a, b) {
		(Some(Value::Number(x)), Some(Value::Number(y))) => match (x.as_f64(), y.as_f64()) {
			(Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
			_ => Ordering::Equal,
		},
		(Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
		(Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
		_ => kind_rank(a).cmp(&kind_rank(b)),
	}
}

fn kind_rank(value: Option<&Value>) -> u8 {
	match value {
		None | Some(Value::Null) => 0,
		Some(Value::Bool(_)) => 1,
		Some(Value::Number(_)) => 2,
		Some(Value::String(_)) => 3,
		Some(Value::Array(_) | Value::Object(_)) => 4,
	}
}
