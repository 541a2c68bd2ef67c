//! Loose integer coercion for counter values.
//!
//! Clients send `count` as a JSON number, a JSON string, or a form field, and
//! the store hands values back as strings. Everything is folded to an `i64`
//! with one rule: take the leading integer, and fall back to 0 when there is
//! none. This is a compatibility behavior, not general numeric parsing.

use serde_json::Value;

/// Coerce a JSON value to an integer.
///
/// - strings: see [`coerce_str`]
/// - numbers: truncated toward zero, saturating at the `i64` bounds
/// - `true` => 1, `false` => 0
/// - `null`, arrays, objects => 0
pub fn coerce_value(v: &Value) -> i64 {
    match v {
        Value::String(s) => coerce_str(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                // `as` saturates and maps NaN to 0.
                n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0)
            }
        }
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

/// Parse the leading integer of `s`.
///
/// Leading whitespace and one optional sign are accepted; parsing stops at the
/// first non-digit. No digits yields 0. Overflow saturates.
pub fn coerce_str(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        let next = acc
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) });
        match next {
            Some(v) => acc = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    acc
}
