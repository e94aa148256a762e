//! Coercion helpers: truthiness, numeric and string conversion, equality
//! and ordering.
//!
//! Every operator's edge-case behaviour reduces to one of these, so each
//! is a total function matched exhaustively over [`Value`].

use crate::value::Value;
use std::cmp::Ordering;

// ------------------------------------------------------------ Truthiness

/// JsonLogic truthiness.
///
/// Empty arrays are falsy (unlike JavaScript); objects are always truthy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(_) => true,
    }
}

// ------------------------------------------------------------ Numbers

/// Numeric coercion.
///
/// A one-element array coerces as its element; other arrays and all objects
/// are `NaN`.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => *n,
        Value::String(s) => parse_number(s),
        Value::Array(a) if a.len() == 1 => to_number(&a[0]),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Parses a decimal string the way JavaScript's `Number(string)` does.
pub fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => 10,
    };
    if radix != 10 {
        return parse_radix(&s[2..], radix);
    }
    // Rust also accepts "inf"/"nan", which JavaScript does not.
    let numeric = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned digits after a `0x`/`0o`/`0b` prefix. Accumulates in `f64`, so
/// values past `u64::MAX` round instead of failing.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut n = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => n = n * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    n
}

/// Formats a number like JavaScript's `String(number)`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", n);
    }
    // Exponent form: Rust writes "1e21" and "1e-7", JavaScript "1e+21".
    let s = format!("{:e}", n);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

// ------------------------------------------------------------ Strings

/// String conversion following JavaScript's `String(value)`.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// ------------------------------------------------------------ Equality

/// Loose equality (`==`).
///
/// Booleans compare against the other side's truthiness; numbers against
/// strings compare numerically. Arrays compare element-wise, objects
/// structurally. Containers never equal scalars.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| loose_eq(l, r))
        }
        (Value::Object(_), Value::Object(_)) => strict_eq(a, b),
        (Value::Bool(x), Value::Number(_) | Value::String(_)) => *x == truthy(b),
        (Value::Number(_) | Value::String(_), Value::Bool(y)) => truthy(a) == *y,
        (Value::Number(x), Value::String(s)) => *x == parse_number(s),
        (Value::String(s), Value::Number(y)) => parse_number(s) == *y,
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
    }
}

/// Strict equality (`===`): same type and same value, containers compared
/// member-wise.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| strict_eq(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(k, l)| y.get(k).is_some_and(|r| strict_eq(l, r)))
        }
        _ => false,
    }
}

// ------------------------------------------------------------ Ordering

/// Relational comparison. Two strings compare lexicographically, anything
/// else numerically. `None` when either side is `NaN`.
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => to_number(a).partial_cmp(&to_number(b)),
    }
}

pub fn js_lt(a: &Value, b: &Value) -> bool {
    compare(a, b) == Some(Ordering::Less)
}

pub fn js_lte(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Less | Ordering::Equal))
}

pub fn js_gt(a: &Value, b: &Value) -> bool {
    compare(a, b) == Some(Ordering::Greater)
}

pub fn js_gte(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Greater | Ordering::Equal))
}
