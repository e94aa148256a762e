//! String operators: `cat` and `substr`.

use crate::error::{JsonLogicError, Result};
use crate::types::{arg, OperatorDefinition};
use crate::util;
use crate::value::Value;

fn cat_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let mut result = String::new();
    for val in args {
        result.push_str(&util::to_string(val));
    }
    Ok(Value::String(result))
}

/// Integer part of a position operand; `NaN` has no position.
fn position(operand: &Value, what: &str) -> Result<f64> {
    let n = util::to_number(operand);
    if n.is_nan() {
        return Err(JsonLogicError::invalid_argument(
            "substr",
            format!("{} must be numeric, got {}", what, operand),
        ));
    }
    Ok(n.trunc())
}

/// `substr(source, start, length?)`, counted in characters.
///
/// A negative `start` counts from the end; a negative `length` stops that
/// many characters before the end. A `null` length reads as "to the end",
/// the same as leaving it out.
fn substr_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let chars: Vec<char> = util::to_string(arg(args, 0)).chars().collect();
    let len = chars.len() as f64;
    let start = position(arg(args, 1), "start")?;
    let begin = if start < 0.0 { (len + start).max(0.0) } else { start.min(len) };
    let end = match arg(args, 2) {
        Value::Null => len,
        length => {
            let n = position(length, "length")?;
            if n < 0.0 {
                (len + n).max(begin)
            } else {
                (begin + n).min(len)
            }
        }
    };
    let result: String = chars[begin as usize..end as usize].iter().collect();
    Ok(Value::String(result))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition::eager("cat", &[], cat_eval),
        OperatorDefinition::eager("substr", &[], substr_eval),
    ]
}
