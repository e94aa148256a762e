//! Arithmetic operators. Operands go through numeric coercion; invalid
//! arithmetic yields `NaN` or `±Infinity` rather than an error.

use crate::error::Result;
use crate::types::{arg, OperatorDefinition};
use crate::util;
use crate::value::Value;

/// Sum of all operands. With one operand this is a numeric cast.
fn add_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Number(
        args.iter().map(util::to_number).fold(0.0, |acc, n| acc + n),
    ))
}

/// `a - b`, or `-a` when only one operand is given.
fn subtract_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let a = util::to_number(arg(args, 0));
    if args.len() < 2 {
        return Ok(Value::Number(-a));
    }
    Ok(Value::Number(a - util::to_number(arg(args, 1))))
}

fn multiply_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let first = util::to_number(arg(args, 0));
    let product = args.iter().skip(1).map(util::to_number).fold(first, |acc, n| acc * n);
    Ok(Value::Number(product))
}

fn divide_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Number(
        util::to_number(arg(args, 0)) / util::to_number(arg(args, 1)),
    ))
}

/// Remainder with the sign of the dividend, like JavaScript's `%`.
fn mod_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Number(
        util::to_number(arg(args, 0)) % util::to_number(arg(args, 1)),
    ))
}

// `f64::min`/`max` skip NaN operands; JavaScript's Math.min/max propagate them.

fn min_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let m = args.iter().map(util::to_number).fold(f64::INFINITY, |acc, n| {
        if acc.is_nan() || n.is_nan() {
            f64::NAN
        } else {
            acc.min(n)
        }
    });
    Ok(Value::Number(m))
}

fn max_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let m = args.iter().map(util::to_number).fold(f64::NEG_INFINITY, |acc, n| {
        if acc.is_nan() || n.is_nan() {
            f64::NAN
        } else {
            acc.max(n)
        }
    });
    Ok(Value::Number(m))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition::eager("+", &[], add_eval),
        OperatorDefinition::eager("-", &[], subtract_eval),
        OperatorDefinition::eager("*", &[], multiply_eval),
        OperatorDefinition::eager("/", &[], divide_eval),
        OperatorDefinition::eager("%", &[], mod_eval),
        OperatorDefinition::eager("min", &[], min_eval),
        OperatorDefinition::eager("max", &[], max_eval),
    ]
}
