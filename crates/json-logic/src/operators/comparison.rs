//! Comparison operators.
//!
//! `<` and `<=` accept a third operand and then test `a < b < c`
//! (respectively `a <= b <= c`).

use crate::error::Result;
use crate::types::{arg, OperatorDefinition};
use crate::util;
use crate::value::Value;

fn eq_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Bool(util::loose_eq(arg(args, 0), arg(args, 1))))
}

fn ne_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Bool(!util::loose_eq(arg(args, 0), arg(args, 1))))
}

fn strict_eq_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Bool(util::strict_eq(arg(args, 0), arg(args, 1))))
}

fn strict_ne_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Bool(!util::strict_eq(arg(args, 0), arg(args, 1))))
}

fn gt_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Bool(util::js_gt(arg(args, 0), arg(args, 1))))
}

fn ge_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Bool(util::js_gte(arg(args, 0), arg(args, 1))))
}

fn lt_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let result = util::js_lt(arg(args, 0), arg(args, 1));
    if args.len() > 2 {
        return Ok(Value::Bool(result && util::js_lt(arg(args, 1), arg(args, 2))));
    }
    Ok(Value::Bool(result))
}

fn le_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let result = util::js_lte(arg(args, 0), arg(args, 1));
    if args.len() > 2 {
        return Ok(Value::Bool(result && util::js_lte(arg(args, 1), arg(args, 2))));
    }
    Ok(Value::Bool(result))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition::eager("==", &[], eq_eval),
        OperatorDefinition::eager("!=", &[], ne_eval),
        OperatorDefinition::eager("===", &[], strict_eq_eval),
        OperatorDefinition::eager("!==", &[], strict_ne_eval),
        OperatorDefinition::eager(">", &[], gt_eval),
        OperatorDefinition::eager(">=", &[], ge_eval),
        OperatorDefinition::eager("<", &[], lt_eval),
        OperatorDefinition::eager("<=", &[], le_eval),
    ]
}
