//! Logical operators: `and`, `or`, `!`, `!!`.

use crate::compile::Expr;
use crate::error::{JsonLogicError, Result};
use crate::eval_ctx::EvalCtx;
use crate::types::{arg, OperatorDefinition};
use crate::util;
use crate::value::Value;

fn no_operands(operator: &str) -> JsonLogicError {
    JsonLogicError::EvaluationError(format!("\"{}\" needs at least one operand", operator))
}

/// First falsy value, or the last value when all are truthy.
fn and_eval(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    if args.is_empty() {
        return Err(no_operands("and"));
    }
    let mut acc = Value::Null;
    for e in args {
        acc = ctx.evaluate(e, data)?;
        if !util::truthy(&acc) {
            return Ok(acc);
        }
    }
    Ok(acc)
}

/// First truthy value, or the last value when all are falsy.
fn or_eval(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    if args.is_empty() {
        return Err(no_operands("or"));
    }
    let mut acc = Value::Null;
    for e in args {
        acc = ctx.evaluate(e, data)?;
        if util::truthy(&acc) {
            return Ok(acc);
        }
    }
    Ok(acc)
}

fn not_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Bool(!util::truthy(arg(args, 0))))
}

fn bool_eval(args: &[Value], _data: &Value) -> Result<Value> {
    Ok(Value::Bool(util::truthy(arg(args, 0))))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition::lazy("and", &[], and_eval),
        OperatorDefinition::lazy("or", &[], or_eval),
        OperatorDefinition::eager("!", &[], not_eval),
        OperatorDefinition::eager("!!", &[], bool_eval),
    ]
}
