//! Array operators.
//!
//! `map`, `filter`, `reduce`, `all`, `some` and `none` are scoped: the
//! first operand is evaluated against the outer context, then the second
//! operand is evaluated once per element with that element as the whole
//! context. A first operand that is not an array counts as empty.

use crate::compile::Expr;
use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::types::{arg, OperatorDefinition};
use crate::util;
use crate::value::{Map, Value};

static NULL_EXPR: Expr = Expr::Literal(Value::Null);

fn expr_arg(args: &[Expr], index: usize) -> &Expr {
    args.get(index).unwrap_or(&NULL_EXPR)
}

fn scoped_items(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Vec<Value>> {
    match ctx.evaluate(expr_arg(args, 0), data)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

fn map_eval(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let items = scoped_items(args, data, ctx)?;
    let logic = expr_arg(args, 1);
    let mut result = Vec::with_capacity(items.len());
    for item in &items {
        result.push(ctx.evaluate(logic, item)?);
    }
    Ok(Value::Array(result))
}

fn filter_eval(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let items = scoped_items(args, data, ctx)?;
    let logic = expr_arg(args, 1);
    let mut result = Vec::new();
    for item in items {
        if util::truthy(&ctx.evaluate(logic, &item)?) {
            result.push(item);
        }
    }
    Ok(Value::Array(result))
}

/// `reduce(array, logic, initial)`; `logic` sees
/// `{"current": element, "accumulator": acc}`.
fn reduce_eval(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let items = scoped_items(args, data, ctx)?;
    let logic = expr_arg(args, 1);
    let mut acc = ctx.evaluate(expr_arg(args, 2), data)?;
    for item in items {
        let mut scope = Map::with_capacity(2);
        scope.insert("current".to_string(), item);
        scope.insert("accumulator".to_string(), acc);
        acc = ctx.evaluate(logic, &Value::Object(scope))?;
    }
    Ok(acc)
}

/// Vacuously true on an empty array.
fn all_eval(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let items = scoped_items(args, data, ctx)?;
    let logic = expr_arg(args, 1);
    for item in &items {
        if !util::truthy(&ctx.evaluate(logic, item)?) {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn any_truthy(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<bool> {
    let items = scoped_items(args, data, ctx)?;
    let logic = expr_arg(args, 1);
    for item in &items {
        if util::truthy(&ctx.evaluate(logic, item)?) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn some_eval(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    any_truthy(args, data, ctx).map(Value::Bool)
}

fn none_eval(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    any_truthy(args, data, ctx).map(|found| Value::Bool(!found))
}

/// Flattens array operands by one level; other operands are kept as
/// single elements.
fn merge_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let mut result = Vec::new();
    for val in args {
        match val {
            Value::Array(items) => result.extend(items.iter().cloned()),
            other => result.push(other.clone()),
        }
    }
    Ok(Value::Array(result))
}

/// `in(needle, haystack)`: substring test for a string haystack, loose
/// membership for an array haystack, `false` otherwise.
fn in_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let needle = arg(args, 0);
    let found = match arg(args, 1) {
        Value::String(haystack) => haystack.contains(util::to_string(needle).as_str()),
        Value::Array(items) => items.iter().any(|item| util::loose_eq(item, needle)),
        _ => false,
    };
    Ok(Value::Bool(found))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition::eager("merge", &[], merge_eval),
        OperatorDefinition::eager("in", &[], in_eval),
        OperatorDefinition::lazy("map", &[], map_eval),
        OperatorDefinition::lazy("filter", &[], filter_eval),
        OperatorDefinition::lazy("reduce", &[], reduce_eval),
        OperatorDefinition::lazy("all", &[], all_eval),
        OperatorDefinition::lazy("some", &[], some_eval),
        OperatorDefinition::lazy("none", &[], none_eval),
    ]
}
