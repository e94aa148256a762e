//! Branching: `if` and its `?:` spelling.

use crate::compile::Expr;
use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::types::OperatorDefinition;
use crate::util;
use crate::value::Value;

/// `[c1, v1, c2, v2, ..., default]`: the value paired with the first truthy
/// condition, else the trailing default, else `null`. Only the conditions up
/// to the winning one and the chosen branch are evaluated.
fn if_eval(args: &[Expr], data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let mut pairs = args.chunks_exact(2);
    for pair in pairs.by_ref() {
        if util::truthy(&ctx.evaluate(&pair[0], data)?) {
            return ctx.evaluate(&pair[1], data);
        }
    }
    match pairs.remainder() {
        [default] => ctx.evaluate(default, data),
        _ => Ok(Value::Null),
    }
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![OperatorDefinition::lazy("if", &["?:"], if_eval)]
}
