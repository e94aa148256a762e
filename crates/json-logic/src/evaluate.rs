//! The tree walk.

use crate::compile::{Call, Expr};
use crate::error::{JsonLogicError, Result};
use crate::eval_ctx::EvalCtx;
use crate::types::Operator;
use crate::value::Value;
use tracing::trace;

/// Evaluates a compiled node against `data`.
///
/// - Literals are returned as-is.
/// - Array nodes evaluate each element in order.
/// - Calls apply the operator's evaluation policy: eager operators get
///   their arguments evaluated left to right first, lazy operators get the
///   argument subtrees.
pub fn evaluate(expr: &Expr, data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    match expr {
        Expr::Literal(v) => Ok(v.clone()),
        Expr::Array(items) => {
            ctx.enter()?;
            let result = items
                .iter()
                .map(|item| evaluate(item, data, ctx))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array);
            ctx.leave();
            result
        }
        Expr::Call(call) => {
            ctx.enter()?;
            let result = apply(call, data, ctx);
            ctx.leave();
            result
        }
    }
}

fn apply(call: &Call, data: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value> {
    let operator = ctx.operator(call).ok_or_else(|| JsonLogicError::UnknownOperator {
        name: call.name().to_string(),
        path: call.path().to_string(),
    })?;
    trace!(operator = call.name(), args = call.args().len(), "apply");
    match operator {
        Operator::Eager(f) => {
            let args = call
                .args()
                .iter()
                .map(|arg| evaluate(arg, data, ctx))
                .collect::<Result<Vec<_>>>()?;
            f(&args, data)
        }
        Operator::Lazy(f) => f(call.args(), data, ctx),
    }
}
