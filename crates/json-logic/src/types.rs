use crate::compile::Expr;
use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Receives the evaluated arguments and the current context.
pub type EagerFn = dyn Fn(&[Value], &Value) -> Result<Value> + Send + Sync;

/// Receives the unevaluated argument subtrees; decides itself what to
/// evaluate, in which order, and against which context.
pub type LazyFn = dyn Fn(&[Expr], &Value, &mut EvalCtx<'_>) -> Result<Value> + Send + Sync;

/// An operator implementation together with its argument-evaluation policy.
#[derive(Clone)]
pub enum Operator {
    /// All arguments are evaluated left to right before the call.
    Eager(Arc<EagerFn>),
    /// Short-circuit and scoped operators.
    Lazy(Arc<LazyFn>),
}

impl Operator {
    pub fn eager<F>(f: F) -> Self
    where
        F: Fn(&[Value], &Value) -> Result<Value> + Send + Sync + 'static,
    {
        Operator::Eager(Arc::new(f))
    }

    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn(&[Expr], &Value, &mut EvalCtx<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        Operator::Lazy(Arc::new(f))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Operator::Lazy(_))
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Eager(_) => f.write_str("Operator::Eager(<fn>)"),
            Operator::Lazy(_) => f.write_str("Operator::Lazy(<fn>)"),
        }
    }
}

/// A built-in operator: its name, alternative spellings and implementation.
pub struct OperatorDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub operator: Operator,
}

impl OperatorDefinition {
    pub fn eager(
        name: &'static str,
        aliases: &'static [&'static str],
        f: fn(&[Value], &Value) -> Result<Value>,
    ) -> Self {
        OperatorDefinition { name, aliases, operator: Operator::eager(f) }
    }

    pub fn lazy(
        name: &'static str,
        aliases: &'static [&'static str],
        f: for<'a> fn(&[Expr], &Value, &mut EvalCtx<'a>) -> Result<Value>,
    ) -> Self {
        OperatorDefinition { name, aliases, operator: Operator::lazy(f) }
    }
}

/// Returns argument `index`, or `null` when the caller supplied fewer.
pub fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&crate::value::NULL)
}
