use crate::compile::{Call, CompiledRule, Expr};
use crate::error::{JsonLogicError, Result};
use crate::registry::OperatorRegistry;
use crate::types::Operator;
use crate::value::Value;

/// State threaded through one evaluation.
///
/// Lazy operators receive it so they can evaluate their argument subtrees,
/// possibly against a different context (see the scoped array operators).
pub struct EvalCtx<'a> {
    registry: &'a OperatorRegistry,
    /// Whether slot ids cached in the compiled rule belong to `registry`.
    bound: bool,
    depth: usize,
    max_depth: Option<usize>,
}

impl<'a> EvalCtx<'a> {
    /// A context for evaluating `rule` with `registry`. Slot ids cached in
    /// the rule are only used when it was compiled against this registry.
    pub fn new(
        registry: &'a OperatorRegistry,
        rule: &CompiledRule,
        max_depth: Option<usize>,
    ) -> Self {
        let bound = rule.registry_id() == registry.id();
        EvalCtx { registry, bound, depth: 0, max_depth }
    }

    /// Evaluates `expr` with `data` as the context.
    pub fn evaluate(&mut self, expr: &Expr, data: &Value) -> Result<Value> {
        crate::evaluate::evaluate(expr, data, self)
    }

    pub fn registry(&self) -> &'a OperatorRegistry {
        self.registry
    }

    /// Finds the implementation for `call`.
    pub(crate) fn operator(&self, call: &Call) -> Option<&'a Operator> {
        let registry = self.registry;
        match call.slot() {
            Some(id) if self.bound => registry.get(id),
            _ => registry.lookup(call.name()),
        }
    }

    pub(crate) fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        match self.max_depth {
            Some(limit) if self.depth > limit => {
                self.depth -= 1;
                Err(JsonLogicError::DepthLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}
