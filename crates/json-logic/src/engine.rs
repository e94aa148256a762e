//! The `JsonLogic` engine: an operator registry plus evaluation options.

use crate::compile::{self, CompiledRule};
use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::operators;
use crate::registry::OperatorRegistry;
use crate::types::Operator;
use crate::value::Value;

/// Options for [`JsonLogic`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonLogicOptions {
    /// Maximum nesting of operator calls and evaluated arrays during one
    /// evaluation. `None` means unlimited.
    pub max_depth: Option<usize>,
}

/// Compiles and evaluates rules.
///
/// Register custom operators first, then share the engine freely: compiling
/// and evaluating only need `&self`, so one engine (and any rule compiled
/// with it) can serve many threads at once.
#[derive(Clone)]
pub struct JsonLogic {
    registry: OperatorRegistry,
    options: JsonLogicOptions,
}

impl JsonLogic {
    /// An engine with the built-in operators and default options.
    pub fn new() -> Self {
        JsonLogic::with_options(JsonLogicOptions::default())
    }

    pub fn with_options(options: JsonLogicOptions) -> Self {
        JsonLogic { registry: operators::registry(), options }
    }

    pub fn options(&self) -> &JsonLogicOptions {
        &self.options
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Registers `operator` under `name`. A later registration under the
    /// same name, built-ins included, replaces the earlier one.
    pub fn register_operator(&mut self, name: impl Into<String>, operator: Operator) -> &mut Self {
        self.registry.register(name, operator);
        self
    }

    pub fn has_operator(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn compile(&self, rule: &Value) -> Result<CompiledRule> {
        compile::compile(rule, &self.registry)
    }

    /// Evaluates a compiled rule against `data`.
    pub fn evaluate(&self, rule: &CompiledRule, data: &Value) -> Result<Value> {
        let mut ctx = EvalCtx::new(&self.registry, rule, self.options.max_depth);
        ctx.evaluate(rule.root(), data)
    }

    /// Compiles `rule` and evaluates it once.
    pub fn apply(&self, rule: &Value, data: &Value) -> Result<Value> {
        let compiled = self.compile(rule)?;
        self.evaluate(&compiled, data)
    }

    /// [`apply`](Self::apply) over `serde_json` values. Non-finite numbers in
    /// the result come back as `null`.
    pub fn apply_json(
        &self,
        rule: &serde_json::Value,
        data: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.apply(&Value::from(rule), &Value::from(data))
            .map(serde_json::Value::from)
    }
}

impl Default for JsonLogic {
    fn default() -> Self {
        JsonLogic::new()
    }
}
