//! JsonLogic evaluator.
//!
//! # Overview
//!
//! Rules are JSON-like data. A single-key object `{"op": args}` is an
//! operator call; everything else is a literal. A rule is compiled once into
//! an expression tree and can then be evaluated against any number of data
//! contexts.
//!
//! # Example
//!
//! ```
//! use json_logic::{JsonLogic, Value};
//! use serde_json::json;
//!
//! let logic = JsonLogic::new();
//! let rule = logic
//!     .compile(&Value::from(json!({"<": [{"var": "age"}, 18]})))
//!     .unwrap();
//!
//! let minor = logic.evaluate(&rule, &Value::from(json!({"age": 12}))).unwrap();
//! let adult = logic.evaluate(&rule, &Value::from(json!({"age": 40}))).unwrap();
//!
//! assert_eq!(minor, Value::Bool(true));
//! assert_eq!(adult, Value::Bool(false));
//! ```

pub mod compile;
pub mod engine;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod operators;
pub mod registry;
pub mod types;
pub mod util;
pub mod value;
pub mod vars;

use std::sync::OnceLock;

pub use compile::{Call, CompiledRule, Expr};
pub use engine::{JsonLogic, JsonLogicOptions};
pub use error::{JsonLogicError, Result};
pub use eval_ctx::EvalCtx;
pub use registry::{OperatorId, OperatorRegistry};
pub use types::{EagerFn, LazyFn, Operator, OperatorDefinition};
pub use util::{loose_eq, strict_eq, truthy};
pub use value::{Map, Value};

fn default_engine() -> &'static JsonLogic {
    static ENGINE: OnceLock<JsonLogic> = OnceLock::new();
    ENGINE.get_or_init(JsonLogic::new)
}

/// Compiles `rule` with the built-in operators.
pub fn compile(rule: &Value) -> Result<CompiledRule> {
    default_engine().compile(rule)
}

/// Compiles `rule` with the built-in operators and evaluates it against
/// `data`.
pub fn evaluate(rule: &Value, data: &Value) -> Result<Value> {
    default_engine().apply(rule, data)
}

/// Evaluates a rule previously returned by [`compile`].
pub fn evaluate_compiled(rule: &CompiledRule, data: &Value) -> Result<Value> {
    default_engine().evaluate(rule, data)
}

/// [`evaluate`] over `serde_json` values.
pub fn apply_json(rule: &serde_json::Value, data: &serde_json::Value) -> Result<serde_json::Value> {
    default_engine().apply_json(rule, data)
}
