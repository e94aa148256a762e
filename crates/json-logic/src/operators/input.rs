//! Data access operators: `var`, `missing`, `missing_some`.

use crate::error::{JsonLogicError, Result};
use crate::types::{arg, OperatorDefinition};
use crate::util;
use crate::value::Value;
use crate::vars;

/// `var(path, default?)`. Never fails on a missing key; fails only when
/// the path itself is a container.
fn var_eval(args: &[Value], data: &Value) -> Result<Value> {
    vars::lookup(data, arg(args, 0), arg(args, 1))
}

/// Paths may be passed as separate operands or as one array operand.
fn missing_eval(args: &[Value], data: &Value) -> Result<Value> {
    let paths = match args.first() {
        Some(Value::Array(paths)) => paths.as_slice(),
        _ => args,
    };
    vars::missing(data, paths).map(Value::Array)
}

/// `missing_some(min, paths)`: `[]` when at least `min` paths are present,
/// otherwise the missing ones.
fn missing_some_eval(args: &[Value], data: &Value) -> Result<Value> {
    let need = util::to_number(arg(args, 0));
    let paths = match arg(args, 1) {
        Value::Array(paths) => paths,
        other => {
            return Err(JsonLogicError::invalid_argument(
                "missing_some",
                format!("second operand must be an array of paths, got {}", other.type_name()),
            ))
        }
    };
    let missing = vars::missing(data, paths)?;
    let present = (paths.len() - missing.len()) as f64;
    if present >= need {
        return Ok(Value::Array(Vec::new()));
    }
    Ok(Value::Array(missing))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition::eager("var", &[], var_eval),
        OperatorDefinition::eager("missing", &[], missing_eval),
        OperatorDefinition::eager("missing_some", &[], missing_some_eval),
    ]
}
