//! Variable resolver: dotted-path lookups into the evaluation context.

use crate::error::{JsonLogicError, Result};
use crate::util;
use crate::value::Value;

/// Resolves a dotted `path` against `data`.
///
/// Objects are descended by key and arrays by numeric index. Returns `None`
/// as soon as a step is missing or lands on a scalar. An empty path returns
/// `data` itself.
pub fn resolve<'v>(data: &'v Value, path: &str) -> Option<&'v Value> {
    if path.is_empty() {
        return Some(data);
    }
    let mut current = data;
    for step in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(step)?,
            Value::Array(items) => items.get(step.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Normalizes a path operand to its dotted-string form.
///
/// `null` means "the whole context". Numbers and booleans are rendered the
/// way `cat` would render them; containers are rejected.
pub fn path_of(operator: &str, path: &Value) -> Result<String> {
    match path {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(_) | Value::Bool(_) => Ok(util::to_string(path)),
        Value::Array(_) | Value::Object(_) => Err(JsonLogicError::invalid_argument(
            operator,
            format!("path must be a string or a number, got {}", path.type_name()),
        )),
    }
}

/// `var` semantics: the resolved value, or `default` when the path does not
/// resolve. A present `null` is returned as `null`.
pub fn lookup(data: &Value, path: &Value, default: &Value) -> Result<Value> {
    let path = path_of("var", path)?;
    Ok(resolve(data, &path).unwrap_or(default).clone())
}

/// Returns the paths from `paths` that are absent or `null` in `data`.
pub fn missing(data: &Value, paths: &[Value]) -> Result<Vec<Value>> {
    let mut out = Vec::new();
    for path in paths {
        let key = path_of("missing", path)?;
        if resolve(data, &key).map_or(true, Value::is_null) {
            out.push(path.clone());
        }
    }
    Ok(out)
}
