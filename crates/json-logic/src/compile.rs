//! Rule compiler: turns raw rule data into an expression tree once, so it
//! can be evaluated against many contexts.

use crate::error::{JsonLogicError, Result};
use crate::registry::{OperatorId, OperatorRegistry};
use crate::value::{Map, Value};
use tracing::debug;

/// A node of a compiled rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Data that evaluates to itself.
    Literal(Value),
    /// An array with operator calls somewhere inside; elements are
    /// evaluated in order.
    Array(Vec<Expr>),
    /// An operator call.
    Call(Box<Call>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    name: String,
    slot: Option<OperatorId>,
    args: Vec<Expr>,
    path: String,
}

impl Call {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    /// Location of the call inside the rule, JSON-Pointer style.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn slot(&self) -> Option<OperatorId> {
        self.slot
    }
}

impl Expr {
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Expr::Literal(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    fn into_literal(self) -> Option<Value> {
        match self {
            Expr::Literal(v) => Some(v),
            _ => None,
        }
    }

    /// Converts the node back to rule shape. Calls are always written with
    /// an argument array.
    pub fn to_rule(&self) -> Value {
        match self {
            Expr::Literal(v) => v.clone(),
            Expr::Array(items) => Value::Array(items.iter().map(Expr::to_rule).collect()),
            Expr::Call(call) => {
                let mut map = Map::with_capacity(1);
                map.insert(
                    call.name.clone(),
                    Value::Array(call.args.iter().map(Expr::to_rule).collect()),
                );
                Value::Object(map)
            }
        }
    }

    fn node_count(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Array(items) => 1 + items.iter().map(Expr::node_count).sum::<usize>(),
            Expr::Call(call) => 1 + call.args.iter().map(Expr::node_count).sum::<usize>(),
        }
    }
}

/// A rule compiled against a particular operator registry.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRule {
    root: Expr,
    registry_id: u64,
}

impl CompiledRule {
    pub fn root(&self) -> &Expr {
        &self.root
    }

    pub fn to_rule(&self) -> Value {
        self.root.to_rule()
    }

    pub(crate) fn registry_id(&self) -> u64 {
        self.registry_id
    }
}

/// Compiles `rule`, resolving operator names known to `registry`.
///
/// Names the registry does not know yet are kept and looked up again at
/// evaluation time, so operators may be registered after compilation.
pub fn compile(rule: &Value, registry: &OperatorRegistry) -> Result<CompiledRule> {
    let mut path = String::new();
    let root = compile_node(rule, registry, &mut path)?;
    debug!(nodes = root.node_count(), "compiled rule");
    Ok(CompiledRule { root, registry_id: registry.id() })
}

fn compile_node(rule: &Value, registry: &OperatorRegistry, path: &mut String) -> Result<Expr> {
    match rule {
        Value::Array(items) => {
            let mut nodes = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                nodes.push(with_segment(path, &i.to_string(), |path| {
                    compile_node(item, registry, path)
                })?);
            }
            // Arrays with no call anywhere inside stay data.
            if nodes.iter().all(|node| matches!(node, Expr::Literal(_))) {
                let values = nodes.into_iter().filter_map(Expr::into_literal).collect();
                return Ok(Expr::Literal(Value::Array(values)));
            }
            Ok(Expr::Array(nodes))
        }
        Value::Object(_) => match rule.as_single_entry() {
            Some((name, args)) => compile_call(name, args, registry, path),
            None => Ok(Expr::Literal(rule.clone())),
        },
        _ => Ok(Expr::Literal(rule.clone())),
    }
}

fn compile_call(
    name: &str,
    args: &Value,
    registry: &OperatorRegistry,
    path: &mut String,
) -> Result<Expr> {
    let call_path = path.clone();
    let args = with_segment(path, name, |path| match args {
        Value::Array(items) => {
            let mut nodes = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                nodes.push(with_segment(path, &i.to_string(), |path| {
                    compile_node(item, registry, path)
                })?);
            }
            Ok(nodes)
        }
        Value::Object(_) if args.as_single_entry().is_none() => Err(JsonLogicError::MalformedRule {
            path: path.clone(),
            reason: format!(
                "arguments of \"{}\" must be an array, a scalar or a single operation",
                name
            ),
        }),
        single => Ok(vec![compile_node(single, registry, path)?]),
    })?;
    Ok(Expr::Call(Box::new(Call {
        name: name.to_string(),
        slot: registry.resolve(name),
        args,
        path: call_path,
    })))
}

/// Runs `f` with `segment` appended to `path`, restoring it afterwards.
fn with_segment<T>(path: &mut String, segment: &str, f: impl FnOnce(&mut String) -> T) -> T {
    let len = path.len();
    path.push('/');
    push_escaped(path, segment);
    let out = f(path);
    path.truncate(len);
    out
}

/// Appends a JSON Pointer reference token (`~` → `~0`, `/` → `~1`).
fn push_escaped(path: &mut String, segment: &str) {
    for c in segment.chars() {
        match c {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            c => path.push(c),
        }
    }
}
