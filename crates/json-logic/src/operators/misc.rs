use crate::error::Result;
use crate::types::{arg, OperatorDefinition};
use crate::value::Value;
use tracing::info;

/// Emits its operand as a tracing event and passes it through.
fn log_eval(args: &[Value], _data: &Value) -> Result<Value> {
    let value = arg(args, 0);
    info!(target: "json_logic::log", value = %value, "log");
    Ok(value.clone())
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![OperatorDefinition::eager("log", &[], log_eval)]
}
