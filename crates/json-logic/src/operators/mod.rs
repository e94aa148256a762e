//! Built-in operators, one module per family.

pub mod arithmetic;
pub mod array;
pub mod branching;
pub mod comparison;
pub mod input;
pub mod logical;
pub mod misc;
pub mod string;

use crate::registry::OperatorRegistry;
use crate::types::OperatorDefinition;

/// Every built-in operator definition.
pub fn all_operators() -> Vec<OperatorDefinition> {
    let mut ops = Vec::new();
    ops.extend(input::operators());
    ops.extend(logical::operators());
    ops.extend(branching::operators());
    ops.extend(comparison::operators());
    ops.extend(arithmetic::operators());
    ops.extend(string::operators());
    ops.extend(array::operators());
    ops.extend(misc::operators());
    ops
}

/// A registry holding the built-in operators.
pub fn registry() -> OperatorRegistry {
    OperatorRegistry::from_definitions(all_operators())
}
