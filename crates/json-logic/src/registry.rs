//! Operator registry.
//!
//! Names are resolved to slot ids once, at compile time; evaluation indexes
//! the slot vector directly. Slots never move: re-registering a name
//! replaces the implementation in place, new names are appended.

use crate::types::{Operator, OperatorDefinition};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Index of an operator slot inside one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorId(pub(crate) u32);

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

fn next_registry_id() -> u64 {
    NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed)
}

struct Slot {
    name: String,
    operator: Operator,
}

pub struct OperatorRegistry {
    id: u64,
    slots: Vec<Slot>,
    names: HashMap<String, OperatorId>,
}

impl OperatorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        OperatorRegistry {
            id: next_registry_id(),
            slots: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// A registry holding the given definitions and their aliases.
    pub fn from_definitions(definitions: Vec<OperatorDefinition>) -> Self {
        let mut registry = OperatorRegistry::new();
        for def in definitions {
            for alias in def.aliases {
                registry.insert(alias, def.operator.clone());
            }
            registry.insert(def.name, def.operator);
        }
        registry
    }

    /// Identifies this registry instance; compiled rules use it to check
    /// that their cached slot ids belong here.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Registers `operator` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, operator: Operator) -> OperatorId {
        let name = name.into();
        debug!(operator = %name, lazy = operator.is_lazy(), "registering operator");
        self.insert(&name, operator)
    }

    fn insert(&mut self, name: &str, operator: Operator) -> OperatorId {
        if let Some(&id) = self.names.get(name) {
            self.slots[id.0 as usize].operator = operator;
            return id;
        }
        let id = OperatorId(self.slots.len() as u32);
        self.slots.push(Slot { name: name.to_string(), operator });
        self.names.insert(name.to_string(), id);
        id
    }

    pub fn resolve(&self, name: &str) -> Option<OperatorId> {
        self.names.get(name).copied()
    }

    pub fn get(&self, id: OperatorId) -> Option<&Operator> {
        self.slots.get(id.0 as usize).map(|slot| &slot.operator)
    }

    pub fn lookup(&self, name: &str) -> Option<&Operator> {
        self.resolve(name).and_then(|id| self.get(id))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        OperatorRegistry::new()
    }
}

/// A clone is a separate registry: it gets a fresh id so rules compiled
/// against the original re-resolve by name.
impl Clone for OperatorRegistry {
    fn clone(&self) -> Self {
        OperatorRegistry {
            id: next_registry_id(),
            slots: self
                .slots
                .iter()
                .map(|slot| Slot { name: slot.name.clone(), operator: slot.operator.clone() })
                .collect(),
            names: self.names.clone(),
        }
    }
}
