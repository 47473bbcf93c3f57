//! State machine definition model - the input side of the pipeline

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod state;
pub mod transition;

// Re-export key types
pub use state::{StateDef, StateNode};
pub use transition::{Guard, Reducer, Transition};

/// A declarative state machine definition.
///
/// States are keyed by name in an insertion-ordered map; that order is part
/// of the observable contract, since extraction emits nodes and edges in
/// definition order. The definition is inert data: this crate never runs or
/// simulates the machine, it only derives its visualizable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Name of the state the machine starts in
    pub initial: String,

    /// States by name, in declaration order
    pub states: IndexMap<String, StateDef>,
}

impl Machine {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Add a state. Accepts a bare [`StateNode`] for plain states or an
    /// explicit [`StateDef`] for invoking states.
    pub fn state(mut self, name: impl Into<String>, def: impl Into<StateDef>) -> Self {
        self.states.insert(name.into(), def.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&StateDef> {
        self.states.get(name)
    }
}
