//! State descriptors

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Machine;
use super::transition::Transition;

/// The transition surface of a state: event-triggered transition groups and
/// immediate transitions, both in declaration order.
///
/// Declaration order is observable downstream: node and edge ordering in the
/// extracted DAG follows it, and within an event group the first matching
/// transition wins at runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateNode {
    /// Whether this is a final state of its machine
    #[serde(default)]
    pub is_final: bool,

    /// Event-triggered transitions, grouped by event name
    #[serde(default)]
    pub transitions: IndexMap<String, Vec<Transition>>,

    /// Transitions evaluated on entry, tried in order until a guard passes
    #[serde(default)]
    pub immediates: Vec<Transition>,
}

impl StateNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event-triggered transition to the named event's group
    pub fn on(mut self, event: impl Into<String>, transition: Transition) -> Self {
        self.transitions.entry(event.into()).or_default().push(transition);
        self
    }

    /// Append an immediate transition
    pub fn immediate(mut self, transition: Transition) -> Self {
        self.immediates.push(transition);
        self
    }

    pub fn final_state(mut self) -> Self {
        self.is_final = true;
        self
    }
}

/// What a state does when entered.
///
/// An explicit three-case sum, dispatched by match during extraction rather
/// than by probing for fields: a plain atomic state, a state that runs a
/// promise-like asynchronous operation, or a state that delegates to a fully
/// nested machine. The invoking cases expose their lifecycle transitions
/// (`done`/`error`/`cancel`) through the ordinary transition map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateDef {
    Atomic(StateNode),
    Promise(StateNode),
    Delegate(Box<Machine>, StateNode),
}

impl StateDef {
    /// Promise-invoking state
    pub fn invoke_promise(node: StateNode) -> Self {
        Self::Promise(node)
    }

    /// Machine-delegating state
    pub fn invoke_machine(machine: Machine, node: StateNode) -> Self {
        Self::Delegate(Box::new(machine), node)
    }

    /// The transition surface, common to all three cases
    pub fn node(&self) -> &StateNode {
        match self {
            StateDef::Atomic(node) | StateDef::Promise(node) => node,
            StateDef::Delegate(_, node) => node,
        }
    }
}

impl From<StateNode> for StateDef {
    fn from(node: StateNode) -> Self {
        Self::Atomic(node)
    }
}
