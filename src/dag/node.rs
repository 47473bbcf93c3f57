//! DAG node model and identifier allocation

use std::fmt;

use serde::Serialize;

use super::Dag;

/// Identifier of a node in an extracted DAG.
///
/// Unique across one allocator's lifetime, including every recursively
/// extracted sub-machine, so edges always resolve their endpoints
/// unambiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Visual kind of a node; downstream styling keys off this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    State,
    Guard,
    Reduce,
    InvokeMachine,
    InvokePromise,
    Action,
}

impl NodeKind {
    /// Style-class tag handed to the layout/render stage
    pub fn class(&self) -> &'static str {
        match self {
            NodeKind::State => "state",
            NodeKind::Guard => "guard",
            NodeKind::Reduce => "reduce",
            NodeKind::InvokeMachine => "invoke-machine",
            NodeKind::InvokePromise => "invoke-promise",
            NodeKind::Action => "action",
        }
    }
}

/// A node in the extracted DAG
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,

    /// Display string: the state name, or a fixed literal for synthetic nodes
    pub label: String,

    /// Owned nested graph of a delegated machine; only on `InvokeMachine`
    /// nodes. Visualization only ever walks downward, so this is a plain
    /// owned tree with no back references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate: Option<Box<Dag>>,
}

impl Node {
    pub fn state(id: NodeId, name: &str) -> Self {
        Self {
            id,
            kind: NodeKind::State,
            label: name.to_string(),
            delegate: None,
        }
    }

    pub fn guard(id: NodeId) -> Self {
        Self {
            id,
            kind: NodeKind::Guard,
            label: "guard".to_string(),
            delegate: None,
        }
    }

    pub fn reducer(id: NodeId) -> Self {
        Self {
            id,
            kind: NodeKind::Reduce,
            label: "reducer".to_string(),
            delegate: None,
        }
    }

    pub fn invoke_promise(id: NodeId, name: &str) -> Self {
        Self {
            id,
            kind: NodeKind::InvokePromise,
            label: name.to_string(),
            delegate: None,
        }
    }

    pub fn invoke_machine(id: NodeId, name: &str, delegate: Dag) -> Self {
        Self {
            id,
            kind: NodeKind::InvokeMachine,
            label: name.to_string(),
            delegate: Some(Box::new(delegate)),
        }
    }
}

/// Hands out strictly increasing node ids.
///
/// An explicit allocator object rather than a hidden global counter, so tests
/// can pin exact id values and callers can keep ids unique across successive
/// extractions by threading one allocator through all of them. Ids are never
/// reused or reassigned.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Allocator starting at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(origin: u64) -> Self {
        Self { next: origin }
    }

    pub fn next(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}
