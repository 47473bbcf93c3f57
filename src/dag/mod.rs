//! Extracted DAG model - derive visualizable graphs from machine definitions

use serde::Serialize;

use crate::Result;
use crate::machine::Machine;

pub mod edge;
pub mod extract;
pub mod node;

// Re-export key types
pub use edge::{Edge, EdgeKind};
pub use node::{IdAllocator, Node, NodeId, NodeKind};

/// The extractor's output: ordered node and edge lists describing the
/// visualizable shape of a machine.
///
/// Logically a multigraph; node and edge ordering follows the definition's
/// declaration order so extraction is deterministic. A `Dag` is a snapshot,
/// rebuilt from scratch on every extraction call, with no mutation API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dag {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Dag {
    /// Extract a machine's DAG with a fresh allocator; ids start at 1.
    pub fn extract(machine: &Machine) -> Result<Self> {
        Self::extract_with(machine, &mut IdAllocator::new())
    }

    /// Extract threading a caller-supplied allocator, so ids stay unique
    /// across successive extractions (or start at a pinned origin in tests).
    pub fn extract_with(machine: &Machine, ids: &mut IdAllocator) -> Result<Self> {
        extract::extract(machine, ids)
    }

    /// Look up a top-level node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Summary counts over the top level of this DAG (delegated machines are
    /// not descended into)
    pub fn stats(&self) -> DagStats {
        let mut stats = DagStats {
            total_nodes: self.nodes.len(),
            total_edges: self.edges.len(),
            ..DagStats::default()
        };
        for node in &self.nodes {
            match node.kind {
                NodeKind::State => stats.states += 1,
                NodeKind::Guard => stats.guards += 1,
                NodeKind::Reduce => stats.reducers += 1,
                NodeKind::InvokeMachine | NodeKind::InvokePromise => stats.invokes += 1,
                NodeKind::Action => {}
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DagStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub states: usize,
    pub guards: usize,
    pub reducers: usize,
    pub invokes: usize,
}
