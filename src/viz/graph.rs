//! petgraph view of an extracted DAG
//!
//! Layout engines in the Rust ecosystem speak petgraph; this is the bridge
//! from the ordered node/edge lists to a `StableGraph` plus the id-to-index
//! side table a collaborator needs to address nodes by their stable ids.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};

use crate::dag::{Dag, NodeId};

/// Node payload handed to a layout engine: display label plus style class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VizNode {
    pub id: NodeId,
    pub label: String,
    /// Style-class tag, e.g. `node--state` or `node--guard`
    pub class: String,
}

/// Edge payload handed to a layout engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VizEdge {
    pub label: Option<String>,
    /// Style-class tag, e.g. `edge--event` or `edge--immediate`
    pub class: String,
}

/// Convert the top level of a DAG into a petgraph `StableGraph`.
///
/// Returns the graph and a lookup table from node ids to graph indices.
/// Delegated machines stay nested on their invoke nodes; a caller that wants
/// them laid out converts each nested DAG separately.
pub fn to_petgraph(dag: &Dag) -> (StableGraph<VizNode, VizEdge>, HashMap<NodeId, NodeIndex>) {
    let mut graph = StableGraph::new();
    let mut index = HashMap::with_capacity(dag.nodes.len());

    for node in &dag.nodes {
        let node_index = graph.add_node(VizNode {
            id: node.id,
            label: node.label.clone(),
            class: format!("node--{}", node.kind.class()),
        });
        index.insert(node.id, node_index);
    }

    for edge in &dag.edges {
        if let (Some(&from), Some(&to)) = (index.get(&edge.from), index.get(&edge.to)) {
            graph.add_edge(
                from,
                to,
                VizEdge {
                    label: edge.label.clone(),
                    class: format!("edge--{}", edge.kind.class()),
                },
            );
        }
    }

    (graph, index)
}
