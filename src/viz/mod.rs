//! Layout/render handoff - interface types for downstream collaborators
//!
//! This crate positions nothing and draws nothing. This module shapes an
//! extracted [`Dag`] into the contracts a layout engine and renderer consume:
//! a petgraph `StableGraph`, Graphviz DOT text, and the raw `{nodes, edges}`
//! JSON lists. Faults raised past this boundary belong to the collaborator;
//! the crate does not recover around them.

use crate::Result;
use crate::dag::Dag;

pub mod dot;
pub mod graph;
pub mod options;

// Re-export key types
pub use dot::to_dot;
pub use graph::{VizEdge, VizNode, to_petgraph};
pub use options::{LabelPos, LayoutOptions, RankDir};

/// Write the raw `{nodes, edges}` contract as pretty-printed JSON
pub fn write_json(dag: &Dag, w: &mut impl std::io::Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, dag)?;
    writeln!(w)?;
    Ok(())
}
