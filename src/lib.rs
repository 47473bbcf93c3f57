//! Machine Visualizer
//!
//! Convert declarative state-machine definitions into typed directed graphs
//! for consumption by graph-layout engines and renderers.
//!
//! This library provides functionality for:
//! - Describing machines: states, event-triggered and immediate transitions,
//!   guard predicates, reducer functions, and invoked sub-machines
//! - Extracting a DAG of typed nodes and typed directed edges from a machine
//!   definition, including the synthetic guard/reducer nodes on each
//!   transition's path
//! - Handing the DAG to downstream layout/render stages as a petgraph
//!   `StableGraph`, Graphviz DOT text, or JSON

pub mod dag;
pub mod error;
pub mod machine;
pub mod viz;

pub use dag::{Dag, DagStats, Edge, EdgeKind, IdAllocator, Node, NodeId, NodeKind};
pub use error::{Error, Result};
pub use machine::{Guard, Machine, Reducer, StateDef, StateNode, Transition};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
