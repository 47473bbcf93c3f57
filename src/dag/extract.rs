//! Machine-to-DAG extraction.
//!
//! Walks a machine definition in declaration order and derives the node and
//! edge lists in two passes: nodes first, so every state's root id is known,
//! then the per-transition edge chains. Extraction is synchronous, performs
//! no I/O, and touches no shared state beyond the threaded [`IdAllocator`].

use indexmap::IndexMap;

use crate::machine::{Machine, StateDef, StateNode, Transition};
use crate::{Error, Result};

use super::{Dag, Edge, IdAllocator, Node, NodeId};

/// Synthetic nodes sitting on one transition's path
struct TransitionNodes {
    guard: Option<Node>,
    reducer: Option<Node>,
}

impl TransitionNodes {
    /// First hop after the source state: guard, else reducer, else none
    fn entry(&self) -> Option<NodeId> {
        self.guard.as_ref().or(self.reducer.as_ref()).map(|n| n.id)
    }
}

/// Per-state collection of the root node and each transition's synthetics,
/// keyed the same way the definition keys its transitions
struct StateNodes {
    root: Node,
    immediates: Vec<TransitionNodes>,
    events: IndexMap<String, Vec<TransitionNodes>>,
}

pub(super) fn extract(machine: &Machine, ids: &mut IdAllocator) -> Result<Dag> {
    let mut node_map: IndexMap<&str, StateNodes> = IndexMap::with_capacity(machine.states.len());
    for (name, def) in &machine.states {
        node_map.insert(name.as_str(), collect_state_nodes(name, def, ids)?);
    }

    // Edges before flattening: edge derivation only reads ids out of the
    // map, while flattening moves the nodes out of it.
    let mut edges = Vec::new();
    for ((name, def), state_nodes) in machine.states.iter().zip(node_map.values()) {
        collect_state_edges(&node_map, name, def.node(), state_nodes, &mut edges)?;
    }

    // Flatten per state: root, then event-group synthetics in declaration
    // order, then immediate synthetics.
    let mut nodes = Vec::new();
    for state_nodes in node_map.into_values() {
        nodes.push(state_nodes.root);
        for group in state_nodes.events.into_values() {
            for tn in group {
                push_synthetics(&mut nodes, tn);
            }
        }
        for tn in state_nodes.immediates {
            push_synthetics(&mut nodes, tn);
        }
    }

    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "extracted dag");
    Ok(Dag { nodes, edges })
}

fn push_synthetics(nodes: &mut Vec<Node>, tn: TransitionNodes) {
    if let Some(guard) = tn.guard {
        nodes.push(guard);
    }
    if let Some(reducer) = tn.reducer {
        nodes.push(reducer);
    }
}

/// Root node plus per-transition synthetics for one state.
///
/// Id allocation order is root first, then immediates, then event groups. A
/// delegating state extracts its nested machine recursively with the same
/// allocator, so ids stay unique across the whole tree; the nested DAG hangs
/// off the invoke node and plays no part in the outer edge derivation.
fn collect_state_nodes(name: &str, def: &StateDef, ids: &mut IdAllocator) -> Result<StateNodes> {
    let root = match def {
        StateDef::Atomic(_) => Node::state(ids.next(), name),
        StateDef::Promise(_) => Node::invoke_promise(ids.next(), name),
        StateDef::Delegate(machine, _) => {
            let id = ids.next();
            let nested = extract(machine, ids)?;
            Node::invoke_machine(id, name, nested)
        }
    };

    let node = def.node();
    let immediates = node
        .immediates
        .iter()
        .map(|t| collect_transition_nodes(t, ids))
        .collect();
    let events = node
        .transitions
        .iter()
        .map(|(event, group)| {
            let synthetics = group
                .iter()
                .map(|t| collect_transition_nodes(t, ids))
                .collect();
            (event.clone(), synthetics)
        })
        .collect();

    Ok(StateNodes {
        root,
        immediates,
        events,
    })
}

/// Zero, one, or two synthetic nodes for one transition. Presence is decided
/// by sentinel identity on the guard/reducer, a fresh node per occurrence:
/// textually identical guards on two transitions still get two guard nodes.
fn collect_transition_nodes(transition: &Transition, ids: &mut IdAllocator) -> TransitionNodes {
    TransitionNodes {
        guard: transition.guard.is_custom().then(|| Node::guard(ids.next())),
        reducer: transition
            .reducer
            .is_custom()
            .then(|| Node::reducer(ids.next())),
    }
}

/// Edges out of one state: immediate chains first, then event groups in
/// declaration order, transitions within a group in declaration order
fn collect_state_edges(
    node_map: &IndexMap<&str, StateNodes>,
    state_name: &str,
    node: &StateNode,
    state_nodes: &StateNodes,
    out: &mut Vec<Edge>,
) -> Result<()> {
    let from = state_nodes.root.id;

    for (transition, synthetics) in node.immediates.iter().zip(&state_nodes.immediates) {
        let to = root_id(node_map, state_name, &transition.to)?;
        chain_edges(from, to, synthetics, None, out);
    }

    for ((event, group), synthetic_group) in
        node.transitions.iter().zip(state_nodes.events.values())
    {
        for (transition, synthetics) in group.iter().zip(synthetic_group) {
            let to = root_id(node_map, state_name, &transition.to)?;
            chain_edges(from, to, synthetics, Some(event), out);
        }
    }

    Ok(())
}

/// One transition's edge chain:
///
/// ```text
/// source --> guard --> reducer --> destination
/// ```
///
/// skipping whichever synthetics are absent. Only the source edge carries the
/// trigger kind and event label; guard and reducer edges are always immediate
/// ("check passed, continue") regardless of the outer trigger.
fn chain_edges(
    from: NodeId,
    to: NodeId,
    synthetics: &TransitionNodes,
    event: Option<&str>,
    out: &mut Vec<Edge>,
) {
    let first = synthetics.entry().unwrap_or(to);
    out.push(match event {
        Some(event) => Edge::event(from, first, event),
        None => Edge::immediate(from, first),
    });

    if let Some(guard) = &synthetics.guard {
        let next = synthetics.reducer.as_ref().map(|r| r.id).unwrap_or(to);
        out.push(Edge::immediate(guard.id, next));
    }

    if let Some(reducer) = &synthetics.reducer {
        out.push(Edge::immediate(reducer.id, to));
    }
}

fn root_id(node_map: &IndexMap<&str, StateNodes>, from: &str, to: &str) -> Result<NodeId> {
    node_map
        .get(to)
        .map(|state| state.root.id)
        .ok_or_else(|| Error::unknown_state(from, to))
}
