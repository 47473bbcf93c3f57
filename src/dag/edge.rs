//! DAG edge model

use serde::Serialize;

use super::node::NodeId;

/// What kind of step a directed edge represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    /// Taken when the named event fires
    Event,
    /// Taken without waiting for an event
    Immediate,
    /// Fire-and-forget action hanging off a transition
    SideEffect,
}

impl EdgeKind {
    /// Style-class tag handed to the layout/render stage
    pub fn class(&self) -> &'static str {
        match self {
            EdgeKind::Event => "event",
            EdgeKind::Immediate => "immediate",
            EdgeKind::SideEffect => "side-effect",
        }
    }
}

/// A directed edge between two nodes of the extracted DAG.
///
/// Edges are a plain ordered list, not keyed: the same (from, to) pair may
/// appear more than once when a machine defines several transitions between
/// the same two points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,

    /// Triggering event name; only set on `Event` edges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Edge {
    pub fn event(from: NodeId, to: NodeId, event: impl Into<String>) -> Self {
        Self {
            from,
            to,
            kind: EdgeKind::Event,
            label: Some(event.into()),
        }
    }

    pub fn immediate(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            kind: EdgeKind::Immediate,
            label: None,
        }
    }
}
