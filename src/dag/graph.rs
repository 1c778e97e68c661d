// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::types::{NodeAttrs, NodeId};

/// In-memory DAG of generated tasks.
///
/// Structure lives in a petgraph [`DiGraphMap`], which keeps nodes and edges
/// in insertion order; per-node attributes are kept alongside it. Every node
/// in the graph has exactly one attribute record.
#[derive(Debug, Clone, Default)]
pub struct Dag {
    graph: DiGraphMap<NodeId, ()>,
    attrs: HashMap<NodeId, NodeAttrs>,
}

impl Dag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or replace the attributes of an existing one.
    pub fn add_node(&mut self, id: NodeId, attrs: NodeAttrs) {
        self.graph.add_node(id);
        self.attrs.insert(id, attrs);
    }

    /// Add a directed edge `from -> to`.
    ///
    /// Both endpoints must already be present. Self-loops, unknown endpoints
    /// and duplicate edges are ignored; returns `true` only when a new edge
    /// was inserted.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        if from == to {
            warn!(node = %from, "refusing to add self-loop");
            return false;
        }
        if !self.contains_node(from) || !self.contains_node(to) {
            warn!(%from, %to, "refusing to add edge with unknown endpoint");
            return false;
        }
        self.graph.add_edge(from, to, ()).is_none()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.graph.contains_node(id)
    }

    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.graph.contains_edge(from, to)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.nodes()
    }

    /// Nodes with their attributes, in insertion order.
    pub fn nodes_with_attrs(&self) -> impl Iterator<Item = (NodeId, NodeAttrs)> + '_ {
        self.graph
            .nodes()
            .filter_map(|id| self.attrs.get(&id).map(|attrs| (id, *attrs)))
    }

    pub fn attrs(&self, id: NodeId) -> Option<&NodeAttrs> {
        self.attrs.get(&id)
    }

    /// All edges, grouped by source node in node insertion order; each
    /// node's outgoing edges are listed in the order they were added.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph.nodes().flat_map(move |from| {
            self.graph
                .neighbors_directed(from, Direction::Outgoing)
                .map(move |to| (from, to))
        })
    }

    /// Direct successors (targets of outgoing edges).
    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.neighbors_directed(id, Direction::Outgoing)
    }

    /// Direct predecessors (sources of incoming edges).
    pub fn predecessors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.neighbors_directed(id, Direction::Incoming)
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.predecessors(id).count()
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.successors(id).count()
    }

    /// A topological order of all nodes, or `None` if the graph has a cycle.
    pub fn topological_order(&self) -> Option<Vec<NodeId>> {
        toposort(&self.graph, None).ok()
    }

    pub fn is_acyclic(&self) -> bool {
        self.topological_order().is_some()
    }
}
