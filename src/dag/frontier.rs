// src/dag/frontier.rs

use crate::dag::graph::Dag;
use crate::types::NodeId;

/// Nodes on the boundary of a DAG, in node insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    /// Nodes with in-degree 0.
    pub no_incoming: Vec<NodeId>,
    /// Nodes with out-degree 0.
    pub no_outgoing: Vec<NodeId>,
}

pub fn identify_frontier(dag: &Dag) -> Frontier {
    let no_incoming = dag.nodes().filter(|&id| dag.in_degree(id) == 0).collect();
    let no_outgoing = dag.nodes().filter(|&id| dag.out_degree(id) == 0).collect();
    Frontier {
        no_incoming,
        no_outgoing,
    }
}
