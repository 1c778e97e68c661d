// src/dag/augment.rs

//! Single-source / single-sink normalisation.

use tracing::info;

use crate::dag::frontier::Frontier;
use crate::dag::graph::Dag;
use crate::types::{NodeAttrs, NodeId};

/// Which synthetic nodes [`add_dummy_nodes`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DummyNodes {
    pub source: Option<NodeId>,
    pub sink: Option<NodeId>,
}

/// Attach a dummy source in front of every node in `frontier.no_incoming` and
/// a dummy sink behind every node in `frontier.no_outgoing`.
///
/// Each dummy is added as soon as its frontier set has at least one member,
/// so any non-empty DAG gets both. An empty frontier set adds nothing.
pub fn add_dummy_nodes(dag: &mut Dag, frontier: &Frontier) -> DummyNodes {
    let mut dummies = DummyNodes::default();

    if !frontier.no_incoming.is_empty() {
        let source = NodeId::DummySource;
        dag.add_node(source, NodeAttrs::dummy_source());
        for &v in &frontier.no_incoming {
            dag.add_edge(source, v);
        }
        info!(targets = frontier.no_incoming.len(), "added dummy source");
        dummies.source = Some(source);
    }

    if !frontier.no_outgoing.is_empty() {
        let sink = NodeId::DummySink;
        dag.add_node(sink, NodeAttrs::dummy_sink());
        for &v in &frontier.no_outgoing {
            dag.add_edge(v, sink);
        }
        info!(origins = frontier.no_outgoing.len(), "added dummy sink");
        dummies.sink = Some(sink);
    }

    dummies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::frontier::identify_frontier;

    #[test]
    fn chain_gets_one_source_and_one_sink() {
        let mut dag = Dag::new();
        let (a, b) = (NodeId::Original(0), NodeId::Original(1));
        dag.add_node(a, NodeAttrs::new(2, 3, 0));
        dag.add_node(b, NodeAttrs::new(4, 1, 1));
        dag.add_edge(a, b);

        let frontier = identify_frontier(&dag);
        let dummies = add_dummy_nodes(&mut dag, &frontier);

        assert_eq!(dummies.source, Some(NodeId::DummySource));
        assert_eq!(dummies.sink, Some(NodeId::DummySink));
        assert_eq!(dag.successors(NodeId::DummySource).collect::<Vec<_>>(), vec![a]);
        assert_eq!(dag.predecessors(NodeId::DummySink).collect::<Vec<_>>(), vec![b]);
        assert_eq!(dag.attrs(NodeId::DummySource), Some(&NodeAttrs::new(0, 0, -1)));
        assert_eq!(dag.attrs(NodeId::DummySink), Some(&NodeAttrs::new(0, 0, -2)));
        assert_eq!(dag.edge_count(), 3);
        assert!(dag.is_acyclic());
    }

    #[test]
    fn empty_dag_is_left_alone() {
        let mut dag = Dag::new();
        let frontier = identify_frontier(&dag);
        let dummies = add_dummy_nodes(&mut dag, &frontier);
        assert_eq!(dummies, DummyNodes::default());
        assert!(dag.is_empty());
    }

    #[test]
    fn single_node_is_wrapped_by_both_dummies() {
        let mut dag = Dag::new();
        let a = NodeId::Original(0);
        dag.add_node(a, NodeAttrs::new(1, 0, 0));

        let frontier = identify_frontier(&dag);
        add_dummy_nodes(&mut dag, &frontier);

        assert!(dag.contains_edge(NodeId::DummySource, a));
        assert!(dag.contains_edge(a, NodeId::DummySink));
        assert!(!dag.contains_edge(NodeId::DummySource, NodeId::DummySink));
    }
}
