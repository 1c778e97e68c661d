#![allow(dead_code)]

use dagforge::dag::Dag;
use dagforge::types::{NodeAttrs, NodeId};

/// Builder for hand-made DAGs over original vertex indices.
pub struct DagBuilder {
    dag: Dag,
}

impl DagBuilder {
    pub fn new() -> Self {
        Self { dag: Dag::new() }
    }

    /// Add vertices `0..n`, all with class 0 and cost 1.
    pub fn with_vertices(mut self, n: usize) -> Self {
        for v in 0..n {
            self.dag.add_node(NodeId::Original(v), NodeAttrs::new(1, 0, 0));
        }
        self
    }

    pub fn with_node(mut self, v: usize, c: i32, q: i32, d: i32) -> Self {
        self.dag.add_node(NodeId::Original(v), NodeAttrs::new(c, q, d));
        self
    }

    pub fn with_edge(mut self, from: usize, to: usize) -> Self {
        self.dag.add_edge(NodeId::Original(from), NodeId::Original(to));
        self
    }

    pub fn build(self) -> Dag {
        self.dag
    }
}

impl Default for DagBuilder {
    fn default() -> Self {
        Self::new()
    }
}
