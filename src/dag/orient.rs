// src/dag/orient.rs

//! Turning a sampled undirected graph into a DAG.
//!
//! A random permutation of the vertices fixes a total order (the ranking),
//! and every undirected edge is directed from its lower-ranked endpoint to its
//! higher-ranked one. Since ranks strictly increase along every edge, no
//! cycle can exist.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::dag::graph::Dag;
use crate::dag::sampler::UndirectedGraph;
use crate::types::{NodeAttrs, NodeId};

/// Inclusive range of the per-class `q` draws.
pub const Q_RANGE: std::ops::RangeInclusive<i32> = 0..=6;
/// Inclusive range of the per-node cost `c`.
pub const C_RANGE: std::ops::RangeInclusive<i32> = 1..=8;

/// The two session-wide `q` values, one per `d` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityDraws {
    pub d0: i32,
    pub d1: i32,
}

impl QualityDraws {
    /// `q` value assigned to nodes of class `d`.
    pub fn for_class(&self, d: i32) -> i32 {
        if d == 0 { self.d0 } else { self.d1 }
    }
}

/// Vertex permutation used to orient edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    order: Vec<usize>,
    rank: Vec<usize>,
}

impl Ranking {
    /// Build a ranking from a permutation of `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Self {
        let mut rank = vec![0; order.len()];
        for (position, &vertex) in order.iter().enumerate() {
            rank[vertex] = position;
        }
        Self { order, rank }
    }

    /// Vertices from lowest to highest rank.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn rank_of(&self, vertex: usize) -> Option<usize> {
        self.rank.get(vertex).copied()
    }

    /// Rank of a node; dummies have none.
    pub fn rank_of_node(&self, id: NodeId) -> Option<usize> {
        id.index().and_then(|v| self.rank_of(v))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Output of [`orient`].
#[derive(Debug, Clone)]
pub struct OrientedDag {
    pub dag: Dag,
    pub ranking: Ranking,
    pub quality: QualityDraws,
}

/// Orient `graph` into a DAG and attach node attributes.
///
/// Random draws happen in a fixed order so seeded runs are reproducible:
/// the vertex shuffle, then `q` for class 0 and class 1, then for each vertex
/// in rank order its class `d` followed by its cost `c`.
pub fn orient<R: Rng>(graph: &UndirectedGraph, rng: &mut R) -> OrientedDag {
    let mut order: Vec<usize> = graph.nodes().collect();
    order.shuffle(rng);
    debug!(?order, "vertex order");

    let quality = QualityDraws {
        d0: rng.gen_range(Q_RANGE),
        d1: rng.gen_range(Q_RANGE),
    };

    let mut dag = Dag::new();
    for &v in &order {
        let d = rng.gen_range(0..=1);
        let c = rng.gen_range(C_RANGE);
        dag.add_node(NodeId::Original(v), NodeAttrs::new(c, quality.for_class(d), d));
    }
    info!(vertices = order.len(), "assigned node attributes");

    for i in 0..order.len() {
        for j in (i + 1)..order.len() {
            if graph.contains_edge(order[i], order[j]) {
                dag.add_edge(NodeId::Original(order[i]), NodeId::Original(order[j]));
            }
        }
    }
    debug!(edges = dag.edge_count(), "oriented edges by rank");

    OrientedDag {
        dag,
        ranking: Ranking::from_order(order),
        quality,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::sampler::sample_undirected;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_edge_increases_rank() {
        let mut rng = StdRng::seed_from_u64(3);
        let graph = sample_undirected(20, 0.35, &mut rng).unwrap();
        let oriented = orient(&graph, &mut rng);

        assert_eq!(oriented.dag.edge_count(), graph.edge_count());
        for (u, v) in oriented.dag.edges() {
            let ru = oriented.ranking.rank_of_node(u).unwrap();
            let rv = oriented.ranking.rank_of_node(v).unwrap();
            assert!(ru < rv, "{u} (rank {ru}) -> {v} (rank {rv})");
        }
        assert!(oriented.dag.is_acyclic());
    }

    #[test]
    fn attributes_respect_ranges_and_class_draws() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = sample_undirected(50, 0.1, &mut rng).unwrap();
        let oriented = orient(&graph, &mut rng);

        assert!(Q_RANGE.contains(&oriented.quality.d0));
        assert!(Q_RANGE.contains(&oriented.quality.d1));
        for (_, attrs) in oriented.dag.nodes_with_attrs() {
            assert!(C_RANGE.contains(&attrs.c));
            assert!(attrs.d == 0 || attrs.d == 1);
            assert_eq!(attrs.q, oriented.quality.for_class(attrs.d));
        }
    }

    #[test]
    fn nodes_are_inserted_in_rank_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let graph = sample_undirected(8, 0.5, &mut rng).unwrap();
        let oriented = orient(&graph, &mut rng);

        let nodes: Vec<usize> = oriented.dag.nodes().filter_map(|id| id.index()).collect();
        assert_eq!(nodes, oriented.ranking.order());
    }

    #[test]
    fn ranking_inverts_order() {
        let ranking = Ranking::from_order(vec![2, 0, 1]);
        assert_eq!(ranking.rank_of(2), Some(0));
        assert_eq!(ranking.rank_of(0), Some(1));
        assert_eq!(ranking.rank_of(1), Some(2));
        assert_eq!(ranking.rank_of(3), None);
        assert_eq!(ranking.rank_of_node(NodeId::DummySource), None);
    }
}
