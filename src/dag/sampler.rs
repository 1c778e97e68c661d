// src/dag/sampler.rs

//! Erdos-Renyi `G(n, p)` sampling.

use petgraph::graphmap::UnGraphMap;
use rand::Rng;
use rand::distributions::{Bernoulli, Distribution};
use tracing::debug;

use crate::errors::{DagError, Result};

/// Undirected graph over vertex indices `0..n`.
pub type UndirectedGraph = UnGraphMap<usize, ()>;

/// Sample an undirected graph with `n` vertices where every unordered pair
/// `{i, j}` is joined independently with probability `p`.
///
/// Pairs are visited in lexicographic order (`i < j`) with one Bernoulli draw
/// each, so a seeded `rng` always yields the same graph.
pub fn sample_undirected<R: Rng>(n: usize, p: f64, rng: &mut R) -> Result<UndirectedGraph> {
    let coin = edge_distribution(p)?;

    let mut graph = UndirectedGraph::with_capacity(n, 0);
    for v in 0..n {
        graph.add_node(v);
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if coin.sample(rng) {
                graph.add_edge(i, j, ());
            }
        }
    }

    debug!(
        vertices = n,
        probability = p,
        edges = graph.edge_count(),
        "sampled undirected graph"
    );
    Ok(graph)
}

fn edge_distribution(p: f64) -> Result<Bernoulli> {
    if !(0.0..=1.0).contains(&p) {
        return Err(DagError::InvalidArgument(format!(
            "edge probability must be within [0, 1] (got {p})"
        )));
    }
    Bernoulli::new(p).map_err(|e| DagError::InvalidArgument(format!("edge probability {p}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_probabilities_outside_unit_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = sample_undirected(4, p, &mut rng).unwrap_err();
            assert!(matches!(err, DagError::InvalidArgument(_)), "p = {p}: {err:?}");
        }
    }

    #[test]
    fn extreme_probabilities() {
        let mut rng = StdRng::seed_from_u64(7);

        let empty = sample_undirected(6, 0.0, &mut rng).unwrap();
        assert_eq!(empty.node_count(), 6);
        assert_eq!(empty.edge_count(), 0);

        let complete = sample_undirected(6, 1.0, &mut rng).unwrap();
        assert_eq!(complete.edge_count(), 6 * 5 / 2);
    }

    #[test]
    fn zero_vertices_is_an_empty_graph() {
        let mut rng = StdRng::seed_from_u64(0);
        let graph = sample_undirected(0, 0.5, &mut rng).unwrap();
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn same_seed_same_graph() {
        let a = sample_undirected(12, 0.4, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = sample_undirected(12, 0.4, &mut StdRng::seed_from_u64(99)).unwrap();
        let edges_a: Vec<_> = a.all_edges().map(|(u, v, _)| (u, v)).collect();
        let edges_b: Vec<_> = b.all_edges().map(|(u, v, _)| (u, v)).collect();
        assert_eq!(edges_a, edges_b);
    }
}
