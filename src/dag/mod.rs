// src/dag/mod.rs

//! Random DAG construction.
//!
//! - [`sampler`] draws an Erdos-Renyi undirected graph.
//! - [`orient`] ranks the vertices and directs edges along the ranking.
//! - [`frontier`] finds the nodes without incoming / outgoing edges.
//! - [`augment`] attaches the dummy source and sink.
//! - [`graph`] holds the DAG itself.

pub mod augment;
pub mod frontier;
pub mod graph;
pub mod orient;
pub mod sampler;

pub use augment::{DummyNodes, add_dummy_nodes};
pub use frontier::{Frontier, identify_frontier};
pub use graph::Dag;
pub use orient::{OrientedDag, QualityDraws, Ranking, orient};
pub use sampler::{UndirectedGraph, sample_undirected};
