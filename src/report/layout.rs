// src/report/layout.rs

//! Fruchterman-Reingold force-directed layout.
//!
//! Nodes repel each other, edges pull their endpoints together, and a
//! linearly cooling temperature caps how far a node may move per iteration.
//! Initial positions come from a seeded RNG, so a given DAG and seed always
//! yield the same picture. The simulation runs unbounded and the result is
//! rescaled onto the canvas afterwards.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dag::Dag;
use crate::types::NodeId;

const MIN_DISTANCE: f32 = 0.01;

/// Final node positions in canvas pixel coordinates.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    positions: HashMap<NodeId, (f32, f32)>,
}

impl Layout {
    pub fn position(&self, id: NodeId) -> Option<(f32, f32)> {
        self.positions.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Lay out `dag` on a `width` x `height` canvas, keeping every node at least
/// `margin` pixels away from the border.
pub fn force_directed(
    dag: &Dag,
    width: u32,
    height: u32,
    margin: f32,
    iterations: usize,
    seed: u64,
) -> Layout {
    let ids: Vec<NodeId> = dag.nodes().collect();
    let n = ids.len();
    let (w, h) = (width as f32, height as f32);

    if n == 0 {
        return Layout::default();
    }
    if n == 1 {
        let positions = HashMap::from([(ids[0], (w / 2.0, h / 2.0))]);
        return Layout { positions };
    }

    let index: HashMap<NodeId, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let edges: Vec<(usize, usize)> = dag
        .edges()
        .filter_map(|(u, v)| Some((*index.get(&u)?, *index.get(&v)?)))
        .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos: Vec<(f32, f32)> = (0..n)
        .map(|_| (rng.r#gen::<f32>() * w, rng.r#gen::<f32>() * h))
        .collect();

    let k = (w * h / n as f32).sqrt();
    let initial_temperature = w.min(h) / 10.0;

    for iteration in 0..iterations {
        let mut disp = vec![(0.0f32, 0.0f32); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = (pos[i].0 - pos[j].0, pos[i].1 - pos[j].1);
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[i].0 += fx;
                disp[i].1 += fy;
                disp[j].0 -= fx;
                disp[j].1 -= fy;
            }
        }

        for &(u, v) in &edges {
            let (dx, dy) = (pos[u].0 - pos[v].0, pos[u].1 - pos[v].1);
            let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let force = dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            disp[u].0 -= fx;
            disp[u].1 -= fy;
            disp[v].0 += fx;
            disp[v].1 += fy;
        }

        let temperature = initial_temperature * (1.0 - iteration as f32 / iterations as f32);
        for (p, d) in pos.iter_mut().zip(&disp) {
            let len = (d.0 * d.0 + d.1 * d.1).sqrt().max(MIN_DISTANCE);
            let step = len.min(temperature);
            p.0 += d.0 / len * step;
            p.1 += d.1 / len * step;
        }
    }

    let positions = fit_to_canvas(&pos, w, h, margin)
        .into_iter()
        .enumerate()
        .map(|(i, p)| (ids[i], p))
        .collect();
    Layout { positions }
}

/// Scale the bounding box of `pos` into `[margin, size - margin]`.
fn fit_to_canvas(pos: &[(f32, f32)], w: f32, h: f32, margin: f32) -> Vec<(f32, f32)> {
    let (min_x, max_x) = bounds(pos.iter().map(|p| p.0));
    let (min_y, max_y) = bounds(pos.iter().map(|p| p.1));
    let margin = margin.min(w / 2.0).min(h / 2.0);

    let scale = |value: f32, min: f32, max: f32, size: f32| {
        let span = max - min;
        if span < MIN_DISTANCE {
            size / 2.0
        } else {
            margin + (value - min) / span * (size - 2.0 * margin)
        }
    };

    pos.iter()
        .map(|&(x, y)| (scale(x, min_x, max_x, w), scale(y, min_y, max_y, h)))
        .collect()
}

fn bounds(values: impl Iterator<Item = f32>) -> (f32, f32) {
    values.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
