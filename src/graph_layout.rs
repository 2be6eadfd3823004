//! Seeded force-directed placement of graph nodes.
//!
//! A short Fruchterman-Reingold simulation: every pair of nodes repels, every
//! edge attracts, and the step size cools linearly. Starting points come from a
//! seeded RNG, so the same graph and seed always give the same picture.
//! Coordinates are normalized into the unit square for the renderer to scale.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 42;

const ITERATIONS: usize = 60;
const INITIAL_TEMPERATURE: f32 = 0.1;
const MARGIN: f32 = 0.08;
const MIN_DISTANCE: f32 = 1e-4;

/// Normalized node positions for one node set.
#[derive(Debug, Clone, Default)]
pub struct GraphPositions {
    points: HashMap<String, (f32, f32)>,
}

impl GraphPositions {
    /// Runs the spring simulation over `graph`.
    pub fn compute(graph: &Graph, seed: u64) -> Self {
        let ids: Vec<&str> = graph.nodes().collect();
        let n = ids.len();
        if n == 0 {
            return Self::default();
        }
        if n == 1 {
            let points = HashMap::from([(ids[0].to_string(), (0.5, 0.5))]);
            return Self { points };
        }

        let index: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let edges: Vec<(usize, usize)> = graph
            .edges()
            .filter_map(|(u, v)| Some((*index.get(u)?, *index.get(v)?)))
            .filter(|(a, b)| a != b)
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        let mut pos: Vec<(f32, f32)> = (0..n).map(|_| (rng.gen::<f32>(), rng.gen::<f32>())).collect();

        let k = (1.0 / n as f32).sqrt();
        for iteration in 0..ITERATIONS {
            let temperature = INITIAL_TEMPERATURE * (1.0 - iteration as f32 / ITERATIONS as f32);
            let mut disp = vec![(0.0f32, 0.0f32); n];

            for i in 0..n {
                for j in (i + 1)..n {
                    let (dx, dy, d) = delta(pos[i], pos[j]);
                    let force = k * k / d;
                    let (fx, fy) = (dx / d * force, dy / d * force);
                    disp[i].0 += fx;
                    disp[i].1 += fy;
                    disp[j].0 -= fx;
                    disp[j].1 -= fy;
                }
            }

            for &(a, b) in &edges {
                let (dx, dy, d) = delta(pos[a], pos[b]);
                let force = d * d / k;
                let (fx, fy) = (dx / d * force, dy / d * force);
                disp[a].0 -= fx;
                disp[a].1 -= fy;
                disp[b].0 += fx;
                disp[b].1 += fy;
            }

            for (p, (dx, dy)) in pos.iter_mut().zip(disp) {
                let len = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let step = len.min(temperature);
                p.0 += dx / len * step;
                p.1 += dy / len * step;
            }
        }

        normalize(&mut pos);
        let points = ids
            .into_iter()
            .map(str::to_string)
            .zip(pos)
            .collect();
        Self { points }
    }

    /// Normalized position of `id`, both coordinates in `[0, 1]`.
    pub fn get(&self, id: &str) -> Option<(f32, f32)> {
        self.points.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the graph's node set differs from the laid-out one.
    ///
    /// Edge changes alone do not make positions stale.
    pub fn is_stale(&self, graph: &Graph) -> bool {
        if self.points.len() != graph.node_count() {
            return true;
        }
        let current: HashSet<&str> = graph.nodes().collect();
        !self.points.keys().all(|id| current.contains(id.as_str()))
    }
}

/// Vector from `b` to `a` and its (clamped) length.
fn delta(a: (f32, f32), b: (f32, f32)) -> (f32, f32, f32) {
    let (dx, dy) = (a.0 - b.0, a.1 - b.1);
    let d = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
    (dx, dy, d)
}

/// Rescales points into `[MARGIN, 1 - MARGIN]` on both axes.
fn normalize(pos: &mut [(f32, f32)]) {
    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for &(x, y) in pos.iter() {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    let span = (max_x - min_x).max(max_y - min_y).max(MIN_DISTANCE);
    let scale = (1.0 - 2.0 * MARGIN) / span;
    // Center the shorter axis.
    let off_x = (span - (max_x - min_x)) / 2.0;
    let off_y = (span - (max_y - min_y)) / 2.0;
    for p in pos.iter_mut() {
        p.0 = MARGIN + (p.0 - min_x + off_x) * scale;
        p.1 = MARGIN + (p.1 - min_y + off_y) * scale;
    }
}
