//! Random walk with repeated-edge termination
//!
//! The walk starts at a uniformly chosen node and repeatedly moves to a
//! uniformly chosen successor. Edge weights do not bias the choice. It stops
//! when the current node has no successors, or when the chosen edge has
//! already been traversed in this walk (the destination is still recorded).
//! Each step either stops the walk or consumes an unvisited edge, so a walk
//! never takes more than `edge_count + 1` steps.

use crate::graph::WordGraph;
use crate::types::{WalkResult, WalkTermination};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Build the random source for walks and text generation
///
/// A seed gives reproducible output; otherwise the generator is seeded from
/// the operating system.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Random walk configuration
#[derive(Debug, Clone, Default)]
pub struct RandomWalker {
    /// Stop after this many traversed edges
    max_steps: Option<usize>,
}

impl RandomWalker {
    /// Create a walker with no step cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of traversed edges
    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Perform one walk over `graph` using `rng`
    pub fn walk<R: Rng + ?Sized>(&self, graph: &WordGraph, rng: &mut R) -> WalkResult {
        let words = graph.words();
        if words.is_empty() {
            return WalkResult {
                path: Vec::new(),
                termination: WalkTermination::EmptyGraph,
            };
        }

        let mut current = rng.random_range(0..words.len()) as u32;
        let mut path = vec![words[current as usize].clone()];
        let mut visited: FxHashSet<(u32, u32)> = FxHashSet::default();

        let termination = loop {
            if self.max_steps.is_some_and(|max| visited.len() >= max) {
                break WalkTermination::StepLimit;
            }

            let successors = graph.successor_ids(current);
            if successors.is_empty() {
                break WalkTermination::NoOutEdges;
            }

            let next = successors[rng.random_range(0..successors.len())];
            path.push(words[next as usize].clone());
            if !visited.insert((current, next)) {
                break WalkTermination::RepeatedEdge;
            }
            current = next;
        };

        debug!(steps = path.len() - 1, ?termination, "random walk finished");
        WalkResult { path, termination }
    }
}
