//! Weighted shortest paths
//!
//! Dijkstra over the occurrence-count weights (always >= 1). Predecessor
//! pointers are kept per node and the path is rebuilt once the target is
//! settled. The first time the target leaves the heap its distance is
//! optimal, so the search stops there.
//!
//! Among equal-cost paths the one returned depends on heap order (smaller
//! node IDs first); callers should not rely on a particular choice.

use crate::graph::WordGraph;
use crate::types::PathResult;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

/// Distances and predecessor pointers from one source
struct SearchState {
    dist: Vec<u64>,
    prev: Vec<Option<u32>>,
}

impl SearchState {
    fn reached(&self, node: u32) -> bool {
        self.dist[node as usize] != u64::MAX
    }

    /// Rebuild the source -> `target` path as words
    fn path_to(&self, graph: &WordGraph, target: u32) -> Vec<String> {
        let mut ids = vec![target];
        let mut current = target;
        while let Some(prev) = self.prev[current as usize] {
            ids.push(prev);
            current = prev;
        }
        ids.iter()
            .rev()
            .filter_map(|&id| graph.word(id))
            .map(String::from)
            .collect()
    }

    fn result_for(&self, graph: &WordGraph, target: u32) -> PathResult {
        if !self.reached(target) {
            return PathResult::Unreachable;
        }
        PathResult::Found {
            path: self.path_to(graph, target),
            distance: self.dist[target as usize],
        }
    }
}

/// Run Dijkstra from `source`, stopping early once `target` is settled
fn dijkstra(graph: &WordGraph, source: u32, target: Option<u32>) -> SearchState {
    let n = graph.node_count();
    let mut dist = vec![u64::MAX; n];
    let mut prev = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source as usize] = 0;
    heap.push(Reverse((0u64, source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        // Stale entry: a shorter distance was recorded after this push
        if d > dist[u as usize] {
            continue;
        }
        if target == Some(u) {
            break;
        }

        for (v, weight) in graph.successors(u) {
            let candidate = d + u64::from(weight);
            if candidate < dist[v as usize] {
                dist[v as usize] = candidate;
                prev[v as usize] = Some(u);
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    SearchState { dist, prev }
}

/// Shortest weighted path from `word1` to `word2`
///
/// Identical words (ignoring case) yield the single-word path with
/// distance 0 without searching.
pub fn shortest_path(graph: &WordGraph, word1: &str, word2: &str) -> PathResult {
    let (Some(source), Some(target)) = (graph.node_id(word1), graph.node_id(word2)) else {
        return PathResult::UnknownWord;
    };

    if source == target {
        return PathResult::Found {
            path: graph.word(source).map(String::from).into_iter().collect(),
            distance: 0,
        };
    }

    let state = dijkstra(graph, source, Some(target));
    let result = state.result_for(graph, target);
    debug!(from = word1, to = word2, distance = ?result.distance(), "shortest path");
    result
}

/// Shortest paths from `word` to every other node, sorted by target word
///
/// Unreachable targets are included as [`PathResult::Unreachable`]. Returns
/// an empty list when `word` is absent.
pub fn shortest_paths_from(graph: &WordGraph, word: &str) -> Vec<(String, PathResult)> {
    let Some(source) = graph.node_id(word) else {
        return Vec::new();
    };

    let state = dijkstra(graph, source, None);
    let mut results: Vec<(String, PathResult)> = (0..graph.node_count() as u32)
        .filter(|&id| id != source)
        .filter_map(|id| graph.word(id).map(|w| (w.to_string(), state.result_for(graph, id))))
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
