//! PageRank algorithms
//!
//! This module provides the fixed-iteration PageRank used to score words.

pub mod standard;

use crate::graph::WordGraph;
use rustc_hash::FxHashMap;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// L1 change between the last two score vectors
    pub delta: f64,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64) -> Self {
        Self {
            scores,
            iterations,
            delta,
        }
    }

    /// Get top N nodes by score (ties broken by node ID)
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Scores keyed by word
    pub fn by_word(&self, graph: &WordGraph) -> FxHashMap<String, f64> {
        graph
            .words()
            .iter()
            .zip(&self.scores)
            .map(|(w, &s)| (w.clone(), s))
            .collect()
    }

    /// All words ranked by descending score, ties broken by word
    pub fn ranked<'g>(&self, graph: &'g WordGraph) -> Vec<(&'g str, f64)> {
        let mut ranked: Vec<_> = graph
            .words()
            .iter()
            .zip(&self.scores)
            .map(|(w, &s)| (w.as_str(), s))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Whether there are no scores (empty graph)
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
