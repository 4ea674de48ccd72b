//! Standard PageRank over the word graph
//!
//! Every node starts at `1/N`. Each iteration computes, from the previous
//! vector only,
//!
//! ```text
//! rank'[j] = (1-d)/N + d * ( Σ_{i ∈ pred(j), out(i) > 0} rank[i] / out(i)
//!                            + dangling / N )
//! ```
//!
//! where `out(i)` is the number of distinct successors (edge weights are not
//! used) and `dangling` is the summed rank of all zero out-degree nodes. The
//! dangling mass is spread over every node, dangling ones included. No
//! convergence test is applied: exactly `iterations` passes are run.

use super::PageRankResult;
use crate::graph::WordGraph;
use tracing::debug;

/// Fixed-iteration PageRank
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor
    damping: f64,
    /// Number of passes
    iterations: usize,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardPageRank {
    /// Create a ranker with d = 0.85 and 100 iterations
    pub fn new() -> Self {
        Self {
            damping: 0.85,
            iterations: 100,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Run PageRank on the graph
    pub fn run(&self, graph: &WordGraph) -> PageRankResult {
        let n = graph.node_count();
        if n == 0 {
            return PageRankResult::new(Vec::new(), 0, 0.0);
        }

        let nf = n as f64;
        let d = self.damping;
        let out_degree: Vec<usize> = (0..n as u32).map(|i| graph.out_degree(i)).collect();

        let mut scores = vec![1.0 / nf; n];
        let mut next = vec![0.0; n];
        let mut delta = 0.0;

        for _ in 0..self.iterations {
            let dangling_sum: f64 = out_degree
                .iter()
                .zip(&scores)
                .filter(|(deg, _)| **deg == 0)
                .map(|(_, s)| *s)
                .sum();

            for (j, slot) in next.iter_mut().enumerate() {
                let incoming: f64 = graph
                    .predecessor_ids(j as u32)
                    .iter()
                    .filter(|&&i| out_degree[i as usize] > 0)
                    .map(|&i| scores[i as usize] / out_degree[i as usize] as f64)
                    .sum();
                *slot = (1.0 - d) / nf + d * (incoming + dangling_sum / nf);
            }

            delta = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .sum();
            std::mem::swap(&mut scores, &mut next);
        }

        debug!(
            nodes = n,
            iterations = self.iterations,
            delta,
            "pagerank finished"
        );
        PageRankResult::new(scores, self.iterations, delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_empty_graph() {
        let graph = GraphBuilder::new().finish();
        let result = StandardPageRank::new().run(&graph);
        assert!(result.is_empty());
        assert!(result.by_word(&graph).is_empty());
    }

    #[test]
    fn test_isolated_nodes_stay_uniform() {
        let mut builder = GraphBuilder::new();
        for w in ["a", "b", "c", "d"] {
            builder.get_or_create_node(w);
        }
        let graph = builder.finish();

        for iterations in [1, 2, 10, 100] {
            let result = StandardPageRank::new()
                .with_iterations(iterations)
                .run(&graph);
            for &s in &result.scores {
                assert!((s - 0.25).abs() < EPS, "got {s}");
            }
            assert!(result.delta < EPS);
        }
    }

    #[test]
    fn test_single_iteration_by_hand() {
        // a -> b, b is dangling. N = 2, d = 0.85.
        // iteration 1: dangling = 0.5
        //   a: 0.075 + 0.85 * (0 + 0.25)          = 0.2875
        //   b: 0.075 + 0.85 * (0.5 + 0.25)        = 0.7125
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "b");
        let graph = builder.finish();

        let result = StandardPageRank::new().with_iterations(1).run(&graph);
        assert!((result.score(0) - 0.2875).abs() < EPS);
        assert!((result.score(1) - 0.7125).abs() < EPS);
    }

    #[test]
    fn test_weights_do_not_bias_distribution() {
        // a -> b (x5), a -> c (x1): b and c receive equal shares
        let mut builder = GraphBuilder::new();
        for _ in 0..5 {
            builder.add_edge("a", "b");
        }
        builder.add_edge("a", "c");
        let graph = builder.finish();

        let result = StandardPageRank::new().run(&graph);
        let b = graph.node_id("b").unwrap();
        let c = graph.node_id("c").unwrap();
        assert!((result.score(b) - result.score(c)).abs() < EPS);
    }

    #[test]
    fn test_scores_sum_to_one() {
        let mut builder = GraphBuilder::new();
        let text = ["to", "explore", "strange", "new", "worlds", "to", "seek", "out", "new", "life"];
        for pair in text.windows(2) {
            builder.add_edge(pair[0], pair[1]);
        }
        let graph = builder.finish();

        let result = StandardPageRank::new().run(&graph);
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
        assert_eq!(result.iterations, 100);
    }

    #[test]
    fn test_ranked_order() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "hub");
        builder.add_edge("b", "hub");
        builder.add_edge("c", "hub");
        let graph = builder.finish();

        let result = StandardPageRank::new().run(&graph);
        let ranked = result.ranked(&graph);
        assert_eq!(ranked[0].0, "hub");
        // a, b, c tie and are ordered by word
        let rest: Vec<&str> = ranked[1..].iter().map(|(w, _)| *w).collect();
        assert_eq!(rest, vec!["a", "b", "c"]);
        assert_eq!(result.top_n(1)[0].0, graph.node_id("hub").unwrap());
    }

    #[test]
    fn test_deterministic() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("x", "y");
        builder.add_edge("y", "z");
        builder.add_edge("z", "x");
        builder.add_edge("x", "z");
        let graph = builder.finish();

        let pr = StandardPageRank::new().with_damping(0.85).with_iterations(50);
        assert_eq!(pr.run(&graph).scores, pr.run(&graph).scores);
    }
}
