//! Bridge word discovery

use crate::graph::WordGraph;

/// Find every word `w3` such that `word1 -> w3` and `w3 -> word2` are edges
///
/// The result is sorted ascending. It is empty when either word is absent
/// or when no bridge exists; callers that need to tell those cases apart
/// check [`WordGraph::has_node`] first.
pub fn find_bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> Vec<String> {
    let (Some(from), Some(to)) = (graph.node_id(word1), graph.node_id(word2)) else {
        return Vec::new();
    };

    let mut bridges: Vec<String> = graph
        .successor_ids(from)
        .iter()
        .filter(|&&candidate| graph.has_edge(candidate, to))
        .filter_map(|&candidate| graph.word(candidate))
        .map(String::from)
        .collect();
    bridges.sort();
    bridges
}
