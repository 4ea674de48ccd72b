//! User-facing text for query results.

use crate::graph::WordGraph;
use crate::pagerank::PageRankResult;
use crate::query::find_bridge_words;
use crate::types::{PathResult, WalkResult};
use serde::Serialize;
use std::fmt::Write as _;

/// One line of the PageRank listing
#[derive(Debug, Serialize)]
pub struct RankEntry<'a> {
    pub word: &'a str,
    pub score: f64,
}

/// Adjacency listing with nodes and successors sorted by word
pub fn graph_listing(graph: &WordGraph) -> String {
    if graph.is_empty() {
        return "The graph is empty.".to_string();
    }

    let mut words: Vec<&str> = graph.words().iter().map(String::as_str).collect();
    words.sort_unstable();

    let mut out = String::from("--- Directed graph ---\n");
    for word in words {
        let successors = graph.successors_of(word);
        if successors.is_empty() {
            let _ = writeln!(out, "{word} -> (no out-edges)");
            continue;
        }
        let edges: Vec<String> = successors
            .iter()
            .map(|(succ, weight)| format!("{succ}(weight: {weight})"))
            .collect();
        let _ = writeln!(out, "{word} -> {{{}}}", edges.join(", "));
    }
    out.push_str("--- End of graph ---");
    out
}

/// Quote and join words as `"a", "b", and "c"`
fn quoted_list(words: &[String]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let _ = write!(out, "\"{word}\"");
        if i + 2 < words.len() {
            out.push_str(", ");
        } else if i + 2 == words.len() {
            out.push_str(", and ");
        }
    }
    out
}

/// Bridge-word answer, telling unknown words apart from missing bridges
pub fn bridge_message(graph: &WordGraph, word1: &str, word2: &str) -> String {
    match (graph.has_node(word1), graph.has_node(word2)) {
        (false, false) => return format!("No \"{word1}\" and \"{word2}\" in the graph!"),
        (false, true) => return format!("No \"{word1}\" in the graph!"),
        (true, false) => return format!("No \"{word2}\" in the graph!"),
        (true, true) => {}
    }

    let bridges = find_bridge_words(graph, word1, word2);
    match bridges.as_slice() {
        [] => format!("No bridge words from \"{word1}\" to \"{word2}\"!"),
        [only] => format!("The bridge word from \"{word1}\" to \"{word2}\" is: \"{only}\"."),
        _ => format!(
            "The bridge words from \"{word1}\" to \"{word2}\" are: {}.",
            quoted_list(&bridges)
        ),
    }
}

/// Answer for a two-word shortest path query
pub fn path_message(word1: &str, word2: &str, result: &PathResult) -> String {
    match result {
        PathResult::Found { path, distance } => {
            format!("Shortest path: {}\nPath length: {distance}", path.join(" -> "))
        }
        PathResult::UnknownWord => "One or both words are not in the graph.".to_string(),
        PathResult::Unreachable => {
            format!("No path from \"{word1}\" to \"{word2}\" (unreachable).")
        }
    }
}

/// Answer for a single-source shortest path query
pub fn all_paths_message(graph: &WordGraph, word: &str, results: &[(String, PathResult)]) -> String {
    if !graph.has_node(word) {
        return format!("No \"{word}\" in the graph!");
    }
    if results.is_empty() {
        return format!("\"{word}\" is the only word in the graph.");
    }

    let mut out = format!("Shortest paths from \"{}\":", word.to_lowercase());
    for (target, result) in results {
        match result {
            PathResult::Found { path, distance } => {
                let _ = write!(out, "\n  {target}: {} (length {distance})", path.join(" -> "));
            }
            _ => {
                let _ = write!(out, "\n  {target}: unreachable");
            }
        }
    }
    out
}

/// Ranked entries, truncated to `top_n` when non-zero
pub fn rank_entries<'g>(
    graph: &'g WordGraph,
    result: &PageRankResult,
    top_n: usize,
) -> Vec<RankEntry<'g>> {
    let mut ranked = result.ranked(graph);
    if top_n > 0 {
        ranked.truncate(top_n);
    }
    ranked
        .into_iter()
        .map(|(word, score)| RankEntry { word, score })
        .collect()
}

/// PageRank listing, highest score first
pub fn rank_listing(entries: &[RankEntry<'_>], damping: f64, iterations: usize) -> String {
    if entries.is_empty() {
        return "The graph is empty; no PageRank to compute.".to_string();
    }
    let mut out = format!("PageRank (d={damping}, {iterations} iterations, highest first):");
    for entry in entries {
        let _ = write!(out, "\n- {}: {:.5}", entry.word, entry.score);
    }
    out
}

/// PageRank listing as JSON
pub fn rank_json(entries: &[RankEntry<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

/// Random walk line
pub fn walk_message(walk: &WalkResult) -> String {
    format!("Random walk: {}", walk.transcript())
}
