//! Reading a corpus into a word graph

use crate::errors::{Result, WordGraphError};
use crate::graph::{GraphBuilder, WordGraph};
use crate::nlp::tokenizer::Tokenizer;
use std::path::Path;
use tracing::{debug, info};

/// Build a graph from raw text
///
/// Fails when the text holds fewer than two words, since no edge can be
/// formed.
pub fn graph_from_text(text: &str) -> Result<WordGraph> {
    let words = Tokenizer::new().tokenize(text);
    debug!(tokens = words.len(), "tokenized input");

    if words.len() < 2 {
        return Err(WordGraphError::insufficient_input(format!(
            "found {} word(s), at least 2 are needed to form an edge",
            words.len()
        )));
    }

    Ok(GraphBuilder::from_words(&words).finish())
}

/// Read a UTF-8 text file and build its graph
pub fn load_graph(path: impl AsRef<Path>) -> Result<WordGraph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| WordGraphError::io(path, &e))?;
    let graph = graph_from_text(&text)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built from file"
    );
    Ok(graph)
}
