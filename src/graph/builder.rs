//! Graph builder with efficient edge handling
//!
//! This module provides the mutable construction phase of the word graph.
//! It uses FxHashMap for O(1) node and edge lookups while edges are being
//! counted; [`GraphBuilder::finish`] freezes the result into a [`WordGraph`].

use super::csr::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The lowercase word for this node
    pub word: String,
    /// Outgoing edges: target node ID -> occurrence count
    pub successors: FxHashMap<u32, u32>,
    /// Nodes with an edge into this one
    pub predecessors: FxHashSet<u32>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            successors: FxHashMap::default(),
            predecessors: FxHashSet::default(),
        }
    }
}

/// A mutable graph builder optimized for incremental construction
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps lowercase word -> node ID
    word_to_id: FxHashMap<String, u32>,
    /// Node storage, indexed by ID
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            word_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given word, returning its ID
    ///
    /// Words are lower-cased first. IDs are dense and assigned in order of
    /// first appearance.
    pub fn get_or_create_node(&mut self, word: &str) -> u32 {
        let word = word.to_lowercase();
        if let Some(&id) = self.word_to_id.get(&word) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.nodes.push(BuilderNode::new(word.as_str()));
        self.word_to_id.insert(word, id);
        id
    }

    /// Record one occurrence of `from_word` immediately followed by `to_word`
    ///
    /// Creates either node on first sight. Repeated pairs increment the
    /// existing edge's weight.
    pub fn add_edge(&mut self, from_word: &str, to_word: &str) {
        let from = self.get_or_create_node(from_word);
        let to = self.get_or_create_node(to_word);
        self.increment_edge(from, to);
    }

    /// Increment the weight of the directed edge `from -> to` by one
    ///
    /// Both IDs must already exist; unknown IDs are ignored.
    pub fn increment_edge(&mut self, from: u32, to: u32) {
        if to as usize >= self.nodes.len() {
            return;
        }
        let Some(node) = self.nodes.get_mut(from as usize) else {
            return;
        };
        *node.successors.entry(to).or_insert(0) += 1;
        self.nodes[to as usize].predecessors.insert(from);
    }

    /// Build a graph from a word sequence, one edge per consecutive pair
    pub fn from_words(words: &[String]) -> Self {
        let mut builder = Self::with_capacity(words.len() / 2);
        for (from, to) in Tokenizer::pairs(words) {
            builder.add_edge(from, to);
        }
        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.successors.len()).sum()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by word (case-insensitive)
    pub fn get_node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(&word.to_lowercase()).copied()
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze the builder into a read-only graph
    pub fn finish(self) -> WordGraph {
        let graph = WordGraph::from_builder(&self);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "word graph constructed"
        );
        graph
    }
}
