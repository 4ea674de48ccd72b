//! Compressed Sparse Row (CSR) word graph
//!
//! The frozen, read-only form of the word graph. Successors and
//! predecessors are both stored contiguously, sorted by node ID, so
//! neighbor iteration is a slice walk and edge membership is a binary
//! search. Nothing in this type can mutate node or edge data.

use super::builder::GraphBuilder;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// A directed, weighted word-adjacency graph in CSR format
#[derive(Debug, Clone)]
pub struct WordGraph {
    /// Number of nodes
    num_nodes: usize,
    /// Row pointers: node i's successors are at row_ptr[i]..row_ptr[i+1]
    row_ptr: Vec<usize>,
    /// Successor node IDs, sorted within each row
    col_idx: Vec<u32>,
    /// Edge weights (occurrence counts), parallel to `col_idx`
    weights: Vec<u32>,
    /// Row pointers into `in_col_idx`
    in_row_ptr: Vec<usize>,
    /// Predecessor node IDs, sorted within each row
    in_col_idx: Vec<u32>,
    /// Word for each node
    words: Vec<String>,
    /// Lowercase word -> node ID
    word_to_id: FxHashMap<String, u32>,
}

impl WordGraph {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut in_row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut in_col_idx = Vec::new();
        let mut words = Vec::with_capacity(num_nodes);
        let mut word_to_id =
            FxHashMap::with_capacity_and_hasher(num_nodes, Default::default());

        row_ptr.push(0);
        in_row_ptr.push(0);

        for (id, node) in builder.nodes() {
            words.push(node.word.clone());
            word_to_id.insert(node.word.clone(), id);

            // Sorted for deterministic iteration and binary search
            let mut edges: Vec<_> = node.successors.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_unstable_by_key(|(k, _)| *k);
            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());

            let mut preds: Vec<u32> = node.predecessors.iter().copied().collect();
            preds.sort_unstable();
            in_col_idx.extend(preds);
            in_row_ptr.push(in_col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            in_row_ptr,
            in_col_idx,
            words,
            word_to_id,
        }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.num_nodes
    }

    /// Number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.col_idx.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Check whether a word is a node (case-insensitive)
    pub fn has_node(&self, word: &str) -> bool {
        self.node_id(word).is_some()
    }

    /// Get the node ID for a word (case-insensitive)
    pub fn node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(&word.to_lowercase()).copied()
    }

    /// Get the word for a node ID
    pub fn word(&self, id: u32) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    /// All words, indexed by node ID
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Successor IDs of a node, sorted ascending (empty for unknown IDs)
    pub fn successor_ids(&self, id: u32) -> &[u32] {
        match self.row(&self.row_ptr, id) {
            Some((start, end)) => &self.col_idx[start..end],
            None => &[],
        }
    }

    /// Predecessor IDs of a node, sorted ascending (empty for unknown IDs)
    pub fn predecessor_ids(&self, id: u32) -> &[u32] {
        match self.row(&self.in_row_ptr, id) {
            Some((start, end)) => &self.in_col_idx[start..end],
            None => &[],
        }
    }

    /// Iterate over `(successor, weight)` pairs of a node
    pub fn successors(&self, id: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (start, end) = self.row(&self.row_ptr, id).unwrap_or((0, 0));
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Number of distinct successors of a node
    pub fn out_degree(&self, id: u32) -> usize {
        self.successor_ids(id).len()
    }

    /// Weight of the edge `from -> to`, if present
    pub fn edge_weight(&self, from: u32, to: u32) -> Option<u32> {
        let (start, _) = self.row(&self.row_ptr, from)?;
        self.successor_ids(from)
            .binary_search(&to)
            .ok()
            .map(|offset| self.weights[start + offset])
    }

    /// Check whether the edge `from -> to` exists
    pub fn has_edge(&self, from: u32, to: u32) -> bool {
        self.successor_ids(from).binary_search(&to).is_ok()
    }

    /// Successors of a word with their weights (empty if the word is absent)
    pub fn successors_of(&self, word: &str) -> BTreeMap<&str, u32> {
        let Some(id) = self.node_id(word) else {
            return BTreeMap::new();
        };
        self.successors(id)
            .map(|(target, weight)| (self.words[target as usize].as_str(), weight))
            .collect()
    }

    /// Nodes with no outgoing edges
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree(n) == 0)
            .collect()
    }

    fn row(&self, ptr: &[usize], id: u32) -> Option<(usize, usize)> {
        let i = id as usize;
        if i >= self.num_nodes {
            return None;
        }
        Some((ptr[i], ptr[i + 1]))
    }
}

impl Default for WordGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            in_row_ptr: vec![0],
            in_col_idx: Vec::new(),
            words: Vec::new(),
            word_to_id: FxHashMap::default(),
        }
    }
}
