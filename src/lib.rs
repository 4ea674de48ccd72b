//! # wordgraph
//!
//! Builds a directed, weighted word-adjacency graph from plain text and
//! answers questions about it.
//!
//! Every pair of consecutive words in the text becomes an edge whose weight
//! counts how often the pair occurs. The finished graph supports:
//!
//! - **Bridge words**: words `w3` with edges `w1 -> w3 -> w2`
//! - **Text generation**: inserting bridge words into new text
//! - **Shortest paths**: weighted Dijkstra, to one word or to all words
//! - **PageRank**: fixed-iteration power method with dangling redistribution
//! - **Random walks**: uniform walks that stop on the first repeated edge
//!
//! ```
//! use wordgraph::{find_bridge_words, graph_from_text};
//!
//! let graph = graph_from_text("to explore strange new worlds").unwrap();
//! assert_eq!(find_bridge_words(&graph, "explore", "new"), vec!["strange"]);
//! ```

pub mod cli;
pub mod errors;
pub mod graph;
pub mod ingest;
pub mod nlp;
pub mod pagerank;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, WordGraphError};
pub use types::{PathResult, WalkResult, WalkTermination, WordGraphConfig};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::WordGraph};
pub use ingest::{graph_from_text, load_graph};
pub use nlp::tokenizer::Tokenizer;
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use query::{
    find_bridge_words, generate_new_text, seeded_rng, shortest_path, shortest_paths_from,
    RandomWalker,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
