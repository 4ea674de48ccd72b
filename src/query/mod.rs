//! Read-only queries over a finished [`WordGraph`](crate::graph::WordGraph)
//!
//! - [`bridge`]: words `w3` with edges `w1 -> w3 -> w2`
//! - [`shortest_path`]: weighted Dijkstra with path reconstruction
//! - [`random_walk`]: uniform walk that stops on a repeated edge
//! - [`generate`]: inserts bridge words into new text

pub mod bridge;
pub mod generate;
pub mod random_walk;
pub mod shortest_path;

pub use bridge::find_bridge_words;
pub use generate::generate_new_text;
pub use random_walk::{seeded_rng, RandomWalker};
pub use shortest_path::{shortest_path, shortest_paths_from};
