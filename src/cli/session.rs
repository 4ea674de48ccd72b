//! A loaded graph plus the settings and random source the queries share

use super::render::{self, RankEntry};
use crate::errors::{Result, WordGraphError};
use crate::graph::WordGraph;
use crate::pagerank::standard::StandardPageRank;
use crate::query::{
    generate_new_text, seeded_rng, shortest_path, shortest_paths_from, RandomWalker,
};
use crate::types::{WalkResult, WordGraphConfig};
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{debug, info};

/// Query session over one graph
///
/// The random source is created once, so repeated walks in the interactive
/// menu differ from each other while staying reproducible under a seed.
#[derive(Debug)]
pub struct Session {
    graph: WordGraph,
    config: WordGraphConfig,
    rng: StdRng,
}

impl Session {
    pub fn new(graph: WordGraph, config: WordGraphConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self { graph, config, rng }
    }

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    pub fn config(&self) -> &WordGraphConfig {
        &self.config
    }

    pub fn show(&self) -> String {
        render::graph_listing(&self.graph)
    }

    pub fn bridge(&self, word1: &str, word2: &str) -> String {
        render::bridge_message(&self.graph, word1, word2)
    }

    pub fn generate(&mut self, text: &str) -> String {
        generate_new_text(&self.graph, text, &mut self.rng)
    }

    /// Shortest path to `word2`, or to every other word when it is `None`
    pub fn path(&self, word1: &str, word2: Option<&str>) -> String {
        match word2 {
            Some(word2) => {
                let result = shortest_path(&self.graph, word1, word2);
                render::path_message(word1, word2, &result)
            }
            None => {
                let results = shortest_paths_from(&self.graph, word1);
                render::all_paths_message(&self.graph, word1, &results)
            }
        }
    }

    /// PageRank listing, as text or as JSON
    pub fn rank(&self, json: bool) -> Result<String> {
        let result = StandardPageRank::new()
            .with_damping(self.config.damping)
            .with_iterations(self.config.iterations)
            .run(&self.graph);
        debug!(delta = result.delta, "pagerank converged");

        let entries: Vec<RankEntry<'_>> =
            render::rank_entries(&self.graph, &result, self.config.top_n);
        if json {
            return render::rank_json(&entries)
                .map_err(|e| WordGraphError::serialization(e.to_string()));
        }
        Ok(render::rank_listing(
            &entries,
            self.config.damping,
            self.config.iterations,
        ))
    }

    pub fn walk(&mut self) -> WalkResult {
        RandomWalker::new()
            .with_max_steps(self.config.walk_max_steps)
            .walk(&self.graph, &mut self.rng)
    }

    /// Walk, write the transcript to the configured file and return the
    /// lines to print
    pub fn walk_and_save(&mut self) -> Result<String> {
        let walk = self.walk();
        let path = self.config.walk_output.clone();
        save_walk(&walk, &path)?;
        Ok(format!(
            "{}\nSaved walk to {}",
            render::walk_message(&walk),
            path.display()
        ))
    }
}

/// Write a walk transcript to `path`, replacing any existing file
pub fn save_walk(walk: &WalkResult, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, format!("{}\n", walk.transcript()))
        .map_err(|e| WordGraphError::io(path, &e))?;
    info!(path = %path.display(), steps = walk.steps(), "walk transcript saved");
    Ok(())
}
