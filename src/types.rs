//! Core types for wordgraph
//!
//! This module defines the configuration shared by the library and the CLI,
//! and the tagged result types returned by the graph queries.

use crate::errors::{Result, WordGraphError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for graph analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordGraphConfig {
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Number of PageRank iterations (always run in full)
    pub iterations: usize,
    /// Number of PageRank entries to list (0 = all)
    pub top_n: usize,
    /// File the random walk transcript is written to
    pub walk_output: PathBuf,
    /// Optional cap on traversed edges per random walk
    pub walk_max_steps: Option<usize>,
    /// Seed for the random source (walks and text generation).
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for WordGraphConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 100,
            top_n: 0,
            walk_output: PathBuf::from("random_walk_output.txt"),
            walk_max_steps: None,
            seed: None,
        }
    }
}

impl WordGraphConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| WordGraphError::io(path, &e))?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(WordGraphError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.iterations == 0 {
            return Err(WordGraphError::invalid_config("iterations must be > 0"));
        }

        if self.walk_max_steps == Some(0) {
            return Err(WordGraphError::invalid_config(
                "walk_max_steps must be > 0 when set",
            ));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set iteration count
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Builder method: set number of listed PageRank entries
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set the walk transcript file
    pub fn with_walk_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.walk_output = path.into();
        self
    }

    /// Builder method: cap the number of traversed edges per walk
    pub fn with_walk_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.walk_max_steps = max_steps;
        self
    }

    /// Builder method: seed the random source
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

// ============================================================================
// Shortest path results
// ============================================================================

/// Outcome of a shortest-path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// A shortest path exists. `path` starts at the source and ends at the target.
    Found { path: Vec<String>, distance: u64 },
    /// One or both endpoints are not in the graph
    UnknownWord,
    /// Both endpoints exist but the target cannot be reached
    Unreachable,
}

impl PathResult {
    /// Whether a path was found
    pub fn found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The path as words (empty unless found)
    pub fn path(&self) -> &[String] {
        match self {
            Self::Found { path, .. } => path,
            _ => &[],
        }
    }

    /// Total weight of the path, if one was found
    pub fn distance(&self) -> Option<u64> {
        match self {
            Self::Found { distance, .. } => Some(*distance),
            _ => None,
        }
    }
}

// ============================================================================
// Random walk results
// ============================================================================

/// Why a random walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkTermination {
    /// The graph has no nodes; no walk was performed
    EmptyGraph,
    /// The current node has no outgoing edges
    NoOutEdges,
    /// The chosen edge was already traversed in this walk
    RepeatedEdge,
    /// The configured step cap was reached
    StepLimit,
}

impl fmt::Display for WalkTermination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::EmptyGraph => "graph is empty, no walk performed",
            Self::NoOutEdges => "walk stopped: no out-edges",
            Self::RepeatedEdge => "walk stopped: repeated edge",
            Self::StepLimit => "walk stopped: step limit reached",
        };
        f.write_str(msg)
    }
}

/// A completed random walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkResult {
    /// Visited words in order, including the destination of a repeated edge
    pub path: Vec<String>,
    /// The terminal condition
    pub termination: WalkTermination,
}

impl WalkResult {
    /// Number of edges traversed, counting the repeated edge that ended the walk
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Single-line transcript, e.g. `a b a b (walk stopped: repeated edge)`
    pub fn transcript(&self) -> String {
        if self.path.is_empty() {
            return format!("({})", self.termination);
        }
        format!("{} ({})", self.path.join(" "), self.termination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = WordGraphConfig::default();
        assert!(config.validate().is_ok());

        let bad_config = WordGraphConfig::default().with_damping(1.5);
        assert!(bad_config.validate().is_err());

        let bad_config = WordGraphConfig::default().with_iterations(0);
        assert!(bad_config.validate().is_err());

        let bad_config = WordGraphConfig::default().with_walk_max_steps(Some(0));
        assert!(bad_config.validate().is_err());
    }

    #[test]
    fn test_config_serde_missing_fields_default() {
        let cfg: WordGraphConfig = serde_json::from_str(r#"{ "damping": 0.5 }"#).unwrap();
        assert_eq!(cfg.damping, 0.5);
        assert_eq!(cfg.iterations, 100);
        assert_eq!(cfg.walk_output, PathBuf::from("random_walk_output.txt"));
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn test_config_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "iterations": 20, "seed": 7 }"#).unwrap();

        let cfg = WordGraphConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.iterations, 20);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn test_config_from_json_file_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "damping": 2.0 }"#).unwrap();

        let err = WordGraphConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, WordGraphError::InvalidConfig { .. }));
    }

    #[test]
    fn test_path_result_accessors() {
        let found = PathResult::Found {
            path: vec!["a".into(), "b".into()],
            distance: 3,
        };
        assert!(found.found());
        assert_eq!(found.distance(), Some(3));
        assert_eq!(found.path().len(), 2);

        assert!(!PathResult::Unreachable.found());
        assert!(PathResult::UnknownWord.path().is_empty());
        assert_eq!(PathResult::UnknownWord.distance(), None);
    }

    #[test]
    fn test_walk_transcript() {
        let walk = WalkResult {
            path: vec!["a".into(), "b".into(), "a".into(), "b".into()],
            termination: WalkTermination::RepeatedEdge,
        };
        assert_eq!(walk.transcript(), "a b a b (walk stopped: repeated edge)");
        assert_eq!(walk.steps(), 3);

        let empty = WalkResult {
            path: Vec::new(),
            termination: WalkTermination::EmptyGraph,
        };
        assert_eq!(empty.transcript(), "(graph is empty, no walk performed)");
    }

    #[test]
    fn test_walk_termination_serde() {
        let json = serde_json::to_string(&WalkTermination::NoOutEdges).unwrap();
        assert_eq!(json, r#""no_out_edges""#);
    }
}
