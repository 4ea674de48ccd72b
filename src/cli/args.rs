use crate::errors::Result;
use crate::types::WordGraphConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wordgraph",
    version,
    about = "Build a word-adjacency graph from text and query it"
)]
pub struct Cli {
    /// Text file to build the graph from
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON configuration file
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print every node with its successors and edge weights
    Show,
    /// Find bridge words between two words
    Bridge { word1: String, word2: String },
    /// Insert bridge words into a line of text
    Generate {
        text: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Shortest path between two words, or from one word to all others
    Path { word1: String, word2: Option<String> },
    /// Compute PageRank for all words
    Rank {
        #[arg(long)]
        damping: Option<f64>,
        #[arg(long)]
        iterations: Option<usize>,
        /// Only list the N highest-ranked words
        #[arg(long, value_name = "N")]
        top: Option<usize>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Random walk; the transcript is also written to a file
    Walk {
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_name = "N")]
        max_steps: Option<usize>,
    },
    /// Interactive menu (default)
    Menu,
}

impl Cli {
    /// Load the config file (if any) and apply command-line overrides
    pub fn resolve_config(&self) -> Result<WordGraphConfig> {
        let mut config = match &self.config {
            Some(path) => WordGraphConfig::from_json_file(path)?,
            None => WordGraphConfig::default(),
        };

        match &self.command {
            Some(Commands::Rank {
                damping,
                iterations,
                top,
                ..
            }) => {
                if let Some(d) = damping {
                    config.damping = *d;
                }
                if let Some(k) = iterations {
                    config.iterations = *k;
                }
                if let Some(n) = top {
                    config.top_n = *n;
                }
            }
            Some(Commands::Walk {
                output,
                seed,
                max_steps,
            }) => {
                if let Some(path) = output {
                    config.walk_output = path.clone();
                }
                if seed.is_some() {
                    config.seed = *seed;
                }
                if max_steps.is_some() {
                    config.walk_max_steps = *max_steps;
                }
            }
            Some(Commands::Generate { seed, .. }) if seed.is_some() => {
                config.seed = *seed;
            }
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }
}
