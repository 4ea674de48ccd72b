//! Run one subcommand against a session

use super::args::Commands;
use super::menu;
use super::session::Session;
use crate::errors::{Result, WordGraphError};
use std::io::{self, Write};

/// Execute `command`, writing its output to `out`
///
/// `None` and [`Commands::Menu`] start the interactive menu on stdin.
pub fn execute<W: Write>(session: &mut Session, command: Option<&Commands>, out: &mut W) -> Result<()> {
    let io_err = |e: io::Error| WordGraphError::io("<stdout>", &e);

    let text = match command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            return menu::run(session, &mut stdin.lock(), out).map_err(io_err);
        }
        Some(Commands::Show) => session.show(),
        Some(Commands::Bridge { word1, word2 }) => session.bridge(word1, word2),
        Some(Commands::Generate { text, .. }) => session.generate(text),
        Some(Commands::Path { word1, word2 }) => session.path(word1, word2.as_deref()),
        Some(Commands::Rank { json, .. }) => session.rank(*json)?,
        Some(Commands::Walk { .. }) => session.walk_and_save()?,
    };

    writeln!(out, "{text}").map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::graph_from_text;
    use crate::types::WordGraphConfig;

    fn run(command: Commands, config: WordGraphConfig) -> String {
        let graph = graph_from_text("to explore strange new worlds to seek out new life").unwrap();
        let mut session = Session::new(graph, config);
        let mut out = Vec::new();
        execute(&mut session, Some(&command), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bridge_command() {
        let out = run(
            Commands::Bridge {
                word1: "seek".into(),
                word2: "new".into(),
            },
            WordGraphConfig::default(),
        );
        assert_eq!(out, "The bridge word from \"seek\" to \"new\" is: \"out\".\n");
    }

    #[test]
    fn test_path_command_unknown_word() {
        let out = run(
            Commands::Path {
                word1: "to".into(),
                word2: Some("mars".into()),
            },
            WordGraphConfig::default(),
        );
        assert_eq!(out, "One or both words are not in the graph.\n");
    }

    #[test]
    fn test_rank_json_command() {
        let out = run(
            Commands::Rank {
                damping: None,
                iterations: None,
                top: None,
                json: true,
            },
            WordGraphConfig::default(),
        );
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(8));
    }

    #[test]
    fn test_walk_command_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let config = WordGraphConfig::default()
            .with_seed(Some(11))
            .with_walk_output(&path);
        let out = run(
            Commands::Walk {
                output: None,
                seed: None,
                max_steps: None,
            },
            config,
        );
        assert!(out.starts_with("Random walk: "));
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(out.contains(saved.trim_end()));
    }
}
