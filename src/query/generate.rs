//! Bridge-word text generation
//!
//! Rewrites a line of text by inserting, between each pair of adjacent
//! words, one of their bridge words picked at random.

use super::bridge::find_bridge_words;
use crate::graph::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use rand::Rng;

/// Insert bridge words into `text`
///
/// The text is tokenized first, so the output is lower-case and stripped of
/// punctuation. Input with fewer than two words is returned unchanged.
pub fn generate_new_text<R: Rng + ?Sized>(graph: &WordGraph, text: &str, rng: &mut R) -> String {
    let words = Tokenizer::new().tokenize(text);
    if words.len() < 2 {
        return text.to_string();
    }

    let bridges_by_pair: Vec<Vec<String>> = Tokenizer::pairs(&words)
        .map(|(from, to)| find_bridge_words(graph, from, to))
        .collect();

    let mut output: Vec<&str> = Vec::with_capacity(words.len() * 2);

    for (i, word) in words.iter().enumerate() {
        output.push(word);
        if let Some(bridges) = bridges_by_pair.get(i) {
            if !bridges.is_empty() {
                output.push(&bridges[rng.random_range(0..bridges.len())]);
            }
        }
    }

    output.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::query::seeded_rng;

    fn graph_from(text: &str) -> WordGraph {
        let words = Tokenizer::new().tokenize(text);
        GraphBuilder::from_words(&words).finish()
    }

    #[test]
    fn test_inserts_single_bridge() {
        let graph = graph_from("to explore strange new worlds to seek out new life");
        let out = generate_new_text(
            &graph,
            "Seek to explore new and exciting synergies",
            &mut seeded_rng(Some(1)),
        );
        assert_eq!(out, "seek to explore strange new and exciting synergies");
    }

    #[test]
    fn test_chooses_among_bridges() {
        let graph = graph_from("a x b a y b");
        for seed in 0..10 {
            let out = generate_new_text(&graph, "a b", &mut seeded_rng(Some(seed)));
            assert!(out == "a x b" || out == "a y b", "got {out}");
        }
    }

    #[test]
    fn test_short_input_unchanged() {
        let graph = graph_from("a x b");
        assert_eq!(generate_new_text(&graph, "Hello!", &mut seeded_rng(None)), "Hello!");
        assert_eq!(generate_new_text(&graph, "", &mut seeded_rng(None)), "");
    }

    #[test]
    fn test_no_bridges_normalizes_only() {
        let graph = graph_from("a x b");
        let out = generate_new_text(&graph, "Unknown,  WORDS here", &mut seeded_rng(Some(0)));
        assert_eq!(out, "unknown words here");
    }
}
