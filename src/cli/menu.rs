//! Interactive numbered menu over a [`Session`]
//!
//! Reads from any [`BufRead`] and writes to any [`Write`] so the loop can be
//! driven by stdin/stdout or by an in-memory script in tests. End of input
//! behaves like choosing "Exit".

use super::session::Session;
use std::io::{self, BufRead, Write};
use tracing::warn;

const MENU: &str = "\
Options:
1. Show directed graph
2. Query bridge words
3. Generate new text from bridge words
4. Shortest path between words
5. Compute PageRank
6. Random walk
7. Exit";

/// Run the menu until the user exits or input ends
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: &mut R, out: &mut W) -> io::Result<()> {
    loop {
        writeln!(out, "\n{MENU}")?;
        let Some(line) = prompt(input, out, "Choose an option: ")? else {
            break;
        };

        let choice: u32 = match line.parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(out, "Invalid input. Please enter a number between 1 and 7.")?;
                continue;
            }
        };

        match choice {
            1 => writeln!(out, "{}", session.show())?,
            2 => {
                let Some(word1) = prompt(input, out, "First word: ")? else { break };
                let Some(word2) = prompt(input, out, "Second word: ")? else { break };
                writeln!(out, "{}", session.bridge(&word1, &word2))?;
            }
            3 => {
                let Some(text) = prompt(input, out, "Text: ")? else { break };
                writeln!(out, "Generated text: {}", session.generate(&text))?;
            }
            4 => {
                let Some(word1) = prompt(input, out, "Start word: ")? else { break };
                let Some(word2) =
                    prompt(input, out, "End word (blank for all paths): ")?
                else {
                    break;
                };
                let target = (!word2.is_empty()).then_some(word2.as_str());
                writeln!(out, "{}", session.path(&word1, target))?;
            }
            5 => match session.rank(false) {
                Ok(listing) => writeln!(out, "{listing}")?,
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            6 => match session.walk_and_save() {
                Ok(message) => writeln!(out, "{message}")?,
                Err(e) => {
                    warn!(error = %e, "could not save walk");
                    writeln!(out, "Error: {e}")?;
                }
            },
            7 => break,
            _ => writeln!(out, "Invalid choice, try again.")?,
        }
    }

    writeln!(out, "Goodbye.")?;
    Ok(())
}

/// Print `label`, then read one trimmed line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
