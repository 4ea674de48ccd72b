//! Text processing
//!
//! Turns raw text into the word sequence fed to graph construction.

pub mod tokenizer;
