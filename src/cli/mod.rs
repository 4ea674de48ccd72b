//! Command-line orchestration around the graph engine.

pub mod args;
pub mod dispatch;
pub mod menu;
pub mod render;
pub mod session;

pub use args::{Cli, Commands};
pub use session::Session;
