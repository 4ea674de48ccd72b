//! Word graph construction and storage
//!
//! [`builder::GraphBuilder`] is the only mutation API. Once construction is
//! done it is frozen into a [`csr::WordGraph`], which every query reads.

pub mod builder;
pub mod csr;

pub use builder::GraphBuilder;
pub use csr::WordGraph;
