// crates/engine/src/lib.rs
//! Counting engine for the `word_count` tool.
//!
//! The engine turns one input (a named file or standard input) into a
//! [`stats::Counts`] record with a single forward pass, selected once from
//! the resolved [`options::OptionSet`]. Inputs are processed strictly
//! sequentially by the caller; the engine holds no state across inputs.

pub mod error;
pub mod options;
pub mod processor;
pub mod scanner;
pub mod source;
pub mod stats;

pub use processor::process;
