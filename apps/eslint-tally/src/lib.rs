//! eslint-tally core library.
//!
//! This crate exposes programmatic APIs for summarizing an ESLint JSON report:
//! how many messages of one rule each file has, ranked by count.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `loader`: Report reading, BOM-aware decoding, and JSON parsing.
//! - `tally`: Per-file counting and stable ranking.
//! - `models`: Report record views and tally output structs.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod loader;
pub mod models;
pub mod output;
pub mod tally;
pub mod utils;
