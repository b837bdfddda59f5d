//! # wordreduce
//!
//! Parallel word-frequency MapReduce over text documents.
//!
//! ## Usage
//!
//! ```bash
//! wordreduce run docs/*.txt --chunks 4
//! wordreduce run --input corpus.json --format json
//! wordreduce demo
//! ```
//!
//! ## Modules
//!
//! - `config` - Layered configuration (files, environment, flags)
//! - `error` - Error type for input, configuration and task failures
//! - `input` - Document sources (files, list files, sample corpus)
//! - `mapreduce` - Chunking, per-chunk statistics, reduction and the parallel executor
pub mod config;
pub mod error;
pub mod input;
pub mod mapreduce;

pub use error::{Error, Result};
