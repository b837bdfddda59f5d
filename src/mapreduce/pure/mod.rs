//! Pure functions for the word-frequency MapReduce pipeline
//!
//! Nothing in here performs I/O or shares state; the executor composes these
//! into the parallel split → map → reduce run.

pub mod aggregation;
pub mod chunking;
pub mod mapping;
pub mod tokenize;
