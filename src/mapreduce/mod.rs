//! Word-frequency MapReduce
//!
//! Documents are split into contiguous chunks, each chunk is mapped to its own
//! [`ChunkStatistics`] independently, and all statistics are reduced once,
//! after every map task has finished, into a [`GlobalReport`].

pub mod demo;
pub mod executor;
pub mod formatter;
pub mod pure;
pub mod types;

pub use executor::{ExecutorConfig, MapReduceExecutor, MapReduceOutcome};
pub use formatter::{FormatType, OutputFormatter};
pub use pure::aggregation::{aggregate_results, aggregate_results_with_top_n, merge_statistics};
pub use pure::chunking::{plan_chunk_ranges, split_documents};
pub use pure::mapping::{map_chunks, process_chunk};
pub use types::{Chunk, ChunkStatistics, Document, GlobalReport, WordCount, WordFrequency};
