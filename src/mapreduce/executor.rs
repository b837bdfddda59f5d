//! Parallel MapReduce execution
//!
//! Splits the input, runs one map task per chunk on the blocking pool with
//! at most `max_parallel` in flight, waits for every task to finish, then
//! reduces the collected statistics in a single pass.

use super::pure::aggregation::aggregate_results_with_top_n;
use super::pure::chunking::split_documents;
use super::pure::mapping::process_chunk;
use super::types::{Chunk, ChunkStatistics, Document, GlobalReport, DEFAULT_TOP_N};
use crate::config::{WordReduceConfig, DEFAULT_CHUNK_COUNT};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, info};
use uuid::Uuid;

/// Settings for a single MapReduce run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    pub chunk_count: usize,
    pub top_n: usize,
    pub max_parallel: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            chunk_count: DEFAULT_CHUNK_COUNT,
            top_n: DEFAULT_TOP_N,
            max_parallel: 4,
        }
    }
}

impl From<&WordReduceConfig> for ExecutorConfig {
    fn from(config: &WordReduceConfig) -> Self {
        Self {
            chunk_count: config.chunk_count,
            top_n: config.top_n,
            max_parallel: config.max_parallel,
        }
    }
}

/// Report plus metadata about the run that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapReduceOutcome {
    pub job_id: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    /// Document count of each chunk, in chunk order
    pub chunk_sizes: Vec<usize>,
    pub report: GlobalReport,
}

/// Runs the split → map → reduce pipeline
pub struct MapReduceExecutor {
    config: ExecutorConfig,
}

impl MapReduceExecutor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Run the full pipeline over `documents`
    pub async fn run(&self, documents: Vec<Document>) -> Result<MapReduceOutcome> {
        let job_id = Uuid::new_v4().to_string();
        let started_at = Utc::now();
        let timer = Instant::now();

        let chunks = split_documents(&documents, self.config.chunk_count);
        info!(
            job_id = %job_id,
            "Split {} documents into {} chunks",
            documents.len(),
            chunks.len()
        );
        for chunk in &chunks {
            debug!("Chunk {}: {} documents", chunk.index, chunk.len());
        }
        let chunk_sizes = chunks.iter().map(Chunk::len).collect();

        let results = self.execute_map_phase(chunks).await?;

        info!("Reducing {} chunk results", results.len());
        let report = aggregate_results_with_top_n(results, self.config.top_n);
        info!(
            job_id = %job_id,
            "Reduce complete: summarized {} documents",
            report.total_documents
        );

        Ok(MapReduceOutcome {
            job_id,
            started_at,
            elapsed_ms: timer.elapsed().as_millis() as u64,
            chunk_sizes,
            report,
        })
    }

    /// Map every chunk and wait for all of them
    ///
    /// Results are returned in chunk order regardless of completion order.
    pub async fn execute_map_phase(&self, chunks: Vec<Chunk>) -> Result<Vec<ChunkStatistics>> {
        let max_parallel = self.config.max_parallel.max(1);
        let semaphore = Arc::new(Semaphore::new(max_parallel));
        let mut tasks = FuturesUnordered::new();

        info!(
            "Dispatching {} map tasks (max parallel: {})",
            chunks.len(),
            max_parallel
        );

        for chunk in chunks {
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| Error::MapTask(format!("semaphore closed: {}", e)))?;

            tasks.push(tokio::task::spawn_blocking(move || {
                let stats = process_chunk(&chunk);
                debug!(
                    "Map task {}: processed {} documents, found {} unique words",
                    stats.chunk_index, stats.doc_count, stats.unique_words
                );
                drop(permit);
                stats
            }));
        }

        let mut results = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.next().await {
            match joined {
                Ok(stats) => results.push(stats),
                Err(e) if e.is_panic() => {
                    return Err(Error::MapTask(format!("map task panicked: {}", e)))
                }
                Err(e) => return Err(Error::MapTask(format!("map task cancelled: {}", e))),
            }
        }

        results.sort_by_key(|stats| stats.chunk_index);
        Ok(results)
    }
}
