//! Document input sources
//!
//! A run reads its documents either from individual files (one document per
//! file), from a single list file, or from the built-in sample corpus.

use crate::error::{Error, Result};
use crate::mapreduce::demo::sample_documents;
use crate::mapreduce::types::Document;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Where documents come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Each file is one document
    Files(Vec<PathBuf>),
    /// A list file: `.json` array, `.yaml`/`.yml` sequence, or one document per line
    List(PathBuf),
    /// The built-in sample corpus
    Demo,
    /// Documents already in memory
    Inline(Vec<Document>),
}

impl InputSource {
    /// Load the documents, preserving order
    pub async fn load(&self) -> Result<Vec<Document>> {
        let documents = match self {
            InputSource::Files(paths) => {
                let mut documents = Vec::with_capacity(paths.len());
                for path in paths {
                    documents.push(read_file(path).await?);
                }
                documents
            }
            InputSource::List(path) => {
                let content = read_file(path).await?;
                parse_document_list(path, &content)?
            }
            InputSource::Demo => sample_documents(),
            InputSource::Inline(documents) => documents.clone(),
        };

        debug!("Loaded {} documents", documents.len());
        Ok(documents)
    }
}

async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|source| Error::ReadInput {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse a list file's content according to its extension
pub fn parse_document_list(path: &Path, content: &str) -> Result<Vec<Document>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => serde_json::from_str::<Vec<Document>>(content).map_err(|e| {
            Error::Input(format!(
                "{}: expected a JSON array of strings: {}",
                path.display(),
                e
            ))
        }),
        Some("yaml") | Some("yml") => {
            if content.trim().is_empty() {
                return Ok(Vec::new());
            }
            serde_yaml::from_str::<Vec<Document>>(content).map_err(|e| {
                Error::Input(format!(
                    "{}: expected a YAML sequence of strings: {}",
                    path.display(),
                    e
                ))
            })
        }
        _ => Ok(content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()),
    }
}
