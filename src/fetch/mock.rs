//! Mock archive fetcher for testing.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{OutfitterError, Result};

use super::ArchiveFetcher;

/// Mock fetcher that records calls and succeeds by creating the
/// destination directory, or fails with a configured message.
#[derive(Default)]
pub struct MockFetcher {
    calls: Mutex<Vec<(String, PathBuf)>>,
    failure: Option<String>,
}

impl MockFetcher {
    /// Create a mock fetcher whose fetches succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock fetcher whose fetches fail with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    /// Recorded `(archive_url, destination)` pairs, in order.
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of fetches issued.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ArchiveFetcher for MockFetcher {
    fn fetch_and_extract(&self, archive_url: &str, destination: &Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((archive_url.to_string(), destination.to_path_buf()));

        if let Some(message) = &self.failure {
            return Err(OutfitterError::Download {
                message: message.clone(),
            });
        }

        std::fs::create_dir_all(destination)?;
        Ok(())
    }
}
