//! HTTP archive download and extraction.
//!
//! The archive path is the fallback used when git is unavailable: download a
//! ZIP snapshot of the repository, extract it into a uniquely-named staging
//! directory, and move the wrapper directory (`<repo>-<branch>`) into place.
//! Nothing is moved to the destination until extraction and wrapper discovery
//! have both succeeded, so a failed fetch never leaves a partial target.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::{debug, warn};

use crate::error::{OutfitterError, Result};

/// Redirect hops to follow before giving up. Archive endpoints typically
/// answer with a single 302, but the chain length is not under our control.
const MAX_REDIRECTS: usize = 5;

/// Seam for fetching the archive snapshot, enabling test doubles.
pub trait ArchiveFetcher {
    /// Download the ZIP at `archive_url` and materialize its wrapper
    /// directory at `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`OutfitterError::Download`] on any HTTP, extraction, or
    /// wrapper-discovery failure.
    fn fetch_and_extract(&self, archive_url: &str, destination: &Path) -> Result<()>;
}

/// Fetches archives over HTTP/HTTPS with a bounded redirect policy.
pub struct HttpArchiveFetcher {
    client: Client,
    /// Expected prefix of the wrapper directory inside the archive.
    wrapper_prefix: String,
}

impl HttpArchiveFetcher {
    /// Create a fetcher with the default 30-second timeout.
    pub fn new(wrapper_prefix: &str) -> Self {
        Self::with_timeout(wrapper_prefix, Duration::from_secs(30))
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(wrapper_prefix: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("outfitter")
                .timeout(timeout)
                .redirect(Policy::limited(MAX_REDIRECTS))
                .build()
                .expect("Failed to build HTTP client"),
            wrapper_prefix: wrapper_prefix.to_string(),
        }
    }

    fn download_into(&self, archive_url: &str, staging: &Path, destination: &Path) -> Result<()> {
        let mut response = self
            .client
            .get(archive_url)
            .send()
            .map_err(|e| download_error(format!("GET {archive_url}: {e}")))?;

        if !response.status().is_success() {
            return Err(download_error(format!("HTTP {}", response.status().as_u16())));
        }

        // The zip directory lives at the end of the file, so the body is
        // staged on disk before extraction.
        let zip_path = staging.join("snapshot.zip");
        let mut zip_file = File::create(&zip_path)
            .map_err(|e| download_error(format!("creating {}: {e}", zip_path.display())))?;
        std::io::copy(&mut response, &mut zip_file)
            .map_err(|e| download_error(format!("streaming archive body: {e}")))?;

        let extracted_root = staging.join("extracted");
        std::fs::create_dir(&extracted_root)
            .map_err(|e| download_error(format!("creating staging directory: {e}")))?;

        let reader = File::open(&zip_path)
            .map_err(|e| download_error(format!("reopening archive: {e}")))?;
        extract_zip(reader, &extracted_root)?;

        let wrapper = find_wrapper_dir(&extracted_root, &self.wrapper_prefix)?;
        debug!(wrapper = %wrapper.display(), "archive wrapper directory located");

        std::fs::rename(&wrapper, destination).map_err(|e| {
            download_error(format!(
                "moving {} to {}: {e}",
                wrapper.display(),
                destination.display()
            ))
        })?;

        Ok(())
    }
}

impl ArchiveFetcher for HttpArchiveFetcher {
    fn fetch_and_extract(&self, archive_url: &str, destination: &Path) -> Result<()> {
        let staging = tempfile::Builder::new()
            .prefix("outfitter-")
            .tempdir()
            .map_err(|e| download_error(format!("creating temporary directory: {e}")))?;

        let outcome = self.download_into(archive_url, staging.path(), destination);

        // Cleanup failure never fails the fetch.
        if let Err(e) = staging.close() {
            warn!("Could not remove temporary download directory: {e}");
        }

        outcome
    }
}

fn download_error(message: String) -> OutfitterError {
    OutfitterError::Download { message }
}

/// Unpack a ZIP stream into `dest_dir`.
///
/// Entry paths are validated via `enclosed_name` so an archive entry can
/// never escape the staging directory (zip-slip).
fn extract_zip<R: Read + Seek>(reader: R, dest_dir: &Path) -> Result<()> {
    let mut archive = zip::ZipArchive::new(reader)
        .map_err(|e| download_error(format!("reading archive: {e}")))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| download_error(format!("reading archive entry {index}: {e}")))?;

        let Some(relative) = entry.enclosed_name() else {
            return Err(download_error(format!(
                "unsafe path in archive: {}",
                entry.name()
            )));
        };
        let out_path = dest_dir.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)
                .map_err(|e| download_error(format!("creating {}: {e}", out_path.display())))?;
        } else {
            if let Some(parent) = out_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| download_error(format!("creating {}: {e}", parent.display())))?;
            }
            let mut out_file = File::create(&out_path)
                .map_err(|e| download_error(format!("creating {}: {e}", out_path.display())))?;
            std::io::copy(&mut entry, &mut out_file)
                .map_err(|e| download_error(format!("extracting {}: {e}", out_path.display())))?;
        }
    }

    Ok(())
}

/// Locate the single top-level directory whose name starts with `prefix`.
fn find_wrapper_dir(extracted_root: &Path, prefix: &str) -> Result<PathBuf> {
    let entries = std::fs::read_dir(extracted_root)
        .map_err(|e| download_error(format!("listing extracted entries: {e}")))?;

    for entry in entries.flatten() {
        let name = entry.file_name();
        if entry.path().is_dir() && name.to_string_lossy().starts_with(prefix) {
            return Ok(entry.path());
        }
    }

    Err(download_error(format!(
        "Could not find extracted {prefix}* directory"
    )))
}
