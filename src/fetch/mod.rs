//! Archive snapshot fetching.

pub mod archive;
pub mod mock;

pub use archive::{ArchiveFetcher, HttpArchiveFetcher};
pub use mock::MockFetcher;
