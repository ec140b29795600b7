//! Snapshot sources
//!
//! Reports never fetch anything themselves. A `SnapshotSource` supplies an
//! already-authorized snapshot for a window, and `SnapshotCache` decides
//! which fetched snapshot is authoritative.

pub mod api;
pub mod cache;
pub mod file;

pub use api::{ApiClient, ApiRequest, ApiSnapshotSource, BearerToken, Method, Transport};
pub use cache::{FetchState, FetchTicket, SnapshotCache};
pub use file::JsonFileSource;

use crate::error::PocketbookResult;
use crate::models::{Snapshot, SnapshotWindow};

/// Supplies snapshots for a window
pub trait SnapshotSource {
    fn fetch(&self, window: &SnapshotWindow) -> PocketbookResult<Snapshot>;
}

/// Fetch through `source` and install the result in `cache`
///
/// Returns whether the fetched snapshot was installed. A failed fetch marks
/// the cache failed and propagates the error.
pub fn refresh<S: SnapshotSource + ?Sized>(
    source: &S,
    cache: &mut SnapshotCache,
    window: &SnapshotWindow,
) -> PocketbookResult<bool> {
    let ticket = cache.begin_fetch();
    match source.fetch(window) {
        Ok(snapshot) => Ok(cache.complete(ticket, snapshot)),
        Err(err) => {
            cache.fail(ticket);
            Err(err)
        }
    }
}
