//! Current-snapshot holder with last-fetch-wins sequencing
//!
//! Every fetch takes a ticket before it starts. When fetches overlap, only
//! the one holding the newest ticket may install its result; older results
//! are dropped, so the reports never regress to staler data.

use tracing::{debug, warn};

use crate::models::Snapshot;

/// Sequence number identifying one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Where the cache stands relative to its fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// The latest fetch has not finished
    Loading,
    /// The latest fetch succeeded
    Ready,
    /// The latest fetch failed; the previous snapshot (if any) is kept
    Failed,
}

/// Owns the authoritative snapshot
#[derive(Debug, Default)]
pub struct SnapshotCache {
    current: Option<Snapshot>,
    latest: u64,
    state: FetchState,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; any fetch started earlier is superseded
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        self.state = FetchState::Loading;
        FetchTicket(self.latest)
    }

    fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Install the result of a fetch; returns false if it was superseded
    pub fn complete(&mut self, ticket: FetchTicket, snapshot: Snapshot) -> bool {
        if !self.is_latest(ticket) {
            warn!(
                ticket = ticket.0,
                latest = self.latest,
                "discarding stale snapshot"
            );
            return false;
        }
        debug!(ticket = ticket.0, expenses = snapshot.expenses.len(), "installed snapshot");
        self.current = Some(snapshot);
        self.state = FetchState::Ready;
        true
    }

    /// Record that a fetch failed; returns false if it was superseded
    pub fn fail(&mut self, ticket: FetchTicket) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.state = FetchState::Failed;
        true
    }

    /// The last snapshot installed, which may be stale after a failure
    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn state(&self) -> FetchState {
        self.state
    }
}
