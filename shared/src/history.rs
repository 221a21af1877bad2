use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::model::{AnalysisResult, HistoryEntry};

/// Number of analyses kept for display.
pub const HISTORY_CAPACITY: usize = 10;

/// Dashboard counts, recomputed from the history on every call.
///
/// Failed analyses count toward `total` only, so
/// `fake + genuine + failed == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardAggregate {
    pub total: usize,
    pub fake: usize,
    pub genuine: usize,
    pub failed: usize,
}

/// Newest-first log of completed analyses, bounded to [`HISTORY_CAPACITY`].
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Prepends `entry`, evicting the oldest entries beyond capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if self.entries.len() > HISTORY_CAPACITY {
            let evicted = self.entries.len() - HISTORY_CAPACITY;
            self.entries.truncate(HISTORY_CAPACITY);
            log::debug!("History full, evicted {} oldest entries", evicted);
        }
    }

    pub fn list(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn aggregate(&self) -> DashboardAggregate {
        self.entries.iter().fold(
            DashboardAggregate {
                total: self.entries.len(),
                ..DashboardAggregate::default()
            },
            |mut acc, entry| {
                match entry.result {
                    AnalysisResult::Success { is_fake: true, .. } => acc.fake += 1,
                    AnalysisResult::Success { is_fake: false, .. } => acc.genuine += 1,
                    AnalysisResult::Failure { .. } => acc.failed += 1,
                }
                acc
            },
        )
    }
}
